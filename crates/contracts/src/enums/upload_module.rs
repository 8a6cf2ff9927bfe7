use serde::{Deserialize, Serialize};

/// Backend module (target database) a bulk upload is written to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UploadModule {
    #[default]
    A,
    B,
}

impl UploadModule {
    /// Value sent in the `module` query parameter
    pub fn code(&self) -> &'static str {
        match self {
            UploadModule::A => "A",
            UploadModule::B => "B",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            UploadModule::A => "Module A",
            UploadModule::B => "Module B",
        }
    }

    pub fn all() -> [UploadModule; 2] {
        [UploadModule::A, UploadModule::B]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "A" => Some(UploadModule::A),
            "B" => Some(UploadModule::B),
            _ => None,
        }
    }
}

impl std::fmt::Display for UploadModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_module_is_a() {
        assert_eq!(UploadModule::default(), UploadModule::A);
    }

    #[test]
    fn code_round_trips_for_every_module() {
        for module in UploadModule::all() {
            assert_eq!(UploadModule::from_code(module.code()), Some(module));
        }
        assert_eq!(UploadModule::from_code("a"), None);
        assert_eq!(UploadModule::from_code(""), None);
    }
}
