use serde::{Deserialize, Serialize};

/// Outcome of `POST /contribuinte/bulk-upload`
///
/// `errors` is expected to hold `error_count` entries but the client does not
/// rely on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub success_count: u32,
    pub error_count: u32,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl UploadResult {
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}
