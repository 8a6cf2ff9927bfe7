use serde::{Deserialize, Serialize};

use crate::enums::upload_module::UploadModule;

/// Multipart field name the backend reads the file from.
pub const FILE_FIELD: &str = "file";

/// Extensions accepted for bulk upload. Matching is case-sensitive.
pub const ACCEPTED_EXTENSIONS: [&str; 2] = [".csv", ".txt"];

/// Column layout of one upload row.
pub const ROW_FORMAT: &str = "dat_proce;cpf_cnpj;cliente;email;dat_cadastro";

/// Example row shown next to the upload area.
pub const ROW_EXAMPLE: &str = "2025-07-06;77845896512;Rodrigo Pepe;rodrigo@uol.com.br;2025-06-02";

/// Query string of `POST /contribuinte/bulk-upload`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkUploadQuery {
    pub module: UploadModule,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_format_has_five_columns() {
        assert_eq!(ROW_FORMAT.split(';').count(), 5);
        assert_eq!(ROW_EXAMPLE.split(';').count(), 5);
    }

    #[test]
    fn query_serializes_module_code() {
        let query = BulkUploadQuery {
            module: UploadModule::B,
        };
        assert_eq!(
            serde_json::to_value(query).unwrap(),
            serde_json::json!({ "module": "B" })
        );
    }
}
