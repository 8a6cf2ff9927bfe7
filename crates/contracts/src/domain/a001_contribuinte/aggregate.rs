use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Maximum length of `cliente` as stored by the remote service.
pub const CLIENT_NAME_MAX_LEN: usize = 80;

/// Taxpayer record as returned by the `/contribuinte` endpoints.
///
/// Read-only on the client: every instance comes from the remote service and
/// lives only as long as the query that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContribuinteRecord {
    pub ref_id: i64,
    /// Process date (`YYYY-MM-DD` on the wire)
    pub dat_proce: NaiveDate,
    /// CPF (11 digits) or CNPJ (14 digits)
    pub cpf_cnpj: String,
    pub cliente: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Registration date
    #[serde(default)]
    pub dat_cadastro: Option<NaiveDate>,
}

impl ContribuinteRecord {
    /// Email or `-` when the service has none on file.
    pub fn email_display(&self) -> &str {
        self.email.as_deref().filter(|e| !e.is_empty()).unwrap_or("-")
    }
}
