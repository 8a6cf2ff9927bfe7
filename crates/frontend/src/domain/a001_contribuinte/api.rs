use contracts::domain::a001_contribuinte::aggregate::ContribuinteRecord;

use crate::shared::api_error::{get_json, ApiError};
use crate::shared::api_utils::{api_url, path_segment};

const API_BASE: &str = "/contribuinte";

/// Records processed on `date` (`YYYY-MM-DD`)
pub async fn list_by_date(date: &str) -> Result<Vec<ContribuinteRecord>, ApiError> {
    let url = api_url(&format!("{}/by-date/{}", API_BASE, path_segment(date)));
    get_json(&url).await
}

/// Single record by CPF/CNPJ; 404 comes back as [`ApiError::NotFound`]
pub async fn get_by_tax_id(tax_id: &str) -> Result<ContribuinteRecord, ApiError> {
    let url = api_url(&format!("{}/cpf/{}", API_BASE, path_segment(tax_id)));
    get_json(&url).await
}

/// Records whose client name matches `name` (matching rules are server-side)
pub async fn list_by_client(name: &str) -> Result<Vec<ContribuinteRecord>, ApiError> {
    let url = api_url(&format!("{}/by-client/{}", API_BASE, path_segment(name)));
    get_json(&url).await
}

/// One of the three lookups the record browser can issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContribuinteQuery {
    ByDate(String),
    ByTaxId(String),
    ByClient(String),
}

impl ContribuinteQuery {
    /// Issue the request; the single-record lookup is normalized to a list.
    pub async fn execute(&self) -> Result<Vec<ContribuinteRecord>, ApiError> {
        match self {
            ContribuinteQuery::ByDate(date) => list_by_date(date).await,
            ContribuinteQuery::ByTaxId(tax_id) => get_by_tax_id(tax_id).await.map(|r| vec![r]),
            ContribuinteQuery::ByClient(name) => list_by_client(name).await,
        }
    }
}
