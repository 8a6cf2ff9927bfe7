use contracts::shared::health::HealthStatus;

use crate::shared::api_error::{get_json, ApiError};
use crate::shared::api_utils::api_url;

/// Backend liveness probe
pub async fn fetch_health() -> Result<HealthStatus, ApiError> {
    get_json(&api_url("/health")).await
}
