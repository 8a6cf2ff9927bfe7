//! Gateway error type and response decoding shared by every API module.

use contracts::shared::error_body::ErrorBody;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// HTTP 404
    #[error("not found")]
    NotFound { detail: Option<String> },

    /// Any other non-2xx response
    #[error("HTTP {status}")]
    Server { status: u16, detail: Option<String> },

    /// No response at all (network unreachable, CORS, aborted)
    #[error("request failed: {0}")]
    Transport(String),

    /// The request could not be built (form data, query string)
    #[error("invalid request: {0}")]
    Request(String),

    /// 2xx response whose body does not match the expected schema
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message supplied by the server in the `detail` field, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::NotFound { detail } | ApiError::Server { detail, .. } => detail.as_deref(),
            ApiError::Request(_) | ApiError::Transport(_) | ApiError::Decode(_) => None,
        }
    }

    /// User-facing message: the server detail, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

/// Turn a status code and raw body into a typed payload or an [`ApiError`].
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()));
    }

    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message());
    if status == 404 {
        Err(ApiError::NotFound { detail })
    } else {
        Err(ApiError::Server { status, detail })
    }
}

async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    decode_response(status, &body)
}

/// `GET` a JSON resource
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", url);
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await?;
    read_response(response).await
}

/// `POST` a multipart form and decode the JSON reply
pub async fn post_form<T: DeserializeOwned>(
    url: &str,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    log::debug!("POST {} (multipart)", url);
    let response = Request::post(url)
        .header("Accept", "application/json")
        .body(form)?
        .send()
        .await?;
    read_response(response).await
}
