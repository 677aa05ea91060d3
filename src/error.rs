// Error taxonomy shared by the roster aggregator and the detail composer.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug)]
pub enum PokedexError {
    UpstreamFetch { url: String, reason: String },
    MissingData(String),
    InvalidId(u32),
    Config(String),
}

impl PokedexError {
    pub fn upstream(url: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        PokedexError::UpstreamFetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, PokedexError::UpstreamFetch { .. })
    }
}

impl std::fmt::Display for PokedexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PokedexError::UpstreamFetch { url, reason } => {
                write!(f, "Upstream fetch failed for {}: {}", url, reason)
            }
            PokedexError::MissingData(msg) => write!(f, "Missing data: {}", msg),
            PokedexError::InvalidId(id) => write!(f, "Invalid Pokémon identifier: {}", id),
            PokedexError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for PokedexError {}

impl PokedexError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PokedexError::UpstreamFetch { .. } | PokedexError::MissingData(_) => StatusCode::BAD_GATEWAY,
            PokedexError::InvalidId(_) => StatusCode::BAD_REQUEST,
            PokedexError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PokedexError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

impl From<reqwest::Error> for PokedexError {
    fn from(err: reqwest::Error) -> Self {
        let url = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        PokedexError::UpstreamFetch {
            url,
            reason: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for PokedexError {
    fn from(err: toml::de::Error) -> Self {
        PokedexError::Config(err.to_string())
    }
}
