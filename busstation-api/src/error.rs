use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use busstation_chat::ChatError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Misconfigured(String),

    /// `status` is `None` when the upstream never answered.
    #[error("Upstream failure")]
    Upstream { status: Option<u16>, detail: String },

    #[error("{0}")]
    Internal(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl AppError {
    /// Label recorded in `help_chat_requests_total`.
    pub fn outcome(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "rejected",
            AppError::Upstream { .. } => "upstream_error",
            AppError::Misconfigured(_) | AppError::Internal(_) | AppError::Anyhow(_) => {
                "misconfigured"
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            AppError::Misconfigured(msg) => {
                tracing::error!("Misconfigured: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": msg }))).into_response()
            }
            AppError::Upstream { status, detail } => (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "error": "Upstream chat service failed",
                    "status": status,
                    "detail": detail,
                })),
            )
                .into_response(),
            AppError::Internal(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                internal_error()
            }
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal Server Error" })),
    )
        .into_response()
}

impl From<ChatError> for AppError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::MissingApiKey => {
                AppError::Misconfigured("Chat assistant is not configured".to_string())
            }
            ChatError::InvalidBody(reason) => {
                tracing::debug!("Rejected help chat body: {}", reason);
                AppError::BadRequest("Invalid JSON body".to_string())
            }
            ChatError::EmptyMessage => AppError::BadRequest("Message is required".to_string()),
            ChatError::Upstream { status, detail } => AppError::Upstream {
                status: Some(status),
                detail,
            },
            ChatError::Network(detail) => AppError::Upstream {
                status: None,
                detail,
            },
            ChatError::Pattern(e) => AppError::Internal(e.to_string()),
        }
    }
}
