use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use busstation_chat::HelpChatReply;

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/help-chat", post(help_chat))
}

// Raw bytes so a malformed body gets our JSON 400 instead of axum's rejection
async fn help_chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<HelpChatReply>, AppError> {
    match state.chat.handle_body(&body).await {
        Ok(outcome) => {
            state.metrics.record(outcome.kind.as_str());
            tracing::info!("Help chat answered ({})", outcome.kind.as_str());
            Ok(Json(HelpChatReply {
                reply: outcome.reply,
            }))
        }
        Err(err) => {
            let err = AppError::from(err);
            state.metrics.record(err.outcome());
            Err(err)
        }
    }
}
