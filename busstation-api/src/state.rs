use busstation_chat::HelpChatService;
use busstation_store::app_config::ChatConfig;
use std::sync::Arc;

use crate::metrics::ChatMetrics;

#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<HelpChatService>,
    pub metrics: Arc<ChatMetrics>,
}

impl AppState {
    pub fn new(chat: &ChatConfig) -> anyhow::Result<Self> {
        let service = HelpChatService::new(chat)?;
        if !service.is_configured() {
            tracing::warn!("OPENROUTER_API_KEY is not set; /api/help-chat will answer 500");
        }

        Ok(Self {
            chat: Arc::new(service),
            metrics: Arc::new(
                ChatMetrics::new().map_err(|e| anyhow::anyhow!("Metrics registry: {}", e))?,
            ),
        })
    }
}
