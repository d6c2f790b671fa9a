use busstation_shared::Language;
use busstation_store::app_config::ChatConfig;

use crate::error::ChatError;
use crate::greeting::Greetings;
use crate::models::HelpChatRequest;
use crate::openrouter::OpenRouterClient;
use crate::prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Greeting,
    Answered,
    Fallback,
}

impl ReplyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyKind::Greeting => "greeting",
            ReplyKind::Answered => "answered",
            ReplyKind::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatOutcome {
    pub reply: String,
    pub kind: ReplyKind,
}

/// Help-page assistant: local greetings, FAQ-grounded completions, canned fallback.
pub struct HelpChatService {
    api_key: Option<String>,
    history_turns: usize,
    greetings: Greetings,
    client: OpenRouterClient,
}

impl HelpChatService {
    pub fn new(config: &ChatConfig) -> Result<Self, ChatError> {
        Ok(Self {
            api_key: config
                .api_key
                .clone()
                .filter(|key| !key.trim().is_empty()),
            history_turns: config.history_turns,
            greetings: Greetings::compile()?,
            client: OpenRouterClient::new(config),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn fallback_reply(language: Language) -> &'static str {
        match language {
            Language::Fr => "Je n'ai pas de réponse à cette question pour le moment. Merci de contacter le support BusStation.",
            Language::En => "I don't have an answer to that right now. Please contact BusStation support.",
        }
    }

    /// Entry point for a raw request body. The key check comes first, so an
    /// unconfigured service answers 500 whatever the body.
    pub async fn handle_body(&self, body: &[u8]) -> Result<ChatOutcome, ChatError> {
        let api_key = self.api_key.as_deref().ok_or(ChatError::MissingApiKey)?;
        let request: HelpChatRequest =
            serde_json::from_slice(body).map_err(|e| ChatError::InvalidBody(e.to_string()))?;
        self.answer(api_key, request).await
    }

    pub async fn handle(&self, request: HelpChatRequest) -> Result<ChatOutcome, ChatError> {
        let api_key = self.api_key.as_deref().ok_or(ChatError::MissingApiKey)?;
        self.answer(api_key, request).await
    }

    async fn answer(&self, api_key: &str, request: HelpChatRequest) -> Result<ChatOutcome, ChatError> {
        let message = request.message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let language = Language::from_tag(request.language.as_deref());
        if self.greetings.is_greeting(language, message) {
            return Ok(ChatOutcome {
                reply: Greetings::reply(language).to_string(),
                kind: ReplyKind::Greeting,
            });
        }

        let messages = prompt::build_messages(language, &request.history, message, self.history_turns);
        match self.client.complete(api_key, &messages).await {
            Ok(Some(reply)) => Ok(ChatOutcome {
                reply,
                kind: ReplyKind::Answered,
            }),
            Ok(None) => {
                tracing::warn!("Completion had no usable reply, using fallback");
                Ok(ChatOutcome {
                    reply: Self::fallback_reply(language).to_string(),
                    kind: ReplyKind::Fallback,
                })
            }
            Err(e) => {
                tracing::warn!("Help chat upstream failed: {}", e);
                Err(e)
            }
        }
    }
}
