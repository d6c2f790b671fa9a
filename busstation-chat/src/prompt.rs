use busstation_shared::Language;
use serde::Serialize;

use crate::faq;
use crate::models::ChatTurn;

/// One message of the chat-completion payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptMessage {
    pub role: &'static str,
    pub content: String,
}

impl PromptMessage {
    fn new(role: &'static str, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

fn system_prompt(language: Language) -> &'static str {
    match language {
        Language::Fr => "Tu es l'assistant d'aide de BusStation, une plateforme camerounaise de réservation de billets de bus. Réponds en français, brièvement et poliment, uniquement à partir de la FAQ fournie. Si la réponse n'y figure pas, invite l'utilisateur à contacter le support BusStation.",
        Language::En => "You are the help assistant of BusStation, a Cameroonian bus ticket booking platform. Answer in English, briefly and politely, using only the FAQ provided. If the answer is not in it, invite the user to contact BusStation support.",
    }
}

fn context_header(language: Language) -> &'static str {
    match language {
        Language::Fr => "FAQ de référence :",
        Language::En => "Reference FAQ:",
    }
}

/// System prompt, FAQ context, the last `history_turns` turns, then the new message.
pub fn build_messages(
    language: Language,
    history: &[ChatTurn],
    message: &str,
    history_turns: usize,
) -> Vec<PromptMessage> {
    let recent = &history[history.len().saturating_sub(history_turns)..];

    let mut messages = Vec::with_capacity(recent.len() + 3);
    messages.push(PromptMessage::new("system", system_prompt(language)));
    messages.push(PromptMessage::new(
        "system",
        format!("{}\n\n{}", context_header(language), faq::context_block(language)),
    ));
    messages.extend(
        recent
            .iter()
            .map(|turn| PromptMessage::new(turn.role.as_str(), turn.content.clone())),
    );
    messages.push(PromptMessage::new("user", message));
    messages
}
