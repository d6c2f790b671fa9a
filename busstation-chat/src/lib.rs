pub mod error;
pub mod faq;
pub mod greeting;
pub mod models;
pub mod openrouter;
pub mod prompt;
pub mod service;

pub use error::ChatError;
pub use greeting::Greetings;
pub use models::{ChatRole, ChatTurn, HelpChatReply, HelpChatRequest};
pub use openrouter::OpenRouterClient;
pub use service::{ChatOutcome, HelpChatService, ReplyKind};
