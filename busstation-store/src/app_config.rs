use serde::Deserialize;
use std::env;

pub const DEFAULT_CHAT_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_CHAT_MODEL: &str = "openai/gpt-oss-20b:free";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub chat: ChatConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

/// Upstream chat-completion settings for the help assistant.
#[derive(Debug, Deserialize, Clone)]
pub struct ChatConfig {
    /// Absent key is reported per request, never at startup.
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub history_turns: usize,
    pub referer: String,
    pub title: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub path: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Self::build(
            &run_mode,
            non_blank_var("NEXT_PUBLIC_API_BASE_URL"),
            non_blank_var("OPENROUTER_API_KEY"),
        )
    }

    /// Layers defaults, config files, `BUSSTATION_*` variables and the two legacy overrides.
    pub fn build(
        run_mode: &str,
        backend_url: Option<String>,
        chat_api_key: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .set_default("server.port", 3000)?
            .set_default("backend.base_url", "http://localhost:8080")?
            .set_default("backend.timeout_seconds", 15)?
            .set_default("chat.api_url", DEFAULT_CHAT_URL)?
            .set_default("chat.model", DEFAULT_CHAT_MODEL)?
            .set_default("chat.temperature", 0.2)?
            .set_default("chat.max_tokens", 300)?
            .set_default("chat.history_turns", 6)?
            .set_default("chat.referer", "http://localhost:3000")?
            .set_default("chat.title", "BusStation Help")?
            .set_default("session.path", ".busstation/session.json")?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `BUSSTATION_SERVER__PORT=8000` sets `server.port`
            .add_source(
                config::Environment::with_prefix("BUSSTATION")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("backend.base_url", backend_url)?
            .set_override_option("chat.api_key", chat_api_key)?
            .build()?;

        s.try_deserialize()
    }
}

fn non_blank_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
