//! OpenRouter chat-completion client.

use busstation_store::app_config::ChatConfig;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::error::ChatError;
use crate::prompt::PromptMessage;

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [PromptMessage],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Clone)]
pub struct OpenRouterClient {
    client: Client,
    api_url: String,
    model: String,
    temperature: f64,
    max_tokens: u32,
    referer: String,
    title: String,
}

impl OpenRouterClient {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            referer: config.referer.clone(),
            title: config.title.clone(),
        }
    }

    /// Send one completion request.
    ///
    /// Returns the extracted reply, or `None` when the upstream answered 2xx without
    /// a usable one.
    ///
    /// # Errors
    ///
    /// [`ChatError::Upstream`] on non-2xx, [`ChatError::Network`] when no response arrived.
    pub async fn complete(
        &self,
        api_key: &str,
        messages: &[PromptMessage],
    ) -> Result<Option<String>, ChatError> {
        let request = CompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title)
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ChatError::Upstream {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        match serde_json::from_str::<Value>(&body) {
            Ok(value) => Ok(extract_reply(&value)),
            Err(e) => {
                tracing::warn!("Unparseable completion body: {}", e);
                Ok(None)
            }
        }
    }
}

/// `choices[0].message.content`, then `choices[0].message.reasoning`, then
/// `choices[0].text`. Blank strings do not count.
pub fn extract_reply(body: &Value) -> Option<String> {
    let choice = body.get("choices")?.get(0)?;
    let message = choice.get("message");

    [
        message.and_then(|m| m.get("content")),
        message.and_then(|m| m.get("reasoning")),
        choice.get("text"),
    ]
    .into_iter()
    .flatten()
    .filter_map(Value::as_str)
    .map(str::trim)
    .find(|text| !text.is_empty())
    .map(str::to_string)
}
