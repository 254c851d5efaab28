use crate::config::CONFIG;
use crate::core::errors::SpendlensError;
use crate::infrastructure::llm::{ModelGateway, prompts};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

/// Chat-completions client for an OpenAI-compatible endpoint (Groq by
/// default). One plain request per call; failures surface immediately, there
/// is no retry or backoff.
pub struct GroqGateway {
    http: Client,
    api_key: String,
    api_base: String,
    vision_model: String,
    advice_model: String,
}

impl GroqGateway {
    pub fn new(
        api_key: String,
        api_base: String,
        vision_model: String,
        advice_model: String,
    ) -> Self {
        GroqGateway {
            http: Client::new(),
            api_key,
            api_base,
            vision_model,
            advice_model,
        }
    }

    pub fn from_config() -> Self {
        Self::new(
            CONFIG.model_api_key.clone(),
            CONFIG.model_api_base.clone(),
            CONFIG.vision_model.clone(),
            CONFIG.advice_model.clone(),
        )
    }

    async fn chat_completion(&self, body: Value) -> Result<Value, SpendlensError> {
        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_base))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| SpendlensError::ModelUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpendlensError::ModelUnavailable(format!(
                "endpoint returned {}",
                status
            )));
        }

        let reply: Value = response
            .json()
            .await
            .map_err(|e| SpendlensError::ModelUnavailable(e.to_string()))?;

        let content = reply["choices"][0]["message"]["content"]
            .as_str()
            .filter(|c| !c.trim().is_empty())
            .ok_or(SpendlensError::EmptyModelReply)?;

        debug!(bytes = content.len(), "model content received");
        serde_json::from_str(content)
            .map_err(|e| SpendlensError::MalformedModelReply(e.to_string()))
    }
}

#[async_trait]
impl ModelGateway for GroqGateway {
    async fn extract_receipt(&self, image_base64: &str) -> Result<Value, SpendlensError> {
        let body = json!({
            "model": self.vision_model,
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "text", "text": prompts::RECEIPT_EXTRACTION.as_str() },
                    {
                        "type": "image_url",
                        "image_url": { "url": format!("data:image/jpeg;base64,{}", image_base64) }
                    }
                ]
            }],
            "response_format": { "type": "json_object" }
        });

        self.chat_completion(body).await
    }

    async fn savings_advice(&self, spending_summary: &str) -> Result<Value, SpendlensError> {
        let body = json!({
            "model": self.advice_model,
            "messages": [
                { "role": "system", "content": prompts::SAVINGS_ADVICE },
                {
                    "role": "user",
                    "content": format!(
                        "Suggest savings opportunities based on these receipts:\n{}",
                        spending_summary
                    )
                }
            ],
            "response_format": { "type": "json_object" }
        });

        self.chat_completion(body).await
    }
}
