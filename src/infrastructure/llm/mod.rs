pub mod groq;
pub mod prompts;

use crate::core::errors::SpendlensError;
use async_trait::async_trait;
use serde_json::Value;

/// Boundary to the hosted vision/language models. Implementations return the
/// raw JSON the model produced; interpretation lives in `core::extract`.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// One chat-completion request: receipt photo in, receipt JSON out.
    async fn extract_receipt(&self, image_base64: &str) -> Result<Value, SpendlensError>;

    /// One chat-completion request: spending summary in, advice JSON out.
    async fn savings_advice(&self, spending_summary: &str) -> Result<Value, SpendlensError>;
}
