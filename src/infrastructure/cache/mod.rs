pub mod cache_keys;
pub mod in_memory;

use crate::core::errors::SpendlensError;
use crate::core::models::SpendingInsight;
use async_trait::async_trait;

/// Per-user cache for generated advice, invalidated on every receipt
/// mutation.
#[async_trait]
pub trait Cache: Send + Sync {
    async fn get_insights(
        &self,
        user_id: &str,
    ) -> Result<Option<Vec<SpendingInsight>>, SpendlensError>;
    async fn save_insights(
        &self,
        user_id: &str,
        insights: &[SpendingInsight],
        ttl: std::time::Duration,
    ) -> Result<(), SpendlensError>;
    async fn invalidate_insights(&self, user_id: &str) -> Result<(), SpendlensError>;
}
