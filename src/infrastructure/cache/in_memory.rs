use crate::core::errors::SpendlensError;
use crate::core::models::SpendingInsight;
use crate::infrastructure::cache::Cache;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

type Entry = (Vec<SpendingInsight>, chrono::DateTime<chrono::Utc>);

#[derive(Clone)]
pub struct InMemoryCache {
    cache: Arc<RwLock<HashMap<String, Entry>>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        InMemoryCache {
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get_insights(
        &self,
        user_id: &str,
    ) -> Result<Option<Vec<SpendingInsight>>, SpendlensError> {
        let cache = self.cache.read().await;
        let key = crate::infrastructure::cache::cache_keys::user_insights_key(user_id);
        Ok(cache
            .get(&key)
            .filter(|(_, expiry)| *expiry > chrono::Utc::now())
            .map(|(insights, _)| insights.clone()))
    }

    async fn save_insights(
        &self,
        user_id: &str,
        insights: &[SpendingInsight],
        ttl: std::time::Duration,
    ) -> Result<(), SpendlensError> {
        let mut cache = self.cache.write().await;
        let key = crate::infrastructure::cache::cache_keys::user_insights_key(user_id);
        let expiry = chrono::Utc::now()
            + chrono::Duration::from_std(ttl)
                .map_err(|e| SpendlensError::CacheError(format!("Failed to convert TTL: {}", e)))?;
        cache.insert(key, (insights.to_vec(), expiry));
        Ok(())
    }

    async fn invalidate_insights(&self, user_id: &str) -> Result<(), SpendlensError> {
        let mut cache = self.cache.write().await;
        let key = crate::infrastructure::cache::cache_keys::user_insights_key(user_id);
        cache.remove(&key);
        cache.retain(|_, (_, expiry)| *expiry > chrono::Utc::now());
        Ok(())
    }
}
