use std::time::Duration;

/// Confidence assigned to extracted line items when the model omits one.
pub const DEFAULT_ITEM_CONFIDENCE: f64 = 0.9;

/// Advisory entries returned per insights fetch.
pub const MAX_INSIGHTS: usize = 3;

/// How long a generated insight set stays served from cache.
pub const INSIGHTS_CACHE_TTL: Duration = Duration::from_secs(15 * 60);

/// Body limit for the scan route; inline base64 photos are large.
pub const SCAN_BODY_LIMIT: usize = 10 * 1024 * 1024;
