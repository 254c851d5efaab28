mod analytics_tests;
mod auth_tests;

use crate::core::errors::SpendlensError;
use crate::core::models::{Category, Receipt, ReceiptItem, User};
use crate::core::service::SpendlensService;
use crate::infrastructure::cache::in_memory::InMemoryCache;
use crate::infrastructure::llm::ModelGateway;
use crate::infrastructure::storage::{Storage, in_memory::InMemoryStorage};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde_json::Value;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Gateway double returning canned payloads; counters let tests assert how
/// often the "model" was consulted.
#[derive(Clone, Default)]
pub struct ScriptedGateway {
    extract_payload: Arc<Mutex<Value>>,
    advice_payload: Arc<Mutex<Value>>,
    pub fail_extract: Arc<AtomicBool>,
    pub fail_advice: Arc<AtomicBool>,
    pub extract_calls: Arc<AtomicUsize>,
    pub advice_calls: Arc<AtomicUsize>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_extract(&self, payload: Value) {
        *self.extract_payload.lock().unwrap() = payload;
    }

    pub fn set_advice(&self, payload: Value) {
        *self.advice_payload.lock().unwrap() = payload;
    }
}

#[async_trait]
impl ModelGateway for ScriptedGateway {
    async fn extract_receipt(&self, _image_base64: &str) -> Result<Value, SpendlensError> {
        self.extract_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_extract.load(Ordering::SeqCst) {
            return Err(SpendlensError::ModelUnavailable(
                "scripted outage".to_string(),
            ));
        }
        Ok(self.extract_payload.lock().unwrap().clone())
    }

    async fn savings_advice(&self, _spending_summary: &str) -> Result<Value, SpendlensError> {
        self.advice_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_advice.load(Ordering::SeqCst) {
            return Err(SpendlensError::ModelUnavailable(
                "scripted outage".to_string(),
            ));
        }
        Ok(self.advice_payload.lock().unwrap().clone())
    }
}

/// Storage wrapper whose deletes always fail; everything else delegates.
pub struct FlakyStorage {
    inner: InMemoryStorage,
}

impl FlakyStorage {
    pub fn new() -> Self {
        FlakyStorage {
            inner: InMemoryStorage::new(),
        }
    }
}

#[async_trait]
impl Storage for FlakyStorage {
    async fn save_user(&self, user: User) -> Result<(), SpendlensError> {
        self.inner.save_user(user).await
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, SpendlensError> {
        self.inner.get_user(user_id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, SpendlensError> {
        self.inner.get_user_by_email(email).await
    }

    async fn save_receipt(&self, receipt: Receipt) -> Result<(), SpendlensError> {
        self.inner.save_receipt(receipt).await
    }

    async fn get_receipt(&self, receipt_id: &str) -> Result<Option<Receipt>, SpendlensError> {
        self.inner.get_receipt(receipt_id).await
    }

    async fn get_receipts_by_owner(&self, owner_id: &str) -> Result<Vec<Receipt>, SpendlensError> {
        self.inner.get_receipts_by_owner(owner_id).await
    }

    async fn delete_receipt(&self, _receipt_id: &str) -> Result<(), SpendlensError> {
        Err(SpendlensError::StorageError(
            "injected delete failure".to_string(),
        ))
    }
}

pub fn create_test_service(
    gateway: ScriptedGateway,
) -> SpendlensService<InMemoryStorage, ScriptedGateway, InMemoryCache> {
    create_test_service_with(InMemoryStorage::new(), gateway)
}

pub fn create_test_service_with<S: Storage>(
    storage: S,
    gateway: ScriptedGateway,
) -> SpendlensService<S, ScriptedGateway, InMemoryCache> {
    SpendlensService::new(
        storage,
        gateway,
        InMemoryCache::new(),
        "test-secret".to_string(),
    )
}

// Fixtures

pub fn user(id: &str, email: &str) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        name: "Test User".to_string(),
        password_hash: "not-a-real-hash".to_string(),
        created_at: Utc::now(),
    }
}

pub fn item(name: &str, price: f64, category: Category) -> ReceiptItem {
    ReceiptItem {
        name: name.to_string(),
        unit_price: price,
        quantity: 1.0,
        category,
        confidence: 0.95,
        discount: None,
    }
}

pub fn receipt(
    owner_id: &str,
    store: &str,
    date: &str,
    total: f64,
    items: Vec<ReceiptItem>,
) -> Receipt {
    Receipt {
        id: uuid::Uuid::new_v4().to_string(),
        owner_id: owner_id.to_string(),
        store_name: store.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        total_amount: total,
        currency: "USD".to_string(),
        items,
        tax_amount: None,
        ai_summary: None,
        source_ref: None,
        created_at: Utc::now(),
    }
}
