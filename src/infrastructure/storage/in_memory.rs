use crate::core::errors::SpendlensError;
use crate::core::models::{Receipt, User};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

pub struct InMemoryStorage {
    users: Mutex<HashMap<String, User>>,
    emails: Mutex<HashMap<String, String>>, // email -> user_id
    receipts: Mutex<HashMap<String, Receipt>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: Mutex::new(HashMap::new()),
            emails: Mutex::new(HashMap::new()),
            receipts: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn save_user(&self, user: User) -> Result<(), SpendlensError> {
        let mut emails = self.emails.lock().await;
        if emails.contains_key(&user.email) {
            return Err(SpendlensError::EmailAlreadyRegistered(user.email));
        }
        emails.insert(user.email.clone(), user.id.clone());
        let mut users = self.users.lock().await;
        users.insert(user.id.clone(), user);
        Ok(())
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, SpendlensError> {
        Ok(self.users.lock().await.get(user_id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, SpendlensError> {
        // For production: Use database index on email
        let user_id = self.emails.lock().await.get(email).cloned();
        Ok(match user_id {
            Some(id) => self.users.lock().await.get(&id).cloned(),
            None => None,
        })
    }

    async fn save_receipt(&self, receipt: Receipt) -> Result<(), SpendlensError> {
        self.receipts
            .lock()
            .await
            .insert(receipt.id.clone(), receipt);
        Ok(())
    }

    async fn get_receipt(&self, receipt_id: &str) -> Result<Option<Receipt>, SpendlensError> {
        Ok(self.receipts.lock().await.get(receipt_id).cloned())
    }

    async fn get_receipts_by_owner(&self, owner_id: &str) -> Result<Vec<Receipt>, SpendlensError> {
        // For production: Use database query with index and ORDER BY
        let mut receipts: Vec<Receipt> = self
            .receipts
            .lock()
            .await
            .values()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect();
        receipts.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(receipts)
    }

    async fn delete_receipt(&self, receipt_id: &str) -> Result<(), SpendlensError> {
        self.receipts.lock().await.remove(receipt_id);
        Ok(())
    }
}
