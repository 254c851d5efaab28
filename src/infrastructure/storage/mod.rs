use crate::core::errors::SpendlensError;
use crate::core::models::{Receipt, User};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn save_user(&self, user: User) -> Result<(), SpendlensError>;
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, SpendlensError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, SpendlensError>;

    async fn save_receipt(&self, receipt: Receipt) -> Result<(), SpendlensError>;
    async fn get_receipt(&self, receipt_id: &str) -> Result<Option<Receipt>, SpendlensError>;
    /// All receipts owned by `owner_id`, transaction date descending.
    async fn get_receipts_by_owner(&self, owner_id: &str) -> Result<Vec<Receipt>, SpendlensError>;
    async fn delete_receipt(&self, receipt_id: &str) -> Result<(), SpendlensError>;
}

pub mod in_memory;
