pub mod category;
pub mod insight;
pub mod receipt;
pub mod user;

pub use category::Category;
pub use insight::{InsightKind, SpendingInsight};
pub use receipt::{Receipt, ReceiptItem};
pub use user::User;
