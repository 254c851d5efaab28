use super::category::Category;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single extracted line item.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ReceiptItem {
    pub name: String,
    pub unit_price: f64,
    pub quantity: f64,
    pub category: Category,
    /// Extraction confidence, 0.0 to 1.0.
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
}

/// A single purchase transaction with store, date, total and line items.
///
/// `total_amount` is non-negative; `items` may be empty when the model could
/// only read the header (summary-only receipt).
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Receipt {
    pub id: String,
    pub owner_id: String,
    pub store_name: String,
    pub date: NaiveDate,
    pub total_amount: f64,
    pub currency: String,
    pub items: Vec<ReceiptItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ref: Option<String>,
    pub created_at: DateTime<Utc>,
}
