use crate::constants::DEFAULT_ITEM_CONFIDENCE;
use crate::core::errors::SpendlensError;
use crate::core::models::{Category, Receipt, ReceiptItem, SpendingInsight};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

/// Lenient mirror of the JSON the extraction prompt asks the model for.
/// Every field is optional; the mapping below fills the gaps.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptDraft {
    pub store_name: Option<String>,
    pub date: Option<String>,
    pub total_amount: Option<f64>,
    pub currency: Option<String>,
    pub tax_amount: Option<f64>,
    pub items: Option<Vec<ItemDraft>>,
    pub ai_summary: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemDraft {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
    pub category: Option<String>,
    pub confidence: Option<f64>,
    pub discount: Option<f64>,
}

/// Turns a best-effort draft into a well-formed `Receipt` owned by `owner_id`.
///
/// Missing header fields fall back to placeholders rather than failing the
/// scan; a negative total violates the receipt invariant and is rejected.
pub fn receipt_from_draft(
    draft: ReceiptDraft,
    owner_id: &str,
    source_ref: Option<String>,
    today: NaiveDate,
) -> Result<Receipt, SpendlensError> {
    let total_amount = draft.total_amount.unwrap_or(0.0);
    if total_amount < 0.0 {
        return Err(SpendlensError::NegativeTotal(total_amount));
    }

    let date = draft
        .date
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .unwrap_or(today);

    let items = draft
        .items
        .unwrap_or_default()
        .into_iter()
        .map(|item| ReceiptItem {
            name: item.name.unwrap_or_else(|| "Unlabeled item".to_string()),
            unit_price: item.price.unwrap_or(0.0),
            quantity: item.quantity.unwrap_or(1.0),
            category: item
                .category
                .as_deref()
                .map(Category::parse)
                .unwrap_or(Category::Other),
            confidence: item.confidence.unwrap_or(DEFAULT_ITEM_CONFIDENCE),
            discount: item.discount,
        })
        .collect();

    Ok(Receipt {
        id: Uuid::new_v4().to_string(),
        owner_id: owner_id.to_string(),
        store_name: draft
            .store_name
            .unwrap_or_else(|| "Unknown store".to_string()),
        date,
        total_amount,
        currency: draft.currency.unwrap_or_else(|| "USD".to_string()),
        items,
        tax_amount: draft.tax_amount,
        ai_summary: draft.ai_summary,
        source_ref,
        created_at: Utc::now(),
    })
}

/// Unwraps the advice payload the model was asked to shape as
/// `{"insights": [...]}` but does not reliably produce.
///
/// A bare array is taken as-is; on an object the `insights` key wins,
/// otherwise the first array-valued field is used; any other shape yields an
/// empty list. Entries that fail to deserialize are dropped.
pub fn unwrap_insights(payload: &Value) -> Vec<SpendingInsight> {
    let entries = if let Some(list) = payload.as_array() {
        list
    } else if let Some(object) = payload.as_object() {
        match object.get("insights").and_then(Value::as_array) {
            Some(list) => list,
            None => match object.values().find_map(Value::as_array) {
                Some(list) => list,
                None => return Vec::new(),
            },
        }
    } else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
        .collect()
}
