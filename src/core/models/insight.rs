use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Savings,
    #[default]
    Trend,
}

/// Short AI-generated observation about spending behavior.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct SpendingInsight {
    pub title: String,
    pub description: String,
    /// Advisory tag; the model sometimes omits it, so it defaults to `trend`.
    #[serde(rename = "type", default)]
    pub kind: InsightKind,
    /// Free-text estimate of money saved or lost, not a typed amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
}
