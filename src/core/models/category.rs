use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Closed classification tag assigned to each purchased item. The OCR prompt
/// constrains the model to exactly these labels.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
pub enum Category {
    Groceries,
    Dining,
    Electronics,
    Utilities,
    Transport,
    Clothing,
    Health,
    Entertainment,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Groceries,
        Category::Dining,
        Category::Electronics,
        Category::Utilities,
        Category::Transport,
        Category::Clothing,
        Category::Health,
        Category::Entertainment,
        Category::Other,
    ];

    /// Lenient parse for model output; unknown labels land in `Other`.
    pub fn parse(label: &str) -> Category {
        match label.trim().to_ascii_lowercase().as_str() {
            "groceries" => Category::Groceries,
            "dining" => Category::Dining,
            "electronics" => Category::Electronics,
            "utilities" => Category::Utilities,
            "transport" => Category::Transport,
            "clothing" => Category::Clothing,
            "health" => Category::Health,
            "entertainment" => Category::Entertainment,
            _ => Category::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Groceries => "Groceries",
            Category::Dining => "Dining",
            Category::Electronics => "Electronics",
            Category::Utilities => "Utilities",
            Category::Transport => "Transport",
            Category::Clothing => "Clothing",
            Category::Health => "Health",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
