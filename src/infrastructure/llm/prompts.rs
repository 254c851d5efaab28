use crate::core::models::Category;
use once_cell::sync::Lazy;

/// Instruction for the vision extraction call. The category list must stay in
/// lockstep with the `Category` enum, so it is rendered from it.
pub static RECEIPT_EXTRACTION: Lazy<String> = Lazy::new(|| {
    let categories: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    format!(
        "You are a receipt OCR expert. Analyze the image and return ONLY a JSON object.\n\
         Fields:\n\
         - storeName (string)\n\
         - date (YYYY-MM-DD)\n\
         - totalAmount (number)\n\
         - currency (string, e.g., \"USD\")\n\
         - taxAmount (number, optional)\n\
         - items (array of {{ name, price, quantity, category, confidence, discount }})\n\
         - aiSummary (string, one short strategic sentence about this purchase)\n\
         Categories MUST be one of: {}.\n\
         If a category is ambiguous, use your best judgement based on the item name.",
        categories.join(", ")
    )
});

/// System prompt for the advice call. Asking for a wrapping `insights` key
/// makes the JSON-object response format happy; the unwrap logic still copes
/// when the model picks another shape.
pub const SAVINGS_ADVICE: &str = "You are a financial advisor. Analyze the user's spending history \
     and return a JSON object with a key \"insights\" holding an array of exactly 3 entries.\n\
     Entry structure: { \"title\": string, \"description\": string, \
     \"type\": \"warning\" | \"savings\" | \"trend\", \"impact\": string }.\n\
     Each entry is one specific savings opportunity or alert.";
