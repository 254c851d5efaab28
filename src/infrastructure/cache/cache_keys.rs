pub fn user_insights_key(user_id: &str) -> String {
    format!("user_insights:{}", user_id)
}
