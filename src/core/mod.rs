pub mod analytics;
pub mod errors;
pub mod extract;
pub mod models;
pub mod service;
