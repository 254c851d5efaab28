use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum SpendlensError {
    /// Email field is empty
    #[error("Email is required")]
    MissingEmail,

    /// Email is already registered
    #[error("Email {0} already registered")]
    EmailAlreadyRegistered(String),

    /// User with given ID not found
    #[error("User {0} not found")]
    UserNotFound(String),

    /// Login email/password pair does not match a user
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bearer token missing, malformed or expired
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Receipt with given ID not found
    #[error("Receipt {0} not found")]
    ReceiptNotFound(String),

    /// Receipt belongs to a different user
    #[error("Receipt {0} is not owned by the requesting user")]
    NotReceiptOwner(String),

    /// Scan request carried no usable image data
    #[error("Image payload is empty")]
    InvalidImagePayload,

    /// Extraction produced a total that violates the non-negative invariant
    #[error("Extracted total {0} is negative")]
    NegativeTotal(f64),

    /// Model endpoint could not be reached or returned a transport error
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// Model reply carried no message content
    #[error("Model returned an empty reply")]
    EmptyModelReply,

    /// Model content was not the JSON the prompt constrained it to
    #[error("Malformed model reply: {0}")]
    MalformedModelReply(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    /// Catch-all for unexpected failures
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}
