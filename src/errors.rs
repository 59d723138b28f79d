use thiserror::Error;

/// Errors that can arise inside the dashboard containers and the session slot.
#[derive(Debug, Error)]
pub enum BlitzError {
    /// Wrapper around sled's error type.
    #[error("sled error: {0}")]
    Sled(#[from] sled::Error),

    /// Wrapper around JSON serialization and deserialization errors.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Wrapper around IO errors (directory creation, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Returned when a record id does not match anything in a container.
    #[error("record not found: {0}")]
    NotFound(String),

    /// Input rejected before it reached a container.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Store purchase above the viewer's coin balance.
    #[error("insufficient coins: item costs {price}, balance is {balance}")]
    InsufficientCoins { price: u32, balance: u32 },

    /// Store purchase of an item already in the purchased list.
    #[error("item already purchased: {0}")]
    AlreadyPurchased(String),
}
