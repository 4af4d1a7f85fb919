/// Errors from key-value store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The requested key is not present in the store.
    #[error("key not found: {0}")]
    NotFound(String),

    /// A key already exists where the operation required it to be absent.
    ///
    /// Reserved: `set` is an unconditional upsert, so no current operation
    /// reports this. Kept for a future set-if-absent variant.
    #[error("key already exists: {0}")]
    Duplicate(String),

    /// The store was constructed with a shard count of zero. The shard
    /// count is the hash-routing modulus and must be positive.
    #[error("invalid shard count: {0}")]
    InvalidShardCount(usize),

    /// Catch-all for failures that fit no other category.
    #[error("unknown store error")]
    Unknown,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            StoreError::NotFound("person".into()).to_string(),
            "key not found: person"
        );
        assert_eq!(
            StoreError::InvalidShardCount(0).to_string(),
            "invalid shard count: 0"
        );
        assert_eq!(StoreError::Unknown.to_string(), "unknown store error");
    }
}
