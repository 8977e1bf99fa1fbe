//! Cart error taxonomy.
//!
//! Only two things can go wrong in the cart: an add that would outrun the
//! available stock, and a persistence write that fails. Everything else is a
//! total operation. Malformed persisted snapshots are deliberately NOT an
//! error - the store recovers to an empty cart at load time.

use medisync_core::MedicineId;
use thiserror::Error;

/// Errors surfaced by cart mutations.
#[derive(Debug, Error)]
pub enum CartError {
    /// Incrementing this line would exceed the stock available at add time.
    /// The cart is left unchanged.
    #[error("only {available} units of {id} available in stock")]
    StockExceeded {
        /// The medicine whose line could not grow.
        id: MedicineId,
        /// The stock ceiling supplied by the caller.
        available: u32,
    },

    /// The persistence backend rejected a snapshot write.
    #[error("cart storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_exceeded_display() {
        let err = CartError::StockExceeded {
            id: MedicineId::Number(7),
            available: 10,
        };
        assert_eq!(err.to_string(), "only 10 units of 7 available in stock");
    }
}
