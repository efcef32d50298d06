//! Order book error types

use std::fmt;

/// Errors that can occur within the [`crate::OrderBook`].
///
/// All variants here are caller contract violations (§7 of the design
/// notes): unknown order ids, duplicate ids, or a replace that reuses its
/// own id. Execute overshoot is not an error — it is silently clamped (see
/// [`crate::OrderBook::on_execute`]).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OrderBookError {
    /// `on_add` or `on_replace` was called with an order id already resting in the book.
    DuplicateOrder {
        /// The id that was already present.
        oid: String,
    },

    /// `on_cancel`, `on_execute`, or the cancel phase of `on_replace` referenced
    /// an order id that is not currently resting in the book.
    UnknownOrder {
        /// The id that could not be found.
        oid: String,
    },

    /// `on_replace` was called with `new_oid == orig_oid`.
    ReplaceSameId {
        /// The id used for both the new and the original order.
        oid: String,
    },
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::DuplicateOrder { oid } => {
                write!(f, "duplicate order id: {oid}")
            }
            OrderBookError::UnknownOrder { oid } => {
                write!(f, "unknown order id: {oid}")
            }
            OrderBookError::ReplaceSameId { oid } => {
                write!(f, "replace used the same id for new and original order: {oid}")
            }
        }
    }
}

impl std::error::Error for OrderBookError {}
