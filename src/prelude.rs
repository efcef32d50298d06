//! Prelude module that re-exports commonly used types and traits.
//!
//! This module provides a convenient way to import the most commonly used
//! types from `venuebook`. Instead of importing each type individually, you
//! can use:
//!
//! ```rust
//! use venuebook::prelude::*;
//! ```

pub use crate::orderbook::{
    BookChangeListener, BookConfig, DenseWindowSide, Event, Notification, OrderBook,
    OrderBookError, PriceLevel, Side,
};
pub use crate::tick::TickSize;
pub use crate::venue::Venue;
