//! Conversion between floating-point price and integer tick index.

use serde::{Deserialize, Serialize};

/// Default tick size used when a book is constructed with [`Default`].
pub const DEFAULT_TICK_SIZE: f64 = 0.01;

/// A construction-time-fixed price increment.
///
/// Prices are encoded internally as the signed integer nearest to
/// `price / tick_size` (half-away-from-zero rounding). Negative ticks are
/// permitted — a book has no notion of a minimum price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickSize(f64);

impl TickSize {
    /// Construct a tick size. `size` must be finite and strictly positive.
    ///
    /// # Panics
    /// Panics if `size` is not finite or not positive — an invalid tick size
    /// is a construction-time programming error, not a runtime data
    /// condition callers can recover from.
    pub fn new(size: f64) -> Self {
        assert!(
            size.is_finite() && size > 0.0,
            "tick size must be finite and positive, got {size}"
        );
        TickSize(size)
    }

    /// The nearest tick index to `price`, rounding half-away-from-zero.
    pub fn to_tick(self, price: f64) -> i64 {
        (price / self.0).round() as i64
    }

    /// The price at tick index `idx`.
    pub fn to_price(self, idx: i64) -> f64 {
        idx as f64 * self.0
    }
}

impl Default for TickSize {
    fn default() -> Self {
        TickSize(DEFAULT_TICK_SIZE)
    }
}
