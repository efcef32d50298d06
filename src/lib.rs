//! # venuebook
//!
//! A multi-venue limit order book core for market-data observers: per-price-level
//! venue aggregation, and a dense-window + heap hybrid NBBO (national best bid/offer)
//! cursor built for the common case of sub-microsecond best-price lookups.
//!
//! ## What this crate is
//!
//! `venuebook` reconstructs the *displayed* state of a symbol's order book from a
//! normalized stream of add / cancel / replace / execute events, the way a market-data
//! consumer does rather than the way a matching engine does: it tracks how much
//! quantity is resting at each price on each venue, and the best price on each side,
//! but it does not implement priority, matching, or order-type semantics — those
//! belong to the exchange itself, not to an observer of its feed.
//!
//! ## Key Features
//!
//! - **O(1) common-case NBBO**: [`DenseWindowSide`] keeps a fixed-width occupancy
//!   bitmap centered on the first tick ever touched on a side, so the best price
//!   is almost always a direct index lookup rather than a scan.
//! - **Heap fallback for far quotes**: quotes outside the dense window fall back to
//!   a lazily-tombstoned `BinaryHeap`, so one stale far-touch order never forces a
//!   full rescan of the window.
//! - **Per-venue aggregation**: [`PriceLevel`] tracks resting quantity broken down
//!   by venue as well as in aggregate, without modeling individual order queues.
//! - **Generic order ids**: [`OrderBook`] is generic over any `Clone + Eq + Hash`
//!   id type — it imposes no id generation scheme of its own.
//! - **Batched intake**: [`OrderBook::on_batch`] applies a sequence of normalized
//!   [`Event`]s and returns every [`Notification`] produced, in order.
//!
//! ## What this crate is not
//!
//! There is no matching engine, no priority queue per price level, no fee
//! schedule, no self-trade prevention, and no persistence or transport layer.
//! Those are concerns of the venue or of the host process wiring this crate
//! into a larger system, not of the book itself.
//!
//! ## Example
//!
//! ```
//! use venuebook::{OrderBook, Side, Venue};
//!
//! let mut book: OrderBook<u64> = OrderBook::new("AAPL");
//! book.on_add(1, Venue::Cboe, Side::Bid, 189.52, 300).unwrap();
//! assert_eq!(book.best_bid(), Some(189.52));
//! ```

mod orderbook;
mod tick;
mod venue;

pub mod prelude;

pub use orderbook::{
    BookChangeListener, BookConfig, DenseWindowSide, Event, Notification, OrderBook,
    OrderBookError, PriceLevel, Side,
};
pub use tick::{DEFAULT_TICK_SIZE, TickSize};
pub use venue::{ALL_VENUES, NUM_VENUES, UnknownVenue, Venue};
