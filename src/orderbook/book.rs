//! Core OrderBook implementation owning the level maps, NBBO cursors, and order registry.

use super::event::{Notification, Side};
use super::listener::BookChangeListener;
use super::price_level::PriceLevel;
use super::window::DenseWindowSide;
use crate::tick::TickSize;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use tracing::trace;

/// Construction-time configuration for an [`OrderBook`].
#[derive(Debug, Clone, Copy)]
pub struct BookConfig {
    /// The fixed price increment used to convert prices to tick indices.
    pub tick_size: TickSize,
}

impl Default for BookConfig {
    fn default() -> Self {
        BookConfig {
            tick_size: TickSize::default(),
        }
    }
}

/// The registry entry for one open order: where it rests, and how much of
/// it is still resting. Per-order remaining is tracked only here — the
/// level tracks venue-wide totals, not individual orders.
#[derive(Debug, Clone, Copy)]
pub(super) struct OrderEntry {
    pub(super) side: Side,
    pub(super) idx: i64,
    pub(super) venue_id: usize,
    pub(super) remaining: u64,
}

/// A single-symbol, single-threaded multi-venue limit order book.
///
/// Owns the per-side tick-indexed level maps, the per-side NBBO cursor
/// ([`DenseWindowSide`]), and the order-id registry. `Id` is the caller's
/// order-id type; the book imposes no id generation scheme of its own, it
/// only requires `Id` be usable as a hash-map key.
///
/// One `OrderBook` instance corresponds to one symbol; cross-symbol routing
/// and a multi-book manager are out of scope for this crate (§1 Non-goals).
pub struct OrderBook<Id> {
    pub(super) symbol: String,
    pub(super) tick_size: TickSize,

    pub(super) bids: HashMap<i64, PriceLevel>,
    pub(super) asks: HashMap<i64, PriceLevel>,

    pub(super) bid_window: Option<DenseWindowSide>,
    pub(super) ask_window: Option<DenseWindowSide>,

    pub(super) order_map: HashMap<Id, OrderEntry>,

    pub(super) listener: Option<BookChangeListener>,
}

impl<Id> OrderBook<Id>
where
    Id: Clone + Eq + Hash + fmt::Debug,
{
    /// Create an empty book for `symbol` using the default tick size (0.01).
    pub fn new(symbol: impl Into<String>) -> Self {
        Self::with_config(symbol, BookConfig::default())
    }

    /// Create an empty book for `symbol` with an explicit tick size.
    pub fn with_tick_size(symbol: impl Into<String>, tick_size: f64) -> Self {
        Self::with_config(
            symbol,
            BookConfig {
                tick_size: TickSize::new(tick_size),
            },
        )
    }

    /// Create an empty book for `symbol` with a full [`BookConfig`].
    pub fn with_config(symbol: impl Into<String>, config: BookConfig) -> Self {
        OrderBook {
            symbol: symbol.into(),
            tick_size: config.tick_size,
            bids: HashMap::new(),
            asks: HashMap::new(),
            bid_window: None,
            ask_window: None,
            order_map: HashMap::new(),
            listener: None,
        }
    }

    /// The symbol this book was constructed for.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Register a callback invoked with every notification this book produces.
    ///
    /// Replaces any previously registered listener. This is ambient wiring
    /// for a host process's own publisher; the core never requires a
    /// listener to be set.
    pub fn set_listener(&mut self, listener: BookChangeListener) {
        self.listener = Some(listener);
    }

    /// Remove any previously registered listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// The best bid price, or `None` if the bid side has never been
    /// initialized or is currently empty.
    pub fn best_bid(&self) -> Option<f64> {
        self.bid_window
            .as_ref()
            .and_then(DenseWindowSide::best)
            .map(|idx| self.tick_size.to_price(idx))
    }

    /// The best ask price, or `None` if the ask side has never been
    /// initialized or is currently empty.
    pub fn best_ask(&self) -> Option<f64> {
        self.ask_window
            .as_ref()
            .and_then(DenseWindowSide::best)
            .map(|idx| self.tick_size.to_price(idx))
    }

    /// The number of distinct occupied ticks currently live on `side`.
    ///
    /// Exposed for tests and diagnostics; not part of the event surface.
    pub fn level_count(&self, side: Side) -> usize {
        self.levels(side).len()
    }

    /// Whether `oid` currently has an open order resting in the book.
    pub fn has_order(&self, oid: &Id) -> bool {
        self.order_map.contains_key(oid)
    }

    pub(super) fn levels(&self, side: Side) -> &HashMap<i64, PriceLevel> {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    pub(super) fn levels_mut(&mut self, side: Side) -> &mut HashMap<i64, PriceLevel> {
        match side {
            Side::Bid => &mut self.bids,
            Side::Ask => &mut self.asks,
        }
    }

    pub(super) fn window_mut(&mut self, side: Side) -> &mut Option<DenseWindowSide> {
        match side {
            Side::Bid => &mut self.bid_window,
            Side::Ask => &mut self.ask_window,
        }
    }

    pub(super) fn notify(&self, notification: &Notification) {
        trace!(symbol = %self.symbol, ?notification, "notification");
        if let Some(listener) = &self.listener {
            listener(notification);
        }
    }
}
