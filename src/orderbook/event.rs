//! Event intake and notification payload types for the event surface (C5).

use crate::venue::{NUM_VENUES, Venue};
use serde::{Deserialize, Serialize};

/// The side of the book an order rests on.
///
/// Ordering semantics differ by side: a higher tick is better on `Bid`, a
/// lower tick is better on `Ask`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Bid,
    Ask,
}

impl Side {
    pub(crate) fn is_bid(self) -> bool {
        matches!(self, Side::Bid)
    }
}

/// One normalized market-data event, as consumed by [`crate::OrderBook::on_batch`].
///
/// `Id` is the book's order-id type — any `Clone + Eq + Hash` type the
/// caller chooses; the core imposes no id generation scheme of its own.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<Id> {
    Add {
        oid: Id,
        venue: Venue,
        side: Side,
        price: f64,
        qty: u64,
    },
    Cancel {
        oid: Id,
    },
    Replace {
        new_oid: Id,
        orig_oid: Id,
        venue: Venue,
        side: Side,
        price: f64,
        qty: u64,
    },
    Execute {
        oid: Id,
        exec_qty: u64,
    },
}

/// A notification emitted by the event surface: either an NBBO-improvement
/// tuple (from an add or the add-phase of a replace) or an execution report.
///
/// The distilled spec describes these as arity-tagged tuples (5-tuple vs.
/// 4-tuple) so a driver can dispatch on shape alone; the Rust surface
/// carries the same fields through a proper enum instead; matching on the
/// variant gives the same dispatch, type-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Notification {
    /// An add or replace improved the best price on its side.
    Improvement {
        new_price: f64,
        new_size: u64,
        old_price: f64,
        old_size: u64,
        /// Alphabetically-sorted names of venues active at the displaced level.
        displaced_active_venues: Vec<String>,
    },
    /// An execution occurred against a resting order.
    Execution {
        exec_price: f64,
        /// Remaining aggregate quantity at the level, or 0 if the level was deleted.
        remaining_aggregate: u64,
        /// Per-venue resting quantity at the level after the execution, dense
        /// (including zeros), or all zeros if the level was deleted.
        per_venue_qty: [u64; NUM_VENUES],
        /// Comma-joined, alphabetically-sorted names of venues still active
        /// at the level after the execution (empty string if the level was deleted).
        active_venues: String,
    },
}
