//! Per-venue quantity aggregation for a single (side, tick).

use crate::venue::NUM_VENUES;

/// The resting quantity at one (side, tick), broken down by venue.
///
/// A `PriceLevel` knows nothing about NBBO or its neighbors — it only tracks
/// per-venue and aggregate size, and reports the aggregate delta of each
/// mutation so the owning [`crate::OrderBook`] can keep its NBBO cursor
/// (`DenseWindowSide`) in sync without recomputing the sum itself.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    venue_qty: [u64; NUM_VENUES],
    agg_qty: u64,
}

impl PriceLevel {
    /// An empty level with zero quantity on every venue.
    pub fn new() -> Self {
        PriceLevel {
            venue_qty: [0; NUM_VENUES],
            agg_qty: 0,
        }
    }

    /// The current aggregate quantity, equal to the sum of all venue quantities.
    pub fn agg_qty(&self) -> u64 {
        self.agg_qty
    }

    /// The current quantity resting on a single venue.
    pub fn venue_qty(&self, venue_id: usize) -> u64 {
        self.venue_qty[venue_id]
    }

    /// Add a signed `delta` to `venue_id`'s quantity and the aggregate.
    ///
    /// `delta` must not drive either quantity negative — callers that might
    /// overshoot (e.g. `on_execute`) must clamp `delta` themselves before
    /// calling this. Returns the applied delta, which is always exactly
    /// `delta` (kept as a return value to mirror the distilled spec's
    /// `adjust` contract, which callers use as the aggregate-delta signal).
    pub fn adjust(&mut self, venue_id: usize, delta: i64) -> i64 {
        let new_venue_qty = self.venue_qty[venue_id] as i64 + delta;
        debug_assert!(
            new_venue_qty >= 0,
            "adjust would drive venue {venue_id} quantity negative"
        );
        self.venue_qty[venue_id] = new_venue_qty.max(0) as u64;

        let new_agg = self.agg_qty as i64 + delta;
        debug_assert!(new_agg >= 0, "adjust would drive aggregate quantity negative");
        self.agg_qty = new_agg.max(0) as u64;

        delta
    }

    /// The alphabetically-sorted names of venues with nonzero resting
    /// quantity, plus a read-only view of the full per-venue array
    /// (including zeros — see DESIGN.md for why the dense view is kept).
    pub fn snapshot_by_venue(&self) -> (Vec<&'static str>, &[u64; NUM_VENUES]) {
        let mut active: Vec<&'static str> = crate::venue::ALL_VENUES
            .iter()
            .zip(self.venue_qty.iter())
            .filter(|(_, &qty)| qty != 0)
            .map(|(venue, _)| venue.name())
            .collect();
        active.sort_unstable();
        (active, &self.venue_qty)
    }
}

impl Default for PriceLevel {
    fn default() -> Self {
        Self::new()
    }
}
