//! The event surface: `on_add` / `on_cancel` / `on_replace` / `on_execute` / `on_batch`.

use super::book::{OrderBook, OrderEntry};
use super::error::OrderBookError;
use super::event::{Event, Notification, Side};
use super::price_level::PriceLevel;
use super::window::DenseWindowSide;
use crate::venue::{NUM_VENUES, Venue};
use std::fmt;
use std::hash::Hash;
use tracing::trace;

impl<Id> OrderBook<Id>
where
    Id: Clone + Eq + Hash + fmt::Debug,
{
    /// Add a new resting order.
    ///
    /// Returns `Ok(Some(notification))` if the add improved the best price
    /// on its side, `Ok(None)` otherwise. Fails with
    /// [`OrderBookError::DuplicateOrder`] if `oid` is already resting.
    pub fn on_add(
        &mut self,
        oid: Id,
        venue: Venue,
        side: Side,
        price: f64,
        qty: u64,
    ) -> Result<Option<Notification>, OrderBookError> {
        if self.order_map.contains_key(&oid) {
            return Err(OrderBookError::DuplicateOrder {
                oid: format!("{oid:?}"),
            });
        }

        let idx = self.tick_size.to_tick(price);
        let venue_id = venue.id();

        let new_size = {
            let levels = self.levels_mut(side);
            let first = !levels.contains_key(&idx);
            let level = levels.entry(idx).or_insert_with(PriceLevel::new);
            level.adjust(venue_id, qty as i64);
            (level.agg_qty(), first)
        };
        let (new_size, first) = new_size;

        self.order_map.insert(
            oid,
            OrderEntry {
                side,
                idx,
                venue_id,
                remaining: qty,
            },
        );

        trace!(?side, idx, qty, "on_add");

        if !first {
            return Ok(None);
        }

        let prev_best = self
            .window_mut(side)
            .get_or_insert_with(|| DenseWindowSide::new(idx, side.is_bid()))
            .inc_level(idx);

        let Some(prev_idx) = prev_best else {
            return Ok(None);
        };

        let displaced = self
            .levels(side)
            .get(&prev_idx)
            .expect("displaced level must still be live");
        let (displaced_active_venues, _) = displaced.snapshot_by_venue();
        let notification = Notification::Improvement {
            new_price: self.tick_size.to_price(idx),
            new_size,
            old_price: self.tick_size.to_price(prev_idx),
            old_size: displaced.agg_qty(),
            displaced_active_venues: displaced_active_venues
                .into_iter()
                .map(String::from)
                .collect(),
        };
        self.notify(&notification);
        Ok(Some(notification))
    }

    /// Cancel an order outright, removing all of its resting quantity.
    ///
    /// Fails with [`OrderBookError::UnknownOrder`] if `oid` is not resting.
    pub fn on_cancel(&mut self, oid: &Id) -> Result<(), OrderBookError> {
        let entry = self
            .order_map
            .remove(oid)
            .ok_or_else(|| OrderBookError::UnknownOrder {
                oid: format!("{oid:?}"),
            })?;
        trace!(side = ?entry.side, idx = entry.idx, "on_cancel");
        self.release(entry.side, entry.idx, entry.venue_id, entry.remaining);
        Ok(())
    }

    /// Replace an order: add a new order at `price`/`qty`, then cancel the original.
    ///
    /// Applying the add before the cancel (rather than the reverse) means a
    /// replace that re-quotes at the same best price never transiently
    /// reports the side as empty.
    ///
    /// Fails with [`OrderBookError::ReplaceSameId`] if `new_oid == orig_oid`,
    /// or [`OrderBookError::UnknownOrder`] if `orig_oid` is not resting —
    /// both checked before anything is mutated, so a failing replace leaves
    /// the book untouched. [`OrderBookError::DuplicateOrder`] propagates
    /// from the add phase if `new_oid` is already resting.
    pub fn on_replace(
        &mut self,
        new_oid: Id,
        orig_oid: &Id,
        venue: Venue,
        side: Side,
        price: f64,
        qty: u64,
    ) -> Result<Option<Notification>, OrderBookError> {
        if &new_oid == orig_oid {
            return Err(OrderBookError::ReplaceSameId {
                oid: format!("{new_oid:?}"),
            });
        }
        if !self.order_map.contains_key(orig_oid) {
            return Err(OrderBookError::UnknownOrder {
                oid: format!("{orig_oid:?}"),
            });
        }

        let notification = self.on_add(new_oid, venue, side, price, qty)?;
        self.on_cancel(orig_oid)?;
        Ok(notification)
    }

    /// Execute `exec_qty` against a resting order.
    ///
    /// `exec_qty` is clamped to the order's remaining quantity — an
    /// exchange execution report can never remove more than was resting.
    /// The order (and its level, if it was the only quantity resting there)
    /// is torn down once its remaining quantity reaches zero.
    ///
    /// Fails with [`OrderBookError::UnknownOrder`] if `oid` is not resting.
    pub fn on_execute(&mut self, oid: &Id, exec_qty: u64) -> Result<Notification, OrderBookError> {
        let entry = *self
            .order_map
            .get(oid)
            .ok_or_else(|| OrderBookError::UnknownOrder {
                oid: format!("{oid:?}"),
            })?;
        let OrderEntry {
            side,
            idx,
            venue_id,
            remaining,
        } = entry;

        let take = exec_qty.min(remaining);
        let new_remaining = remaining - take;

        let (deleted, active_venues, per_venue_qty, remaining_aggregate) = {
            let levels = self.levels_mut(side);
            let level = levels
                .get_mut(&idx)
                .expect("order_map entry must reference a live level");
            level.adjust(venue_id, -(take as i64));
            let deleted = level.agg_qty() == 0;
            let (active_venues, per_venue_qty, remaining_aggregate) = if deleted {
                (String::new(), [0u64; NUM_VENUES], 0u64)
            } else {
                let (active, dense) = level.snapshot_by_venue();
                (active.join(","), *dense, level.agg_qty())
            };
            if deleted {
                levels.remove(&idx);
            }
            (deleted, active_venues, per_venue_qty, remaining_aggregate)
        };

        if deleted {
            if let Some(window) = self.window_mut(side) {
                window.dec_level(idx);
            }
        }

        if new_remaining == 0 {
            self.order_map.remove(oid);
        } else if let Some(e) = self.order_map.get_mut(oid) {
            e.remaining = new_remaining;
        }

        trace!(?side, idx, take, deleted, "on_execute");

        let notification = Notification::Execution {
            exec_price: self.tick_size.to_price(idx),
            remaining_aggregate,
            per_venue_qty,
            active_venues,
        };
        self.notify(&notification);
        Ok(notification)
    }

    /// Apply a sequence of events in order, collecting every notification
    /// produced along the way.
    ///
    /// A failing event aborts the batch immediately: events already applied
    /// stay applied, and the triggering error is returned. There is no
    /// rollback — callers that need all-or-nothing semantics across a batch
    /// must validate upstream or restore from a snapshot of their own.
    pub fn on_batch(
        &mut self,
        events: impl IntoIterator<Item = Event<Id>>,
    ) -> Result<Vec<Notification>, OrderBookError> {
        let mut notifications = Vec::new();
        for event in events {
            match event {
                Event::Add {
                    oid,
                    venue,
                    side,
                    price,
                    qty,
                } => {
                    if let Some(n) = self.on_add(oid, venue, side, price, qty)? {
                        notifications.push(n);
                    }
                }
                Event::Cancel { oid } => {
                    self.on_cancel(&oid)?;
                }
                Event::Replace {
                    new_oid,
                    orig_oid,
                    venue,
                    side,
                    price,
                    qty,
                } => {
                    if let Some(n) = self.on_replace(new_oid, &orig_oid, venue, side, price, qty)? {
                        notifications.push(n);
                    }
                }
                Event::Execute { oid, exec_qty } => {
                    notifications.push(self.on_execute(&oid, exec_qty)?);
                }
            }
        }
        Ok(notifications)
    }

    /// Shared teardown for cancel and full-execution: remove `qty` from the
    /// level at `idx`, and delete the level (and update the NBBO cursor) if
    /// that drains it to zero.
    fn release(&mut self, side: Side, idx: i64, venue_id: usize, qty: u64) {
        let deleted = {
            let levels = self.levels_mut(side);
            let level = levels
                .get_mut(&idx)
                .expect("order_map entry must reference a live level");
            level.adjust(venue_id, -(qty as i64));
            let deleted = level.agg_qty() == 0;
            if deleted {
                levels.remove(&idx);
            }
            deleted
        };
        if deleted {
            if let Some(window) = self.window_mut(side) {
                window.dec_level(idx);
            }
        }
    }
}
