//! Optional in-process hook for forwarding notifications to a host publisher.

use super::event::Notification;
use std::sync::Arc;

/// A callback invoked with each [`Notification`] as it is produced.
///
/// This is ambient wiring, grounded in the teacher's
/// `PriceLevelChangedListener` pattern — it lets a host process bridge the
/// book to its own publisher/transport without this crate taking a
/// dependency on one. The publisher itself (fan-out, batching, delivery
/// guarantees) is a collaborator outside this crate's scope.
pub type BookChangeListener = Arc<dyn Fn(&Notification) + Send + Sync>;
