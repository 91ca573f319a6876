use chrono::{DateTime, Utc};

/// A typed event.
///
/// Events are immutable facts: "this slot was clicked", "deletion of this
/// pallet was confirmed". They carry the minimum data needed to act on them
/// (usually an id) — the receiver re-reads current state from the store, so a
/// stale payload can never overwrite a newer mutation.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "surface.slot.clicked").
    fn event_type(&self) -> &'static str;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
