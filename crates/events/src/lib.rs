//! Typed events and the pub/sub bus that routes them.
//!
//! The interaction surface (rendering, forms) communicates intent to the
//! controller exclusively through typed events published on a bus. No
//! process-wide mutable hook exists: the controller owns a subscription and
//! all mutation authority.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
