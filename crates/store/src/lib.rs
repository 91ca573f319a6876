//! Canonical warehouse state and the CRUD mutation protocol.
//!
//! The store is the single source of truth for the ordered slot sequence. All
//! mutations pass through the protocol operations here; no other component
//! holds a second mutable copy of the canonical state.

pub mod store;

pub use store::WarehouseStore;
