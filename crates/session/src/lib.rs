//! Selection/interaction controller.
//!
//! This crate wires the store, query engine and generator behind a single
//! controller that the interaction surface talks to. Surface intents arrive
//! either as direct method calls or as typed [`SurfaceEvent`]s on a bus; the
//! controller owns all mutation authority.

pub mod controller;
pub mod events;

pub use controller::SessionController;
pub use events::SurfaceEvent;
