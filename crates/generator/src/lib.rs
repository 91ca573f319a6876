//! Deterministic warehouse layout generation.
//!
//! Given a seed (and an anchor date for relative dates), [`generate`] produces
//! the exact same ordered slot sequence on every invocation, on every
//! platform. Tests and demo data rely on this.

pub mod layout;
pub mod rng;

pub use layout::{
    AISLES, BAYS_PER_AISLE, CATEGORIES, DEFAULT_SEED, LEVELS_PER_BAY, SUPPLIERS, generate,
};
pub use rng::SeededRng;
