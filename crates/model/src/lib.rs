//! Warehouse data model: slots, pallets, products, and their patch types.
//!
//! This crate contains pure data and per-entity invariants. Mutation
//! sequencing (which slot may take which pallet, identity assignment) lives in
//! `rackview-store`; derivations over many slots live in `rackview-query`.

pub mod pallet;
pub mod product;
pub mod slot;
pub mod status;

pub use pallet::{Dimensions, Pallet, PalletDraft, PalletPatch};
pub use product::{Product, ProductDraft, ProductPatch};
pub use slot::{Extents, Position, Slot};
pub use status::PalletStatus;
