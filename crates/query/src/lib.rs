//! Pure derivations over the store's current snapshot.
//!
//! Nothing in this crate mutates state: filtering, grouping, statistics and
//! export rows are all computed fresh from a borrowed slot sequence, so they
//! are consistent with the store at the instant of the call.

pub mod export;
pub mod filter;
pub mod stats;

pub use export::{ExportRow, export_rows, write_csv};
pub use filter::{AisleFilter, FilterCriteria, StatusFilter, filter, group_by_aisle};
pub use stats::{WarehouseStats, stats};
