use std::sync::Arc;

use serde::{Deserialize, Serialize};

use rackview_model::{PalletStatus, Slot};

/// Warehouse-wide aggregate counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseStats {
    pub total: usize,
    pub occupied: usize,
    pub empty: usize,
    pub expiring: usize,
    pub expired: usize,
}

/// Count slots by occupancy and by the two attention-worthy statuses.
///
/// Always recomputed from the given snapshot; `empty` is defined as
/// `total - occupied`.
pub fn stats(slots: &[Arc<Slot>]) -> WarehouseStats {
    let mut out = WarehouseStats {
        total: slots.len(),
        ..WarehouseStats::default()
    };

    for slot in slots {
        if let Some(pallet) = slot.pallet() {
            out.occupied += 1;
            match pallet.status {
                PalletStatus::Expiring => out.expiring += 1,
                PalletStatus::Expired => out.expired += 1,
                _ => {}
            }
        }
    }

    out.empty = out.total - out.occupied;
    out
}
