use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rackview_core::{PalletId, ProductId, SlotId};
use rackview_events::Event;

/// Typed intents emitted by the interaction surface.
///
/// The surface never mutates state itself: a deeply nested rendering element
/// that wants an edit publishes `EditPalletRequested` with the pallet id, and
/// the controller — the subscriber — decides what happens. Deletion events are
/// published only after the surface's own confirm step, so the core sees a
/// single confirmed intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceEvent {
    SlotClicked {
        slot_id: SlotId,
        occurred_at: DateTime<Utc>,
    },
    PalletOpened {
        slot_id: SlotId,
        occurred_at: DateTime<Utc>,
    },
    EditPalletRequested {
        pallet_id: PalletId,
        occurred_at: DateTime<Utc>,
    },
    PalletDeleteConfirmed {
        slot_id: SlotId,
        occurred_at: DateTime<Utc>,
    },
    ProductDeleteConfirmed {
        pallet_id: PalletId,
        product_id: ProductId,
        occurred_at: DateTime<Utc>,
    },
}

impl Event for SurfaceEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SurfaceEvent::SlotClicked { .. } => "surface.slot.clicked",
            SurfaceEvent::PalletOpened { .. } => "surface.pallet.opened",
            SurfaceEvent::EditPalletRequested { .. } => "surface.pallet.edit_requested",
            SurfaceEvent::PalletDeleteConfirmed { .. } => "surface.pallet.delete_confirmed",
            SurfaceEvent::ProductDeleteConfirmed { .. } => "surface.product.delete_confirmed",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            SurfaceEvent::SlotClicked { occurred_at, .. }
            | SurfaceEvent::PalletOpened { occurred_at, .. }
            | SurfaceEvent::EditPalletRequested { occurred_at, .. }
            | SurfaceEvent::PalletDeleteConfirmed { occurred_at, .. }
            | SurfaceEvent::ProductDeleteConfirmed { occurred_at, .. } => *occurred_at,
        }
    }
}
