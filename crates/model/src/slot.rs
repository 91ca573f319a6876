use serde::{Deserialize, Serialize};

use rackview_core::{DomainError, DomainResult, Entity, SlotId};

use crate::pallet::Pallet;

/// Slot center position in the warehouse coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Slot bounding-box extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extents {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// A fixed spatial storage cell.
///
/// Slots are created once by the generator and never destroyed or relocated;
/// only the occupancy state mutates. `occupied` and `pallet` are kept in
/// lockstep by [`Slot::place`] and [`Slot::clear`] — the only mutators — so
/// the two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    id: SlotId,
    aisle: String,
    bay: String,
    level: u8,
    position: Position,
    extents: Extents,
    occupied: bool,
    pallet: Option<Pallet>,
}

impl Slot {
    pub fn new(
        aisle: impl Into<String>,
        bay: u8,
        level: u8,
        position: Position,
        extents: Extents,
        pallet: Option<Pallet>,
    ) -> Self {
        let aisle = aisle.into();
        Self {
            id: SlotId::from_parts(&aisle, bay, level),
            aisle,
            bay: format!("{bay:02}"),
            level,
            occupied: pallet.is_some(),
            pallet,
            position,
            extents,
        }
    }

    pub fn id(&self) -> &SlotId {
        &self.id
    }

    /// Location code; same string as the id.
    pub fn location(&self) -> &str {
        self.id.as_str()
    }

    pub fn aisle(&self) -> &str {
        &self.aisle
    }

    /// Zero-padded bay label ("01".."08").
    pub fn bay(&self) -> &str {
        &self.bay
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn extents(&self) -> Extents {
        self.extents
    }

    pub fn occupied(&self) -> bool {
        self.occupied
    }

    pub fn is_empty(&self) -> bool {
        !self.occupied
    }

    pub fn pallet(&self) -> Option<&Pallet> {
        self.pallet.as_ref()
    }

    pub fn pallet_mut(&mut self) -> Option<&mut Pallet> {
        self.pallet.as_mut()
    }

    /// Transition Empty → Occupied. Fails if the slot already holds a pallet.
    pub fn place(&mut self, pallet: Pallet) -> DomainResult<()> {
        if self.occupied {
            return Err(DomainError::invalid_state(format!(
                "slot {} is already occupied",
                self.id
            )));
        }
        self.occupied = true;
        self.pallet = Some(pallet);
        Ok(())
    }

    /// Transition Occupied → Empty, returning the removed pallet. Clearing an
    /// already-empty slot is a no-op.
    pub fn clear(&mut self) -> Option<Pallet> {
        self.occupied = false;
        self.pallet.take()
    }
}

impl Entity for Slot {
    type Id = SlotId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
