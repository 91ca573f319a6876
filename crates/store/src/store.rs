use std::sync::Arc;

use rackview_core::{DomainError, DomainResult, PalletId, ProductId, SlotId};
use rackview_model::{Pallet, PalletDraft, PalletPatch, ProductDraft, ProductPatch, Slot};

/// Ordered collection of slots, replaced copy-on-write at the slot level.
///
/// Slots are held behind `Arc`: a mutation rebuilds only the affected slot's
/// `Arc`, so observers can detect change per slot via pointer identity
/// (`Arc::ptr_eq`) instead of deep comparison. A failed mutation drops its
/// working copy and leaves the prior snapshot fully intact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WarehouseStore {
    slots: Vec<Arc<Slot>>,
}

impl WarehouseStore {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self {
            slots: slots.into_iter().map(Arc::new).collect(),
        }
    }

    /// Read-only view of the ordered slot sequence.
    pub fn slots(&self) -> &[Arc<Slot>] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Bulk reset, used by import/regeneration.
    pub fn replace_all(&mut self, slots: Vec<Slot>) {
        self.slots = slots.into_iter().map(Arc::new).collect();
    }

    pub fn get(&self, id: &SlotId) -> Option<&Arc<Slot>> {
        self.slots.iter().find(|slot| slot.id() == id)
    }

    /// The slot currently holding the pallet with the given id, if any.
    pub fn slot_with_pallet(&self, pallet_id: &PalletId) -> Option<&Arc<Slot>> {
        self.slots
            .iter()
            .find(|slot| slot.pallet().is_some_and(|p| &p.id == pallet_id))
    }

    fn index_of_slot(&self, id: &SlotId) -> Option<usize> {
        self.slots.iter().position(|slot| slot.id() == id)
    }

    fn index_of_pallet(&self, pallet_id: &PalletId) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.pallet().is_some_and(|p| &p.id == pallet_id))
    }

    /// Apply `f` to a working copy of one slot; publish the copy only on
    /// success. This is the single write path for all mutations below.
    fn update_slot<T>(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut Slot) -> DomainResult<T>,
    ) -> DomainResult<T> {
        let mut slot = Slot::clone(&self.slots[index]);
        let out = f(&mut slot)?;
        self.slots[index] = Arc::new(slot);
        Ok(out)
    }

    /// Assign a new pallet to an empty slot.
    ///
    /// The pallet id is assigned here and is not user-suppliable; unset draft
    /// fields take canonical defaults. Fails with `NotFound` for an unknown
    /// slot, `Validation` for a bad draft, `InvalidState` for an occupied
    /// slot.
    pub fn assign_pallet(
        &mut self,
        slot_id: &SlotId,
        draft: PalletDraft,
    ) -> DomainResult<PalletId> {
        let index = self
            .index_of_slot(slot_id)
            .ok_or_else(|| DomainError::not_found(format!("slot {slot_id}")))?;
        draft.validate()?;

        let pallet_id = PalletId::random();
        let pallet = draft.into_pallet(pallet_id.clone());
        self.update_slot(index, |slot| slot.place(pallet))?;

        tracing::debug!(slot = %slot_id, pallet = %pallet_id, "pallet assigned");
        Ok(pallet_id)
    }

    /// Merge a patch into the pallet with the given id, wherever it is stored.
    pub fn update_pallet(
        &mut self,
        pallet_id: &PalletId,
        patch: &PalletPatch,
    ) -> DomainResult<()> {
        let index = self
            .index_of_pallet(pallet_id)
            .ok_or_else(|| DomainError::not_found(format!("pallet {pallet_id}")))?;

        self.update_slot(index, |slot| {
            let Some(pallet) = slot.pallet_mut() else {
                return Err(DomainError::not_found(format!("pallet {pallet_id}")));
            };
            patch.apply(pallet);
            Ok(())
        })?;

        tracing::debug!(pallet = %pallet_id, "pallet updated");
        Ok(())
    }

    /// Clear the pallet from a slot, returning it. Idempotent: deleting from
    /// an empty or unknown slot is a benign no-op (`None`), so repeated
    /// user-triggered deletes never fail.
    pub fn delete_pallet(&mut self, slot_id: &SlotId) -> Option<Pallet> {
        let Some(index) = self.index_of_slot(slot_id) else {
            tracing::warn!(slot = %slot_id, "delete requested for unknown slot; ignoring");
            return None;
        };
        if self.slots[index].is_empty() {
            return None;
        }

        let mut slot = Slot::clone(&self.slots[index]);
        let removed = slot.clear();
        self.slots[index] = Arc::new(slot);

        tracing::debug!(slot = %slot_id, "pallet deleted");
        removed
    }

    /// Append a product to the pallet with the given id, assigning a fresh
    /// product id.
    pub fn add_product(
        &mut self,
        pallet_id: &PalletId,
        draft: ProductDraft,
    ) -> DomainResult<ProductId> {
        let index = self
            .index_of_pallet(pallet_id)
            .ok_or_else(|| DomainError::not_found(format!("pallet {pallet_id}")))?;
        draft.validate()?;

        let product_id = ProductId::random();
        let product = draft.into_product(product_id.clone());
        self.update_slot(index, |slot| {
            let Some(pallet) = slot.pallet_mut() else {
                return Err(DomainError::not_found(format!("pallet {pallet_id}")));
            };
            pallet.add_product(product);
            Ok(())
        })?;

        tracing::debug!(pallet = %pallet_id, product = %product_id, "product added");
        Ok(product_id)
    }

    /// Merge a patch into one product of the pallet; list order is preserved.
    pub fn update_product(
        &mut self,
        pallet_id: &PalletId,
        product_id: &ProductId,
        patch: &ProductPatch,
    ) -> DomainResult<()> {
        let index = self
            .index_of_pallet(pallet_id)
            .ok_or_else(|| DomainError::not_found(format!("pallet {pallet_id}")))?;

        self.update_slot(index, |slot| {
            let Some(pallet) = slot.pallet_mut() else {
                return Err(DomainError::not_found(format!("pallet {pallet_id}")));
            };
            pallet.update_product(product_id, patch)
        })?;

        tracing::debug!(pallet = %pallet_id, product = %product_id, "product updated");
        Ok(())
    }

    /// Remove a product from the pallet. Idempotent on a missing product id;
    /// a missing pallet is still an error (there is nothing to edit).
    pub fn delete_product(
        &mut self,
        pallet_id: &PalletId,
        product_id: &ProductId,
    ) -> DomainResult<bool> {
        let index = self
            .index_of_pallet(pallet_id)
            .ok_or_else(|| DomainError::not_found(format!("pallet {pallet_id}")))?;

        let removed = self.update_slot(index, |slot| {
            let Some(pallet) = slot.pallet_mut() else {
                return Err(DomainError::not_found(format!("pallet {pallet_id}")));
            };
            Ok(pallet.remove_product(product_id))
        })?;

        if removed {
            tracing::debug!(pallet = %pallet_id, product = %product_id, "product deleted");
        } else {
            tracing::warn!(pallet = %pallet_id, product = %product_id, "product already gone");
        }
        Ok(removed)
    }
}
