use std::sync::Arc;

use chrono::NaiveDate;

use rackview_core::{DomainError, DomainResult, PalletId, ProductId, SlotId};
use rackview_events::Subscription;
use rackview_generator::generate;
use rackview_model::{Pallet, PalletDraft, PalletPatch, ProductDraft, ProductPatch, Slot};
use rackview_query::{ExportRow, FilterCriteria, WarehouseStats, export_rows, filter, stats};
use rackview_store::WarehouseStore;

use crate::events::SurfaceEvent;

/// One interactive user session over a warehouse store.
///
/// Tracks at most one selected slot, plus the pallet currently open for
/// product editing and the pallet targeted by an edit form. All references
/// handed out (`selected_slot`, `selected_pallet`, …) are re-derived from the
/// store on every call, so after a successful mutation observers always see
/// the post-mutation state — never a stale pre-mutation pallet.
#[derive(Debug)]
pub struct SessionController {
    store: WarehouseStore,
    criteria: FilterCriteria,
    selected: Option<SlotId>,
    /// Pallet whose product list is open for editing.
    selected_pallet: Option<PalletId>,
    /// Pallet targeted by an edit-requested surface event.
    pallet_edit: Option<PalletId>,
}

impl SessionController {
    pub fn new(store: WarehouseStore) -> Self {
        Self {
            store,
            criteria: FilterCriteria::default(),
            selected: None,
            selected_pallet: None,
            pallet_edit: None,
        }
    }

    /// Start a session over a freshly generated layout.
    pub fn from_seed(seed: u64, today: NaiveDate) -> Self {
        Self::new(WarehouseStore::new(generate(seed, today)))
    }

    pub fn store(&self) -> &WarehouseStore {
        &self.store
    }

    // --- selection -------------------------------------------------------

    /// Handle a slot click: selecting the already-selected slot toggles the
    /// selection off, selecting a different slot replaces it. A click carrying
    /// an unknown id is ignored.
    pub fn select_slot(&mut self, slot_id: &SlotId) {
        if self.store.get(slot_id).is_none() {
            tracing::warn!(slot = %slot_id, "click on unknown slot ignored");
            return;
        }
        if self.selected.as_ref() == Some(slot_id) {
            self.selected = None;
        } else {
            self.selected = Some(slot_id.clone());
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected_slot_id(&self) -> Option<&SlotId> {
        self.selected.as_ref()
    }

    /// The selected slot, read from the current store snapshot.
    pub fn selected_slot(&self) -> Option<&Arc<Slot>> {
        self.selected.as_ref().and_then(|id| self.store.get(id))
    }

    // --- pallet detail / product editing context -------------------------

    /// Open the pallet stored in `slot_id` for product editing. Also selects
    /// the slot, mirroring a click on the pallet itself.
    pub fn open_pallet(&mut self, slot_id: &SlotId) -> DomainResult<()> {
        let slot = self
            .store
            .get(slot_id)
            .ok_or_else(|| DomainError::not_found(format!("slot {slot_id}")))?;
        self.selected = Some(slot_id.clone());

        let pallet = slot
            .pallet()
            .ok_or_else(|| DomainError::invalid_state(format!("slot {slot_id} is empty")))?;
        self.selected_pallet = Some(pallet.id.clone());
        Ok(())
    }

    pub fn close_pallet(&mut self) {
        self.selected_pallet = None;
    }

    /// The pallet currently open for product editing, re-derived from the
    /// store so it always reflects the latest mutation.
    pub fn selected_pallet(&self) -> Option<&Pallet> {
        self.selected_pallet
            .as_ref()
            .and_then(|id| self.store.slot_with_pallet(id))
            .and_then(|slot| slot.pallet())
    }

    /// Record an edit-requested intent after checking the pallet exists.
    pub fn request_pallet_edit(&mut self, pallet_id: &PalletId) -> DomainResult<()> {
        if self.store.slot_with_pallet(pallet_id).is_none() {
            return Err(DomainError::not_found(format!("pallet {pallet_id}")));
        }
        self.pallet_edit = Some(pallet_id.clone());
        Ok(())
    }

    /// The pallet targeted by the open edit form, if any.
    pub fn pallet_being_edited(&self) -> Option<&Pallet> {
        self.pallet_edit
            .as_ref()
            .and_then(|id| self.store.slot_with_pallet(id))
            .and_then(|slot| slot.pallet())
    }

    // --- mutation entry points -------------------------------------------

    /// Assign a new pallet to the currently selected slot.
    pub fn assign_pallet(&mut self, draft: PalletDraft) -> DomainResult<PalletId> {
        let slot_id = self
            .selected
            .clone()
            .ok_or_else(|| DomainError::invalid_state("no slot selected"))?;
        self.store.assign_pallet(&slot_id, draft)
    }

    /// Merge a patch into the pallet with the given id. Closes the edit form
    /// when it targeted this pallet.
    pub fn update_pallet(&mut self, pallet_id: &PalletId, patch: &PalletPatch) -> DomainResult<()> {
        self.store.update_pallet(pallet_id, patch)?;
        if self.pallet_edit.as_ref() == Some(pallet_id) {
            self.pallet_edit = None;
        }
        Ok(())
    }

    /// Delete the pallet stored in `slot_id` (idempotent). The selection and
    /// the pallet detail are closed either way, mirroring the surface flow
    /// where deletion dismisses both. Returns whether a pallet was removed.
    pub fn delete_pallet(&mut self, slot_id: &SlotId) -> bool {
        let removed = self.store.delete_pallet(slot_id);

        if let Some(pallet) = &removed {
            if self.selected_pallet.as_ref() == Some(&pallet.id) {
                self.selected_pallet = None;
            }
            if self.pallet_edit.as_ref() == Some(&pallet.id) {
                self.pallet_edit = None;
            }
        }
        self.selected = None;

        removed.is_some()
    }

    /// Delete the pallet in the selected slot; a no-op without a selection.
    pub fn delete_selected_pallet(&mut self) -> bool {
        match self.selected.clone() {
            Some(slot_id) => self.delete_pallet(&slot_id),
            None => false,
        }
    }

    /// Append a product to the pallet open for product editing.
    pub fn add_product(&mut self, draft: ProductDraft) -> DomainResult<ProductId> {
        let pallet_id = self.require_selected_pallet()?;
        self.store.add_product(&pallet_id, draft)
    }

    /// Update a product inside the pallet open for product editing.
    pub fn update_product(
        &mut self,
        product_id: &ProductId,
        patch: &ProductPatch,
    ) -> DomainResult<()> {
        let pallet_id = self.require_selected_pallet()?;
        self.store.update_product(&pallet_id, product_id, patch)
    }

    /// Delete a product from the pallet open for product editing; idempotent
    /// on a missing product id.
    pub fn delete_product(&mut self, product_id: &ProductId) -> DomainResult<bool> {
        let pallet_id = self.require_selected_pallet()?;
        self.store.delete_product(&pallet_id, product_id)
    }

    fn require_selected_pallet(&self) -> DomainResult<PalletId> {
        self.selected_pallet
            .clone()
            .ok_or_else(|| DomainError::invalid_state("no pallet selected for product editing"))
    }

    // --- queries ----------------------------------------------------------

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// The slot sequence under the current filter criteria.
    pub fn filtered_slots(&self) -> Vec<Arc<Slot>> {
        filter(self.store.slots(), &self.criteria)
    }

    pub fn stats(&self) -> WarehouseStats {
        stats(self.store.slots())
    }

    /// Read-only tabular view of the whole store.
    pub fn export_rows(&self) -> Vec<ExportRow> {
        export_rows(self.store.slots())
    }

    // --- import -----------------------------------------------------------

    /// Replace the entire store with a freshly generated layout and clear the
    /// selection. "Import" is reset-and-reseed; there is no file to read.
    pub fn import(&mut self, seed: u64, today: NaiveDate) {
        self.store.replace_all(generate(seed, today));
        self.selected = None;
        self.selected_pallet = None;
        self.pallet_edit = None;
        tracing::info!(seed, "store replaced from generator");
    }

    // --- surface events ---------------------------------------------------

    /// Route one surface intent to the matching operation.
    pub fn handle_event(&mut self, event: &SurfaceEvent) -> DomainResult<()> {
        match event {
            SurfaceEvent::SlotClicked { slot_id, .. } => {
                self.select_slot(slot_id);
                Ok(())
            }
            SurfaceEvent::PalletOpened { slot_id, .. } => self.open_pallet(slot_id),
            SurfaceEvent::EditPalletRequested { pallet_id, .. } => {
                self.request_pallet_edit(pallet_id)
            }
            SurfaceEvent::PalletDeleteConfirmed { slot_id, .. } => {
                self.delete_pallet(slot_id);
                Ok(())
            }
            SurfaceEvent::ProductDeleteConfirmed {
                pallet_id,
                product_id,
                ..
            } => self.store.delete_product(pallet_id, product_id).map(|_| ()),
        }
    }

    /// Drain and handle every pending event on the subscription. Rejected
    /// events are logged and skipped; the interaction loop never dies.
    pub fn drain_events(&mut self, subscription: &Subscription<SurfaceEvent>) -> usize {
        use rackview_events::Event;

        let mut handled = 0;
        while let Ok(event) = subscription.try_recv() {
            if let Err(err) = self.handle_event(&event) {
                tracing::warn!(event = event.event_type(), %err, "surface event rejected");
            }
            handled += 1;
        }
        handled
    }
}
