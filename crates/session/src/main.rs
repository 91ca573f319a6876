use anyhow::Context;
use chrono::Utc;

use rackview_events::{EventBus, InMemoryEventBus};
use rackview_generator::DEFAULT_SEED;
use rackview_model::{PalletDraft, PalletStatus, ProductDraft};
use rackview_session::{SessionController, SurfaceEvent};

/// Demo driver: generate a layout, run a few interactions through the event
/// bus, and dump the export as CSV on stdout.
fn main() -> anyhow::Result<()> {
    rackview_observability::init();

    let seed = std::env::var("RACKVIEW_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            tracing::info!("RACKVIEW_SEED not set; using the default seed");
            DEFAULT_SEED
        });

    let today = Utc::now().date_naive();
    let mut session = SessionController::from_seed(seed, today);
    tracing::info!(
        stats = %serde_json::to_string(&session.stats())?,
        "layout generated"
    );

    let bus: InMemoryEventBus<SurfaceEvent> = InMemoryEventBus::new();
    let subscription = bus.subscribe();

    let slot_id = session
        .store()
        .slots()
        .iter()
        .find(|s| s.is_empty())
        .map(|s| s.id().clone())
        .context("generated layout has no empty slot")?;

    bus.publish(SurfaceEvent::SlotClicked {
        slot_id: slot_id.clone(),
        occurred_at: Utc::now(),
    })
    .ok();
    session.drain_events(&subscription);

    let pallet_id = session.assign_pallet(PalletDraft {
        product_code: "PROD-DEMO".to_string(),
        quantity: 24,
        entry_date: today,
        expiry_date: None,
        status: PalletStatus::Normal,
        weight: Some(250.0),
        dimensions: None,
        supplier: Some("Supplier A".to_string()),
        notes: None,
    })?;
    tracing::info!(slot = %slot_id, pallet = %pallet_id, "demo pallet assigned");

    session.open_pallet(&slot_id)?;
    session.add_product(ProductDraft {
        name: "Demo Product".to_string(),
        sku: "SKU-DEMO".to_string(),
        quantity: 24,
        unit_price: 4.5,
        category: "Food".to_string(),
        description: String::new(),
        batch_number: String::new(),
        manufacturing_date: None,
        expiry_date: None,
    })?;
    tracing::info!(
        total_value = session.selected_pallet().map(|p| p.total_value()),
        "demo product added"
    );

    rackview_query::write_csv(session.store().slots(), std::io::stdout())
        .context("failed to write export CSV")?;
    Ok(())
}
