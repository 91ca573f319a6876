//! Slot-grid construction and sample contents.
//!
//! The grid is iterated aisle-major, then bay ascending, then level ascending.
//! That order is part of the contract: it defines both the slot sequence and
//! the order in which pseudo-random draws are consumed, so every field draw
//! below happens in a fixed position of the sequence.

use chrono::{Days, NaiveDate};

use rackview_core::{PalletId, ProductId};
use rackview_model::{Dimensions, Extents, Pallet, PalletStatus, Position, Product, Slot};

use crate::rng::SeededRng;

/// Default seed for demo layouts.
pub const DEFAULT_SEED: u64 = 12345;

pub const AISLES: [&str; 4] = ["A", "B", "C", "D"];
pub const BAYS_PER_AISLE: u8 = 8;
pub const LEVELS_PER_BAY: u8 = 4;

pub const SUPPLIERS: [&str; 3] = ["Supplier A", "Supplier B", "Supplier C"];
pub const CATEGORIES: [&str; 5] = ["Electronics", "Clothing", "Food", "Tools", "Books"];

/// A draw above this threshold makes the slot occupied.
const OCCUPANCY_THRESHOLD: f64 = 0.3;

const SLOT_EXTENTS: Extents = Extents {
    width: 1.2,
    height: 1.2,
    depth: 1.2,
};

const MS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Produce the full slot grid with sample contents.
///
/// Total for any seed: generation never fails. Dates are relative to the
/// explicit `today` anchor, so the output is a pure function of
/// `(seed, today)`.
pub fn generate(seed: u64, today: NaiveDate) -> Vec<Slot> {
    let mut rng = SeededRng::new(seed);
    let capacity = AISLES.len() * usize::from(BAYS_PER_AISLE) * usize::from(LEVELS_PER_BAY);
    let mut slots = Vec::with_capacity(capacity);

    for (aisle_index, aisle) in AISLES.iter().enumerate() {
        for bay in 1..=BAYS_PER_AISLE {
            for level in 1..=LEVELS_PER_BAY {
                let position = Position {
                    x: aisle_index as f64 * 6.0 - 9.0,
                    y: f64::from(level) * 1.5 - 0.5,
                    z: f64::from(bay) * 2.0 - 8.0,
                };

                let occupied = rng.next_f64() > OCCUPANCY_THRESHOLD;
                let pallet = if occupied {
                    Some(generate_pallet(&mut rng, today))
                } else {
                    None
                };

                slots.push(Slot::new(*aisle, bay, level, position, SLOT_EXTENTS, pallet));
            }
        }
    }

    slots
}

/// Draws, in order: status, id, product code, quantity, entry date, expiry
/// date, product count, products, weight, supplier.
fn generate_pallet(rng: &mut SeededRng, today: NaiveDate) -> Pallet {
    let status = PalletStatus::ALL[rng.next_int(PalletStatus::ALL.len() as u64) as usize];
    let id = PalletId::new(format!("P{:X}", rng.next_int(1_000_000)));
    let product_code = format!("PROD-{:X}", rng.next_int(10_000));
    let quantity = rng.next_int(100) as u32 + 1;
    let entry_date = days_before(today, rng.next_int(30 * MS_PER_DAY));
    let expiry_date = days_after(today, rng.next_int(90 * MS_PER_DAY));

    let product_count = rng.next_int(3) + 1;
    let mut products = Vec::with_capacity(product_count as usize);
    for index in 0..product_count as usize {
        products.push(generate_product(rng, today, index));
    }

    let weight = (rng.next_int(500) + 100) as f64;
    let supplier = SUPPLIERS[rng.next_int(SUPPLIERS.len() as u64) as usize].to_string();

    Pallet {
        id,
        product_code,
        quantity,
        entry_date,
        expiry_date: Some(expiry_date),
        status,
        weight,
        dimensions: Dimensions::default(),
        supplier,
        notes: "Sample pallet notes".to_string(),
        products,
    }
}

/// Draws, in order: id, sku, quantity, unit price, category, batch,
/// manufacturing date, expiry date. Name/description derive from the index.
fn generate_product(rng: &mut SeededRng, today: NaiveDate, index: usize) -> Product {
    let id = ProductId::new(format!("PROD-{:X}", rng.next_int(1_000_000)));
    let name = format!("Product {}", index + 1);
    let sku = format!("SKU-{:X}", rng.next_int(1_000_000));
    let quantity = rng.next_int(50) as u32 + 1;
    let unit_price = (rng.next_int(100) + 10) as f64;
    let category = CATEGORIES[rng.next_int(CATEGORIES.len() as u64) as usize].to_string();
    let description = format!("Description for product {}", index + 1);
    let batch_number = format!("BATCH-{:X}", rng.next_int(10_000));
    let manufacturing_date = days_before(today, rng.next_int(60 * MS_PER_DAY));
    let expiry_date = days_after(today, rng.next_int(180 * MS_PER_DAY));

    Product {
        id,
        name,
        sku,
        quantity,
        unit_price,
        category,
        description,
        batch_number,
        manufacturing_date: Some(manufacturing_date),
        expiry_date: Some(expiry_date),
    }
}

// Offsets are drawn at millisecond magnitude; only whole days survive into
// the date.
fn days_before(today: NaiveDate, ms: u64) -> NaiveDate {
    today - Days::new(ms / MS_PER_DAY)
}

fn days_after(today: NaiveDate, ms: u64) -> NaiveDate {
    today + Days::new(ms / MS_PER_DAY)
}
