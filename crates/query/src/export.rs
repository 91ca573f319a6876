use std::io;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use rackview_model::Slot;

/// One export row per slot.
///
/// Empty slots leave the product/status/date columns blank and quantity at 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportRow {
    pub location: String,
    pub aisle: String,
    pub bay: String,
    pub level: u8,
    pub occupied: bool,
    pub product_code: String,
    pub quantity: u32,
    pub status: String,
    pub entry_date: String,
    pub expiry_date: String,
}

fn date_column(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

impl ExportRow {
    pub fn from_slot(slot: &Slot) -> Self {
        let pallet = slot.pallet();
        Self {
            location: slot.location().to_string(),
            aisle: slot.aisle().to_string(),
            bay: slot.bay().to_string(),
            level: slot.level(),
            occupied: slot.occupied(),
            product_code: pallet.map(|p| p.product_code.clone()).unwrap_or_default(),
            quantity: pallet.map(|p| p.quantity).unwrap_or(0),
            status: pallet.map(|p| p.status.to_string()).unwrap_or_default(),
            entry_date: pallet
                .map(|p| p.entry_date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            expiry_date: pallet
                .map(|p| date_column(p.expiry_date))
                .unwrap_or_default(),
        }
    }
}

/// Flatten the slot sequence into export rows, one per slot, in store order.
/// Read-only: the store is never touched.
pub fn export_rows(slots: &[Arc<Slot>]) -> Vec<ExportRow> {
    slots.iter().map(|slot| ExportRow::from_slot(slot)).collect()
}

/// Serialize the export rows as CSV (with the header row) into `writer`.
pub fn write_csv<W: io::Write>(slots: &[Arc<Slot>], writer: W) -> csv::Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    for row in export_rows(slots) {
        out.serialize(row)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rackview_core::PalletId;
    use rackview_model::{Extents, Pallet, PalletDraft, PalletStatus, Position};

    fn pallet() -> Pallet {
        PalletDraft {
            product_code: "PROD-7F".to_string(),
            quantity: 12,
            entry_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2024, 3, 4),
            status: PalletStatus::Expiring,
            weight: None,
            dimensions: None,
            supplier: None,
            notes: None,
        }
        .into_pallet(PalletId::new("P1"))
    }

    fn slot(level: u8, pallet: Option<Pallet>) -> Arc<Slot> {
        Arc::new(Slot::new(
            "C",
            3,
            level,
            Position {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
            Extents {
                width: 1.2,
                height: 1.2,
                depth: 1.2,
            },
            pallet,
        ))
    }

    #[test]
    fn occupied_slot_row_carries_pallet_columns() {
        let rows = export_rows(&[slot(1, Some(pallet()))]);
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row.location, "C031");
        assert_eq!(row.aisle, "C");
        assert_eq!(row.bay, "03");
        assert_eq!(row.level, 1);
        assert!(row.occupied);
        assert_eq!(row.product_code, "PROD-7F");
        assert_eq!(row.quantity, 12);
        assert_eq!(row.status, "expiring");
        assert_eq!(row.entry_date, "2024-01-02");
        assert_eq!(row.expiry_date, "2024-03-04");
    }

    #[test]
    fn empty_slot_row_leaves_pallet_columns_blank() {
        let rows = export_rows(&[slot(2, None)]);
        let row = &rows[0];

        assert!(!row.occupied);
        assert_eq!(row.product_code, "");
        assert_eq!(row.quantity, 0);
        assert_eq!(row.status, "");
        assert_eq!(row.entry_date, "");
        assert_eq!(row.expiry_date, "");
    }

    #[test]
    fn csv_output_has_expected_headers_and_one_line_per_slot() {
        let slots = vec![slot(1, Some(pallet())), slot(2, None)];
        let mut buf = Vec::new();
        write_csv(&slots, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Location,Aisle,Bay,Level,Occupied,ProductCode,Quantity,Status,EntryDate,ExpiryDate"
        );
        assert_eq!(
            lines.next().unwrap(),
            "C031,C,03,1,true,PROD-7F,12,expiring,2024-01-02,2024-03-04"
        );
        assert_eq!(lines.next().unwrap(), "C032,C,03,2,false,,0,,,");
        assert!(lines.next().is_none());
    }

    #[test]
    fn export_covers_every_generated_slot() {
        use rackview_generator::{DEFAULT_SEED, generate};

        let slots: Vec<Arc<Slot>> =
            generate(DEFAULT_SEED, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
                .into_iter()
                .map(Arc::new)
                .collect();

        let rows = export_rows(&slots);
        assert_eq!(rows.len(), 128);
        for (slot, row) in slots.iter().zip(&rows) {
            assert_eq!(row.location, slot.location());
            assert_eq!(row.occupied, slot.occupied());
        }
    }
}
