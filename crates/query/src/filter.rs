use core::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use rackview_core::DomainError;
use rackview_model::{PalletStatus, Slot};

/// Status criterion: everything, only empty slots, or one pallet status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Empty,
    Is(PalletStatus),
}

impl FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "empty" => Ok(StatusFilter::Empty),
            other => Ok(StatusFilter::Is(other.parse()?)),
        }
    }
}

/// Aisle criterion: everything or one aisle label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AisleFilter {
    #[default]
    All,
    Aisle(String),
}

impl FromStr for AisleFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(AisleFilter::All),
            other => Ok(AisleFilter::Aisle(other.to_string())),
        }
    }
}

/// Combined filter criteria; a slot matches when ALL criteria match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive containment in the location code or the pallet's
    /// product code. Empty matches everything.
    pub search: String,
    pub status: StatusFilter,
    pub aisle: AisleFilter,
}

impl FilterCriteria {
    pub fn matches(&self, slot: &Slot) -> bool {
        self.matches_search(slot) && self.matches_status(slot) && self.matches_aisle(slot)
    }

    fn matches_search(&self, slot: &Slot) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        if slot.location().to_lowercase().contains(&needle) {
            return true;
        }
        slot.pallet()
            .is_some_and(|p| p.product_code.to_lowercase().contains(&needle))
    }

    fn matches_status(&self, slot: &Slot) -> bool {
        match self.status {
            StatusFilter::All => true,
            StatusFilter::Empty => !slot.occupied(),
            StatusFilter::Is(status) => slot.pallet().is_some_and(|p| p.status == status),
        }
    }

    fn matches_aisle(&self, slot: &Slot) -> bool {
        match &self.aisle {
            AisleFilter::All => true,
            AisleFilter::Aisle(aisle) => slot.aisle() == aisle,
        }
    }
}

/// Keep the slots matching `criteria`, preserving original relative order.
///
/// The result is a subsequence of `slots`, not a re-sort.
pub fn filter(slots: &[Arc<Slot>], criteria: &FilterCriteria) -> Vec<Arc<Slot>> {
    slots
        .iter()
        .filter(|slot| criteria.matches(slot))
        .cloned()
        .collect()
}

/// Partition slots by aisle, in first-seen aisle order.
///
/// Within each aisle, slots are sorted by bay (lexicographic) then level
/// (ascending); the sort is stable, so equal keys keep their relative order.
pub fn group_by_aisle(slots: &[Arc<Slot>]) -> Vec<(String, Vec<Arc<Slot>>)> {
    let mut groups: Vec<(String, Vec<Arc<Slot>>)> = Vec::new();

    for slot in slots {
        match groups.iter_mut().find(|(aisle, _)| aisle == slot.aisle()) {
            Some((_, members)) => members.push(Arc::clone(slot)),
            None => groups.push((slot.aisle().to_string(), vec![Arc::clone(slot)])),
        }
    }

    for (_, members) in &mut groups {
        members.sort_by(|a, b| a.bay().cmp(b.bay()).then(a.level().cmp(&b.level())));
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use rackview_core::PalletId;
    use rackview_model::{Extents, Pallet, PalletDraft, Position};

    fn pallet(code: &str, status: PalletStatus) -> Pallet {
        PalletDraft {
            product_code: code.to_string(),
            quantity: 1,
            entry_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            expiry_date: None,
            status,
            weight: None,
            dimensions: None,
            supplier: None,
            notes: None,
        }
        .into_pallet(PalletId::new(format!("P-{code}")))
    }

    fn slot(aisle: &str, bay: u8, level: u8, pallet: Option<Pallet>) -> Arc<Slot> {
        Arc::new(Slot::new(
            aisle,
            bay,
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

    fn sample() -> Vec<Arc<Slot>> {
        vec![
            slot("A", 1, 1, Some(pallet("PROD-AA", PalletStatus::Normal))),
            slot("A", 1, 2, None),
            slot("B", 1, 1, Some(pallet("PROD-BB", PalletStatus::Expired))),
            slot("B", 2, 1, Some(pallet("PROD-AB", PalletStatus::Expiring))),
        ]
    }

    #[test]
    fn empty_criteria_match_everything() {
        let slots = sample();
        let out = filter(&slots, &FilterCriteria::default());
        assert_eq!(out.len(), slots.len());
    }

    #[test]
    fn search_matches_location_case_insensitively() {
        let slots = sample();
        let criteria = FilterCriteria {
            search: "a01".to_string(),
            ..FilterCriteria::default()
        };
        let out = filter(&slots, &criteria);
        let locations: Vec<&str> = out.iter().map(|s| s.location()).collect();
        assert_eq!(locations, vec!["A011", "A012"]);
    }

    #[test]
    fn search_matches_product_code() {
        let slots = sample();
        let criteria = FilterCriteria {
            search: "prod-a".to_string(),
            ..FilterCriteria::default()
        };
        let out = filter(&slots, &criteria);
        // "prod-a" matches product codes PROD-AA and PROD-AB only.
        let locations: Vec<&str> = out.iter().map(|s| s.location()).collect();
        assert_eq!(locations, vec!["A011", "B021"]);
    }

    #[test]
    fn status_filter_selects_empty_slots() {
        let slots = sample();
        let criteria = FilterCriteria {
            status: StatusFilter::Empty,
            ..FilterCriteria::default()
        };
        let out = filter(&slots, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].location(), "A012");
    }

    #[test]
    fn status_filter_selects_one_status() {
        let slots = sample();
        let criteria = FilterCriteria {
            status: StatusFilter::Is(PalletStatus::Expired),
            ..FilterCriteria::default()
        };
        let out = filter(&slots, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].location(), "B011");
    }

    #[test]
    fn aisle_filter_selects_one_aisle() {
        let slots = sample();
        let criteria = FilterCriteria {
            aisle: AisleFilter::Aisle("B".to_string()),
            ..FilterCriteria::default()
        };
        let out = filter(&slots, &criteria);
        assert!(out.iter().all(|s| s.aisle() == "B"));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn criteria_combine_conjunctively() {
        let slots = sample();
        let criteria = FilterCriteria {
            search: "prod".to_string(),
            status: StatusFilter::Is(PalletStatus::Expiring),
            aisle: AisleFilter::Aisle("B".to_string()),
        };
        let out = filter(&slots, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].location(), "B021");
    }

    #[test]
    fn status_filter_parses_the_form_values() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "empty".parse::<StatusFilter>().unwrap(),
            StatusFilter::Empty
        );
        assert_eq!(
            "reserved".parse::<StatusFilter>().unwrap(),
            StatusFilter::Is(PalletStatus::Reserved)
        );
        assert!("bogus".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn grouping_keeps_first_seen_aisle_order_and_sorts_members() {
        // Deliberately unordered input.
        let slots = vec![
            slot("B", 2, 2, None),
            slot("A", 1, 2, None),
            slot("B", 1, 1, None),
            slot("A", 1, 1, None),
            slot("B", 2, 1, None),
        ];

        let groups = group_by_aisle(&slots);
        let aisles: Vec<&str> = groups.iter().map(|(a, _)| a.as_str()).collect();
        assert_eq!(aisles, vec!["B", "A"]);

        let b_locations: Vec<&str> = groups[0].1.iter().map(|s| s.location()).collect();
        assert_eq!(b_locations, vec!["B011", "B021", "B022"]);
        let a_locations: Vec<&str> = groups[1].1.iter().map(|s| s.location()).collect();
        assert_eq!(a_locations, vec!["A011", "A012"]);
    }

    #[test]
    fn generated_layout_filters_to_a_subsequence() {
        use rackview_generator::{DEFAULT_SEED, generate};

        let slots: Vec<Arc<Slot>> = generate(DEFAULT_SEED, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .into_iter()
            .map(Arc::new)
            .collect();
        let criteria = FilterCriteria {
            status: StatusFilter::Is(PalletStatus::Normal),
            ..FilterCriteria::default()
        };

        let out = filter(&slots, &criteria);
        // Every kept slot satisfies the predicate…
        assert!(out
            .iter()
            .all(|s| s.pallet().is_some_and(|p| p.status == PalletStatus::Normal)));
        // …and the kept sequence appears in original order.
        let mut cursor = slots.iter();
        for kept in &out {
            assert!(cursor.any(|s| Arc::ptr_eq(s, kept)));
        }
    }

    fn arb_status() -> impl Strategy<Value = Option<PalletStatus>> {
        prop_oneof![
            Just(None),
            Just(Some(PalletStatus::Normal)),
            Just(Some(PalletStatus::Expiring)),
            Just(Some(PalletStatus::Expired)),
            Just(Some(PalletStatus::Processing)),
            Just(Some(PalletStatus::Reserved)),
        ]
    }

    proptest! {
        /// filter() returns exactly the matching elements, in order.
        #[test]
        fn filter_is_sound_complete_and_order_preserving(
            statuses in proptest::collection::vec(arb_status(), 0..64),
            which in arb_status(),
        ) {
            let slots: Vec<Arc<Slot>> = statuses
                .iter()
                .enumerate()
                .map(|(i, status)| {
                    let bay = (i / 4 % 8) as u8 + 1;
                    let level = (i % 4) as u8 + 1;
                    let aisle = ["A", "B", "C", "D"][i / 32 % 4];
                    slot(aisle, bay, level, status.map(|s| pallet("PROD-T", s)))
                })
                .collect();

            let criteria = FilterCriteria {
                status: match which {
                    None => StatusFilter::Empty,
                    Some(s) => StatusFilter::Is(s),
                },
                ..FilterCriteria::default()
            };

            let out = filter(&slots, &criteria);

            // Soundness + completeness against the predicate.
            let expected: Vec<&Arc<Slot>> =
                slots.iter().filter(|s| criteria.matches(s)).collect();
            prop_assert_eq!(out.len(), expected.len());
            for (got, want) in out.iter().zip(expected) {
                prop_assert!(Arc::ptr_eq(got, want));
            }
        }
    }
}
