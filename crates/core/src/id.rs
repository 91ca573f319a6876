//! Strongly-typed identifiers used across the domain.
//!
//! Slot ids are location codes derived from the grid position (`A011` = aisle
//! A, bay 01, level 1) and never change. Pallet and product ids are short
//! random alphanumeric tokens assigned at creation time and never reused;
//! uniqueness within a single store instance is the only required property.

use core::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a storage slot (its location code).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(String);

/// Identifier of a pallet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PalletId(String);

/// Identifier of a product line inside a pallet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

const TOKEN_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const TOKEN_LEN: usize = 6;

/// Draw a short uppercase alphanumeric token from the thread RNG.
///
/// This entropy source is deliberately distinct from the seeded layout
/// generator: generated layouts are reproducible, runtime-created ids are not.
fn random_token() -> String {
    let mut rng = rand::thread_rng();
    (0..TOKEN_LEN)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

fn validate_token(s: &str, name: &str) -> Result<(), DomainError> {
    if s.is_empty() {
        return Err(DomainError::validation(format!("{name} cannot be empty")));
    }
    if !s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(DomainError::validation(format!(
            "{name} must be alphanumeric: {s:?}"
        )));
    }
    Ok(())
}

macro_rules! impl_token_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap an existing identifier token.
            ///
            /// Prefer passing ids explicitly in tests for determinism.
            pub fn new(token: impl Into<String>) -> Self {
                Self(token.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                validate_token(s, $name)?;
                Ok(Self(s.to_string()))
            }
        }
    };
}

impl_token_newtype!(SlotId, "SlotId");
impl_token_newtype!(PalletId, "PalletId");
impl_token_newtype!(ProductId, "ProductId");

impl SlotId {
    /// Build the location code for a grid position: aisle label, zero-padded
    /// two-digit bay, level digit (`A011`).
    pub fn from_parts(aisle: &str, bay: u8, level: u8) -> Self {
        Self(format!("{aisle}{bay:02}{level}"))
    }
}

impl PalletId {
    /// Assign a fresh pallet id (`P` + 6 random alphanumeric characters).
    pub fn random() -> Self {
        Self(format!("P{}", random_token()))
    }
}

impl ProductId {
    /// Assign a fresh product id (`PROD-` + 6 random alphanumeric characters).
    pub fn random() -> Self {
        Self(format!("PROD-{}", random_token()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_id_from_parts_pads_bay() {
        assert_eq!(SlotId::from_parts("A", 1, 1).as_str(), "A011");
        assert_eq!(SlotId::from_parts("D", 8, 4).as_str(), "D084");
    }

    #[test]
    fn random_pallet_ids_are_prefixed_and_distinct() {
        let ids: std::collections::HashSet<String> = (0..256)
            .map(|_| PalletId::random().as_str().to_string())
            .collect();
        assert!(ids.iter().all(|id| id.starts_with('P') && id.len() == 7));
        // 36^6 tokens; 256 draws colliding would indicate a broken RNG.
        assert_eq!(ids.len(), 256);
    }

    #[test]
    fn random_product_ids_are_prefixed() {
        let id = ProductId::random();
        assert!(id.as_str().starts_with("PROD-"));
        assert_eq!(id.as_str().len(), "PROD-".len() + 6);
    }

    #[test]
    fn from_str_rejects_empty_and_non_alphanumeric() {
        assert!(matches!(
            "".parse::<PalletId>(),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            "P 123".parse::<PalletId>(),
            Err(DomainError::Validation(_))
        ));
        assert!("PROD-1A2B3C".parse::<ProductId>().is_ok());
    }
}
