use core::str::FromStr;

use serde::{Deserialize, Serialize};

use rackview_core::DomainError;

/// Pallet lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PalletStatus {
    Normal,
    Expiring,
    Expired,
    Processing,
    Reserved,
}

impl PalletStatus {
    /// All statuses, in the order the generator indexes them.
    pub const ALL: [PalletStatus; 5] = [
        PalletStatus::Normal,
        PalletStatus::Expiring,
        PalletStatus::Expired,
        PalletStatus::Processing,
        PalletStatus::Reserved,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PalletStatus::Normal => "normal",
            PalletStatus::Expiring => "expiring",
            PalletStatus::Expired => "expired",
            PalletStatus::Processing => "processing",
            PalletStatus::Reserved => "reserved",
        }
    }

    /// Display color for this status (fixed status→color table).
    pub fn color(self) -> &'static str {
        match self {
            PalletStatus::Normal => "#4ade80",
            PalletStatus::Expiring => "#fbbf24",
            PalletStatus::Expired => "#ef4444",
            PalletStatus::Processing => "#3b82f6",
            PalletStatus::Reserved => "#8b5cf6",
        }
    }
}

impl core::fmt::Display for PalletStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PalletStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(PalletStatus::Normal),
            "expiring" => Ok(PalletStatus::Expiring),
            "expired" => Ok(PalletStatus::Expired),
            "processing" => Ok(PalletStatus::Processing),
            "reserved" => Ok(PalletStatus::Reserved),
            other => Err(DomainError::validation(format!(
                "unknown pallet status: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_table_is_fixed() {
        assert_eq!(PalletStatus::Normal.color(), "#4ade80");
        assert_eq!(PalletStatus::Expiring.color(), "#fbbf24");
        assert_eq!(PalletStatus::Expired.color(), "#ef4444");
        assert_eq!(PalletStatus::Processing.color(), "#3b82f6");
        assert_eq!(PalletStatus::Reserved.color(), "#8b5cf6");
    }

    #[test]
    fn round_trips_through_str() {
        for status in PalletStatus::ALL {
            assert_eq!(status.as_str().parse::<PalletStatus>().unwrap(), status);
        }
        assert!("empty".parse::<PalletStatus>().is_err());
    }
}
