//! Legal access levels

use serde::{Deserialize, Serialize};

use super::encoded::IntEncodedValue;

/// Legal permission to use a road, ordered from least to most restrictive.
///
/// This is about what the law allows, not about physical traversability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoadAccess {
    #[default]
    Yes,
    Destination,
    Customers,
    Delivery,
    Forestry,
    Agricultural,
    Private,
    No,
}

impl RoadAccess {
    pub const KEY: &'static str = "road_access";

    /// Bits needed to store every variant
    pub const BITS: u32 = 3;

    const ALL: [RoadAccess; 8] = [
        RoadAccess::Yes,
        RoadAccess::Destination,
        RoadAccess::Customers,
        RoadAccess::Delivery,
        RoadAccess::Forestry,
        RoadAccess::Agricultural,
        RoadAccess::Private,
        RoadAccess::No,
    ];

    /// Parse an OSM access tag value. Unknown values yield `None`.
    pub fn find(value: &str) -> Option<RoadAccess> {
        match value {
            "yes" | "permissive" | "designated" | "official" => Some(RoadAccess::Yes),
            "destination" => Some(RoadAccess::Destination),
            "customers" => Some(RoadAccess::Customers),
            "delivery" => Some(RoadAccess::Delivery),
            "forestry" => Some(RoadAccess::Forestry),
            "agricultural" => Some(RoadAccess::Agricultural),
            "private" => Some(RoadAccess::Private),
            "no" => Some(RoadAccess::No),
            _ => None,
        }
    }

    pub fn ordinal(&self) -> u32 {
        *self as u32
    }

    pub fn from_ordinal(ordinal: u32) -> Option<RoadAccess> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// One-direction field holding a road access ordinal
    pub fn create() -> IntEncodedValue {
        IntEncodedValue::new(Self::KEY, Self::BITS, false)
    }
}
