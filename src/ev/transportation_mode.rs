//! Travel modes and their capabilities

use serde::{Deserialize, Serialize};

/// Travel mode used when querying country rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportationMode {
    Foot,
    Vehicle,
    Bike,
    Car,
    Motorcycle,
    Hgv,
    Psv,
    Bus,
    Hov,
}

impl TransportationMode {
    pub fn all() -> &'static [TransportationMode] {
        &[
            TransportationMode::Foot,
            TransportationMode::Vehicle,
            TransportationMode::Bike,
            TransportationMode::Car,
            TransportationMode::Motorcycle,
            TransportationMode::Hgv,
            TransportationMode::Psv,
            TransportationMode::Bus,
            TransportationMode::Hov,
        ]
    }

    /// Motor-vehicle legal restrictions only apply to these modes
    pub fn is_motor_vehicle(&self) -> bool {
        !matches!(
            self,
            TransportationMode::Foot | TransportationMode::Vehicle | TransportationMode::Bike
        )
    }
}
