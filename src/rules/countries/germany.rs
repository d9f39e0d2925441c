//! Default rules for German roads

use crate::ev::max_speed::UNLIMITED_SIGN_SPEED;
use crate::ev::{RoadAccess, RoadClass, TransportationMode};

pub fn access(
    road_class: RoadClass,
    transport: TransportationMode,
    current: RoadAccess,
) -> RoadAccess {
    if current != RoadAccess::Yes {
        return current;
    }

    if !transport.is_motor_vehicle() {
        return RoadAccess::Yes;
    }

    match road_class {
        RoadClass::Track => RoadAccess::Destination,
        RoadClass::Path
        | RoadClass::Bridleway
        | RoadClass::Cycleway
        | RoadClass::Footway
        | RoadClass::Pedestrian => RoadAccess::No,
        _ => RoadAccess::Yes,
    }
}

/// Autobahn and Kraftfahrstraße have no general limit; 100 outside
/// built-up areas, 50 inside, walking pace in living streets.
pub fn max_speed(
    road_class: RoadClass,
    transport: TransportationMode,
    current: Option<f64>,
) -> Option<f64> {
    if current.is_some() || !transport.is_motor_vehicle() {
        return current;
    }

    match road_class {
        RoadClass::Motorway | RoadClass::Trunk => Some(UNLIMITED_SIGN_SPEED),
        RoadClass::Primary
        | RoadClass::Secondary
        | RoadClass::Tertiary
        | RoadClass::Unclassified
        | RoadClass::Road => Some(100.0),
        RoadClass::Residential => Some(50.0),
        RoadClass::LivingStreet => Some(4.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access() {
        let car = TransportationMode::Car;
        assert_eq!(access(RoadClass::Track, car, RoadAccess::Yes), RoadAccess::Destination);
        assert_eq!(access(RoadClass::LivingStreet, car, RoadAccess::Yes), RoadAccess::Yes);
        assert_eq!(access(RoadClass::Pedestrian, car, RoadAccess::Yes), RoadAccess::No);
        assert_eq!(
            access(RoadClass::Pedestrian, TransportationMode::Foot, RoadAccess::Yes),
            RoadAccess::Yes
        );
    }

    #[test]
    fn test_max_speed() {
        let car = TransportationMode::Car;
        assert_eq!(max_speed(RoadClass::Motorway, car, None), Some(UNLIMITED_SIGN_SPEED));
        assert_eq!(max_speed(RoadClass::Residential, car, None), Some(50.0));
        assert_eq!(max_speed(RoadClass::Residential, car, Some(30.0)), Some(30.0));
        assert_eq!(max_speed(RoadClass::Service, car, None), None);
    }
}
