//! Default rules for Austrian roads

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
        RoadClass::LivingStreet => RoadAccess::Destination,
        RoadClass::Track => RoadAccess::Forestry,
        RoadClass::Path
        | RoadClass::Bridleway
        | RoadClass::Cycleway
        | RoadClass::Footway
        | RoadClass::Pedestrian => RoadAccess::No,
        _ => RoadAccess::Yes,
    }
}

/// Statutory limits (StVO §20): 130 on motorways, 100 outside built-up
/// areas, 50 inside, walking pace in residential zones.
pub fn max_speed(
    road_class: RoadClass,
    transport: TransportationMode,
    current: Option<f64>,
) -> Option<f64> {
    if current.is_some() || !transport.is_motor_vehicle() {
        return current;
    }

    match road_class {
        RoadClass::Motorway => Some(130.0),
        RoadClass::Trunk
        | RoadClass::Primary
        | RoadClass::Secondary
        | RoadClass::Tertiary
        | RoadClass::Unclassified
        | RoadClass::Road => Some(100.0),
        RoadClass::Residential => Some(50.0),
        RoadClass::LivingStreet => Some(5.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access() {
        use RoadAccess::*;
        let car = TransportationMode::Car;

        assert_eq!(access(RoadClass::LivingStreet, car, Yes), Destination);
        assert_eq!(access(RoadClass::Track, car, Yes), Forestry);
        assert_eq!(access(RoadClass::Footway, car, Yes), No);
        assert_eq!(access(RoadClass::Primary, car, Yes), Yes);
        assert_eq!(access(RoadClass::Other, car, Yes), Yes);
    }

    #[test]
    fn test_access_never_widens() {
        let car = TransportationMode::Car;
        assert_eq!(
            access(RoadClass::LivingStreet, car, RoadAccess::Private),
            RoadAccess::Private
        );
        assert_eq!(
            access(RoadClass::Motorway, car, RoadAccess::No),
            RoadAccess::No
        );
    }

    #[test]
    fn test_non_motor_traffic_is_unrestricted() {
        for mode in [TransportationMode::Foot, TransportationMode::Bike] {
            assert_eq!(
                access(RoadClass::Footway, mode, RoadAccess::Yes),
                RoadAccess::Yes
            );
        }
    }

    #[test]
    fn test_max_speed_only_fills_missing_values() {
        let car = TransportationMode::Car;
        assert_eq!(max_speed(RoadClass::Motorway, car, None), Some(130.0));
        assert_eq!(max_speed(RoadClass::Motorway, car, Some(100.0)), Some(100.0));
        assert_eq!(max_speed(RoadClass::LivingStreet, car, None), Some(5.0));
        assert_eq!(max_speed(RoadClass::Track, car, None), None);
        assert_eq!(
            max_speed(RoadClass::Motorway, TransportationMode::Bike, None),
            None
        );
    }
}
