//! Functional road categories derived from the `highway` tag

use serde::{Deserialize, Serialize};

/// Road category of a way.
///
/// Derived once per way from its `highway` tag. The lookup is case-sensitive
/// and total: any value that is not a known OSM highway type maps to
/// [`RoadClass::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadClass {
    #[default]
    Other,
    Motorway,
    Trunk,
    Primary,
    Secondary,
    Tertiary,
    Residential,
    Unclassified,
    Service,
    Road,
    Track,
    Bridleway,
    Steps,
    Cycleway,
    Path,
    LivingStreet,
    Footway,
    Pedestrian,
    Platform,
    Corridor,
}

impl RoadClass {
    pub const KEY: &'static str = "road_class";

    /// Map a `highway` tag value to its road class.
    ///
    /// Link roads (`motorway_link`, ...) share the class of the road they connect.
    pub fn find(highway: &str) -> RoadClass {
        match highway {
            "motorway" | "motorway_link" => RoadClass::Motorway,
            "trunk" | "trunk_link" => RoadClass::Trunk,
            "primary" | "primary_link" => RoadClass::Primary,
            "secondary" | "secondary_link" => RoadClass::Secondary,
            "tertiary" | "tertiary_link" => RoadClass::Tertiary,
            "residential" => RoadClass::Residential,
            "unclassified" => RoadClass::Unclassified,
            "service" => RoadClass::Service,
            "road" => RoadClass::Road,
            "track" => RoadClass::Track,
            "bridleway" => RoadClass::Bridleway,
            "steps" => RoadClass::Steps,
            "cycleway" => RoadClass::Cycleway,
            "path" => RoadClass::Path,
            "living_street" => RoadClass::LivingStreet,
            "footway" => RoadClass::Footway,
            "pedestrian" => RoadClass::Pedestrian,
            "platform" => RoadClass::Platform,
            "corridor" => RoadClass::Corridor,
            _ => RoadClass::Other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RoadClass::Other => "other",
            RoadClass::Motorway => "motorway",
            RoadClass::Trunk => "trunk",
            RoadClass::Primary => "primary",
            RoadClass::Secondary => "secondary",
            RoadClass::Tertiary => "tertiary",
            RoadClass::Residential => "residential",
            RoadClass::Unclassified => "unclassified",
            RoadClass::Service => "service",
            RoadClass::Road => "road",
            RoadClass::Track => "track",
            RoadClass::Bridleway => "bridleway",
            RoadClass::Steps => "steps",
            RoadClass::Cycleway => "cycleway",
            RoadClass::Path => "path",
            RoadClass::LivingStreet => "living_street",
            RoadClass::Footway => "footway",
            RoadClass::Pedestrian => "pedestrian",
            RoadClass::Platform => "platform",
            RoadClass::Corridor => "corridor",
        }
    }
}

impl std::fmt::Display for RoadClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
