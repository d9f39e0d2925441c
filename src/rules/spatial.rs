//! Areas and spatial rule sets
//!
//! Point-in-polygon matching happens upstream. This module only receives the
//! areas that were found to cover a way and combines their rules.

use geo::MultiPolygon;
use serde_json::{Map, Value};

use super::{CountryRule, CountryRuleRegistry, SpatialRule};
use crate::ev::{RoadAccess, RoadClass, TransportationMode};

/// Property holding an area's ISO 3166-1 alpha-3 country code
pub const COUNTRY_CODE_PROPERTY: &str = "ISO3166-1:alpha3";

/// Geometry plus free-form properties, as produced by the area matcher.
///
/// The borders are carried along for the caller; rule resolution only looks
/// at the properties.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomArea {
    borders: MultiPolygon<f64>,
    properties: Map<String, Value>,
}

impl CustomArea {
    pub fn new(borders: MultiPolygon<f64>, properties: Map<String, Value>) -> Self {
        Self {
            borders,
            properties,
        }
    }

    /// Area with no geometry and only a country code property
    pub fn with_country(code: &str) -> Self {
        let mut properties = Map::new();
        properties.insert(COUNTRY_CODE_PROPERTY.to_string(), Value::from(code));
        Self::new(MultiPolygon::new(Vec::new()), properties)
    }

    pub fn borders(&self) -> &MultiPolygon<f64> {
        &self.borders
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    pub fn country_code(&self) -> Option<&str> {
        self.properties
            .get(COUNTRY_CODE_PROPERTY)
            .and_then(Value::as_str)
    }
}

impl Default for CustomArea {
    fn default() -> Self {
        Self::new(MultiPolygon::new(Vec::new()), Map::new())
    }
}

static EMPTY: SpatialRuleSet = SpatialRuleSet { rules: Vec::new() };

/// Rules of every area covering a location, applied in the order given.
///
/// Each rule receives the previous rule's output. There is no priority by
/// area size or administrative level: whichever rule comes first and has a
/// default for the road decides, since rules never replace an existing speed
/// or widen a restriction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpatialRuleSet {
    rules: Vec<CountryRule>,
}

impl SpatialRuleSet {
    pub fn new(rules: Vec<CountryRule>) -> Self {
        Self { rules }
    }

    /// The shared "nothing applies here" set
    pub fn empty() -> &'static SpatialRuleSet {
        &EMPTY
    }

    /// Collect the registered rules of the matched areas
    pub fn from_areas(registry: &CountryRuleRegistry, areas: &[CustomArea]) -> Self {
        Self::new(registry.rules_for_areas(areas).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[CountryRule] {
        &self.rules
    }
}

impl SpatialRule for SpatialRuleSet {
    fn max_speed(
        &self,
        road_class: RoadClass,
        transport: TransportationMode,
        current: Option<f64>,
    ) -> Option<f64> {
        self.rules.iter().fold(current, |speed, rule| {
            rule.max_speed(road_class, transport, speed)
        })
    }

    fn access(
        &self,
        road_class: RoadClass,
        transport: TransportationMode,
        current: RoadAccess,
    ) -> RoadAccess {
        self.rules.iter().fold(current, |access, rule| {
            rule.access(road_class, transport, access)
        })
    }

    fn id(&self) -> String {
        if self.is_empty() {
            return "empty".to_string();
        }
        self.rules
            .iter()
            .map(SpatialRule::id)
            .collect::<Vec<_>>()
            .join(",")
    }
}
