//! Tag parsers turning way tags into encoded edge attributes

pub mod max_speed;
pub mod road_access;
pub mod units;

pub use max_speed::{DirectionalSpeed, MaxSpeedParser};
pub use road_access::RoadAccessParser;

use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::ev::{self, EdgeFlags, InitializerConfig, RoadAccess};
use crate::rules::{CountryRule, CountryRuleRegistry, CustomArea};
use crate::way::Way;

/// Everything resolved for one way
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WayAttributes {
    pub max_speed: DirectionalSpeed,
    pub road_access: RoadAccess,
}

/// All parsers sharing one record layout.
///
/// The layout is fixed when the set is built; every record created by
/// [`ParserSet::create_edge_flags`] has the same width.
pub struct ParserSet {
    layout: InitializerConfig,
    rules: Arc<CountryRuleRegistry>,
    max_speed: MaxSpeedParser,
    road_access: RoadAccessParser,
}

impl ParserSet {
    /// Build with the default field layout
    pub fn new(rules: Arc<CountryRuleRegistry>) -> Result<Self> {
        Self::with_fields(ev::max_speed::create(), RoadAccess::create(), rules)
    }

    /// Register the given (uninitialized) fields and build the parsers
    pub fn with_fields(
        mut max_speed: ev::DecimalEncodedValue,
        mut road_access: ev::IntEncodedValue,
        rules: Arc<CountryRuleRegistry>,
    ) -> Result<Self> {
        let mut layout = InitializerConfig::new();
        max_speed.init(&mut layout)?;
        road_access.init(&mut layout)?;
        Ok(Self {
            layout,
            max_speed: MaxSpeedParser::new(max_speed, Arc::clone(&rules))?,
            road_access: RoadAccessParser::new(road_access, Arc::clone(&rules))?,
            rules,
        })
    }

    pub fn create_edge_flags(&self) -> EdgeFlags {
        self.layout.create_edge_flags()
    }

    pub fn max_speed(&self) -> &MaxSpeedParser {
        &self.max_speed
    }

    pub fn road_access(&self) -> &RoadAccessParser {
        &self.road_access
    }

    pub fn handle_way_tags(
        &self,
        flags: &mut EdgeFlags,
        way: &Way,
        areas: &[CustomArea],
    ) -> Result<WayAttributes> {
        // areas are matched once and shared by every parser
        let rules: Vec<CountryRule> = self.rules.rules_for_areas(areas).collect();
        Ok(WayAttributes {
            max_speed: self.max_speed.handle_way_rules(flags, way, &rules)?,
            road_access: self.road_access.handle_way_rules(flags, way, &rules)?,
        })
    }
}
