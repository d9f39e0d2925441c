//! Car road access

use std::sync::Arc;

use tracing::trace;

use crate::error::{Error, Result};
use crate::ev::{EdgeFlags, IntEncodedValue, RoadAccess, TransportationMode};
use crate::rules::{CountryRule, CountryRuleRegistry, CustomArea, SpatialRule};
use crate::way::Way;

/// Access keys relevant for cars, from most to least specific
pub const ACCESS_KEYS: [&str; 4] = ["motorcar", "motor_vehicle", "vehicle", "access"];

pub struct RoadAccessParser {
    enc: IntEncodedValue,
    rules: Arc<CountryRuleRegistry>,
}

impl RoadAccessParser {
    pub fn new(enc: IntEncodedValue, rules: Arc<CountryRuleRegistry>) -> Result<Self> {
        if !enc.is_initialized() {
            return Err(Error::NotInitialized {
                name: enc.name().to_string(),
            });
        }
        if enc.max_raw() < RoadAccess::No.ordinal() {
            return Err(Error::invalid_config(format!(
                "encoded value '{}' has {} bits, road access needs {}",
                enc.name(),
                enc.bits(),
                RoadAccess::BITS
            )));
        }
        Ok(Self { enc, rules })
    }

    pub fn encoded_value(&self) -> &IntEncodedValue {
        &self.enc
    }

    pub fn handle_way_tags(
        &self,
        flags: &mut EdgeFlags,
        way: &Way,
        areas: &[CustomArea],
    ) -> Result<RoadAccess> {
        let rules: Vec<CountryRule> = self.rules.rules_for_areas(areas).collect();
        self.handle_way_rules(flags, way, &rules)
    }

    pub fn handle_way_rules(
        &self,
        flags: &mut EdgeFlags,
        way: &Way,
        rules: &[CountryRule],
    ) -> Result<RoadAccess> {
        let access = self.resolve_with_rules(way, rules);
        self.enc.set_int(false, flags, access.ordinal())?;
        Ok(access)
    }

    /// Most restrictive tagged access, narrowed by country rules
    pub fn resolve(&self, way: &Way, areas: &[CustomArea]) -> RoadAccess {
        let rules: Vec<CountryRule> = self.rules.rules_for_areas(areas).collect();
        self.resolve_with_rules(way, &rules)
    }

    pub fn resolve_with_rules(&self, way: &Way, rules: &[CountryRule]) -> RoadAccess {
        let mut access = ACCESS_KEYS
            .iter()
            .filter_map(|key| way.get_tag(key).and_then(RoadAccess::find))
            .max()
            .unwrap_or(RoadAccess::Yes);

        let road_class = way.road_class();
        for rule in rules {
            access = rule.access(road_class, TransportationMode::Car, access);
            trace!(rule = %rule.id(), %road_class, ?access, "country rule applied");
        }

        if let Some(rule_set) = way.spatial_rule_set().filter(|set| !set.is_empty()) {
            access = rule_set.access(road_class, TransportationMode::Car, access);
        }

        access
    }
}

/// Read back an access value written by [`RoadAccessParser`]
pub fn read(enc: &IntEncodedValue, flags: &EdgeFlags) -> Result<RoadAccess> {
    let ordinal = enc.get_int(false, flags)?;
    RoadAccess::from_ordinal(ordinal).ok_or_else(|| Error::ValueOutOfRange {
        name: enc.name().to_string(),
        value: f64::from(ordinal),
        min: 0.0,
        max: f64::from(RoadAccess::No.ordinal()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ev::InitializerConfig;

    fn parser() -> (RoadAccessParser, InitializerConfig) {
        let mut config = InitializerConfig::new();
        let mut enc = RoadAccess::create();
        enc.init(&mut config).unwrap();
        let parser =
            RoadAccessParser::new(enc, Arc::new(CountryRuleRegistry::with_defaults())).unwrap();
        (parser, config)
    }

    #[test]
    fn test_most_restrictive_tag_wins() {
        let (parser, _) = parser();
        let way = Way::new()
            .with_tag("access", "no")
            .with_tag("motor_vehicle", "destination");
        assert_eq!(parser.resolve(&way, &[]), RoadAccess::No);

        let way = Way::new().with_tag("access", "permissive");
        assert_eq!(parser.resolve(&way, &[]), RoadAccess::Yes);
    }

    #[test]
    fn test_unknown_values_are_ignored() {
        let (parser, _) = parser();
        let way = Way::new().with_tag("access", "sometimes");
        assert_eq!(parser.resolve(&way, &[]), RoadAccess::Yes);
    }

    #[test]
    fn test_country_rule_narrows_access() {
        let (parser, config) = parser();
        let way = Way::new().with_tag("highway", "living_street");
        let mut flags = config.create_edge_flags();

        let access = parser
            .handle_way_tags(&mut flags, &way, &[CustomArea::with_country("AUT")])
            .unwrap();
        assert_eq!(access, RoadAccess::Destination);
        assert_eq!(read(parser.encoded_value(), &flags).unwrap(), RoadAccess::Destination);
    }

    #[test]
    fn test_tagged_restriction_is_kept() {
        let (parser, _) = parser();
        let way = Way::new()
            .with_tag("highway", "living_street")
            .with_tag("access", "private");
        assert_eq!(
            parser.resolve(&way, &[CustomArea::with_country("AUT")]),
            RoadAccess::Private
        );
    }

    #[test]
    fn test_rejects_narrow_field() {
        let mut config = InitializerConfig::new();
        let mut enc = IntEncodedValue::new(RoadAccess::KEY, 2, false);
        enc.init(&mut config).unwrap();
        assert!(matches!(
            RoadAccessParser::new(enc, Arc::default()),
            Err(Error::InvalidConfig(_))
        ));
    }
}
