//! Directional car speed limits
//!
//! Resolution order for one way:
//! 1. `maxspeed` gives the base value;
//! 2. every matched area with a registered country rule may fill it in;
//! 3. the way's spatial rule set, unless empty, may fill it in;
//! 4. `maxspeed:forward` / `maxspeed:backward` take precedence per direction,
//!    falling back to the base value when missing or malformed;
//! 5. each direction is capped at [`UNLIMITED_SIGN_SPEED`];
//! 6. directions still without a value are stored as [`UNSET_SPEED`].

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::ev::max_speed::{UNLIMITED_SIGN_SPEED, UNSET_SPEED};
use crate::ev::{DecimalEncodedValue, EdgeFlags, TransportationMode};
use crate::parsers::units::string_to_kmh;
use crate::rules::{CountryRule, CountryRuleRegistry, CustomArea, SpatialRule};
use crate::way::Way;

/// Speeds for both directions of a way, in km/h.
/// [`UNSET_SPEED`] marks a direction without a known limit.
///
/// [`MaxSpeedParser::resolve`] gives the exact values,
/// [`MaxSpeedParser::handle_way_tags`] the ones read back from the record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectionalSpeed {
    pub forward: f64,
    pub backward: f64,
}

pub struct MaxSpeedParser {
    enc: DecimalEncodedValue,
    rules: Arc<CountryRuleRegistry>,
}

impl MaxSpeedParser {
    /// `enc` must be initialized, store two directions, and be able to hold
    /// both [`UNSET_SPEED`] and [`UNLIMITED_SIGN_SPEED`], the latter exactly.
    pub fn new(enc: DecimalEncodedValue, rules: Arc<CountryRuleRegistry>) -> Result<Self> {
        if !enc.is_store_two_directions() {
            return Err(Error::NotTwoDirections {
                name: enc.name().to_string(),
            });
        }
        if !enc.is_initialized() {
            return Err(Error::NotInitialized {
                name: enc.name().to_string(),
            });
        }
        if !enc.use_maximum_as_infinity() {
            return Err(Error::invalid_config(format!(
                "encoded value '{}' cannot store the unset speed",
                enc.name()
            )));
        }
        if enc.min() > 0.0 || enc.max_storable_decimal() < UNLIMITED_SIGN_SPEED {
            return Err(Error::invalid_config(format!(
                "encoded value '{}' covers [{}, {}] km/h, needs [0, {}]",
                enc.name(),
                enc.min(),
                enc.max_storable_decimal(),
                UNLIMITED_SIGN_SPEED
            )));
        }
        let cap_steps = (UNLIMITED_SIGN_SPEED - enc.min()) / enc.factor();
        if cap_steps.fract() != 0.0 {
            return Err(Error::invalid_config(format!(
                "encoded value '{}' with step {} km/h cannot store {} km/h exactly",
                enc.name(),
                enc.factor(),
                UNLIMITED_SIGN_SPEED
            )));
        }
        Ok(Self { enc, rules })
    }

    pub fn encoded_value(&self) -> &DecimalEncodedValue {
        &self.enc
    }

    pub fn handle_way_tags(
        &self,
        flags: &mut EdgeFlags,
        way: &Way,
        areas: &[CustomArea],
    ) -> Result<DirectionalSpeed> {
        let rules: Vec<CountryRule> = self.rules.rules_for_areas(areas).collect();
        self.handle_way_rules(flags, way, &rules)
    }

    /// Write both directions for already matched country rules and return
    /// the speeds as stored, quantized to the field's step
    pub fn handle_way_rules(
        &self,
        flags: &mut EdgeFlags,
        way: &Way,
        rules: &[CountryRule],
    ) -> Result<DirectionalSpeed> {
        let speed = self.resolve_with_rules(way, rules);
        self.enc.set_decimal(false, flags, speed.forward)?;
        self.enc.set_decimal(true, flags, speed.backward)?;
        Ok(DirectionalSpeed {
            forward: self.enc.get_decimal(false, flags)?,
            backward: self.enc.get_decimal(true, flags)?,
        })
    }

    /// Compute both directional speeds without touching any record
    pub fn resolve(&self, way: &Way, areas: &[CustomArea]) -> DirectionalSpeed {
        let rules: Vec<CountryRule> = self.rules.rules_for_areas(areas).collect();
        self.resolve_with_rules(way, &rules)
    }

    pub fn resolve_with_rules(&self, way: &Way, rules: &[CountryRule]) -> DirectionalSpeed {
        let mut max_speed = string_to_kmh(way.get_tag("maxspeed"));

        let road_class = way.road_class();
        for rule in rules {
            let overridden = rule.max_speed(road_class, TransportationMode::Car, max_speed);
            trace!(rule = %rule.id(), %road_class, ?max_speed, ?overridden, "country rule applied");
            max_speed = overridden;
        }

        if let Some(rule_set) = way.spatial_rule_set().filter(|set| !set.is_empty()) {
            max_speed = rule_set.max_speed(road_class, TransportationMode::Car, max_speed);
            trace!(rule_set = %rule_set.id(), ?max_speed, "spatial rule set applied");
        }

        let forward = string_to_kmh(way.get_tag("maxspeed:forward"));
        let backward = string_to_kmh(way.get_tag("maxspeed:backward"));

        DirectionalSpeed {
            forward: finish(forward.or(max_speed)),
            backward: finish(backward.or(max_speed)),
        }
    }
}

/// Cap a resolved speed and map a missing one to the unset sentinel
fn finish(speed: Option<f64>) -> f64 {
    match speed {
        Some(speed) if speed > UNLIMITED_SIGN_SPEED => {
            debug!(speed, cap = UNLIMITED_SIGN_SPEED, "capping max speed");
            UNLIMITED_SIGN_SPEED
        }
        Some(speed) => speed,
        None => UNSET_SPEED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ev::{max_speed, InitializerConfig};
    use crate::rules::SpatialRuleSet;

    fn parser() -> (MaxSpeedParser, InitializerConfig) {
        let mut config = InitializerConfig::new();
        let mut enc = max_speed::create();
        enc.init(&mut config).unwrap();
        let parser =
            MaxSpeedParser::new(enc, Arc::new(CountryRuleRegistry::with_defaults())).unwrap();
        (parser, config)
    }

    fn way(tags: &[(&str, &str)]) -> Way {
        tags.iter().copied().collect()
    }

    #[test]
    fn test_rejects_one_direction_field() {
        let mut config = InitializerConfig::new();
        let mut enc = DecimalEncodedValue::new("max_speed", 7, 2.0, 0.0, true, false);
        enc.init(&mut config).unwrap();
        let result = MaxSpeedParser::new(enc, Arc::default());
        assert!(matches!(result, Err(Error::NotTwoDirections { .. })));
    }

    #[test]
    fn test_rejects_uninitialized_field() {
        let result = MaxSpeedParser::new(max_speed::create(), Arc::default());
        assert!(matches!(result, Err(Error::NotInitialized { .. })));
    }

    #[test]
    fn test_rejects_field_too_small_for_cap() {
        let mut config = InitializerConfig::new();
        let mut enc = max_speed::create_with(6, 2.0);
        enc.init(&mut config).unwrap();
        let result = MaxSpeedParser::new(enc, Arc::default());
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_step_that_misses_the_cap() {
        let mut config = InitializerConfig::new();
        let mut enc = max_speed::create_with(7, 4.0);
        enc.init(&mut config).unwrap();
        assert!(enc.max_storable_decimal() >= UNLIMITED_SIGN_SPEED);
        let result = MaxSpeedParser::new(enc, Arc::default());
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_accepts_steps_dividing_the_cap() {
        for (bits, factor) in [(7, 2.0), (8, 1.0), (6, 5.0)] {
            let mut config = InitializerConfig::new();
            let mut enc = max_speed::create_with(bits, factor);
            enc.init(&mut config).unwrap();
            assert!(MaxSpeedParser::new(enc, Arc::default()).is_ok(), "{bits} bits, step {factor}");
        }
    }

    #[test]
    fn test_rejects_field_without_unset_encoding() {
        let mut config = InitializerConfig::new();
        let mut enc = DecimalEncodedValue::new("max_speed", 8, 1.0, 0.0, false, true);
        enc.init(&mut config).unwrap();
        let result = MaxSpeedParser::new(enc, Arc::default());
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_no_tags_no_areas_is_unset() {
        let (parser, _) = parser();
        let speed = parser.resolve(&way(&[("highway", "primary")]), &[]);
        assert_eq!(speed.forward, UNSET_SPEED);
        assert_eq!(speed.backward, UNSET_SPEED);
    }

    #[test]
    fn test_base_speed_applies_to_both_directions() {
        let (parser, _) = parser();
        let speed = parser.resolve(&way(&[("maxspeed", "70")]), &[]);
        assert_eq!(speed, DirectionalSpeed { forward: 70.0, backward: 70.0 });
    }

    #[test]
    fn test_directional_tag_wins_over_base() {
        let (parser, _) = parser();
        let speed = parser.resolve(
            &way(&[("maxspeed", "70"), ("maxspeed:forward", "50")]),
            &[],
        );
        assert_eq!(speed, DirectionalSpeed { forward: 50.0, backward: 70.0 });
    }

    #[test]
    fn test_malformed_directional_tag_falls_back_to_base() {
        let (parser, _) = parser();
        let speed = parser.resolve(
            &way(&[("maxspeed", "70"), ("maxspeed:backward", "variable")]),
            &[],
        );
        assert_eq!(speed.backward, 70.0);
    }

    #[test]
    fn test_directional_tag_without_base() {
        let (parser, _) = parser();
        let speed = parser.resolve(&way(&[("maxspeed:backward", "30")]), &[]);
        assert_eq!(speed.forward, UNSET_SPEED);
        assert_eq!(speed.backward, 30.0);
    }

    #[test]
    fn test_speeds_are_capped() {
        let (parser, _) = parser();
        let speed = parser.resolve(
            &way(&[("maxspeed", "200"), ("maxspeed:backward", "100 mph")]),
            &[],
        );
        assert_eq!(speed.forward, UNLIMITED_SIGN_SPEED);
        assert_eq!(speed.backward, UNLIMITED_SIGN_SPEED);
    }

    #[test]
    fn test_country_rule_fills_missing_speed() {
        let (parser, _) = parser();
        let areas = [CustomArea::with_country("AUT")];
        let speed = parser.resolve(&way(&[("highway", "motorway")]), &areas);
        assert_eq!(speed.forward, 130.0);

        let speed = parser.resolve(&way(&[("highway", "motorway"), ("maxspeed", "100")]), &areas);
        assert_eq!(speed.forward, 100.0);
    }

    #[test]
    fn test_spatial_rule_set_on_way() {
        let (parser, _) = parser();
        let way = way(&[("highway", "residential")])
            .with_spatial_rule_set(SpatialRuleSet::new(vec![crate::rules::CountryRule::Germany]));
        assert_eq!(parser.resolve(&way, &[]).backward, 50.0);

        let way = way.with_spatial_rule_set(SpatialRuleSet::empty().clone());
        assert_eq!(parser.resolve(&way, &[]).backward, UNSET_SPEED);
    }

    #[test]
    fn test_writes_both_directions() {
        let (parser, config) = parser();
        let mut flags = config.create_edge_flags();
        parser
            .handle_way_tags(
                &mut flags,
                &way(&[("maxspeed", "50"), ("maxspeed:backward", "80")]),
                &[],
            )
            .unwrap();
        let enc = parser.encoded_value();
        assert_eq!(enc.get_decimal(false, &flags).unwrap(), 50.0);
        assert_eq!(enc.get_decimal(true, &flags).unwrap(), 80.0);
    }

    #[test]
    fn test_returns_speeds_as_stored() {
        let (parser, config) = parser();
        let mut flags = config.create_edge_flags();
        let way = way(&[("highway", "living_street"), ("maxspeed:backward", "15")]);
        let areas = [CustomArea::with_country("AUT")];

        let exact = parser.resolve(&way, &areas);
        assert_eq!(exact, DirectionalSpeed { forward: 5.0, backward: 15.0 });

        let stored = parser.handle_way_tags(&mut flags, &way, &areas).unwrap();
        let enc = parser.encoded_value();
        assert_eq!(stored.forward, enc.get_decimal(false, &flags).unwrap());
        assert_eq!(stored.backward, enc.get_decimal(true, &flags).unwrap());
        assert_eq!(stored, DirectionalSpeed { forward: 6.0, backward: 16.0 });
    }

    #[test]
    fn test_unset_is_returned_as_stored() {
        let (parser, config) = parser();
        let mut flags = config.create_edge_flags();
        let stored = parser
            .handle_way_tags(&mut flags, &way(&[("highway", "primary")]), &[])
            .unwrap();
        assert_eq!(stored, DirectionalSpeed { forward: UNSET_SPEED, backward: UNSET_SPEED });
    }
}
