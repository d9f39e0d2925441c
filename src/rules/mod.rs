//! Jurisdiction rules
//!
//! A [`CountryRule`] holds the legal defaults of one country. Rules are
//! looked up through a [`CountryRuleRegistry`], built once and shared
//! read-only by every parser. A [`SpatialRuleSet`] chains the rules of all
//! areas covering a location behind the same [`SpatialRule`] interface.

pub mod countries;
pub mod spatial;

use std::collections::HashMap;

use tracing::warn;

use crate::ev::{Country, RoadAccess, RoadClass, TransportationMode};

pub use spatial::{CustomArea, SpatialRuleSet, COUNTRY_CODE_PROPERTY};

/// Query surface shared by single rules and rule sets
pub trait SpatialRule {
    /// Override `current` with a legal default. Returns `current` unchanged
    /// when the rule has nothing to say.
    fn max_speed(
        &self,
        road_class: RoadClass,
        transport: TransportationMode,
        current: Option<f64>,
    ) -> Option<f64> {
        let _ = (road_class, transport);
        current
    }

    /// Narrow `current` for the given road class and mode
    fn access(
        &self,
        road_class: RoadClass,
        transport: TransportationMode,
        current: RoadAccess,
    ) -> RoadAccess;

    fn id(&self) -> String;
}

/// Built-in country rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryRule {
    Austria,
    Germany,
}

impl CountryRule {
    pub fn all() -> &'static [CountryRule] {
        &[CountryRule::Austria, CountryRule::Germany]
    }

    pub fn country(&self) -> Country {
        match self {
            CountryRule::Austria => Country::Aut,
            CountryRule::Germany => Country::Deu,
        }
    }

    /// The built-in rule for `country`, if there is one
    pub fn for_country(country: Country) -> Option<CountryRule> {
        Self::all().iter().copied().find(|rule| rule.country() == country)
    }
}

impl SpatialRule for CountryRule {
    fn max_speed(
        &self,
        road_class: RoadClass,
        transport: TransportationMode,
        current: Option<f64>,
    ) -> Option<f64> {
        match self {
            CountryRule::Austria => countries::austria::max_speed(road_class, transport, current),
            CountryRule::Germany => countries::germany::max_speed(road_class, transport, current),
        }
    }

    fn access(
        &self,
        road_class: RoadClass,
        transport: TransportationMode,
        current: RoadAccess,
    ) -> RoadAccess {
        match self {
            CountryRule::Austria => countries::austria::access(road_class, transport, current),
            CountryRule::Germany => countries::germany::access(road_class, transport, current),
        }
    }

    fn id(&self) -> String {
        self.country().to_string()
    }
}

/// Country → rule lookup
///
/// Populate it before handing it to parsers; afterwards it is only read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryRuleRegistry {
    rules: HashMap<Country, CountryRule>,
}

impl CountryRuleRegistry {
    /// Registry without any rule; every lookup yields `None`
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in rule
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for rule in CountryRule::all() {
            registry.register(*rule);
        }
        registry
    }

    /// Register `rule` under its country, returning the rule it replaced
    pub fn register(&mut self, rule: CountryRule) -> Option<CountryRule> {
        self.rules.insert(rule.country(), rule)
    }

    pub fn get(&self, country: Country) -> Option<CountryRule> {
        self.rules.get(&country).copied()
    }

    /// Look a rule up by its ISO 3166-1 alpha-3 code. Unknown codes yield `None`.
    pub fn get_by_code(&self, code: &str) -> Option<CountryRule> {
        code.parse::<Country>()
            .ok()
            .and_then(|country| self.get(country))
    }

    /// Rules for the matched areas, in area order.
    ///
    /// Areas without a country code are skipped, and so are codes without a
    /// registered rule. Codes that are not ISO 3166-1 alpha-3 at all point
    /// at broken area data and are logged.
    pub fn rules_for_areas<'a>(
        &'a self,
        areas: &'a [CustomArea],
    ) -> impl Iterator<Item = CountryRule> + 'a {
        areas.iter().filter_map(move |area| {
            let code = area.country_code()?;
            match code.parse::<Country>() {
                Ok(country) => self.get(country),
                Err(e) => {
                    warn!(code, "ignoring custom area: {e}");
                    None
                }
            }
        })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
