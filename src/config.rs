//! Parser configuration
//!
//! Loaded from JSON. Every field is optional; missing fields take the
//! built-in defaults:
//!
//! ```json
//! {
//!   "max_speed": { "bits": 7, "factor": 2.0 },
//!   "road_access": { "bits": 3 },
//!   "countries": ["AUT", "DEU"]
//! }
//! ```
//!
//! `countries` selects which built-in country rules are registered; leaving
//! it out registers all of them, an empty list none.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ev::{max_speed, Country, IntEncodedValue, RoadAccess};
use crate::parsers::ParserSet;
use crate::rules::{CountryRule, CountryRuleRegistry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaxSpeedFieldConfig {
    /// Bits per direction
    pub bits: u32,
    /// Step between encodable speeds, km/h
    pub factor: f64,
}

impl Default for MaxSpeedFieldConfig {
    fn default() -> Self {
        Self {
            bits: max_speed::DEFAULT_BITS,
            factor: max_speed::DEFAULT_FACTOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoadAccessFieldConfig {
    pub bits: u32,
}

impl Default for RoadAccessFieldConfig {
    fn default() -> Self {
        Self {
            bits: RoadAccess::BITS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub max_speed: MaxSpeedFieldConfig,
    pub road_access: RoadAccessFieldConfig,
    pub countries: Option<Vec<Country>>,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Registry holding the configured country rules
    pub fn registry(&self) -> Result<CountryRuleRegistry> {
        let Some(countries) = &self.countries else {
            return Ok(CountryRuleRegistry::with_defaults());
        };

        let mut registry = CountryRuleRegistry::new();
        for country in countries {
            let rule = CountryRule::for_country(*country).ok_or_else(|| {
                Error::invalid_config(format!("no built-in rule for country {country}"))
            })?;
            registry.register(rule);
        }
        Ok(registry)
    }

    pub fn build(&self) -> Result<ParserSet> {
        ParserSet::with_fields(
            max_speed::create_with(self.max_speed.bits, self.max_speed.factor),
            IntEncodedValue::new(RoadAccess::KEY, self.road_access.bits, false),
            Arc::new(self.registry()?),
        )
    }
}
