//! Way tag access
//!
//! A [`Way`] is the read-only view of one OSM way handed to the parsers: its
//! tags plus, optionally, the spatial rule set the import pipeline resolved
//! for its location.

use std::collections::BTreeMap;

use crate::ev::RoadClass;
use crate::rules::SpatialRuleSet;

/// Tags of a way, ordered by key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Way {
    tags: BTreeMap<String, String>,
    /// `None` until the pipeline has looked the location up
    spatial_rule_set: Option<SpatialRuleSet>,
}

impl Way {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tag(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tags.insert(key.into(), value.into());
    }

    /// Builder-style [`Way::set_tag`]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_tag(key, value);
        self
    }

    pub fn get_tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Tag value, or `default` when the key is absent
    pub fn get_tag_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_tag(key).unwrap_or(default)
    }

    pub fn has_tag(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }

    pub fn tags(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Road class from the `highway` tag; [`RoadClass::Other`] when missing
    pub fn road_class(&self) -> RoadClass {
        RoadClass::find(self.get_tag_or("highway", ""))
    }

    pub fn set_spatial_rule_set(&mut self, rule_set: SpatialRuleSet) {
        self.spatial_rule_set = Some(rule_set);
    }

    pub fn with_spatial_rule_set(mut self, rule_set: SpatialRuleSet) -> Self {
        self.set_spatial_rule_set(rule_set);
        self
    }

    pub fn spatial_rule_set(&self) -> Option<&SpatialRuleSet> {
        self.spatial_rule_set.as_ref()
    }
}

impl<K, V> FromIterator<(K, V)> for Way
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut way = Way::new();
        for (k, v) in iter {
            way.set_tag(k, v);
        }
        way
    }
}
