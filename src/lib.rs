//! # Butterfly-maxspeed
//!
//! Resolves car speed limits and access levels for OpenStreetMap ways and
//! packs them into per-edge bit flags.
//!
//! Speed limits come from the way's `maxspeed` tags, completed by the legal
//! defaults of the countries whose areas cover the way, and are stored per
//! direction in a fixed-point field.
//!
//! ```
//! use std::sync::Arc;
//! use butterfly_maxspeed::{CountryRuleRegistry, CustomArea, ParserSet, Way};
//!
//! let parsers = ParserSet::new(Arc::new(CountryRuleRegistry::with_defaults()))?;
//! let way = Way::new()
//!     .with_tag("highway", "motorway")
//!     .with_tag("maxspeed:backward", "100");
//!
//! let mut flags = parsers.create_edge_flags();
//! let attrs = parsers.handle_way_tags(&mut flags, &way, &[CustomArea::with_country("AUT")])?;
//! assert_eq!(attrs.max_speed.forward, 130.0);
//! assert_eq!(attrs.max_speed.backward, 100.0);
//! # Ok::<(), butterfly_maxspeed::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod ev;
pub mod parsers;
pub mod rules;
pub mod way;

// Re-export main types for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use ev::{Country, EdgeFlags, RoadAccess, RoadClass, TransportationMode};
pub use parsers::{DirectionalSpeed, MaxSpeedParser, ParserSet, RoadAccessParser, WayAttributes};
pub use rules::{CountryRule, CountryRuleRegistry, CustomArea, SpatialRule, SpatialRuleSet};
pub use way::Way;
