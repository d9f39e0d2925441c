//! Per-country legal defaults
//!
//! Each submodule exposes two pure functions, `access` and `max_speed`, with
//! the same contract:
//! - `access` returns its input unchanged unless it is [`RoadAccess::Yes`],
//!   and returns `Yes` for modes without a motor;
//! - `max_speed` only fills in a missing value, and only for motor vehicles on
//!   road classes with a statutory default.
//!
//! [`RoadAccess::Yes`]: crate::ev::RoadAccess::Yes

pub mod austria;
pub mod germany;
