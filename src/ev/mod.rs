//! Encoded values: edge attribute enumerations and their bit-packed storage

pub mod country;
pub mod encoded;
pub mod max_speed;
pub mod road_access;
pub mod road_class;
pub mod transportation_mode;

pub use country::Country;
pub use encoded::{DecimalEncodedValue, EdgeFlags, InitializerConfig, IntEncodedValue};
pub use road_access::RoadAccess;
pub use road_class::RoadClass;
pub use transportation_mode::TransportationMode;
