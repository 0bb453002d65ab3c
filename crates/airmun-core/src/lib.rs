// airmun-core: data-shaping layer between airmun-snmp and the plugin binary.

pub mod decode;
pub mod device;
pub mod error;
pub mod mib;
pub mod model;

// ── Primary re-exports ──────────────────────────────────────────────
pub use decode::decode_station_table;
pub use device::{Airport, Sample};
pub use error::CoreError;
pub use model::{MacAddress, Metric, StationField, StationRecord, StationTable, UnknownMetric};
