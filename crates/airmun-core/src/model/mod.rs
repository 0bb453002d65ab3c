// ── Domain model ──

mod metric;
mod station;

pub use metric::{Metric, UnknownMetric};
pub use station::{MacAddress, StationField, StationRecord, StationTable};
