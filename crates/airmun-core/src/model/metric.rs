// ── Metric selection ──

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::station::StationField;

/// The metric a plugin invocation was named for. Closed set: an
/// unrecognized name is rejected at parse time instead of falling
/// through to an arbitrary code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Number of associated wireless stations.
    Clients,
    /// Number of active DHCP leases.
    DhcpClients,
    /// WAN inbound/outbound octet counters.
    WanTraffic,
    /// One field of every associated station.
    Station(StationField),
}

/// Rejection for a metric name outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized metric '{0}'")]
pub struct UnknownMetric(pub String);

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clients" => Ok(Self::Clients),
            "dhcpclients" => Ok(Self::DhcpClients),
            "wanTraffic" => Ok(Self::WanTraffic),
            field => StationField::from_str(field)
                .map(Self::Station)
                .map_err(|_| UnknownMetric(s.to_owned())),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clients => write!(f, "clients"),
            Self::DhcpClients => write!(f, "dhcpclients"),
            Self::WanTraffic => write!(f, "wanTraffic"),
            Self::Station(field) => write!(f, "{field}"),
        }
    }
}
