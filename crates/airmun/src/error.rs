//! Plugin error types with miette diagnostics.
//!
//! Every terminal condition maps to one exit code in `exit_code`, and
//! the mapping happens in exactly one place: `PluginError::exit_code`.
//! Diagnostics are rendered to standard output by `main` -- Munin
//! captures stdout into the node log, not stderr.

use miette::Diagnostic;
use thiserror::Error;

use airmun_core::{CoreError, UnknownMetric};
use airmun_snmp::SnmpError;

/// Exit codes the monitoring host sees.
pub mod exit_code {
    /// Success, usage, or an intentionally empty result.
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const NO_TRANSPORT: i32 = 2;
    pub const UNKNOWN_METRIC: i32 = 3;
    pub const NO_WAN_PORT: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum PluginError {
    #[error("unrecognized metric '{metric}'")]
    #[diagnostic(
        code(airmun::unknown_metric),
        help(
            "Known metrics: clients, dhcpclients, wanTraffic, and the per-station\n\
             fields: type, rates, time, lastrefresh, signal, noise, rate, rx, tx,\n\
             rxerr, txerr."
        )
    )]
    UnknownMetric { metric: String },

    #[error("net-snmp tools not available")]
    #[diagnostic(
        code(airmun::no_transport),
        help("Install net-snmp so that snmpget and snmpwalk are on PATH.")
    )]
    TransportMissing(#[source] SnmpError),

    #[error("WAN port '{name}' not present in the device's interface table")]
    #[diagnostic(
        code(airmun::no_wan_port),
        help("Without the WAN port index no traffic counter can be located.")
    )]
    WanPortMissing { name: &'static str },

    #[error(transparent)]
    #[diagnostic(code(airmun::device))]
    Device(CoreError),

    #[error("plugin configuration rejected")]
    #[diagnostic(
        code(airmun::config),
        help("Check the community/timeout values in plugin-conf.d.")
    )]
    Config(#[source] Box<figment::Error>),
}

impl PluginError {
    /// Map this error to the process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownMetric { .. } => exit_code::UNKNOWN_METRIC,
            Self::TransportMissing(_) => exit_code::NO_TRANSPORT,
            Self::WanPortMissing { .. } => exit_code::NO_WAN_PORT,
            Self::Device(_) | Self::Config(_) => exit_code::GENERAL,
        }
    }
}

impl From<UnknownMetric> for PluginError {
    fn from(err: UnknownMetric) -> Self {
        Self::UnknownMetric { metric: err.0 }
    }
}

impl From<CoreError> for PluginError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::WanPortNotFound { name } => Self::WanPortMissing { name },
            other => Self::Device(other),
        }
    }
}

impl From<figment::Error> for PluginError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
