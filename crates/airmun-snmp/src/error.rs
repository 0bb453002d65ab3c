use std::process::ExitStatus;

use thiserror::Error;

use crate::oid::Oid;

/// Top-level error type for the `airmun-snmp` crate.
///
/// Covers every failure mode at the query boundary: tool discovery,
/// process spawning, non-zero tool exits, and malformed responses.
/// `airmun-core` maps these into domain-appropriate variants.
#[derive(Debug, Error)]
pub enum SnmpError {
    /// The net-snmp command-line tools are not installed (or not on PATH).
    /// Detected before any query is attempted.
    #[error("net-snmp tools not found on PATH (need both snmpget and snmpwalk)")]
    ToolsMissing,

    /// The tool binary exists but could not be executed.
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran but exited non-zero (timeout, unreachable host,
    /// bad community string -- net-snmp folds them all into its exit).
    #[error("{tool} failed with {status}: {detail}")]
    Failed {
        tool: String,
        status: ExitStatus,
        detail: String,
    },

    /// The agent answered but has no object at the requested OID.
    #[error("no such object at {oid}")]
    NoSuchObject { oid: Oid },

    /// A scalar get produced something other than exactly one value.
    #[error("expected one value at {oid}, got {count}")]
    NotScalar { oid: Oid, count: usize },
}
