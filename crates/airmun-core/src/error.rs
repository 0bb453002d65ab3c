// ── Core error types ──
//
// Domain-facing errors from airmun-core. Transport failures pass
// through unchanged; everything else names the invariant that broke.

use airmun_snmp::{Oid, SnmpError};
use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Query-boundary failure, surfaced as-is.
    #[error(transparent)]
    Snmp(#[from] SnmpError),

    /// The WAN port is not in the device's interface table. Nothing
    /// downstream of the interface index can be computed.
    #[error("WAN port '{name}' not present in the interface table")]
    WanPortNotFound { name: &'static str },

    /// The station-table walk disagreed with the station count. The
    /// decode is undefined at this point and must not be guessed at.
    #[error(
        "station table shape mismatch: expected {expected} values for {count} stations, got {actual}"
    )]
    TableShape {
        count: usize,
        expected: usize,
        actual: usize,
    },

    /// Two rows of the station table claimed the same address.
    #[error("duplicate station address {address} in table walk")]
    DuplicateStation { address: String },

    /// A value that must be numeric wasn't.
    #[error("non-numeric value '{value}' at {oid}")]
    NotNumeric { oid: Oid, value: String },
}
