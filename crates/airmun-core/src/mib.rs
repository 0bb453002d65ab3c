//! Object identifiers consumed from the device's management tree.
//!
//! Two subtrees matter: Apple's base-station enterprise MIB for the
//! wireless side, and the standard IF-MIB interface table for the WAN
//! counters. Everything here is fixed by the device firmware.

use airmun_snmp::Oid;

/// Apple base-station enterprise subtree.
const BASE_STATION: &str = "1.3.6.1.4.1.63.501.3";

/// Standard IF-MIB interfaces table (`ifTable.ifEntry`).
const IF_ENTRY: &str = "1.3.6.1.2.1.2.2.1";

/// ifDescr value naming the externally-facing port.
pub const WAN_PORT: &str = "mln1";

/// Nominal WAN speed used for graph scaling when the device won't say.
pub const DEFAULT_WAN_SPEED: u64 = 10_000_000;

/// Number of associated wireless stations (scalar).
pub fn wireless_count() -> Oid {
    Oid::new(format!("{BASE_STATION}.2.1.0"))
}

/// The wireless station table. One walk of this prefix yields the
/// station addresses followed by each field column in schema order.
pub fn station_table() -> Oid {
    Oid::new(format!("{BASE_STATION}.2.2.1"))
}

/// Number of active DHCP leases (scalar).
pub fn dhcp_count() -> Oid {
    Oid::new(format!("{BASE_STATION}.3.1.0"))
}

/// Interface description column; walked to locate the WAN port.
pub fn if_descr() -> Oid {
    Oid::new(format!("{IF_ENTRY}.2"))
}

/// Nominal interface speed for a 1-based interface index.
pub fn if_speed(index: usize) -> Oid {
    Oid::new(format!("{IF_ENTRY}.5")).index(index)
}

/// Inbound octet counter for a 1-based interface index.
pub fn if_in_octets(index: usize) -> Oid {
    Oid::new(format!("{IF_ENTRY}.10")).index(index)
}

/// Outbound octet counter for a 1-based interface index.
pub fn if_out_octets(index: usize) -> Oid {
    Oid::new(format!("{IF_ENTRY}.16")).index(index)
}
