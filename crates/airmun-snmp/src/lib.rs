// airmun-snmp: the query boundary between airmun and a managed device.
//
// Exposes exactly two request shapes -- "get one scalar at an OID" and
// "walk an ordered subtree" -- behind the `SnmpTransport` trait. The
// production implementation shells out to the net-snmp command-line
// tools; everything above this crate is transport-agnostic.

pub mod error;
pub mod oid;
pub mod transport;

pub use error::SnmpError;
pub use oid::Oid;
pub use transport::{NetSnmp, SnmpTransport};
