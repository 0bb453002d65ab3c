// ── Station domain types ──
//
// A station is one wireless client associated with the base station,
// keyed by its link-layer address. The field set is fixed by the
// device's client table; `StationField`'s declaration order IS the
// table's column order and must not be reordered.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;
use strum::{Display, EnumCount, EnumIter, EnumString};

// ── MacAddress ──────────────────────────────────────────────────────

/// Link-layer address, normalized to lowercase colon-separated form.
///
/// Accepts colon-, dash-, or space-separated octets (the agent reports
/// hex strings as `0 13 CE 5A 4C 18`); single-digit octets are padded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MacAddress(String);

impl MacAddress {
    pub fn new(raw: impl AsRef<str>) -> Self {
        let raw = raw.as_ref().trim();
        let parts: Vec<&str> = raw.split([':', '-', ' ']).filter(|p| !p.is_empty()).collect();

        let octets = parts.len() == 6
            && parts
                .iter()
                .all(|p| p.len() <= 2 && p.bytes().all(|b| b.is_ascii_hexdigit()));

        if octets {
            let joined: Vec<String> = parts.iter().map(|p| format!("{p:0>2}")).collect();
            Self(joined.join(":").to_lowercase())
        } else {
            Self(raw.to_lowercase().replace([' ', '-'], ":"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MacAddress {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

// ── Station fields ──────────────────────────────────────────────────

/// The per-station fields, in the client table's column order.
///
/// Iteration order (via `EnumIter`) is the canonical schema order used
/// by the table decoder; the string forms are the metric names used in
/// plugin symlinks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter, EnumCount, Serialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum StationField {
    /// Connection type: station or distribution (WDS).
    Type,
    /// Supported-rate descriptor.
    Rates,
    /// Seconds since association.
    Time,
    /// Seconds since the entry was last refreshed.
    LastRefresh,
    /// Signal level in dB; -1 when the radio won't report it.
    Signal,
    /// Noise level in dB; -1 when the radio won't report it.
    Noise,
    /// Negotiated rate in Mb/s.
    Rate,
    /// Packets received.
    Rx,
    /// Packets transmitted.
    Tx,
    /// Receive errors.
    RxErr,
    /// Transmit errors.
    TxErr,
}

// ── Station record & table ──────────────────────────────────────────

/// One station's full record. Values are kept verbatim as reported;
/// the device mixes numeric and string semantics across fields and the
/// report output echoes them untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StationRecord {
    pub kind: String,
    pub rates: String,
    pub time: String,
    pub last_refresh: String,
    pub signal: String,
    pub noise: String,
    pub rate: String,
    pub rx: String,
    pub tx: String,
    pub rx_err: String,
    pub tx_err: String,
}

impl StationRecord {
    /// Project one field out of the record.
    pub fn field(&self, field: StationField) -> &str {
        match field {
            StationField::Type => &self.kind,
            StationField::Rates => &self.rates,
            StationField::Time => &self.time,
            StationField::LastRefresh => &self.last_refresh,
            StationField::Signal => &self.signal,
            StationField::Noise => &self.noise,
            StationField::Rate => &self.rate,
            StationField::Rx => &self.rx,
            StationField::Tx => &self.tx,
            StationField::RxErr => &self.rx_err,
            StationField::TxErr => &self.tx_err,
        }
    }

    pub(crate) fn field_mut(&mut self, field: StationField) -> &mut String {
        match field {
            StationField::Type => &mut self.kind,
            StationField::Rates => &mut self.rates,
            StationField::Time => &mut self.time,
            StationField::LastRefresh => &mut self.last_refresh,
            StationField::Signal => &mut self.signal,
            StationField::Noise => &mut self.noise,
            StationField::Rate => &mut self.rate,
            StationField::Rx => &mut self.rx,
            StationField::Tx => &mut self.tx,
            StationField::RxErr => &mut self.rx_err,
            StationField::TxErr => &mut self.tx_err,
        }
    }
}

/// Ordered map of station address to record; insertion order is the
/// order the device reported the stations in.
pub type StationTable = IndexMap<MacAddress, StationRecord>;
