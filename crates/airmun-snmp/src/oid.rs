// ── Object identifiers ──
//
// Dotted-decimal paths into the device's management tree. Kept as
// validated strings rather than integer vectors: every consumer hands
// them straight to net-snmp, which wants the textual form anyway.

use std::fmt;

/// A numeric object identifier, e.g. `1.3.6.1.2.1.2.2.1.2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Oid(String);

impl Oid {
    /// Wrap a dotted-decimal path. A leading dot is stripped so that
    /// `.1.3.6...` and `1.3.6...` compare equal.
    pub fn new(path: impl AsRef<str>) -> Self {
        let path = path.as_ref();
        Self(path.strip_prefix('.').unwrap_or(path).to_owned())
    }

    /// Append a table index, yielding the OID of one cell or row.
    ///
    /// SNMP table indices are 1-based; callers pass them through as-is.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}.{index}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Oid {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
