// ── SNMP transport ──
//
// The `SnmpTransport` trait is the whole contract the rest of airmun
// depends on. `NetSnmp` is the production implementation: it fronts the
// net-snmp `snmpget`/`snmpwalk` binaries, which handle the wire protocol,
// encoding, and timeouts. One invocation of the plugin never retries a
// failed query (`-r 0`); the next scheduled poll is the retry.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::error::SnmpError;
use crate::oid::Oid;

/// Protocol version handed to net-snmp. The base stations speak v1 and
/// v2c; v2c keeps table walks in a single GetBulk-capable session.
const SNMP_VERSION: &str = "2c";

/// The two request shapes the device is queried with.
pub trait SnmpTransport {
    /// Fetch a single scalar value at an exact OID.
    fn get(&self, oid: &Oid) -> Result<String, SnmpError>;

    /// Walk a subtree, returning its values in agent order.
    ///
    /// An empty subtree is a successful empty walk, not an error.
    fn walk(&self, prefix: &Oid) -> Result<Vec<String>, SnmpError>;
}

/// Production transport: shells out to `snmpget` and `snmpwalk`.
pub struct NetSnmp {
    snmpget: PathBuf,
    snmpwalk: PathBuf,
    target: String,
    community: SecretString,
    timeout: Duration,
}

impl NetSnmp {
    /// Locate the net-snmp tools and build a transport for `target`.
    ///
    /// Fails with [`SnmpError::ToolsMissing`] when either binary is
    /// absent from PATH -- callers treat that as a terminal condition
    /// before any query is attempted.
    pub fn detect(
        target: impl Into<String>,
        community: SecretString,
        timeout: Duration,
    ) -> Result<Self, SnmpError> {
        let path = env::var_os("PATH").unwrap_or_default();
        let snmpget = find_in_path("snmpget", &path).ok_or(SnmpError::ToolsMissing)?;
        let snmpwalk = find_in_path("snmpwalk", &path).ok_or(SnmpError::ToolsMissing)?;

        Ok(Self {
            snmpget,
            snmpwalk,
            target: target.into(),
            community,
            timeout,
        })
    }

    /// Run one tool against one OID and return the normalized output,
    /// one line per value. Empty values and absence sentinels are kept;
    /// what they mean depends on the request shape.
    fn run(&self, program: &Path, tool: &str, oid: &Oid) -> Result<Vec<String>, SnmpError> {
        debug!(%oid, tool, target = %self.target, "querying device");

        let output = Command::new(program)
            .arg("-v")
            .arg(SNMP_VERSION)
            .arg("-c")
            .arg(self.community.expose_secret())
            .arg("-t")
            .arg(self.timeout.as_secs().to_string())
            .arg("-r")
            .arg("0")
            .arg("-On")
            .arg("-Oqv")
            .arg(&self.target)
            .arg(oid.as_str())
            .output()
            .map_err(|source| SnmpError::Spawn {
                tool: tool.to_owned(),
                source,
            })?;

        if !output.status.success() {
            return Err(SnmpError::Failed {
                tool: tool.to_owned(),
                status: output.status,
                detail: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().map(normalize_value).collect())
    }
}

impl SnmpTransport for NetSnmp {
    fn get(&self, oid: &Oid) -> Result<String, SnmpError> {
        // Blank lines are noise on the scalar path; strip them before
        // insisting on exactly one value.
        let mut values: Vec<String> = self
            .run(&self.snmpget, "snmpget", oid)?
            .into_iter()
            .filter(|line| !line.is_empty())
            .collect();

        if values.iter().any(|line| is_absence_sentinel(line)) {
            return Err(SnmpError::NoSuchObject { oid: oid.clone() });
        }
        if values.len() != 1 {
            return Err(SnmpError::NotScalar {
                oid: oid.clone(),
                count: values.len(),
            });
        }
        Ok(values.remove(0))
    }

    fn walk(&self, prefix: &Oid) -> Result<Vec<String>, SnmpError> {
        // Only sentinel lines are removed here: a walk of an empty
        // table answers with a sentinel, which is "zero rows". Empty
        // values are kept -- a string cell can legitimately be empty,
        // and consumers depend on the walk's positional layout.
        Ok(self
            .run(&self.snmpwalk, "snmpwalk", prefix)?
            .into_iter()
            .filter(|line| !is_absence_sentinel(line))
            .collect())
    }
}

/// Trim a value line and strip one layer of surrounding quotes.
///
/// net-snmp quotes STRING and Hex-STRING values under `-Oqv`; hex octets
/// additionally carry a trailing space inside the quotes.
fn normalize_value(line: &str) -> String {
    let line = line.trim();
    line.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .map_or(line, str::trim)
        .to_owned()
}

/// In-band `No Such ...` responses the agent uses for absent objects.
fn is_absence_sentinel(line: &str) -> bool {
    line.starts_with("No Such Object")
        || line.starts_with("No Such Instance")
        || line.starts_with("No more variables")
}

/// Search a PATH-style variable for an executable by name.
fn find_in_path(name: &str, path: &OsStr) -> Option<PathBuf> {
    env::split_paths(path)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
