//! Invocation identity.
//!
//! Munin encodes the polling target in the plugin's file name: the
//! plugin is installed as a symlink named
//! `snmp_<host>_airport_<metric>` and reads its own name back at
//! startup. Only the segment positions matter here; whether the metric
//! segment names a real metric is decided downstream.

use std::path::Path;

/// Target and metric decoded from the invocation name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub host: String,
    pub metric: String,
}

/// Decode the invocation name into an [`Identity`].
///
/// The basename is split on `_`; at least four segments are required,
/// with the host in segment 1 and the metric in segment 3. Fewer
/// segments means the plugin simply hasn't been named for a target
/// yet -- the caller prints usage and exits clean.
pub fn decode(self_name: &str) -> Option<Identity> {
    let name = Path::new(self_name).file_name()?.to_str()?;
    let segments: Vec<&str> = name.split('_').collect();

    let [_, host, _, metric, ..] = segments.as_slice() else {
        return None;
    };

    Some(Identity {
        host: (*host).to_owned(),
        metric: (*metric).to_owned(),
    })
}
