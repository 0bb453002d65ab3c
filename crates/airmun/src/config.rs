//! Plugin-conf environment configuration.
//!
//! Munin hands plugins their settings as environment variables from
//! `plugin-conf.d`. Only two knobs exist: the SNMP community string
//! and the per-query timeout. Everything else about the session
//! (protocol version, target) is fixed or comes from the invocation
//! name.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Settings read from the Munin plugin-conf environment.
#[derive(Debug, Deserialize, Serialize)]
pub struct PluginConfig {
    /// SNMP community string (`env.community`).
    pub community: String,

    /// Per-query timeout in seconds (`env.timeout`).
    pub timeout: u64,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            community: "public".into(),
            timeout: 5,
        }
    }
}

/// Load defaults overlaid with the `community`/`timeout` env vars.
pub fn load() -> Result<PluginConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PluginConfig::default()))
        .merge(Env::raw().only(&["community", "timeout"]))
        .extract()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_the_well_known_community() {
        figment::Jail::expect_with(|_| {
            let config = load().unwrap();
            assert_eq!(config.community, "public");
            assert_eq!(config.timeout, 5);
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_apply() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("community", "s3cret");
            jail.set_env("timeout", "30");
            let config = load().unwrap();
            assert_eq!(config.community, "s3cret");
            assert_eq!(config.timeout, 30);
            Ok(())
        });
    }
}
