mod config;
mod error;
mod identity;
mod munin;

use std::env;
use std::time::Duration;

use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use airmun_core::{Airport, Metric};
use airmun_snmp::NetSnmp;

use crate::error::PluginError;
use crate::identity::Identity;

const USAGE: &str = "\
airmun - Munin plugin for Apple AirPort base stations

Queries a base station over SNMP and reports wireless-station,
DHCP-lease, and WAN-traffic metrics in Munin's plugin protocol.

The plugin reads its target and metric from its own name. Install it
by symlinking into the Munin plugin directory:

    ln -s /usr/share/munin/plugins/airmun \\
        /etc/munin/plugins/snmp_<host>_airport_<metric>

where <metric> is one of:

    clients dhcpclients wanTraffic
    type rates time lastrefresh signal noise rate rx tx rxerr txerr

The host segment must not contain underscores. Invoked with `config`
as first argument the plugin prints graph metadata; without arguments
it reports current values.

Plugin-conf environment: community (default: public) and timeout
(seconds, default: 5). Set MUNIN_DEBUG=1 for diagnostic output.
";

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    // No decodable identity means the plugin hasn't been symlinked to
    // a target yet. That is usage, not failure.
    let Some(identity) = args.first().and_then(|argv0| identity::decode(argv0)) else {
        print!("{USAGE}");
        return;
    };

    // Munin invokes `<plugin> config` for metadata; anything else is a
    // value report.
    let describe = args.get(1).is_some_and(|arg| arg == "config");

    if let Err(err) = run(&identity, describe) {
        let code = err.exit_code();
        // Munin captures stdout into the node log; stderr is dropped.
        println!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

/// Enable diagnostics only when MUNIN_DEBUG is exactly "1"; plugin
/// output must stay byte-identical otherwise.
fn init_tracing() {
    if env::var("MUNIN_DEBUG").as_deref() == Ok("1") {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_target(false)
            .with_writer(std::io::stdout)
            .init();
    }
}

fn run(identity: &Identity, describe: bool) -> Result<(), PluginError> {
    let metric: Metric = identity.metric.parse().map_err(PluginError::from)?;
    let config = config::load()?;

    let transport = NetSnmp::detect(
        identity.host.clone(),
        SecretString::from(config.community),
        Duration::from_secs(config.timeout),
    )
    .map_err(PluginError::TransportMissing)?;
    let mut airport = Airport::new(transport);

    tracing::debug!(host = %identity.host, %metric, describe, "dispatching");

    let output = if describe {
        munin::render_config(metric, &mut airport)?
    } else {
        let sample = airport.sample(metric)?;
        munin::render_values(metric, &sample)
    };
    print!("{output}");
    Ok(())
}
