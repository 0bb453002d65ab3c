//! Munin output rendering.
//!
//! Two mutually exclusive report modes share this module: `config`
//! (graph metadata) and the default value report. Both emit the
//! line-oriented plugin protocol on stdout; nothing here talks to the
//! device except where the protocol itself demands it (WAN graph
//! scaling, per-station labels).

use std::fmt::Write as _;

use airmun_core::{Airport, Metric, Sample, StationField};
use airmun_snmp::SnmpTransport;

use crate::error::PluginError;

// ── Static graph blocks ──────────────────────────────────────────────

const CLIENTS_GRAPH: &str = "\
graph_title Associated wireless clients
graph_args --base 1000 -l 0
graph_vlabel clients
graph_category wireless
graph_info Number of wireless stations associated with the base station
clients.label clients
clients.draw LINE2
clients.info Stations currently associated
";

const DHCP_GRAPH: &str = "\
graph_title DHCP leases
graph_args --base 1000 -l 0
graph_vlabel leases
graph_category network
graph_info Number of active DHCP leases handed out by the base station
dhcpclients.label leases
dhcpclients.draw LINE2
dhcpclients.info Leases currently active
";

/// Per-field graph metadata for the station metrics.
struct StationGraph {
    title: &'static str,
    vlabel: &'static str,
    info: &'static str,
}

fn station_graph(field: StationField) -> StationGraph {
    match field {
        StationField::Type => StationGraph {
            title: "Wireless client connection type",
            vlabel: "type",
            info: "Connection type (station or WDS) per associated station",
        },
        StationField::Rates => StationGraph {
            title: "Wireless client supported rates",
            vlabel: "rates",
            info: "Supported-rate descriptor per associated station",
        },
        StationField::Time => StationGraph {
            title: "Wireless client connect time",
            vlabel: "seconds",
            info: "Seconds since each station associated",
        },
        StationField::LastRefresh => StationGraph {
            title: "Wireless client last refresh",
            vlabel: "seconds",
            info: "Seconds since each station's entry was refreshed",
        },
        StationField::Signal => StationGraph {
            title: "Wireless client signal",
            vlabel: "dB",
            info: "Signal level per associated station (-1 when unavailable)",
        },
        StationField::Noise => StationGraph {
            title: "Wireless client noise",
            vlabel: "dB",
            info: "Noise level per associated station (-1 when unavailable)",
        },
        StationField::Rate => StationGraph {
            title: "Wireless client rate",
            vlabel: "Mb/s",
            info: "Negotiated rate per associated station",
        },
        StationField::Rx => StationGraph {
            title: "Wireless client received packets",
            vlabel: "packets",
            info: "Packets received per associated station",
        },
        StationField::Tx => StationGraph {
            title: "Wireless client transmitted packets",
            vlabel: "packets",
            info: "Packets transmitted per associated station",
        },
        StationField::RxErr => StationGraph {
            title: "Wireless client receive errors",
            vlabel: "errors",
            info: "Receive errors per associated station",
        },
        StationField::TxErr => StationGraph {
            title: "Wireless client transmit errors",
            vlabel: "errors",
            info: "Transmit errors per associated station",
        },
    }
}

// ── Describe mode ────────────────────────────────────────────────────

/// Render the `config` response for one metric.
///
/// `wanTraffic` asks the device for its nominal speed to scale the
/// counter fields; the per-station metrics fetch the full table so
/// every station gets a label line, even though no values are shown.
pub fn render_config<T: SnmpTransport>(
    metric: Metric,
    airport: &mut Airport<T>,
) -> Result<String, PluginError> {
    match metric {
        Metric::Clients => Ok(CLIENTS_GRAPH.to_owned()),
        Metric::DhcpClients => Ok(DHCP_GRAPH.to_owned()),
        Metric::WanTraffic => {
            let speed = airport.wan_speed();
            Ok(format!(
                "graph_title WAN traffic
graph_args --base 1000
graph_vlabel bits in (-) / out (+) per ${{graph_period}}
graph_category network
graph_order recv send
recv.label received
recv.type DERIVE
recv.graph no
recv.cdef recv,8,*
recv.min 0
recv.max {speed}
send.label bps
send.type DERIVE
send.negative recv
send.cdef send,8,*
send.min 0
send.max {speed}
"
            ))
        }
        Metric::Station(field) => {
            let graph = station_graph(field);
            let mut out = format!(
                "graph_title {}\n\
                 graph_args --base 1000\n\
                 graph_vlabel {}\n\
                 graph_category wireless\n\
                 graph_info {}\n",
                graph.title, graph.vlabel, graph.info
            );

            if let Sample::Stations { table, .. } = airport.sample(metric)? {
                for mac in table.keys() {
                    let _ = writeln!(out, "MAC_{mac}.label {mac}");
                }
            }
            Ok(out)
        }
    }
}

// ── Report mode ──────────────────────────────────────────────────────

/// Render the value report for one sampled metric.
///
/// Scalar metrics use their own name as the field key; the WAN pair
/// uses `recv`/`send`; station metrics emit one line per station in
/// table order. An empty sample renders nothing at all.
pub fn render_values(metric: Metric, sample: &Sample) -> String {
    match sample {
        Sample::Count(count) => format!("{metric}.value {count}\n"),
        Sample::Traffic { recv, send } => {
            format!("recv.value {recv}\nsend.value {send}\n")
        }
        Sample::Stations { field, table } => {
            let mut out = String::new();
            for (mac, record) in table {
                let _ = writeln!(out, "MAC_{mac}.value {}", record.field(*field));
            }
            out
        }
        Sample::Empty => String::new(),
    }
}
