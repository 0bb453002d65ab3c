// ── Device facade ──
//
// `Airport` owns the transport plus the invocation-lifetime cache for
// the three lookups that are repeated or feed other lookups: station
// count, lease count, and the WAN interface index. The cache lives and
// dies with one plugin invocation; nothing is shared across runs.

use std::str::FromStr;

use tracing::{debug, warn};

use airmun_snmp::{Oid, SnmpTransport};

use crate::decode::decode_station_table;
use crate::error::CoreError;
use crate::mib;
use crate::model::{Metric, StationField, StationTable};

/// What one invocation reports, shaped by the metric kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sample {
    /// A single counted quantity.
    Count(usize),
    /// The WAN octet counter pair.
    Traffic { recv: u64, send: u64 },
    /// One field projected across the full station table.
    Stations {
        field: StationField,
        table: StationTable,
    },
    /// A per-station metric with no stations associated. Terminal,
    /// non-error: the invocation produces no output and exits clean.
    Empty,
}

/// Typed facade over one base station.
pub struct Airport<T> {
    transport: T,
    station_count: Option<usize>,
    lease_count: Option<usize>,
    wan_if_index: Option<usize>,
}

impl<T: SnmpTransport> Airport<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            station_count: None,
            lease_count: None,
            wan_if_index: None,
        }
    }

    // ── Memoized lookups ─────────────────────────────────────────────

    /// Number of associated wireless stations. Queried at most once.
    pub fn station_count(&mut self) -> Result<usize, CoreError> {
        if let Some(count) = self.station_count {
            return Ok(count);
        }
        let count = self.get_parsed(&mib::wireless_count())?;
        self.station_count = Some(count);
        Ok(count)
    }

    /// Number of active DHCP leases. Queried at most once.
    pub fn lease_count(&mut self) -> Result<usize, CoreError> {
        if let Some(count) = self.lease_count {
            return Ok(count);
        }
        let count = self.get_parsed(&mib::dhcp_count())?;
        self.lease_count = Some(count);
        Ok(count)
    }

    /// 1-based position of the WAN port in the interface table,
    /// matching the table's own index convention. Walked at most once.
    ///
    /// The port being absent is unrecoverable for counter lookups;
    /// callers that can degrade instead go through [`Self::wan_speed`].
    pub fn wan_if_index(&mut self) -> Result<usize, CoreError> {
        if let Some(index) = self.wan_if_index {
            return Ok(index);
        }
        let names = self.transport.walk(&mib::if_descr())?;
        let index = names
            .iter()
            .position(|name| name == mib::WAN_PORT)
            .map(|position| position + 1)
            .ok_or(CoreError::WanPortNotFound {
                name: mib::WAN_PORT,
            })?;
        debug!(index, port = mib::WAN_PORT, "located WAN interface");
        self.wan_if_index = Some(index);
        Ok(index)
    }

    /// Nominal WAN speed for graph scaling. Never fails: any problem
    /// (including a failed interface lookup) degrades to the default.
    /// Not used for measured values.
    pub fn wan_speed(&mut self) -> u64 {
        self.try_wan_speed().unwrap_or_else(|err| {
            warn!(%err, fallback = mib::DEFAULT_WAN_SPEED, "assuming nominal WAN speed");
            mib::DEFAULT_WAN_SPEED
        })
    }

    fn try_wan_speed(&mut self) -> Result<u64, CoreError> {
        let index = self.wan_if_index()?;
        self.get_parsed(&mib::if_speed(index))
    }

    // ── Assembly ─────────────────────────────────────────────────────

    /// Fetch and decode the full station table.
    ///
    /// The count query and the table walk are separate round-trips; if
    /// the station set changes in between, the decoder's shape check
    /// turns the disagreement into a hard error.
    pub fn stations(&mut self) -> Result<StationTable, CoreError> {
        let count = self.station_count()?;
        let values = self.transport.walk(&mib::station_table())?;
        let table = decode_station_table(&values, count)?;

        if tracing::enabled!(tracing::Level::DEBUG) {
            debug!(
                stations = %serde_json::to_string(&table).unwrap_or_default(),
                "decoded station table"
            );
        }
        Ok(table)
    }

    /// Answer one metric request.
    pub fn sample(&mut self, metric: Metric) -> Result<Sample, CoreError> {
        match metric {
            Metric::Clients => self.station_count().map(Sample::Count),
            Metric::DhcpClients => self.lease_count().map(Sample::Count),
            Metric::WanTraffic => {
                let index = self.wan_if_index()?;
                let recv = self.get_parsed(&mib::if_in_octets(index))?;
                let send = self.get_parsed(&mib::if_out_octets(index))?;
                Ok(Sample::Traffic { recv, send })
            }
            Metric::Station(field) => {
                if self.station_count()? == 0 {
                    return Ok(Sample::Empty);
                }
                let table = self.stations()?;
                Ok(Sample::Stations { field, table })
            }
        }
    }

    // ── Helpers ──────────────────────────────────────────────────────

    fn get_parsed<N: FromStr>(&self, oid: &Oid) -> Result<N, CoreError> {
        let value = self.transport.get(oid)?;
        value.parse().map_err(|_| CoreError::NotNumeric {
            oid: oid.clone(),
            value,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use airmun_snmp::SnmpError;

    use super::*;
    use crate::model::MacAddress;

    /// Scripted transport that records every query it answers.
    #[derive(Default)]
    struct Scripted {
        scalars: HashMap<String, String>,
        walks: HashMap<String, Vec<String>>,
        gets: RefCell<Vec<String>>,
        walked: RefCell<Vec<String>>,
    }

    impl Scripted {
        fn scalar(mut self, oid: &Oid, value: &str) -> Self {
            self.scalars.insert(oid.as_str().to_owned(), value.to_owned());
            self
        }

        fn walk_result(mut self, oid: &Oid, values: &[&str]) -> Self {
            self.walks.insert(
                oid.as_str().to_owned(),
                values.iter().map(|v| (*v).to_owned()).collect(),
            );
            self
        }

        fn get_count(&self) -> usize {
            self.gets.borrow().len()
        }

        fn walk_count(&self) -> usize {
            self.walked.borrow().len()
        }
    }

    impl SnmpTransport for &Scripted {
        fn get(&self, oid: &Oid) -> Result<String, SnmpError> {
            self.gets.borrow_mut().push(oid.as_str().to_owned());
            self.scalars
                .get(oid.as_str())
                .cloned()
                .ok_or_else(|| SnmpError::NoSuchObject { oid: oid.clone() })
        }

        fn walk(&self, prefix: &Oid) -> Result<Vec<String>, SnmpError> {
            self.walked.borrow_mut().push(prefix.as_str().to_owned());
            self.walks
                .get(prefix.as_str())
                .cloned()
                .ok_or_else(|| SnmpError::NoSuchObject { oid: prefix.clone() })
        }
    }

    /// Column-major walk for two stations with a fixed signal column.
    fn two_station_walk() -> Vec<String> {
        let macs = ["aa:bb", "cc:dd"];
        let mut values: Vec<String> = macs.iter().map(|m| (*m).to_owned()).collect();
        for field in StationField::iter() {
            match field {
                StationField::Signal => values.extend(["-42".to_owned(), "-55".to_owned()]),
                _ => values.extend(macs.iter().map(|_| "0".to_owned())),
            }
        }
        values
    }

    #[test]
    fn station_count_queries_once() {
        let scripted = Scripted::default().scalar(&mib::wireless_count(), "7");
        let mut airport = Airport::new(&scripted);

        assert_eq!(airport.station_count().unwrap(), 7);
        assert_eq!(airport.station_count().unwrap(), 7);
        assert_eq!(scripted.get_count(), 1);
    }

    #[test]
    fn lease_count_queries_once() {
        let scripted = Scripted::default().scalar(&mib::dhcp_count(), "12");
        let mut airport = Airport::new(&scripted);

        assert_eq!(airport.lease_count().unwrap(), 12);
        assert_eq!(airport.lease_count().unwrap(), 12);
        assert_eq!(scripted.get_count(), 1);
    }

    #[test]
    fn non_numeric_count_is_an_error() {
        let scripted = Scripted::default().scalar(&mib::wireless_count(), "many");
        let mut airport = Airport::new(&scripted);

        assert!(matches!(
            airport.station_count().unwrap_err(),
            CoreError::NotNumeric { .. }
        ));
    }

    #[test]
    fn wan_if_index_is_one_based_and_walked_once() {
        let scripted =
            Scripted::default().walk_result(&mib::if_descr(), &["lan0", "mln1", "wlan0"]);
        let mut airport = Airport::new(&scripted);

        assert_eq!(airport.wan_if_index().unwrap(), 2);
        assert_eq!(airport.wan_if_index().unwrap(), 2);
        assert_eq!(scripted.walk_count(), 1);
    }

    #[test]
    fn missing_wan_port_is_unrecoverable() {
        let scripted = Scripted::default().walk_result(&mib::if_descr(), &["lan0", "wlan0"]);
        let mut airport = Airport::new(&scripted);

        assert!(matches!(
            airport.wan_if_index().unwrap_err(),
            CoreError::WanPortNotFound { name: "mln1" }
        ));
    }

    #[test]
    fn wan_speed_reports_the_device_value() {
        let scripted = Scripted::default()
            .walk_result(&mib::if_descr(), &["mln1"])
            .scalar(&mib::if_speed(1), "100000000");
        let mut airport = Airport::new(&scripted);

        assert_eq!(airport.wan_speed(), 100_000_000);
    }

    #[test]
    fn wan_speed_falls_back_when_the_query_fails() {
        let scripted = Scripted::default().walk_result(&mib::if_descr(), &["mln1"]);
        let mut airport = Airport::new(&scripted);

        assert_eq!(airport.wan_speed(), 10_000_000);
    }

    #[test]
    fn wan_speed_falls_back_when_the_port_is_missing() {
        let scripted = Scripted::default().walk_result(&mib::if_descr(), &["lan0"]);
        let mut airport = Airport::new(&scripted);

        assert_eq!(airport.wan_speed(), 10_000_000);
    }

    #[test]
    fn clients_sample_is_the_station_count() {
        let scripted = Scripted::default().scalar(&mib::wireless_count(), "7");
        let mut airport = Airport::new(&scripted);

        assert_eq!(airport.sample(Metric::Clients).unwrap(), Sample::Count(7));
    }

    #[test]
    fn wan_traffic_sample_pairs_the_octet_counters() {
        let scripted = Scripted::default()
            .walk_result(&mib::if_descr(), &["lan0", "mln1"])
            .scalar(&mib::if_in_octets(2), "123456")
            .scalar(&mib::if_out_octets(2), "654321");
        let mut airport = Airport::new(&scripted);

        assert_eq!(
            airport.sample(Metric::WanTraffic).unwrap(),
            Sample::Traffic {
                recv: 123_456,
                send: 654_321,
            }
        );
    }

    #[test]
    fn station_sample_decodes_the_table_in_order() {
        let walk = two_station_walk();
        let walk_refs: Vec<&str> = walk.iter().map(String::as_str).collect();
        let scripted = Scripted::default()
            .scalar(&mib::wireless_count(), "2")
            .walk_result(&mib::station_table(), &walk_refs);
        let mut airport = Airport::new(&scripted);

        let Sample::Stations { field, table } =
            airport.sample(Metric::Station(StationField::Signal)).unwrap()
        else {
            panic!("expected a station sample");
        };

        assert_eq!(field, StationField::Signal);
        let signals: Vec<(&str, &str)> = table
            .iter()
            .map(|(mac, record)| (mac.as_str(), record.field(field)))
            .collect();
        assert_eq!(signals, [("aa:bb", "-42"), ("cc:dd", "-55")]);
    }

    #[test]
    fn zero_stations_short_circuits_without_a_walk() {
        let scripted = Scripted::default().scalar(&mib::wireless_count(), "0");
        let mut airport = Airport::new(&scripted);

        assert_eq!(
            airport.sample(Metric::Station(StationField::Rx)).unwrap(),
            Sample::Empty
        );
        assert_eq!(scripted.walk_count(), 0);
    }

    #[test]
    fn count_and_walk_disagreement_fails_loudly() {
        let walk = two_station_walk();
        let walk_refs: Vec<&str> = walk.iter().map(String::as_str).collect();
        let scripted = Scripted::default()
            .scalar(&mib::wireless_count(), "3")
            .walk_result(&mib::station_table(), &walk_refs);
        let mut airport = Airport::new(&scripted);

        assert!(matches!(
            airport.sample(Metric::Station(StationField::Rx)).unwrap_err(),
            CoreError::TableShape { count: 3, .. }
        ));
    }

    #[test]
    fn station_table_keys_are_normalized_addresses() {
        let walk = ["0 13 CE 5A 4C 18".to_owned()]
            .into_iter()
            .chain(StationField::iter().map(|_| "1".to_owned()))
            .collect::<Vec<_>>();
        let walk_refs: Vec<&str> = walk.iter().map(String::as_str).collect();
        let scripted = Scripted::default()
            .scalar(&mib::wireless_count(), "1")
            .walk_result(&mib::station_table(), &walk_refs);
        let mut airport = Airport::new(&scripted);

        let table = airport.stations().unwrap();
        assert_eq!(
            table.keys().next(),
            Some(&MacAddress::new("00:13:ce:5a:4c:18"))
        );
    }
}
