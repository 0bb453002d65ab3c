// ── Station table decoding ──
//
// One walk of the client table returns a flat, column-major value
// sequence: `count` station addresses first, then `count` values for
// each field column in schema order. This module is the only place
// that layout is interpreted.

use strum::{EnumCount, IntoEnumIterator};

use crate::error::CoreError;
use crate::model::{MacAddress, StationField, StationRecord, StationTable};

/// Decode a flat walk of the client table into a station table.
///
/// `count` is the station count the device reported separately; the
/// walk must contain exactly `count * (1 + 11)` values or the layout
/// assumption no longer holds and decoding fails rather than guessing.
/// Address order in the walk becomes the table's iteration order.
pub fn decode_station_table(
    values: &[String],
    count: usize,
) -> Result<StationTable, CoreError> {
    let expected = count * (1 + StationField::COUNT);
    if values.len() != expected {
        return Err(CoreError::TableShape {
            count,
            expected,
            actual: values.len(),
        });
    }

    let mut table = StationTable::with_capacity(count);
    for raw in &values[..count] {
        let address = MacAddress::new(raw);
        if table.insert(address.clone(), StationRecord::default()).is_some() {
            return Err(CoreError::DuplicateStation {
                address: address.to_string(),
            });
        }
    }

    for (column, field) in StationField::iter().enumerate() {
        let start = count * (1 + column);
        for (record, value) in table.values_mut().zip(&values[start..start + count]) {
            *record.field_mut(field) = value.clone();
        }
    }

    Ok(table)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    /// Build a column-major walk for `macs`, with each field value
    /// derived from the field name and the station position.
    fn walk_for(macs: &[&str]) -> Vec<String> {
        let mut values: Vec<String> = macs.iter().map(|m| (*m).to_owned()).collect();
        for field in StationField::iter() {
            for position in 0..macs.len() {
                values.push(format!("{field}-{position}"));
            }
        }
        values
    }

    #[test]
    fn decodes_all_fields_in_discovery_order() {
        let values = walk_for(&["aa:bb:cc:dd:ee:01", "aa:bb:cc:dd:ee:02"]);
        let table = decode_station_table(&values, 2).unwrap();

        assert_eq!(table.len(), 2);
        let keys: Vec<&str> = table.keys().map(MacAddress::as_str).collect();
        assert_eq!(keys, ["aa:bb:cc:dd:ee:01", "aa:bb:cc:dd:ee:02"]);

        for (position, record) in table.values().enumerate() {
            for field in StationField::iter() {
                assert_eq!(record.field(field), format!("{field}-{position}"));
            }
        }
    }

    #[test]
    fn reserializing_reproduces_the_field_blocks() {
        let values = walk_for(&["00:01", "00:02", "00:03"]);
        let table = decode_station_table(&values, 3).unwrap();

        let mut rebuilt: Vec<String> =
            table.keys().map(|mac| mac.as_str().to_owned()).collect();
        for field in StationField::iter() {
            rebuilt.extend(table.values().map(|r| r.field(field).to_owned()));
        }
        assert_eq!(rebuilt, values);
    }

    #[test]
    fn zero_stations_decodes_to_an_empty_table() {
        let table = decode_station_table(&[], 0).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn truncated_walk_is_rejected() {
        let mut values = walk_for(&["aa:bb", "cc:dd"]);
        values.pop();

        let err = decode_station_table(&values, 2).unwrap_err();
        assert!(matches!(
            err,
            CoreError::TableShape {
                count: 2,
                expected: 24,
                actual: 23,
            }
        ));
    }

    #[test]
    fn surplus_walk_is_rejected() {
        let values = walk_for(&["aa:bb", "cc:dd", "ee:ff"]);
        let err = decode_station_table(&values, 2).unwrap_err();
        assert!(matches!(err, CoreError::TableShape { .. }));
    }

    #[test]
    fn duplicate_addresses_are_rejected() {
        let values = walk_for(&["aa:bb", "aa:bb"]);
        let err = decode_station_table(&values, 2).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateStation { .. }));
    }
}
