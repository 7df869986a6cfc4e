//! Road CSV loading.
//!
//! Expects a header row followed by `from,to,solo,carpool` records.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::InputError;
use crate::road::Road;

pub fn read_roads(path: impl AsRef<Path>) -> Result<Vec<Road>, InputError> {
    let rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)?;
    collect_roads(rdr)
}

pub fn read_roads_from<R: Read>(reader: R) -> Result<Vec<Road>, InputError> {
    let rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);
    collect_roads(rdr)
}

fn collect_roads<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Road>, InputError> {
    let mut roads = Vec::new();
    for result in rdr.records() {
        let record = result?;
        roads.push(Road::new(
            field(&record, 0, "from")?,
            field(&record, 1, "to")?,
            field(&record, 2, "solo")?,
            field(&record, 3, "carpool")?,
        ));
    }
    Ok(roads)
}

fn field<T: FromStr>(record: &StringRecord, index: usize, name: &'static str) -> Result<T, InputError> {
    let line = record.position().map_or(0, |pos| pos.line());
    let raw = record
        .get(index)
        .ok_or(InputError::MissingField { line, field: name })?;
    raw.parse().map_err(|_| InputError::Parse {
        line,
        field: name,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_roads_with_header() {
        let data = "from,to,solo,carpool\n0,1,4,2\n1, 2, 2.5, 1\n";
        let roads = read_roads_from(data.as_bytes()).unwrap();
        assert_eq!(roads, vec![Road::new(0, 1, 4.0, 2.0), Road::new(1, 2, 2.5, 1.0)]);
    }

    #[test]
    fn reports_bad_numbers_with_line() {
        let data = "from,to,solo,carpool\n0,1,4,2\n1,x,2,1\n";
        match read_roads_from(data.as_bytes()) {
            Err(InputError::Parse { line, field, value }) => {
                assert_eq!(line, 3);
                assert_eq!(field, "to");
                assert_eq!(value, "x");
            }
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn negative_location_is_a_parse_error() {
        let data = "from,to,solo,carpool\n-1,1,4,2\n";
        assert!(matches!(
            read_roads_from(data.as_bytes()),
            Err(InputError::Parse { field: "from", .. })
        ));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let data = "from,to,solo,carpool\n0,1,4\n";
        assert!(matches!(read_roads_from(data.as_bytes()), Err(InputError::Csv(_))));
    }
}
