//! CSV parsing for the rental dataset
//!
//! The dataset is a header-first CSV file. Only the columns listed in
//! [`REQUIRED_COLUMNS`] are read; they may appear in any order and any other
//! columns are ignored.
//!
//! ```csv
//! instant,yr,mnth,hr,temp,cnt
//! 1,2011,January,0,9.84,16
//! ```

use std::io::Read;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::errors::{SharedError, SharedResult};
use crate::types::{Month, RentalRecord, RentalTable, Year};

pub const YEAR_COLUMN: &str = "yr";
pub const MONTH_COLUMN: &str = "mnth";
pub const HOUR_COLUMN: &str = "hr";
pub const TEMPERATURE_COLUMN: &str = "temp";
pub const COUNT_COLUMN: &str = "cnt";

/// Columns that must be present in the header row
pub const REQUIRED_COLUMNS: [&str; 5] = [
    YEAR_COLUMN,
    MONTH_COLUMN,
    HOUR_COLUMN,
    TEMPERATURE_COLUMN,
    COUNT_COLUMN,
];

/// Positions of the required columns within a header row
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    year: usize,
    month: usize,
    hour: usize,
    temperature: usize,
    count: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> SharedResult<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|header| header == column)
                .ok_or_else(|| SharedError::missing_column(column))
        };

        Ok(Self {
            year: find(YEAR_COLUMN)?,
            month: find(MONTH_COLUMN)?,
            hour: find(HOUR_COLUMN)?,
            temperature: find(TEMPERATURE_COLUMN)?,
            count: find(COUNT_COLUMN)?,
        })
    }
}

/// Parse a full dataset. Any malformed row fails the whole load.
///
/// The sum of `cnt` over the whole file must fit in a `u64`, so every
/// grouped total computed from the table does too.
pub fn parse_rentals<R: Read>(reader: R) -> SharedResult<RentalTable> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let columns = ColumnIndex::from_headers(reader.headers()?)?;
    debug!(?columns, "Resolved dataset columns");

    let mut records = Vec::new();
    let mut total: u64 = 0;
    for row in reader.records() {
        let row = row?;
        let record = parse_row(&row, columns)?;
        total = total.checked_add(record.count).ok_or_else(|| {
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            SharedError::invalid_value(line, COUNT_COLUMN, record.count.to_string())
        })?;
        records.push(record);
    }

    Ok(RentalTable::new(records))
}

/// Parse a dataset held in memory
pub fn parse_rentals_str(content: &str) -> SharedResult<RentalTable> {
    parse_rentals(content.as_bytes())
}

fn parse_row(row: &StringRecord, columns: ColumnIndex) -> SharedResult<RentalRecord> {
    let line = row.position().map(|p| p.line()).unwrap_or_default();

    let hour: u8 = parse_field(row, columns.hour, HOUR_COLUMN, line)?;
    if hour > 23 {
        return Err(SharedError::invalid_value(line, HOUR_COLUMN, hour.to_string()));
    }

    Ok(RentalRecord {
        year: parse_field::<Year>(row, columns.year, YEAR_COLUMN, line)?,
        month: parse_field::<Month>(row, columns.month, MONTH_COLUMN, line)?,
        hour,
        temperature: parse_field(row, columns.temperature, TEMPERATURE_COLUMN, line)?,
        count: parse_field(row, columns.count, COUNT_COLUMN, line)?,
    })
}

fn parse_field<T: FromStr>(row: &StringRecord, index: usize, column: &str, line: u64) -> SharedResult<T> {
    let raw = row.get(index).unwrap_or_default();
    raw.parse()
        .map_err(|_| SharedError::invalid_value(line, column, raw))
}
