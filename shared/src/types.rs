//! Core shared types for rental records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Calendar year of a rental record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Year(pub u16);

impl Year {
    pub fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Year)
    }
}

impl From<u16> for Year {
    fn from(value: u16) -> Self {
        Year(value)
    }
}

/// Calendar month, ordered January through December
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Three-letter abbreviation used by the dashboard metric cards
    pub fn abbreviation(self) -> &'static str {
        &self.name()[..3]
    }

    /// 1-based month number
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_number(number: u8) -> Option<Month> {
        match number {
            1..=12 => Some(Self::ALL[usize::from(number - 1)]),
            _ => None,
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a month label cannot be recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMonth(pub String);

impl fmt::Display for UnknownMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown month: {:?}", self.0)
    }
}

impl std::error::Error for UnknownMonth {}

impl FromStr for Month {
    type Err = UnknownMonth;

    /// Accepts full names, three-letter abbreviations (any case) or numbers 1-12
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(number) = trimmed.parse::<u8>() {
            return Month::from_number(number).ok_or_else(|| UnknownMonth(s.to_string()));
        }

        let lower = trimmed.to_lowercase();
        Month::ALL
            .iter()
            .copied()
            .find(|month| {
                let name = month.name().to_lowercase();
                name == lower || (lower.len() == 3 && name.starts_with(&lower))
            })
            .ok_or_else(|| UnknownMonth(s.to_string()))
    }
}

/// One row of the rental dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RentalRecord {
    pub year: Year,
    pub month: Month,
    /// Hour of day, 0-23
    pub hour: u8,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Rentals recorded in this row
    pub count: u64,
}

/// Immutable in-memory rental table, cheap to clone and share between handlers
///
/// Tables built by [`crate::parse_rentals`] keep the sum of all counts within
/// `u64`; callers constructing one directly are responsible for the same.
#[derive(Debug, Clone, Default)]
pub struct RentalTable {
    records: Arc<[RentalRecord]>,
}

impl RentalTable {
    pub fn new(records: Vec<RentalRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years present in the table, ascending
    pub fn years(&self) -> Vec<Year> {
        let mut years: Vec<Year> = self.records.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    pub fn total_rentals(&self) -> u64 {
        self.records.iter().map(|r| r.count).sum()
    }
}

impl From<Vec<RentalRecord>> for RentalTable {
    fn from(records: Vec<RentalRecord>) -> Self {
        Self::new(records)
    }
}

/// Component identifier attached to structured log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Loader,
    Aggregation,
    Server,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Loader => write!(f, "loader"),
            Component::Aggregation => write!(f, "aggregation"),
            Component::Server => write!(f, "server"),
        }
    }
}
