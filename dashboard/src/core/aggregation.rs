//! Rental aggregations
//!
//! Pure functions over an in-memory [`RentalTable`]. Every call allocates fresh
//! output and never touches the input, so the same table can be shared by any
//! number of concurrent views.
//!
//! Ranked results (hourly and bucket totals) are sorted by total descending.
//! Groups with equal totals keep the order in which their key first appeared
//! in the table.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize, Serializer};
use shared::{Month, RentalRecord, RentalTable, Year};

/// Time-of-day bucket.
///
/// Hours 0-4 fall into `Evening`; there is no separate night bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeBucket {
    Morning,
    Afternoon,
    Evening,
}

impl TimeBucket {
    /// `hour <= 4` is Evening, `hour > 10` is Afternoon, 5-10 is Morning
    pub fn from_hour(hour: u8) -> Self {
        if hour <= 4 {
            TimeBucket::Evening
        } else if hour > 10 {
            TimeBucket::Afternoon
        } else {
            TimeBucket::Morning
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeBucket::Morning => "Morning",
            TimeBucket::Afternoon => "Afternoon",
            TimeBucket::Evening => "Evening",
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Temperature bucket with half-open bounds: [.., 10), [10, 18), [18, 24), [24, ..)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureBucket {
    Cold,
    Chilly,
    Warm,
    Hot,
}

impl TemperatureBucket {
    pub const COLD_BELOW: f64 = 10.0;
    pub const CHILLY_BELOW: f64 = 18.0;
    pub const WARM_BELOW: f64 = 24.0;

    pub fn from_temperature(temperature: f64) -> Self {
        if temperature < Self::COLD_BELOW {
            TemperatureBucket::Cold
        } else if temperature < Self::CHILLY_BELOW {
            TemperatureBucket::Chilly
        } else if temperature < Self::WARM_BELOW {
            TemperatureBucket::Warm
        } else {
            // NaN lands here as well
            TemperatureBucket::Hot
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TemperatureBucket::Cold => "Cold",
            TemperatureBucket::Chilly => "Chilly",
            TemperatureBucket::Warm => "Warm",
            TemperatureBucket::Hot => "Hot",
        }
    }
}

impl fmt::Display for TemperatureBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hour of day used as a grouping key, rendered as `"H:00"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourOfDay(pub u8);

impl fmt::Display for HourOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:00", self.0)
    }
}

impl Serialize for HourOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Summed rentals for one grouping key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupTotal<K> {
    pub key: K,
    pub total: u64,
}

/// Summed rentals for one calendar month of a selected year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthTotal {
    pub month: Month,
    pub total: u64,
    /// Number of rows that contributed; zero for months with no data
    pub records: usize,
}

/// A record paired with its derived buckets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedRecord {
    pub record: RentalRecord,
    pub time_bucket: TimeBucket,
    pub temperature_bucket: TemperatureBucket,
}

impl From<&RentalRecord> for ClassifiedRecord {
    fn from(record: &RentalRecord) -> Self {
        Self {
            record: *record,
            time_bucket: TimeBucket::from_hour(record.hour),
            temperature_bucket: TemperatureBucket::from_temperature(record.temperature),
        }
    }
}

/// Classify every row, returning a new augmented copy of the table
pub fn classify(table: &RentalTable) -> Vec<ClassifiedRecord> {
    table.records().iter().map(ClassifiedRecord::from).collect()
}

/// Totals per month for one year, always twelve entries January to December
pub fn monthly_totals(table: &RentalTable, year: Year) -> Vec<MonthTotal> {
    let mut months: Vec<MonthTotal> = Month::ALL
        .iter()
        .map(|&month| MonthTotal {
            month,
            total: 0,
            records: 0,
        })
        .collect();

    for record in table.records().iter().filter(|r| r.year == year) {
        let slot = &mut months[usize::from(record.month.number() - 1)];
        slot.total += record.count;
        slot.records += 1;
    }

    months
}

/// Totals per hour across all years, highest first
pub fn hourly_totals(table: &RentalTable) -> Vec<GroupTotal<HourOfDay>> {
    rank_by_total(table.records().iter().map(|r| (HourOfDay(r.hour), r.count)))
}

/// Totals per time-of-day bucket, highest first
pub fn time_bucket_totals(table: &RentalTable) -> Vec<GroupTotal<TimeBucket>> {
    rank_by_total(classify(table).into_iter().map(|c| (c.time_bucket, c.record.count)))
}

/// Totals per temperature bucket, highest first
pub fn temperature_bucket_totals(table: &RentalTable) -> Vec<GroupTotal<TemperatureBucket>> {
    rank_by_total(
        classify(table)
            .into_iter()
            .map(|c| (c.temperature_bucket, c.record.count)),
    )
}

/// Sum of all totals in a ranked result
pub fn grand_total<K>(groups: &[GroupTotal<K>]) -> u64 {
    groups.iter().map(|g| g.total).sum()
}

/// Group by key in first-appearance order, then stable-sort by total descending
fn rank_by_total<K, I>(rows: I) -> Vec<GroupTotal<K>>
where
    K: Eq + Hash + Copy,
    I: IntoIterator<Item = (K, u64)>,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<GroupTotal<K>> = Vec::new();

    for (key, count) in rows {
        let position = *positions.entry(key).or_insert_with(|| {
            groups.push(GroupTotal { key, total: 0 });
            groups.len() - 1
        });
        groups[position].total += count;
    }

    groups.sort_by(|a, b| b.total.cmp(&a.total));
    groups
}
