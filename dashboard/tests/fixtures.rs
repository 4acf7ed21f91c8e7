//! Test fixtures for dashboard integration tests

use shared::{RentalTable, parse_rentals_str};

/// Two rows from the worked example: one early-hour cold ride, one warm afternoon
pub const TWO_ROW_CSV: &str = "\
yr,mnth,hr,temp,cnt
2011,January,0,5.0,10
2011,January,11,25.0,20
";

/// A wider dataset spanning both years
pub const MULTI_YEAR_CSV: &str = "\
instant,yr,mnth,hr,temp,cnt
1,2011,January,0,3.2,16
2,2011,January,8,6.1,120
3,2011,February,17,11.4,340
4,2011,July,17,31.0,610
5,2011,July,13,28.2,450
6,2012,March,8,14.0,300
7,2012,March,18,18.0,520
8,2012,December,3,2.5,12
";

pub fn two_row_table() -> RentalTable {
    parse_rentals_str(TWO_ROW_CSV).unwrap()
}

pub fn multi_year_table() -> RentalTable {
    parse_rentals_str(MULTI_YEAR_CSV).unwrap()
}
