//! Display a date the way post pages do

use crate::helpers::format_display_date;

/// Print the long display form of `value`
pub fn run(value: &str) {
    println!("{}", format_display_date(value));
}
