pub mod constants;
pub mod dates;
pub mod progress;

pub use constants::*;
pub use dates::{format_date, one_year_before, parse_iso_date};
pub use progress::ProgressReporter;
