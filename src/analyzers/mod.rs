pub mod climate_analyzer;

pub use climate_analyzer::{precipitation_by_date, summarize_tobs, temperature_summary};
