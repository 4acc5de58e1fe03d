pub mod measurement;
pub mod station;
pub mod summary;

pub use measurement::{Measurement, TobsRow};
pub use station::{Station, StationRow};
pub use summary::TemperatureSummary;
