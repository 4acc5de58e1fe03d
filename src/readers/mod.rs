pub mod database_reader;
pub mod measurement_reader;
pub mod station_reader;

pub use database_reader::{DatabaseReader, LoadedTables};
pub use measurement_reader::MeasurementReader;
pub use station_reader::StationReader;
