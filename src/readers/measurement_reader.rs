use crate::error::Result;
use crate::models::Measurement;
use crate::utils::dates::parse_iso_date;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct MeasurementCsvRow {
    station: String,
    date: String,
    prcp: Option<f64>,
    tobs: f64,
}

/// Reads `station,date,prcp,tobs` CSV files. An empty `prcp` cell is a
/// missing reading.
pub struct MeasurementReader;

impl MeasurementReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_measurements(&self, path: &Path) -> Result<Vec<Measurement>> {
        let file = std::fs::File::open(path)?;
        self.read_from(file)
    }

    pub fn read_from<R: Read>(&self, input: R) -> Result<Vec<Measurement>> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);
        let mut measurements = Vec::new();

        for (index, row) in reader.deserialize::<MeasurementCsvRow>().enumerate() {
            let row = row?;
            measurements.push(Measurement::new(
                index as i64 + 1,
                row.station,
                parse_iso_date(&row.date)?,
                row.prcp,
                row.tobs,
            ));
        }

        Ok(measurements)
    }
}

impl Default for MeasurementReader {
    fn default() -> Self {
        Self::new()
    }
}
