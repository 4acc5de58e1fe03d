use crate::error::{ClimateError, Result};
use crate::models::Station;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use validator::Validate;

#[derive(Debug, Deserialize)]
struct StationCsvRow {
    station: String,
    name: String,
    latitude: f64,
    longitude: f64,
    elevation: f64,
}

/// Reads `station,name,latitude,longitude,elevation` CSV files.
pub struct StationReader;

impl StationReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_stations(&self, path: &Path) -> Result<Vec<Station>> {
        let file = std::fs::File::open(path)?;
        self.read_from(file)
    }

    /// Surrogate ids are assigned from 1 in file order.
    pub fn read_from<R: Read>(&self, input: R) -> Result<Vec<Station>> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);
        let mut stations = Vec::new();

        for (index, row) in reader.deserialize::<StationCsvRow>().enumerate() {
            let row = row?;
            if row.station.is_empty() {
                return Err(ClimateError::InvalidFormat(format!(
                    "Empty station code on data row {}",
                    index + 1
                )));
            }

            let station = Station::new(
                index as i64 + 1,
                row.station,
                row.name,
                row.elevation,
                row.latitude,
                row.longitude,
            );
            station.validate()?;
            stations.push(station);
        }

        Ok(stations)
    }
}

impl Default for StationReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATIONS_CSV: &str = "\
station,name,latitude,longitude,elevation
USC00519397,\"WAIKIKI 717.2, HI US\",21.2716,-157.8168,3
USC00513117,\"KANEOHE 838.1, HI US\",21.4234,-157.8015,14.6
";

    #[test]
    fn test_read_stations() -> Result<()> {
        let stations = StationReader::new().read_from(STATIONS_CSV.as_bytes())?;

        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].id, 1);
        assert_eq!(stations[0].station, "USC00519397");
        assert_eq!(stations[0].name, "WAIKIKI 717.2, HI US");
        assert_eq!(stations[0].elevation, 3.0);
        assert_eq!(stations[1].id, 2);
        assert!((stations[1].latitude - 21.4234).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_out_of_range_latitude_rejected() {
        let csv = "station,name,latitude,longitude,elevation\nS1,Bad,95.0,10.0,1\n";
        let err = StationReader::new().read_from(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ClimateError::Validation(_)));
    }

    #[test]
    fn test_missing_column_rejected() {
        let csv = "station,name,latitude,longitude\nS1,Short,21.0,-157.0\n";
        let err = StationReader::new().read_from(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ClimateError::Csv(_)));
    }
}
