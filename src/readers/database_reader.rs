use crate::error::{ClimateError, Result};
use crate::models::{Measurement, Station};
use crate::utils::dates::parse_iso_date;
use chrono::NaiveDate;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use tracing::{debug, info};

/// Everything read from the backing store at startup.
#[derive(Debug, Clone)]
pub struct LoadedTables {
    pub stations: Vec<Station>,
    pub measurements: Vec<Measurement>,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}

/// Reads the `station` and `measurement` tables from an SQLite store.
pub struct DatabaseReader {
    conn: Connection,
}

impl DatabaseReader {
    /// Open an existing store read-only. A missing file is an error.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ClimateError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("database not found: {}", path.display()),
            )));
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!(path = %path.display(), "Opened backing store");
        Ok(Self { conn })
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn read_all(&self) -> Result<LoadedTables> {
        let stations = self.read_stations()?;
        let measurements = self.read_measurements()?;
        let (first_date, last_date) = self.read_date_bounds()?;

        info!(
            stations = stations.len(),
            measurements = measurements.len(),
            first_date = %first_date,
            last_date = %last_date,
            "Loaded dataset"
        );

        Ok(LoadedTables {
            stations,
            measurements,
            first_date,
            last_date,
        })
    }

    pub fn read_stations(&self) -> Result<Vec<Station>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, station, name, elevation, latitude, longitude
             FROM station
             ORDER BY id",
        )?;
        let stations = stmt
            .query_map([], |row| {
                Ok(Station {
                    id: row.get(0)?,
                    station: row.get(1)?,
                    name: row.get(2)?,
                    elevation: row.get(3)?,
                    latitude: row.get(4)?,
                    longitude: row.get(5)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(stations)
    }

    pub fn read_measurements(&self) -> Result<Vec<Measurement>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, station, date, prcp, tobs
             FROM measurement
             ORDER BY id",
        )?;
        let mut rows = stmt.query([])?;
        let mut measurements = Vec::new();

        while let Some(row) = rows.next()? {
            let raw_date: String = row.get(2)?;
            let date = parse_iso_date(&raw_date)?;
            measurements.push(Measurement {
                id: row.get(0)?,
                station: row.get(1)?,
                date,
                precipitation: row.get(3)?,
                tobs: row.get(4)?,
            });
        }

        Ok(measurements)
    }

    /// `min(date)` and `max(date)` over the measurement table.
    pub fn read_date_bounds(&self) -> Result<(NaiveDate, NaiveDate)> {
        let (first, last): (Option<String>, Option<String>) = self.conn.query_row(
            "SELECT min(date), max(date) FROM measurement",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        match (first, last) {
            (Some(first), Some(last)) => Ok((parse_iso_date(&first)?, parse_iso_date(&last)?)),
            _ => Err(ClimateError::EmptyDataset(
                "measurement table has no rows".to_string(),
            )),
        }
    }
}
