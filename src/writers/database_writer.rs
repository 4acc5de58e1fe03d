use crate::error::{ClimateError, Result};
use crate::models::{Measurement, Station};
use crate::utils::constants::DEFAULT_IMPORT_BATCH;
use crate::utils::dates::format_date;
use crate::writers::schema::create_schema;
use rusqlite::{params, Connection};
use std::path::Path;
use tracing::debug;

/// Writes stations and measurements into a fresh SQLite store.
pub struct DatabaseWriter {
    conn: Connection,
    batch_size: usize,
}

impl DatabaseWriter {
    /// Create the store at `path`. Refuses to touch an existing file unless
    /// `overwrite` is set, in which case the file is replaced.
    pub fn create(path: &Path, overwrite: bool) -> Result<Self> {
        if path.exists() {
            if !overwrite {
                return Err(ClimateError::InvalidFormat(format!(
                    "Output {} already exists (use --force to replace it)",
                    path.display()
                )));
            }
            std::fs::remove_file(path)?;
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Self::from_connection(Connection::open(path)?)
    }

    pub fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(create_schema())?;
        Ok(Self {
            conn,
            batch_size: DEFAULT_IMPORT_BATCH,
        })
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn write_stations(&mut self, stations: &[Station]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO station (id, station, name, elevation, latitude, longitude)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for s in stations {
                stmt.execute(params![
                    s.id,
                    s.station,
                    s.name,
                    s.elevation,
                    s.latitude,
                    s.longitude
                ])?;
            }
        }
        tx.commit()?;
        debug!(count = stations.len(), "Wrote stations");
        Ok(stations.len())
    }

    pub fn write_measurements(&mut self, measurements: &[Measurement]) -> Result<usize> {
        for chunk in measurements.chunks(self.batch_size) {
            let tx = self.conn.transaction()?;
            {
                let mut stmt = tx.prepare(
                    "INSERT INTO measurement (id, station, date, prcp, tobs)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                )?;
                for m in chunk {
                    stmt.execute(params![
                        m.id,
                        m.station,
                        format_date(m.date),
                        m.precipitation,
                        m.tobs
                    ])?;
                }
            }
            tx.commit()?;
            debug!(rows = chunk.len(), "Committed measurement batch");
        }
        Ok(measurements.len())
    }

    pub fn into_connection(self) -> Connection {
        self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readers::DatabaseReader;
    use chrono::NaiveDate;

    #[test]
    fn test_written_rows_read_back() -> Result<()> {
        let mut writer = DatabaseWriter::from_connection(Connection::open_in_memory()?)?
            .with_batch_size(1);
        let date = NaiveDate::from_ymd_opt(2017, 8, 23).unwrap();

        writer.write_stations(&[Station::new(
            1,
            "S1".to_string(),
            "Station One".to_string(),
            10.0,
            21.3,
            -157.8,
        )])?;
        writer.write_measurements(&[
            Measurement::new(1, "S1".to_string(), date, Some(0.5), 80.0),
            Measurement::new(2, "S1".to_string(), date.pred_opt().unwrap(), None, 79.0),
        ])?;

        let reader = DatabaseReader::from_connection(writer.into_connection());
        let tables = reader.read_all()?;
        assert_eq!(tables.stations.len(), 1);
        assert_eq!(tables.measurements.len(), 2);
        assert_eq!(tables.measurements[1].precipitation, None);
        assert_eq!(tables.last_date, date);
        Ok(())
    }

    #[test]
    fn test_create_refuses_existing_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("store.sqlite");
        std::fs::write(&path, b"")?;

        assert!(DatabaseWriter::create(&path, false).is_err());
        assert!(DatabaseWriter::create(&path, true).is_ok());
        Ok(())
    }
}
