//! Views derived once from the loaded tables and shared read-only by every
//! request.

use crate::error::{ClimateError, Result};
use crate::models::{Measurement, Station, StationRow, TobsRow};
use crate::processors::IntegrityChecker;
use crate::readers::LoadedTables;
use crate::utils::dates::one_year_before;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Dataset {
    stations: Vec<Station>,
    measurements: Vec<Measurement>,
    by_date: BTreeMap<NaiveDate, Vec<usize>>,
    station_rows: Vec<StationRow>,
    last_12_months: Vec<TobsRow>,
    first_date: NaiveDate,
    last_date: NaiveDate,
    start_date: NaiveDate,
}

impl Dataset {
    /// Check integrity, then build every derived view.
    pub fn build(tables: LoadedTables) -> Result<Self> {
        let checker = IntegrityChecker::new();
        let report = checker.check_integrity(&tables.stations, &tables.measurements);
        if !report.is_clean() {
            warn!("{}", checker.generate_summary(&report));
        }
        report.into_result()?;

        Self::from_parts(
            tables.stations,
            tables.measurements,
            tables.first_date,
            tables.last_date,
        )
    }

    /// Build the views from already-validated tables.
    pub fn from_parts(
        stations: Vec<Station>,
        measurements: Vec<Measurement>,
        first_date: NaiveDate,
        last_date: NaiveDate,
    ) -> Result<Self> {
        if measurements.is_empty() {
            return Err(ClimateError::EmptyDataset(
                "no measurements to derive views from".to_string(),
            ));
        }
        if first_date > last_date {
            return Err(ClimateError::Integrity(format!(
                "first date {} is after last date {}",
                first_date, last_date
            )));
        }

        let start_date = one_year_before(last_date);

        let mut by_date: BTreeMap<NaiveDate, Vec<usize>> = BTreeMap::new();
        for (index, measurement) in measurements.iter().enumerate() {
            by_date.entry(measurement.date).or_default().push(index);
        }

        let last_12_months = measurements
            .iter()
            .filter(|m| m.date >= start_date && m.date <= last_date)
            .map(Measurement::to_tobs_row)
            .collect::<Vec<_>>();

        let station_rows = stations.iter().map(Station::to_row).collect();

        info!(
            dates = by_date.len(),
            trailing_rows = last_12_months.len(),
            start_date = %start_date,
            "Derived dataset views"
        );

        Ok(Self {
            stations,
            measurements,
            by_date,
            station_rows,
            last_12_months,
            first_date,
            last_date,
            start_date,
        })
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Measurements grouped by date, in date order.
    pub fn by_date(&self) -> impl Iterator<Item = (NaiveDate, Vec<&Measurement>)> + '_ {
        self.by_date.iter().map(move |(date, rows)| {
            let group: Vec<&Measurement> = rows.iter().map(|&i| &self.measurements[i]).collect();
            (*date, group)
        })
    }

    /// Measurements dated within `start..=end`. Empty when `start > end`.
    pub fn in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = &Measurement> + '_ {
        let rows = if start <= end {
            Some(self.by_date.range(start..=end))
        } else {
            None
        };
        rows.into_iter()
            .flatten()
            .flat_map(move |(_, rows)| rows.iter().map(move |&i| &self.measurements[i]))
    }

    pub fn station_rows(&self) -> &[StationRow] {
        &self.station_rows
    }

    pub fn last_12_months(&self) -> &[TobsRow] {
        &self.last_12_months
    }

    pub fn first_date(&self) -> NaiveDate {
        self.first_date
    }

    pub fn last_date(&self) -> NaiveDate {
        self.last_date
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tables(measurements: Vec<Measurement>) -> LoadedTables {
        let first_date = measurements.iter().map(|m| m.date).min().unwrap();
        let last_date = measurements.iter().map(|m| m.date).max().unwrap();
        LoadedTables {
            stations: vec![
                Station::new(1, "S1".into(), "Station One".into(), 10.0, 21.3, -157.8),
                Station::new(2, "S2".into(), "Station Two".into(), 3.0, 21.4, -157.7),
            ],
            measurements,
            first_date,
            last_date,
        }
    }

    fn m(id: i64, station: &str, date: NaiveDate, tobs: f64) -> Measurement {
        Measurement::new(id, station.into(), date, Some(0.0), tobs)
    }

    #[test]
    fn test_last_12_months_boundary_inclusive() -> Result<()> {
        let dataset = Dataset::build(tables(vec![
            m(1, "S1", ymd(2016, 8, 22), 70.0),
            m(2, "S1", ymd(2016, 8, 23), 71.0),
            m(3, "S2", ymd(2017, 1, 1), 72.0),
            m(4, "S2", ymd(2017, 8, 23), 73.0),
        ]))?;

        assert_eq!(dataset.start_date(), ymd(2016, 8, 23));
        let dates: Vec<&str> = dataset.last_12_months().iter().map(|r| r.0.as_str()).collect();
        assert_eq!(dates, vec!["2016-08-23", "2017-01-01", "2017-08-23"]);
        Ok(())
    }

    #[test]
    fn test_leap_day_window() -> Result<()> {
        let dataset = Dataset::build(tables(vec![
            m(1, "S1", ymd(2015, 2, 27), 60.0),
            m(2, "S1", ymd(2015, 2, 28), 61.0),
            m(3, "S1", ymd(2016, 2, 29), 62.0),
        ]))?;

        assert_eq!(dataset.start_date(), ymd(2015, 2, 28));
        assert_eq!(dataset.last_12_months().len(), 2);
        Ok(())
    }

    #[test]
    fn test_station_rows_keep_load_order() -> Result<()> {
        let dataset = Dataset::build(tables(vec![m(1, "S1", ymd(2017, 1, 1), 70.0)]))?;
        let codes: Vec<&str> = dataset.station_rows().iter().map(|r| r.0.as_str()).collect();
        assert_eq!(codes, vec!["S1", "S2"]);
        Ok(())
    }

    #[test]
    fn test_in_range_handles_reversed_bounds() -> Result<()> {
        let dataset = Dataset::build(tables(vec![
            m(1, "S1", ymd(2017, 1, 1), 70.0),
            m(2, "S2", ymd(2017, 1, 2), 71.0),
        ]))?;

        assert_eq!(dataset.in_range(ymd(2017, 1, 1), ymd(2017, 1, 2)).count(), 2);
        assert_eq!(dataset.in_range(ymd(2017, 1, 2), ymd(2017, 1, 1)).count(), 0);
        Ok(())
    }

    #[test]
    fn test_by_date_groups_across_stations() -> Result<()> {
        let dataset = Dataset::build(tables(vec![
            m(1, "S1", ymd(2017, 1, 2), 70.0),
            m(2, "S2", ymd(2017, 1, 1), 71.0),
            m(3, "S2", ymd(2017, 1, 2), 72.0),
        ]))?;

        let groups: Vec<(NaiveDate, usize)> =
            dataset.by_date().map(|(d, rows)| (d, rows.len())).collect();
        assert_eq!(groups, vec![(ymd(2017, 1, 1), 1), (ymd(2017, 1, 2), 2)]);
        Ok(())
    }

    #[test]
    fn test_orphan_measurement_fails_build() {
        let err = Dataset::build(tables(vec![m(1, "S7", ymd(2017, 1, 1), 70.0)])).unwrap_err();
        assert!(matches!(err, ClimateError::StationNotFound { .. }));
    }
}
