use crate::error::{ClimateError, Result};
use crate::models::{Measurement, Station};
use std::collections::{HashMap, HashSet};
use validator::Validate;

#[derive(Debug, Clone, Default)]
pub struct IntegrityReport {
    pub total_stations: usize,
    pub total_measurements: usize,
    pub missing_precipitation: usize,
    pub violations: Vec<IntegrityViolation>,
    pub station_statistics: HashMap<String, StationStatistics>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegrityViolation {
    pub station: String,
    pub violation_type: ViolationType,
    pub details: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationType {
    DuplicateStation,
    UnknownStation,
    InvalidCoordinates,
}

#[derive(Debug, Clone, Default)]
pub struct StationStatistics {
    pub total_records: usize,
    pub precipitation_records: usize,
    pub min_tobs: Option<f64>,
    pub max_tobs: Option<f64>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Turn the first violation into the matching error.
    pub fn into_result(self) -> Result<Self> {
        let Some(first) = self.violations.first() else {
            return Ok(self);
        };
        Err(match first.violation_type {
            ViolationType::DuplicateStation => ClimateError::DuplicateStation {
                station: first.station.clone(),
            },
            ViolationType::UnknownStation => ClimateError::StationNotFound {
                station: first.station.clone(),
            },
            ViolationType::InvalidCoordinates => ClimateError::Integrity(first.details.clone()),
        })
    }
}

/// Checks the loaded tables before any view is derived from them.
pub struct IntegrityChecker;

impl IntegrityChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn check_integrity(
        &self,
        stations: &[Station],
        measurements: &[Measurement],
    ) -> IntegrityReport {
        let mut report = IntegrityReport {
            total_stations: stations.len(),
            total_measurements: measurements.len(),
            ..Default::default()
        };

        let mut known = HashSet::with_capacity(stations.len());
        for station in stations {
            if !known.insert(station.station.as_str()) {
                report.violations.push(IntegrityViolation {
                    station: station.station.clone(),
                    violation_type: ViolationType::DuplicateStation,
                    details: format!("Station code {} appears more than once", station.station),
                });
            }
            if station.validate().is_err() {
                report.violations.push(IntegrityViolation {
                    station: station.station.clone(),
                    violation_type: ViolationType::InvalidCoordinates,
                    details: format!(
                        "Station {} has invalid metadata (lat {}, lon {})",
                        station.station, station.latitude, station.longitude
                    ),
                });
            }
        }

        let mut reported_unknown = HashSet::new();
        for measurement in measurements {
            if !known.contains(measurement.station.as_str()) {
                // Report each dangling code once
                if reported_unknown.insert(measurement.station.as_str()) {
                    report.violations.push(IntegrityViolation {
                        station: measurement.station.clone(),
                        violation_type: ViolationType::UnknownStation,
                        details: format!(
                            "Measurement {} on {} references unknown station {}",
                            measurement.id, measurement.date, measurement.station
                        ),
                    });
                }
                continue;
            }

            let stats = report
                .station_statistics
                .entry(measurement.station.clone())
                .or_default();
            stats.total_records += 1;
            match measurement.precipitation {
                Some(_) => stats.precipitation_records += 1,
                None => report.missing_precipitation += 1,
            }
            let tobs = measurement.tobs;
            stats.min_tobs = Some(stats.min_tobs.map_or(tobs, |t| t.min(tobs)));
            stats.max_tobs = Some(stats.max_tobs.map_or(tobs, |t| t.max(tobs)));
        }

        report
    }

    pub fn generate_summary(&self, report: &IntegrityReport) -> String {
        let mut summary = String::new();

        summary.push_str("Data Integrity Report\n");
        summary.push_str("=====================\n");
        summary.push_str(&format!("Stations: {}\n", report.total_stations));
        summary.push_str(&format!("Measurements: {}\n", report.total_measurements));
        summary.push_str(&format!(
            "Missing precipitation readings: {}\n",
            report.missing_precipitation
        ));

        if !report.station_statistics.is_empty() {
            summary.push_str("\nPer-station records:\n");
            let mut codes: Vec<&String> = report.station_statistics.keys().collect();
            codes.sort();
            for code in codes {
                let stats = &report.station_statistics[code];
                summary.push_str(&format!(
                    "  {}: {} records, {} with precipitation, tobs {}..{}\n",
                    code,
                    stats.total_records,
                    stats.precipitation_records,
                    format_tobs(stats.min_tobs),
                    format_tobs(stats.max_tobs)
                ));
            }
            summary.push('\n');
        }

        if report.is_clean() {
            summary.push_str("No integrity violations found\n");
        } else {
            summary.push_str(&format!("Violations: {}\n", report.violations.len()));
            for violation in report.violations.iter().take(10) {
                summary.push_str(&format!("  - {}\n", violation.details));
            }
            if report.violations.len() > 10 {
                summary.push_str(&format!(
                    "  ... and {} more\n",
                    report.violations.len() - 10
                ));
            }
        }

        summary
    }
}

fn format_tobs(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |t| format!("{:.1}", t))
}

impl Default for IntegrityChecker {
    fn default() -> Self {
        Self::new()
    }
}
