use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::dates::format_date;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub id: i64,
    pub station: String,
    pub date: NaiveDate,
    /// `prcp` in the store. `None` means the station reported no reading.
    pub precipitation: Option<f64>,
    pub tobs: f64,
}

/// Public observation row: `[date, station, tobs]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TobsRow(pub String, pub String, pub f64);

impl Measurement {
    pub fn new(
        id: i64,
        station: String,
        date: NaiveDate,
        precipitation: Option<f64>,
        tobs: f64,
    ) -> Self {
        Self {
            id,
            station,
            date,
            precipitation,
            tobs,
        }
    }

    pub fn date_label(&self) -> String {
        format_date(self.date)
    }

    pub fn to_tobs_row(&self) -> TobsRow {
        TobsRow(self.date_label(), self.station.clone(), self.tobs)
    }
}
