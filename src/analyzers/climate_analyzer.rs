use crate::models::{Measurement, TemperatureSummary};
use crate::processors::Dataset;
use crate::utils::dates::format_date;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Mean precipitation per date across all reporting stations.
///
/// Stations carry equal weight, so this approximates areal precipitation
/// rather than a spatial total. Missing readings are skipped; a date with no
/// readings at all maps to `None`.
pub fn precipitation_by_date(dataset: &Dataset) -> BTreeMap<String, Option<f64>> {
    dataset
        .by_date()
        .map(|(date, rows)| {
            let mean = mean(rows.iter().filter_map(|m| m.precipitation));
            (format_date(date), mean)
        })
        .collect()
}

/// TMIN, TMAX and TAVG of observed temperature for `start..=end`.
pub fn temperature_summary(
    dataset: &Dataset,
    start: NaiveDate,
    end: NaiveDate,
) -> TemperatureSummary {
    summarize_tobs(dataset.in_range(start, end))
}

/// Single-pass min/max/mean over observed temperature.
pub fn summarize_tobs<'a, I>(measurements: I) -> TemperatureSummary
where
    I: IntoIterator<Item = &'a Measurement>,
{
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0f64;
    let mut count = 0usize;

    for measurement in measurements {
        min = min.min(measurement.tobs);
        max = max.max(measurement.tobs);
        sum += measurement.tobs;
        count += 1;
    }

    if count == 0 {
        return TemperatureSummary::empty();
    }

    TemperatureSummary {
        tmin: Some(min),
        tmax: Some(max),
        tavg: Some(sum / count as f64),
        count,
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0f64, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
