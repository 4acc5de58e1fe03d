use serde::{Serialize, Serializer};

/// TMIN, TMAX and TAVG of observed temperature over a date range.
///
/// All three are `None` when the range matched no measurements, which
/// serializes as `[null, null, null]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TemperatureSummary {
    pub tmin: Option<f64>,
    pub tmax: Option<f64>,
    pub tavg: Option<f64>,
    pub count: usize,
}

impl TemperatureSummary {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Serialize for TemperatureSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (self.tmin, self.tmax, self.tavg).serialize(serializer)
    }
}
