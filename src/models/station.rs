use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Station {
    /// Surrogate key from the store; never exposed by the API.
    pub id: i64,

    #[validate(length(min = 1))]
    pub station: String,

    pub name: String,

    pub elevation: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

/// Public listing row: `[station, name, elevation, latitude, longitude]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRow(pub String, pub String, pub f64, pub f64, pub f64);

impl Station {
    pub fn new(
        id: i64,
        station: String,
        name: String,
        elevation: f64,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id,
            station,
            name,
            elevation,
            latitude,
            longitude,
        }
    }

    pub fn to_row(&self) -> StationRow {
        StationRow(
            self.station.clone(),
            self.name.clone(),
            self.elevation,
            self.latitude,
            self.longitude,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waikiki() -> Station {
        Station::new(
            1,
            "USC00519397".to_string(),
            "WAIKIKI 717.2, HI US".to_string(),
            3.0,
            21.2716,
            -157.8168,
        )
    }

    #[test]
    fn test_station_validation() {
        assert!(waikiki().validate().is_ok());
    }

    #[test]
    fn test_invalid_coordinates() {
        let mut station = waikiki();
        station.latitude = 91.0;
        assert!(station.validate().is_err());

        let mut station = waikiki();
        station.longitude = -181.0;
        assert!(station.validate().is_err());
    }

    #[test]
    fn test_empty_station_code_rejected() {
        let mut station = waikiki();
        station.station.clear();
        assert!(station.validate().is_err());
    }

    #[test]
    fn test_row_drops_surrogate_id() {
        let row = waikiki().to_row();
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(
            json,
            serde_json::json!(["USC00519397", "WAIKIKI 717.2, HI US", 3.0, 21.2716, -157.8168])
        );
    }
}
