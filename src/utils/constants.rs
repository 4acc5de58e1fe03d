/// Date format used in the store, in path parameters and in JSON output
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the trailing observation window in months
pub const TRAILING_WINDOW_MONTHS: u32 = 12;

/// API routes
pub const API_PREFIX: &str = "/api/v1.0";
pub const PRECIPITATION_ROUTE: &str = "/api/v1.0/precipitation";
pub const STATIONS_ROUTE: &str = "/api/v1.0/stations";
pub const TOBS_ROUTE: &str = "/api/v1.0/tobs";

/// Configuration defaults
pub const DEFAULT_DATABASE: &str = "Resources/hawaii.sqlite";
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_PUBLIC_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_CONFIG_FILE: &str = "climate-api.toml";
pub const ENV_PREFIX: &str = "CLIMATE_API";

/// Rows per transaction when importing CSV data
pub const DEFAULT_IMPORT_BATCH: usize = 5000;
