/// SQL schema for the backing store.
///
/// Matches the layout of `hawaii.sqlite`: `date` is ISO `YYYY-MM-DD` text
/// and `prcp` is nullable.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS station (
        id INTEGER PRIMARY KEY NOT NULL,
        station TEXT NOT NULL,
        name TEXT NOT NULL,
        elevation FLOAT NOT NULL,
        latitude FLOAT NOT NULL,
        longitude FLOAT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS measurement (
        id INTEGER PRIMARY KEY NOT NULL,
        station TEXT NOT NULL,
        date TEXT NOT NULL,
        prcp FLOAT,
        tobs FLOAT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_measurement_date ON measurement(date);
    "#
}
