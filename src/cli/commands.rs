use crate::cli::args::{Cli, Commands};
use crate::config::{Overrides, Settings};
use crate::error::Result;
use crate::processors::{Dataset, IntegrityChecker};
use crate::readers::{DatabaseReader, MeasurementReader, StationReader};
use crate::server::{run_server, AppState};
use crate::utils::dates::format_date;
use crate::utils::progress::ProgressReporter;
use crate::writers::DatabaseWriter;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Commands::Serve {
            database,
            bind,
            public_url,
        } => {
            let settings = Settings::load(
                cli.config.as_deref(),
                Overrides {
                    database,
                    bind,
                    public_url,
                },
            )?;
            let addr = settings.bind_addr()?;
            info!(database = %settings.database.display(), "Loading dataset");

            let dataset = load_dataset(settings.database.clone()).await?;
            let state = AppState::new(dataset, settings.public_url).shared();

            run_server(state, addr).await?;
        }

        Commands::Import {
            stations,
            measurements,
            output,
            force,
        } => {
            import(&stations, &measurements, &output, force)?;
        }

        Commands::Info { database } => {
            let settings = Settings::load(
                cli.config.as_deref(),
                Overrides {
                    database,
                    ..Default::default()
                },
            )?;
            let path = settings.database.clone();
            let tables =
                tokio::task::spawn_blocking(move || DatabaseReader::open(&path)?.read_all())
                    .await??;

            let checker = IntegrityChecker::new();
            let report = checker.check_integrity(&tables.stations, &tables.measurements);
            println!("{}", checker.generate_summary(&report));

            let dataset = Dataset::build(tables)?;
            println!("Database: {}", settings.database.display());
            println!("First date: {}", format_date(dataset.first_date()));
            println!("Last date: {}", format_date(dataset.last_date()));
            println!(
                "Trailing year: {} to {} ({} observations)",
                format_date(dataset.start_date()),
                format_date(dataset.last_date()),
                dataset.last_12_months().len()
            );
        }
    }

    Ok(())
}

/// Read the store on a blocking thread and derive the views.
pub async fn load_dataset(path: PathBuf) -> Result<Dataset> {
    let tables = tokio::task::spawn_blocking(move || DatabaseReader::open(&path)?.read_all())
        .await??;
    Dataset::build(tables)
}

fn import(stations: &Path, measurements: &Path, output: &Path, force: bool) -> Result<()> {
    let progress = ProgressReporter::new_spinner("Reading stations...", false);

    let station_rows = StationReader::new().read_stations(stations)?;
    progress.set_message("Reading measurements...");
    let measurement_rows = MeasurementReader::new().read_measurements(measurements)?;

    let checker = IntegrityChecker::new();
    let report = checker.check_integrity(&station_rows, &measurement_rows);
    progress.println(&checker.generate_summary(&report));
    report.into_result()?;

    progress.set_message("Writing database...");
    let mut writer = DatabaseWriter::create(output, force)?;
    writer.write_stations(&station_rows)?;
    writer.write_measurements(&measurement_rows)?;

    progress.finish_with_message(&format!(
        "Imported {} stations and {} measurements into {}",
        station_rows.len(),
        measurement_rows.len(),
        output.display()
    ));
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A second initialisation (e.g. in tests) is not an error
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
