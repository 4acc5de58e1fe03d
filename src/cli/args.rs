use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "climate-api")]
#[command(about = "Read-only JSON API over station precipitation and temperature observations")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        help = "Settings file [default: climate-api.toml if present]"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the dataset and serve the HTTP API
    Serve {
        #[arg(short, long, help = "SQLite store with station and measurement tables")]
        database: Option<PathBuf>,

        #[arg(short, long, help = "Listen address, e.g. 127.0.0.1:5000")]
        bind: Option<String>,

        #[arg(long, help = "Base URL used for links on the index page")]
        public_url: Option<String>,
    },

    /// Build an SQLite store from station and measurement CSV files
    Import {
        #[arg(short, long, help = "Stations CSV (station,name,latitude,longitude,elevation)")]
        stations: PathBuf,

        #[arg(short, long, help = "Measurements CSV (station,date,prcp,tobs)")]
        measurements: PathBuf,

        #[arg(short, long, help = "Output SQLite file")]
        output: PathBuf,

        #[arg(long, help = "Replace the output file if it exists")]
        force: bool,
    },

    /// Load the dataset and print its bounds and integrity report
    Info {
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
}
