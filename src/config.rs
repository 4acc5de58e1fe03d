use config::{Config, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{ClimateError, Result};
use crate::utils::constants::{
    DEFAULT_BIND, DEFAULT_CONFIG_FILE, DEFAULT_DATABASE, DEFAULT_PUBLIC_URL, ENV_PREFIX,
};

/// Runtime settings, layered from defaults, an optional TOML file,
/// `CLIMATE_API_*` environment variables and command-line overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub database: PathBuf,
    pub bind: String,
    /// Base URL used when rendering links on the index page
    pub public_url: String,
}

/// Values supplied on the command line; `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub database: Option<PathBuf>,
    pub bind: Option<String>,
    pub public_url: Option<String>,
}

impl Settings {
    /// Resolve settings. An explicit `config_file` must exist; the default
    /// `climate-api.toml` is optional.
    pub fn load(config_file: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let file_source = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings: Settings = Config::builder()
            .set_default("database", DEFAULT_DATABASE)?
            .set_default("bind", DEFAULT_BIND)?
            .set_default("public_url", DEFAULT_PUBLIC_URL)?
            .add_source(file_source)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .set_override_option(
                "database",
                overrides
                    .database
                    .map(|p| p.to_string_lossy().into_owned()),
            )?
            .set_override_option("bind", overrides.bind)?
            .set_override_option("public_url", overrides.public_url)?
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.bind.parse().map_err(|_| {
            ClimateError::InvalidFormat(format!("Invalid bind address: '{}'", self.bind))
        })
    }

    fn validate(&self) -> Result<()> {
        self.bind_addr()?;
        if self.public_url.trim().is_empty() {
            return Err(ClimateError::InvalidFormat(
                "public_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};

    // Environment variables are process-wide.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_guard() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    struct EnvVar(&'static str);

    impl EnvVar {
        fn set(key: &'static str, value: &str) -> Self {
            std::env::set_var(key, value);
            Self(key)
        }
    }

    impl Drop for EnvVar {
        fn drop(&mut self) {
            std::env::remove_var(self.0);
        }
    }

    #[test]
    fn test_missing_explicit_file_rejected() {
        let _guard = env_guard();
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(Settings::load(Some(&missing), Overrides::default()).is_err());
    }

    #[test]
    fn test_file_and_overrides() -> Result<()> {
        let _guard = env_guard();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "database = \"data/hi.sqlite\"")?;
        writeln!(file, "bind = \"0.0.0.0:8080\"")?;

        let settings = Settings::load(
            Some(file.path()),
            Overrides {
                bind: Some("127.0.0.1:9000".to_string()),
                ..Default::default()
            },
        )?;

        assert_eq!(settings.database, PathBuf::from("data/hi.sqlite"));
        assert_eq!(settings.bind, "127.0.0.1:9000");
        assert_eq!(settings.public_url, DEFAULT_PUBLIC_URL);
        assert_eq!(settings.bind_addr()?.port(), 9000);
        Ok(())
    }

    #[test]
    fn test_invalid_bind_rejected() -> Result<()> {
        let _guard = env_guard();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "bind = \"not-an-address\"")?;

        let err = Settings::load(Some(file.path()), Overrides::default()).unwrap_err();
        assert!(matches!(err, ClimateError::InvalidFormat(_)));
        Ok(())
    }

    #[test]
    fn test_env_between_file_and_overrides() -> Result<()> {
        let _guard = env_guard();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "bind = \"0.0.0.0:8080\"")?;
        let _bind = EnvVar::set("CLIMATE_API_BIND", "127.0.0.1:7000");

        let from_env = Settings::load(Some(file.path()), Overrides::default())?;
        assert_eq!(from_env.bind, "127.0.0.1:7000");

        let overridden = Settings::load(
            Some(file.path()),
            Overrides {
                bind: Some("127.0.0.1:9000".to_string()),
                ..Default::default()
            },
        )?;
        assert_eq!(overridden.bind, "127.0.0.1:9000");
        Ok(())
    }
}
