use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Config file read from the working directory unless another is given.
pub const DEFAULT_CONFIG_FILE: &str = "PollingStation.toml";

/// Prefix of environment variables that override the config file.
pub const ENV_PREFIX: &str = "POLLING_STATION_";

/// The admin password shipped as a default. Anyone who has read this source knows it.
const PLACEHOLDER_ADMIN_PASSWORD: &str = "india123";

/// Application configuration, derived from built-in defaults, then
/// `PollingStation.toml`, then `POLLING_STATION_*` environment variables.
///
/// The admin password is a plain shared secret compared character for character. It is
/// not hashed and there is no rate limiting, so it only keeps honest people out of the
/// admin menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    // non-secrets
    data_file: PathBuf,
    reset_token: String,
    // secrets
    admin_password: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("voting_data.json"),
            reset_token: "CLEAR".to_string(),
            admin_password: PLACEHOLDER_ADMIN_PASSWORD.to_string(),
        }
    }
}

impl Config {
    /// The layered configuration sources. A missing config file is not an error.
    pub fn figment(config_file: &Path) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load the configuration.
    pub fn load(config_file: &Path) -> Result<Self, figment::Error> {
        let config: Self = Self::figment(config_file).extract()?;
        info!("Loaded config, data file is {}", config.data_file.display());
        Ok(config)
    }

    /// Point at a different data file.
    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }

    /// Where the election data is persisted, relative to the working directory.
    /// Configured via `DATA_FILE`.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Text the admin must type to confirm clearing all data.
    /// Configured via `RESET_TOKEN`.
    pub fn reset_token(&self) -> &str {
        &self.reset_token
    }

    /// Whether `attempt` is the admin password. Configured via `ADMIN_PASSWORD`.
    pub fn check_admin_password(&self, attempt: &str) -> bool {
        attempt == self.admin_password
    }

    /// True if nobody has changed the admin password from the shipped default.
    pub fn uses_placeholder_password(&self) -> bool {
        self.admin_password == PLACEHOLDER_ADMIN_PASSWORD
    }
}


#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn defaults_without_file_or_env() {
        Jail::expect_with(|_jail| {
            let config = Config::load(Path::new(DEFAULT_CONFIG_FILE))?;
            assert_eq!(config, Config::default());
            assert_eq!(config.data_file(), Path::new("voting_data.json"));
            assert_eq!(config.reset_token(), "CLEAR");
            assert!(config.uses_placeholder_password());
            Ok(())
        });
    }

    #[test]
    fn file_then_env_override_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                    data_file = "election.json"
                    admin_password = "from-file"
                "#,
            )?;
            let config = Config::load(Path::new(DEFAULT_CONFIG_FILE))?;
            assert_eq!(config.data_file(), Path::new("election.json"));
            assert!(config.check_admin_password("from-file"));
            assert!(!config.uses_placeholder_password());

            jail.set_env("POLLING_STATION_ADMIN_PASSWORD", "from-env");
            jail.set_env("POLLING_STATION_RESET_TOKEN", "WIPE");
            let config = Config::load(Path::new(DEFAULT_CONFIG_FILE))?;
            assert!(config.check_admin_password("from-env"));
            assert!(!config.check_admin_password("from-file"));
            assert_eq!(config.reset_token(), "WIPE");
            assert_eq!(config.data_file(), Path::new("election.json"));
            Ok(())
        });
    }

    #[test]
    fn malformed_file_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file(DEFAULT_CONFIG_FILE, "admin_password = [1, 2]")?;
            assert!(Config::load(Path::new(DEFAULT_CONFIG_FILE)).is_err());
            Ok(())
        });
    }

    #[test]
    fn password_is_exact() {
        let config = Config::example();
        assert!(config.check_admin_password("hunter2"));
        assert!(!config.check_admin_password("hunter2 "));
        assert!(!config.check_admin_password("HUNTER2"));
        assert!(!config.check_admin_password(""));
    }

    #[test]
    fn data_file_can_be_overridden() {
        let config = Config::default().with_data_file("elsewhere.json");
        assert_eq!(config.data_file(), Path::new("elsewhere.json"));
    }
}
