//! Configuration module for Parking Core.
//!
//! Loads configuration from YAML files and environment variables.

use std::path::Path;

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::{ParkingError, ParkingResult};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub billing: BillingConfig,
    #[serde(default)]
    pub tickets: TicketConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Ticket store configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    /// Table holding ticket records.
    pub table: String,
}

/// Tariff configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BillingConfig {
    /// Price of one hour of parking.
    pub price_per_hour: f64,
    /// Length of a billing slot. Partial slots are charged in full.
    pub slot_minutes: u32,
}

/// Ticket id generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TicketConfig {
    /// Number of decimal digits in a ticket id.
    pub id_length: usize,
    /// How many ids to draw before giving up on a free one.
    pub max_id_attempts: u32,
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
    /// Filter directives used when RUST_LOG is unset.
    pub filter: String,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PARKING_*)
    /// 2. config/local.yaml (if exists)
    /// 3. config/default.yaml (if exists)
    /// 4. Built-in defaults, per field
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."))
    }

    /// Same as [`Config::load`], with the `config/` directory looked up under `root`.
    pub fn load_from(root: &Path) -> Result<Self, ConfigError> {
        let dir = root.join("config");
        let config = ConfigLoader::builder()
            // Start with default config
            .add_source(File::from(dir.join("default")).required(false))
            // Layer on local overrides
            .add_source(File::from(dir.join("local")).required(false))
            // Layer on environment variables with PARKING_ prefix
            .add_source(
                Environment::with_prefix("PARKING")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Reject settings the service cannot run with.
    pub fn validate(&self) -> ParkingResult<()> {
        if !is_sql_identifier(&self.database.table) {
            return Err(ParkingError::Config(format!(
                "database.table must be a plain identifier, got {:?}",
                self.database.table
            )));
        }
        if !self.billing.price_per_hour.is_finite() || self.billing.price_per_hour < 0.0 {
            return Err(ParkingError::Config(format!(
                "billing.price_per_hour must be a non-negative number, got {}",
                self.billing.price_per_hour
            )));
        }
        if self.billing.slot_minutes == 0 {
            return Err(ParkingError::Config(
                "billing.slot_minutes must be at least 1".to_string(),
            ));
        }
        if self.tickets.id_length == 0 {
            return Err(ParkingError::Config(
                "tickets.id_length must be at least 1".to_string(),
            ));
        }
        if self.tickets.max_id_attempts == 0 {
            return Err(ParkingError::Config(
                "tickets.max_id_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// The table name is spliced into SQL, so only `[A-Za-z_][A-Za-z0-9_]*` is accepted.
fn is_sql_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://parking.db?mode=rwc".to_string(),
            table: "tickets".to_string(),
        }
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            price_per_hour: 10.0,
            slot_minutes: 15,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json: true,
            filter: "parking_core=info,tower_http=info".to_string(),
        }
    }
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            id_length: 6,
            max_id_attempts: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.table, "tickets");
        assert_eq!(config.billing.price_per_hour, 10.0);
        assert_eq!(config.billing.slot_minutes, 15);
        assert_eq!(config.tickets.id_length, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_table_from_env_without_config_files() {
        let root = std::env::temp_dir().join("parking-core-no-config");
        std::env::set_var("PARKING__DATABASE__TABLE", "lot_tickets");
        let loaded = Config::load_from(&root);
        std::env::remove_var("PARKING__DATABASE__TABLE");

        let config = loaded.unwrap();
        assert_eq!(config.database.table, "lot_tickets");
        assert_eq!(config.database.url, DatabaseConfig::default().url);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.billing.slot_minutes, 15);
        assert!(config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = ConfigLoader::builder()
            .set_override("billing.price_per_hour", 12.0)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.billing.price_per_hour, 12.0);
        assert_eq!(config.billing.slot_minutes, 15);
        assert_eq!(config.tickets.max_id_attempts, 10);
    }

    #[test]
    fn test_rejects_bad_table_name() {
        let mut config = Config::default();
        for table in ["", "1tickets", "tickets; DROP TABLE x", "my-table"] {
            config.database.table = table.to_string();
            assert!(
                matches!(config.validate(), Err(ParkingError::Config(_))),
                "accepted {table:?}"
            );
        }

        config.database.table = "_parking_tickets2".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_billing() {
        let mut config = Config::default();
        config.billing.slot_minutes = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.billing.price_per_hour = -1.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.billing.price_per_hour = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_ticket_settings() {
        let mut config = Config::default();
        config.tickets.id_length = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.tickets.max_id_attempts = 0;
        assert!(config.validate().is_err());
    }
}
