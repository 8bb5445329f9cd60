//! Warehouse connection parameters.

use tickload_types::{ConfigError, require_env};

use crate::TableRef;

/// Default name of the target table.
pub const DEFAULT_TABLE: &str = "TICKERS";

/// Connection parameters for the warehouse, read once per run.
#[derive(Clone, PartialEq, Eq)]
pub struct WarehouseConfig {
    /// Login name.
    pub user: String,
    /// Login password.
    pub password: String,
    /// Account identifier (`<org>-<account>` or legacy locator).
    pub account: String,
    /// Role assumed by the session.
    pub role: String,
    /// Virtual warehouse running the statements.
    pub warehouse: String,
    /// Database holding the target table.
    pub database: String,
    /// Schema holding the target table.
    pub schema: String,
}

impl WarehouseConfig {
    /// Reads every `SNOWFLAKE_*` variable from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first variable that is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            user: require_env("SNOWFLAKE_USER")?,
            password: require_env("SNOWFLAKE_PASSWORD")?,
            account: require_env("SNOWFLAKE_ACCOUNT")?,
            role: require_env("SNOWFLAKE_ROLE")?,
            warehouse: require_env("SNOWFLAKE_WAREHOUSE")?,
            database: require_env("SNOWFLAKE_DATABASE")?,
            schema: require_env("SNOWFLAKE_SCHEMA")?,
        })
    }

    /// Returns the fully qualified `<database>.<schema>.<table>` reference.
    ///
    /// # Errors
    ///
    /// Returns an error if any part is not a plain unquoted identifier.
    pub fn table(&self, table: &str) -> Result<TableRef, ConfigError> {
        TableRef::new(&self.database, &self.schema, table)
    }
}

impl std::fmt::Debug for WarehouseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WarehouseConfig")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("account", &self.account)
            .field("role", &self.role)
            .field("warehouse", &self.warehouse)
            .field("database", &self.database)
            .field("schema", &self.schema)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WarehouseConfig {
        WarehouseConfig {
            user: "loader".to_string(),
            password: "hunter2".to_string(),
            account: "acme-prod".to_string(),
            role: "LOADER".to_string(),
            warehouse: "COMPUTE_WH".to_string(),
            database: "MARKET".to_string(),
            schema: "REFERENCE".to_string(),
        }
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", config());
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("acme-prod"));
    }

    #[test]
    fn test_table_reference() {
        let table = config().table(DEFAULT_TABLE).unwrap();
        assert_eq!(table.to_string(), "MARKET.REFERENCE.TICKERS");
    }

    #[test]
    fn test_table_rejects_injection() {
        let mut config = config();
        config.schema = "REFERENCE; DROP TABLE X".to_string();
        assert!(matches!(
            config.table(DEFAULT_TABLE),
            Err(ConfigError::Invalid { .. })
        ));
    }
}
