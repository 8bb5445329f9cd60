//! Snowflake backend.

use async_trait::async_trait;
use snowflake_connector_rs::{SnowflakeAuthMethod, SnowflakeClient, SnowflakeClientConfig};
use std::time::Duration;
use tracing::debug;

use crate::{BackendError, Warehouse, WarehouseConfig, WarehouseSession};

const QUERY_TIMEOUT: Duration = Duration::from_secs(300);

/// Opens password-authenticated Snowflake sessions.
pub struct SnowflakeWarehouse {
    client: SnowflakeClient,
}

impl SnowflakeWarehouse {
    /// Builds a client from the connection parameters. No network call is made.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be constructed.
    pub fn new(config: &WarehouseConfig) -> Result<Self, BackendError> {
        let client = SnowflakeClient::new(
            &config.user,
            SnowflakeAuthMethod::Password(config.password.clone()),
            SnowflakeClientConfig {
                account: config.account.clone(),
                role: Some(config.role.clone()),
                warehouse: Some(config.warehouse.clone()),
                database: Some(config.database.clone()),
                schema: Some(config.schema.clone()),
                timeout: Some(QUERY_TIMEOUT),
            },
        )?;
        Ok(Self { client })
    }
}

impl std::fmt::Debug for SnowflakeWarehouse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowflakeWarehouse").finish_non_exhaustive()
    }
}

#[async_trait]
impl Warehouse for SnowflakeWarehouse {
    type Session = SnowflakeSession;

    async fn connect(&self) -> Result<SnowflakeSession, BackendError> {
        let session = self.client.create_session().await?;
        debug!("snowflake session opened");
        Ok(SnowflakeSession {
            inner: Some(session),
        })
    }
}

/// An open Snowflake session.
pub struct SnowflakeSession {
    inner: Option<snowflake_connector_rs::SnowflakeSession>,
}

impl std::fmt::Debug for SnowflakeSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowflakeSession")
            .field("open", &self.inner.is_some())
            .finish()
    }
}

#[async_trait]
impl WarehouseSession for SnowflakeSession {
    async fn execute(&mut self, sql: &str) -> Result<(), BackendError> {
        let session = self.inner.as_ref().ok_or("session is closed")?;
        let rows = session.query(sql).await?;
        debug!(rows = rows.len(), "statement executed");
        Ok(())
    }

    /// Releases the session by dropping the connector handle; the connector
    /// has no explicit logout. Later calls to `execute` fail.
    async fn close(&mut self) -> Result<(), BackendError> {
        if self.inner.take().is_some() {
            debug!("snowflake session released");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_closed_session_rejects_statements() {
        let mut session = SnowflakeSession { inner: None };
        assert!(session.close().await.is_ok());

        let err = session.execute("SELECT 1").await.unwrap_err();
        assert_eq!(err.to_string(), "session is closed");
        assert_eq!(format!("{session:?}"), "SnowflakeSession { open: false }");
    }
}
