//! Connection seam over the warehouse backend.

use async_trait::async_trait;

/// Error raised by a warehouse backend.
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An open warehouse session that executes statements one at a time.
#[async_trait]
pub trait WarehouseSession: Send {
    /// Executes a single statement, discarding any result set.
    async fn execute(&mut self, sql: &str) -> Result<(), BackendError>;

    /// Releases the session. Called exactly once, on every outcome.
    async fn close(&mut self) -> Result<(), BackendError>;
}

/// A warehouse that can open sessions.
#[async_trait]
pub trait Warehouse: Send + Sync {
    /// Session type produced by [`Warehouse::connect`].
    type Session: WarehouseSession;

    /// Authenticates and opens a new session.
    async fn connect(&self) -> Result<Self::Session, BackendError>;
}
