//! Full-replace table loading.

use thiserror::Error;
use tickload_types::{MissingPolicy, Schema, TickerRecord, normalize};
use tracing::{debug, error, info, warn};

use crate::session::{BackendError, Warehouse, WarehouseSession};
use crate::sql::{self, TableRef};

/// Default number of rows per `INSERT` statement.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Step of a table load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadStage {
    /// Opening the session.
    Connect,
    /// Creating the table or adding the run date column.
    EnsureTable,
    /// Removing the previous contents.
    Truncate,
    /// Opening the insert transaction.
    Begin,
    /// Inserting a batch (1-based).
    Insert {
        /// Batch number.
        batch: usize,
    },
    /// Committing the inserted rows.
    Commit,
}

impl std::fmt::Display for LoadStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connect => f.write_str("connect"),
            Self::EnsureTable => f.write_str("ensure table"),
            Self::Truncate => f.write_str("truncate"),
            Self::Begin => f.write_str("begin"),
            Self::Insert { batch } => write!(f, "insert batch {batch}"),
            Self::Commit => f.write_str("commit"),
        }
    }
}

/// A table load that failed at a known stage.
#[derive(Error, Debug)]
#[error("Warehouse load failed at {stage}: {source}")]
pub struct WarehouseError {
    /// Stage that failed.
    pub stage: LoadStage,
    /// Backend error.
    #[source]
    pub source: BackendError,
}

impl WarehouseError {
    fn new(stage: LoadStage, source: BackendError) -> Self {
        Self { stage, source }
    }

    /// Returns true if the previous table contents were already removed.
    #[must_use]
    pub const fn table_modified(&self) -> bool {
        matches!(
            self.stage,
            LoadStage::Begin | LoadStage::Insert { .. } | LoadStage::Commit
        )
    }
}

/// Outcome of a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Target table.
    pub table: TableRef,
    /// Rows inserted.
    pub rows: usize,
    /// `INSERT` statements executed.
    pub batches: usize,
}

/// Replaces the contents of one table with a set of records.
#[derive(Debug, Clone)]
pub struct TableLoader {
    table: TableRef,
    batch_size: usize,
}

impl TableLoader {
    /// Creates a loader for `table` with the default batch size.
    #[must_use]
    pub const fn new(table: TableRef) -> Self {
        Self {
            table,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Sets the number of rows per `INSERT`. Zero is treated as one.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Returns the target table.
    #[must_use]
    pub const fn table(&self) -> &TableRef {
        &self.table
    }

    /// Returns the batch size.
    #[must_use]
    pub const fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Creates the table if needed, truncates it and inserts every record
    /// projected onto `schema` in a single transaction.
    ///
    /// The session is closed whether or not the load succeeds.
    ///
    /// # Errors
    ///
    /// Returns the failing stage and backend error. See
    /// [`WarehouseError::table_modified`] for the state left behind.
    pub async fn load<W: Warehouse>(
        &self,
        warehouse: &W,
        records: &[TickerRecord],
        schema: &Schema,
    ) -> Result<LoadReport, WarehouseError> {
        info!(table = %self.table, "connecting to warehouse");
        let mut session = warehouse
            .connect()
            .await
            .map_err(|e| WarehouseError::new(LoadStage::Connect, e))?;

        let result = self.run(&mut session, records, schema).await;

        match session.close().await {
            Ok(()) => debug!("warehouse session closed"),
            Err(e) => warn!(error = %e, "failed to close warehouse session"),
        }

        match result {
            Ok(report) => {
                info!(
                    table = %report.table,
                    rows = report.rows,
                    batches = report.batches,
                    "load committed"
                );
                Ok(report)
            }
            Err(e) => {
                error!(
                    table = %self.table,
                    stage = %e.stage,
                    table_modified = e.table_modified(),
                    error = %e.source,
                    "warehouse load failed"
                );
                Err(e)
            }
        }
    }

    async fn run<S: WarehouseSession>(
        &self,
        session: &mut S,
        records: &[TickerRecord],
        schema: &Schema,
    ) -> Result<LoadReport, WarehouseError> {
        session
            .execute(&sql::create_table(&self.table, schema))
            .await
            .map_err(|e| WarehouseError::new(LoadStage::EnsureTable, e))?;
        if let Some(alter) = sql::add_run_date_column(&self.table, schema) {
            if let Err(e) = session.execute(&alter).await {
                warn!(error = %e, "could not add run date column");
            }
        }

        session
            .execute(&sql::truncate(&self.table))
            .await
            .map_err(|e| WarehouseError::new(LoadStage::Truncate, e))?;
        info!(table = %self.table, "table truncated");

        session
            .execute("BEGIN")
            .await
            .map_err(|e| WarehouseError::new(LoadStage::Begin, e))?;

        match self.insert_all(session, records, schema).await {
            Ok(batches) => Ok(LoadReport {
                table: self.table.clone(),
                rows: records.len(),
                batches,
            }),
            Err(e) => {
                if let Err(rollback) = session.execute("ROLLBACK").await {
                    warn!(error = %rollback, "rollback failed");
                }
                Err(e)
            }
        }
    }

    async fn insert_all<S: WarehouseSession>(
        &self,
        session: &mut S,
        records: &[TickerRecord],
        schema: &Schema,
    ) -> Result<usize, WarehouseError> {
        let rows = normalize(records, schema, MissingPolicy::AbsentEmpty);
        let total = rows.len();
        let mut inserted = 0;
        let mut batches = 0;

        for chunk in rows.chunks(self.batch_size) {
            batches += 1;
            session
                .execute(&sql::insert(&self.table, schema, chunk))
                .await
                .map_err(|e| WarehouseError::new(LoadStage::Insert { batch: batches }, e))?;
            inserted += chunk.len();
            info!("Inserted {inserted}/{total} rows...");
        }

        session
            .execute("COMMIT")
            .await
            .map_err(|e| WarehouseError::new(LoadStage::Commit, e))?;
        Ok(batches)
    }
}
