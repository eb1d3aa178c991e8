//! Service layer hosting the author and post repositories.
//!
//! `QuillService` wraps `QuillDb` (raw database access). All repo methods
//! are implemented as `impl QuillService` blocks under `repos/`.
//!
//! Every mutation follows the same order:
//! 1. Run the validators for each assigned attribute
//! 2. Stamp the timestamp column the mutation owns
//! 3. Execute SQL
//! 4. Read the stored row back

use quill_config::DatabaseConfig;
use quill_core::errors::CoreError;

use crate::QuillDb;
use crate::error::DatabaseError;

pub struct QuillService {
    db: QuillDb,
}

impl QuillService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = QuillDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create a service from the `[database]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let db = QuillDb::open(config).await?;
        Ok(Self { db })
    }

    /// Create from an existing `QuillDb`.
    #[must_use]
    pub const fn from_db(db: QuillDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &QuillDb {
        &self.db
    }
}

/// Log a rejected assignment and convert it for the caller.
pub(crate) fn rejected(err: CoreError) -> DatabaseError {
    tracing::warn!(
        entity = %err.entity(),
        field = err.field(),
        reason = %err,
        "attribute assignment rejected"
    );
    DatabaseError::Validation(err)
}
