//! # quill-db
//!
//! libSQL persistence adapter for Quill authors and posts.
//!
//! The adapter owns everything the entities leave to the datastore:
//! generated integer ids, the unique author name, and timestamps
//! (`created_at` on insert, `updated_at` on every update). Attribute
//! validation happens before any SQL is issued.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;
use quill_config::DatabaseConfig;

/// Central database handle.
///
/// Wraps a libSQL database and a single connection.
pub struct QuillDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl QuillDb {
    /// Open a local database at the given path with foreign keys enabled.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        Self::open(&DatabaseConfig {
            path: path.to_string(),
            ..DatabaseConfig::default()
        })
        .await
    }

    /// Open the database described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(&config.path).build().await?;
        let conn = db.connect()?;

        if config.foreign_keys {
            // Must be set per connection in SQLite.
            conn.execute("PRAGMA foreign_keys = ON", ())
                .await
                .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;
        }

        let quill_db = Self { db, conn };
        quill_db.run_migrations().await?;
        tracing::info!(path = %config.path, "opened database");
        Ok(quill_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Execute a statement and return the number of affected rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the statement fails.
    pub async fn execute(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<u64, DatabaseError> {
        Ok(self.conn.execute(sql, params).await?)
    }

    /// Run a query and return its rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the query fails.
    pub async fn query(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<libsql::Rows, DatabaseError> {
        Ok(self.conn.query(sql, params).await?)
    }

    /// Rowid of the most recent successful INSERT on this connection.
    #[must_use]
    pub fn last_insert_rowid(&self) -> i64 {
        self.conn.last_insert_rowid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to create an in-memory database for testing.
    async fn test_db() -> QuillDb {
        QuillDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in ["authors", "posts"] {
            let mut rows = db
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        // Run migrations again; should not fail
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn author_name_is_unique_and_required() {
        let db = test_db().await;

        db.execute("INSERT INTO authors (name) VALUES ('Ada')", ())
            .await
            .unwrap();

        let duplicate = db
            .execute("INSERT INTO authors (name) VALUES ('Ada')", ())
            .await;
        assert!(duplicate.is_err(), "duplicate name should be rejected");

        let missing = db
            .execute("INSERT INTO authors (phone_number) VALUES ('5551234567')", ())
            .await;
        assert!(missing.is_err(), "NULL name should be rejected");
    }

    #[tokio::test]
    async fn post_title_is_required() {
        let db = test_db().await;
        let result = db
            .execute("INSERT INTO posts (content) VALUES ('body')", ())
            .await;
        assert!(result.is_err(), "NULL title should be rejected");
    }

    #[tokio::test]
    async fn created_at_defaults_when_not_supplied() {
        let db = test_db().await;
        db.execute("INSERT INTO posts (title) VALUES ('Top 3')", ())
            .await
            .unwrap();

        let mut rows = db
            .query("SELECT created_at, updated_at FROM posts", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        let created = row.get::<String>(0).unwrap();
        assert!(helpers::parse_datetime(&created).is_ok());
        assert!(row.get::<Option<String>>(1).unwrap().is_none());
    }

    #[tokio::test]
    async fn file_backed_database_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quill.db");
        let path = path.to_str().unwrap();

        {
            let db = QuillDb::open_local(path).await.unwrap();
            db.execute("INSERT INTO authors (name) VALUES ('Mary Shelley')", ())
                .await
                .unwrap();
        }

        let db = QuillDb::open_local(path).await.unwrap();
        let mut rows = db.query("SELECT count(*) FROM authors", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }
}
