//! Author repository: CRUD with name uniqueness.

use chrono::Utc;

use quill_core::entities::{Author, NewAuthor};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_optional_datetime};
use crate::service::{QuillService, rejected};
use crate::updates::author::AuthorUpdate;

const AUTHOR_COLUMNS: &str = "id, name, phone_number, created_at, updated_at";

fn row_to_author(row: &libsql::Row) -> Result<Author, DatabaseError> {
    Ok(Author::from_stored(
        row.get::<i64>(0)?,
        row.get::<String>(1)?,
        get_opt_string(row, 2)?,
        parse_datetime(&row.get::<String>(3)?)?,
        parse_optional_datetime(get_opt_string(row, 4)?.as_deref())?,
    ))
}

impl QuillService {
    /// Insert a validated author. `created_at` is stamped here; `updated_at`
    /// stays NULL until the first update.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::UniqueViolation` if the name is taken.
    pub async fn create_author(&self, author: &NewAuthor) -> Result<Author, DatabaseError> {
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "INSERT INTO authors (name, phone_number, created_at) VALUES (?1, ?2, ?3)",
                libsql::params![author.name(), author.phone_number(), now.to_rfc3339()],
            )
            .await
            .map_err(|e| DatabaseError::from_write(e, "authors", "name", author.name()))?;

        let id = self.db().last_insert_rowid();
        tracing::debug!(id, name = author.name(), "created author");
        self.get_author(id).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no author has this id.
    pub async fn get_author(&self, id: i64) -> Result<Author, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {AUTHOR_COLUMNS} FROM authors WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_author(&row)
    }

    /// Look an author up by their unique name.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn find_author_by_name(&self, name: &str) -> Result<Option<Author>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {AUTHOR_COLUMNS} FROM authors WHERE name = ?1"),
                [name],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_author(&row)?)),
            None => Ok(None),
        }
    }

    /// Oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_authors(&self, limit: u32) -> Result<Vec<Author>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {AUTHOR_COLUMNS} FROM authors ORDER BY id LIMIT ?1"),
                [i64::from(limit)],
            )
            .await?;

        let mut authors = Vec::new();
        while let Some(row) = rows.next().await? {
            authors.push(row_to_author(&row)?);
        }
        Ok(authors)
    }

    /// Assign the `Some` fields of `update` through the author's validating
    /// setters, then persist them and stamp `updated_at`.
    ///
    /// Nothing is written if any assignment is rejected. An empty update
    /// returns the stored author untouched.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the author does not exist,
    /// `DatabaseError::Validation` if an assignment is rejected, or
    /// `DatabaseError::UniqueViolation` if the new name is taken.
    pub async fn update_author(
        &self,
        id: i64,
        update: AuthorUpdate,
    ) -> Result<Author, DatabaseError> {
        let mut author = self.get_author(id).await?;
        if update.is_empty() {
            return Ok(author);
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(name) = update.name {
            author.set_name(name.as_str()).map_err(rejected)?;
            params.push(name.into());
            sets.push(format!("name = ?{}", params.len()));
        }
        if let Some(phone_number) = update.phone_number {
            author
                .set_phone_number(phone_number.as_str())
                .map_err(rejected)?;
            params.push(phone_number.into());
            sets.push(format!("phone_number = ?{}", params.len()));
        }

        params.push(Utc::now().to_rfc3339().into());
        sets.push(format!("updated_at = ?{}", params.len()));

        params.push(id.into());
        let sql = format!(
            "UPDATE authors SET {} WHERE id = ?{}",
            sets.join(", "),
            params.len()
        );

        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await
            .map_err(|e| DatabaseError::from_write(e, "authors", "name", author.name()))?;

        tracing::debug!(id, "updated author");
        self.get_author(id).await
    }

    /// Plain row deletion; no cascade.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no author has this id.
    pub async fn delete_author(&self, id: i64) -> Result<(), DatabaseError> {
        let deleted = self
            .db()
            .execute("DELETE FROM authors WHERE id = ?1", [id])
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(id, "deleted author");
        Ok(())
    }
}
