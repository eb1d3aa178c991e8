//! Post repository.
//!
//! No title passes the title rule, so `create_post` and title updates are
//! unreachable through the validating types today. Tests seed posts with
//! raw inserts and exercise the remaining operations against them.

use chrono::Utc;

use quill_core::entities::{NewPost, Post};
use quill_core::enums::Category;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_category, parse_datetime, parse_optional_datetime};
use crate::service::{QuillService, rejected};
use crate::updates::post::PostUpdate;

const POST_COLUMNS: &str = "id, title, content, category, summary, created_at, updated_at";

fn row_to_post(row: &libsql::Row) -> Result<Post, DatabaseError> {
    Ok(Post::from_stored(
        row.get::<i64>(0)?,
        row.get::<String>(1)?,
        get_opt_string(row, 2)?,
        parse_category(get_opt_string(row, 3)?.as_deref())?,
        get_opt_string(row, 4)?,
        parse_datetime(&row.get::<String>(5)?)?,
        parse_optional_datetime(get_opt_string(row, 6)?.as_deref())?,
    ))
}

impl QuillService {
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails.
    pub async fn create_post(&self, post: &NewPost) -> Result<Post, DatabaseError> {
        let now = Utc::now();

        self.db()
            .execute(
                "INSERT INTO posts (title, content, category, summary, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    post.title(),
                    post.content(),
                    post.category().map(Category::as_str),
                    post.summary(),
                    now.to_rfc3339(),
                ],
            )
            .await?;

        let id = self.db().last_insert_rowid();
        tracing::debug!(id, title = post.title(), "created post");
        self.get_post(id).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no post has this id.
    pub async fn get_post(&self, id: i64) -> Result<Post, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {POST_COLUMNS} FROM posts WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_post(&row)
    }

    /// List posts oldest first, optionally narrowed to one category.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_posts(
        &self,
        category: Option<Category>,
        limit: u32,
    ) -> Result<Vec<Post>, DatabaseError> {
        let mut rows = match category {
            Some(category) => {
                self.db()
                    .query(
                        &format!(
                            "SELECT {POST_COLUMNS} FROM posts WHERE category = ?1 ORDER BY id LIMIT ?2"
                        ),
                        libsql::params![category.as_str(), i64::from(limit)],
                    )
                    .await?
            }
            None => {
                self.db()
                    .query(
                        &format!("SELECT {POST_COLUMNS} FROM posts ORDER BY id LIMIT ?1"),
                        [i64::from(limit)],
                    )
                    .await?
            }
        };

        let mut posts = Vec::new();
        while let Some(row) = rows.next().await? {
            posts.push(row_to_post(&row)?);
        }
        Ok(posts)
    }

    /// Assign the `Some` fields of `update` through the post's validating
    /// setters, then persist them and stamp `updated_at`.
    ///
    /// Nothing is written if any assignment is rejected. An empty update
    /// returns the stored post untouched.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the post does not exist, or
    /// `DatabaseError::Validation` if an assignment is rejected.
    pub async fn update_post(&self, id: i64, update: PostUpdate) -> Result<Post, DatabaseError> {
        let mut post = self.get_post(id).await?;
        if update.is_empty() {
            return Ok(post);
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(title) = update.title {
            post.set_title(title.as_str()).map_err(rejected)?;
            params.push(title.into());
            sets.push(format!("title = ?{}", params.len()));
        }
        if let Some(content) = update.content {
            post.set_content(content.as_str()).map_err(rejected)?;
            params.push(content.into());
            sets.push(format!("content = ?{}", params.len()));
        }
        if let Some(category) = update.category {
            post.set_category(&category).map_err(rejected)?;
            // Store the canonical spelling the validator resolved to.
            let stored = post.category().map_or(category, |c| c.as_str().to_string());
            params.push(stored.into());
            sets.push(format!("category = ?{}", params.len()));
        }
        if let Some(summary) = update.summary {
            post.set_summary(summary.as_str()).map_err(rejected)?;
            params.push(summary.into());
            sets.push(format!("summary = ?{}", params.len()));
        }

        params.push(Utc::now().to_rfc3339().into());
        sets.push(format!("updated_at = ?{}", params.len()));

        params.push(id.into());
        let sql = format!(
            "UPDATE posts SET {} WHERE id = ?{}",
            sets.join(", "),
            params.len()
        );

        self.db()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        tracing::debug!(id, "updated post");
        self.get_post(id).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no post has this id.
    pub async fn delete_post(&self, id: i64) -> Result<(), DatabaseError> {
        let deleted = self
            .db()
            .execute("DELETE FROM posts WHERE id = ?1", [id])
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(id, "deleted post");
        Ok(())
    }
}
