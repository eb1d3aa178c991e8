//! Shared test utilities for quill-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use crate::QuillDb;
    use crate::service::QuillService;

    /// Create an in-memory QuillService.
    pub async fn test_service() -> QuillService {
        let db = QuillDb::open_local(":memory:").await.unwrap();
        QuillService::from_db(db)
    }

    /// Insert an author row directly, bypassing the validators.
    pub async fn insert_raw_author(
        svc: &QuillService,
        name: &str,
        phone_number: Option<&str>,
    ) -> i64 {
        svc.db()
            .execute(
                "INSERT INTO authors (name, phone_number) VALUES (?1, ?2)",
                libsql::params![name, phone_number],
            )
            .await
            .unwrap();
        svc.db().last_insert_rowid()
    }

    /// Insert a post row directly. Needed because no title passes the
    /// title validator.
    pub async fn insert_raw_post(svc: &QuillService, title: &str, category: Option<&str>) -> i64 {
        svc.db()
            .execute(
                "INSERT INTO posts (title, category) VALUES (?1, ?2)",
                libsql::params![title, category],
            )
            .await
            .unwrap();
        svc.db().last_insert_rowid()
    }
}
