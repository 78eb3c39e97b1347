mod article_helpers;
mod comment_helpers;
mod topic_helpers;
mod user_helpers;

pub use article_helpers::*;
pub use comment_helpers::*;
pub use topic_helpers::*;
pub use user_helpers::*;

#[cfg(test)]
pub(crate) mod test_support {
    use sqlx::SqlitePool;

    /// Fresh in-memory database with the fixture loaded.
    pub async fn seeded_pool() -> SqlitePool {
        let pool = crate::connect_in_memory()
            .await
            .expect("could not open in-memory database");
        crate::seed::seed(&pool, &crate::seed::test_data())
            .await
            .expect("could not seed database");
        pool
    }
}
