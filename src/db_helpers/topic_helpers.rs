use sqlx::{Sqlite, SqlitePool};

use crate::{errors::RequestError, models::Topic};

pub async fn list_topics_in_db(pool: &SqlitePool) -> Result<Vec<Topic>, RequestError> {
    let topics = sqlx::query_as::<Sqlite, Topic>("SELECT slug, description FROM topics")
        .fetch_all(pool)
        .await?;
    Ok(topics)
}

pub async fn topic_exists_in_db(pool: &SqlitePool, slug: &str) -> Result<bool, RequestError> {
    let row: Option<(String,)> = sqlx::query_as("SELECT slug FROM topics WHERE slug = $1")
        .bind(slug)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db_helpers::test_support::seeded_pool;

    #[tokio::test]
    async fn lists_every_seeded_topic() {
        let pool = seeded_pool().await;
        let topics = list_topics_in_db(&pool).await.unwrap();
        assert_eq!(topics.len(), 3);
        assert!(topics.iter().any(|topic| topic.slug == "mitch"));
    }

    #[tokio::test]
    async fn topic_existence() {
        let pool = seeded_pool().await;
        assert!(topic_exists_in_db(&pool, "paper").await.unwrap());
        assert!(!topic_exists_in_db(&pool, "dogs").await.unwrap());
    }
}
