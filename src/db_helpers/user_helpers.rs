use sqlx::{Sqlite, SqlitePool};

use crate::{errors::RequestError, models::User};

pub async fn list_users_in_db(pool: &SqlitePool) -> Result<Vec<User>, RequestError> {
    let users = sqlx::query_as::<Sqlite, User>("SELECT username, name, avatar_url FROM users")
        .fetch_all(pool)
        .await?;
    Ok(users)
}

pub async fn get_user_by_username_in_db(
    pool: &SqlitePool,
    username: &str,
) -> Result<User, RequestError> {
    let user = sqlx::query_as::<Sqlite, User>(
        "SELECT username, name, avatar_url FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    match user {
        Some(user) => Ok(user),
        None => Err(RequestError::NotFound("User not found")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db_helpers::test_support::seeded_pool;

    #[tokio::test]
    async fn lists_every_seeded_user() {
        let pool = seeded_pool().await;
        let users = list_users_in_db(&pool).await.unwrap();
        assert_eq!(users.len(), 4);
    }

    #[tokio::test]
    async fn fetches_a_single_user() {
        let pool = seeded_pool().await;
        let user = get_user_by_username_in_db(&pool, "lurker").await.unwrap();
        assert_eq!(user.name, "do_nothing");

        let missing = get_user_by_username_in_db(&pool, "nobody").await;
        assert!(matches!(missing, Err(RequestError::NotFound("User not found"))));
    }
}
