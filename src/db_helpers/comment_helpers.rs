use sqlx::{Sqlite, SqlitePool};

use crate::{
    data_formats::NewComment,
    errors::{is_foreign_key_violation, RequestError},
    models::Comment,
};

use super::article_exists_in_db;

/// Lists an article's comments, newest first.
///
/// An existing article with no comments yields an empty list; a missing
/// article is `NotFound`.
pub async fn get_comments_for_article_in_db(
    pool: &SqlitePool,
    article_id: i64,
) -> Result<Vec<Comment>, RequestError> {
    if !article_exists_in_db(pool, article_id).await? {
        return Err(RequestError::NotFound("Not found"));
    }
    let result = sqlx::query_as::<Sqlite, Comment>(
        r#"
        SELECT comment_id, body, article_id, author, votes, created_at
        FROM comments
        WHERE article_id = $1
        ORDER BY created_at DESC, comment_id DESC
        "#,
    )
    .bind(article_id)
    .fetch_all(pool)
    .await?;
    Ok(result)
}

pub async fn add_comment_to_article_in_db(
    pool: &SqlitePool,
    article_id: i64,
    NewComment { username, body }: NewComment,
) -> Result<Comment, RequestError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query_as::<Sqlite, Comment>(
        r#"
        INSERT INTO comments (body, article_id, author)
        VALUES ($1, $2, $3)
        RETURNING comment_id, body, article_id, author, votes, created_at
        "#,
    )
    .bind(body)
    .bind(article_id)
    .bind(username)
    .fetch_one(&mut tx)
    .await
    .map_err(|e| {
        if is_foreign_key_violation(&e) {
            RequestError::NotFound("Not found")
        } else {
            RequestError::DatabaseError(e)
        }
    })?;
    tx.commit().await?;

    tracing::debug!(comment_id = result.comment_id, article_id, "comment added");
    Ok(result)
}

pub async fn apply_comment_vote_delta_in_db(
    pool: &SqlitePool,
    comment_id: i64,
    delta: i64,
) -> Result<Comment, RequestError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query_as::<Sqlite, Comment>(
        r#"
        UPDATE comments
        SET votes = votes + $1
        WHERE comment_id = $2
        RETURNING comment_id, body, article_id, author, votes, created_at
        "#,
    )
    .bind(delta)
    .bind(comment_id)
    .fetch_optional(&mut tx)
    .await?;

    let comment = match result {
        Some(comment) => comment,
        None => return Err(RequestError::NotFound("Comment not found")),
    };
    tx.commit().await?;
    Ok(comment)
}

pub async fn delete_comment_in_db(pool: &SqlitePool, comment_id: i64) -> Result<(), RequestError> {
    let mut tx = pool.begin().await?;
    let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
        .bind(comment_id)
        .execute(&mut tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RequestError::NotFound("Comment not found"));
    }
    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db_helpers::test_support::seeded_pool;

    fn new_comment(username: &str, body: &str) -> NewComment {
        NewComment {
            username: username.to_string(),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn comments_are_newest_first() {
        let pool = seeded_pool().await;
        let comments = get_comments_for_article_in_db(&pool, 1).await.unwrap();
        assert_eq!(comments.len(), 11);
        assert!(comments.iter().all(|comment| comment.article_id == 1));
        assert!(comments
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
    }

    #[tokio::test]
    async fn article_without_comments_is_empty_not_missing() {
        let pool = seeded_pool().await;
        assert!(get_comments_for_article_in_db(&pool, 2)
            .await
            .unwrap()
            .is_empty());

        let result = get_comments_for_article_in_db(&pool, 9999).await;
        assert!(matches!(result, Err(RequestError::NotFound("Not found"))));
    }

    #[tokio::test]
    async fn inserts_a_comment() {
        let pool = seeded_pool().await;
        let comment = add_comment_to_article_in_db(&pool, 2, new_comment("butter_bridge", "x"))
            .await
            .unwrap();
        assert_eq!(comment.author, "butter_bridge");
        assert_eq!(comment.body, "x");
        assert_eq!(comment.article_id, 2);
        assert_eq!(comment.votes, 0);
    }

    #[tokio::test]
    async fn unresolved_references_are_not_found() {
        let pool = seeded_pool().await;
        let result = add_comment_to_article_in_db(&pool, 1, new_comment("nobody", "x")).await;
        assert!(matches!(result, Err(RequestError::NotFound("Not found"))));

        let result =
            add_comment_to_article_in_db(&pool, 9999, new_comment("butter_bridge", "x")).await;
        assert!(matches!(result, Err(RequestError::NotFound("Not found"))));
    }

    #[tokio::test]
    async fn deletes_once() {
        let pool = seeded_pool().await;
        delete_comment_in_db(&pool, 1).await.unwrap();
        let result = delete_comment_in_db(&pool, 1).await;
        assert!(matches!(
            result,
            Err(RequestError::NotFound("Comment not found"))
        ));
    }

    #[tokio::test]
    async fn comment_votes_change() {
        let pool = seeded_pool().await;
        let comment = apply_comment_vote_delta_in_db(&pool, 1, -1).await.unwrap();
        assert_eq!(comment.votes, 15);

        let result = apply_comment_vote_delta_in_db(&pool, 9999, 1).await;
        assert!(matches!(
            result,
            Err(RequestError::NotFound("Comment not found"))
        ));
    }
}
