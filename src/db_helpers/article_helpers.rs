use sqlx::{Sqlite, SqlitePool};

use crate::data_formats::ArticleQueryParams;
use crate::errors::RequestError;
use crate::models::{Article, ArticleSummary, ArticleWithCount};

use super::topic_exists_in_db;

const SINGLE_ARTICLE_QUERY: &str = r#"
            SELECT articles.article_id                      AS "article_id",
                   articles.title                           AS "title",
                   articles.topic                           AS "topic",
                   articles.author                          AS "author",
                   articles.body                            AS "body",
                   articles.created_at                      AS "created_at",
                   articles.votes                           AS "votes",
                   articles.article_img_url                 AS "article_img_url",
                   Count(comments.comment_id)               AS "comment_count"
            FROM   articles
                LEFT JOIN comments
                        ON comments.article_id = articles.article_id
            WHERE  articles.article_id = $1
            GROUP  BY articles.article_id
"#;

// ORDER BY is appended after validation; it cannot be bound as a parameter.
const ARTICLE_LIST_QUERY: &str = r#"
            SELECT articles.article_id                      AS "article_id",
                   articles.title                           AS "title",
                   articles.topic                           AS "topic",
                   articles.author                          AS "author",
                   articles.created_at                      AS "created_at",
                   articles.votes                           AS "votes",
                   articles.article_img_url                 AS "article_img_url",
                   Count(comments.comment_id)               AS "comment_count"
            FROM   articles
                LEFT JOIN comments
                        ON comments.article_id = articles.article_id
            WHERE  ( articles.topic = $1
                    OR $1 IS NULL )
            GROUP  BY articles.article_id
"#;

/// Columns an article listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    Author,
    Title,
    ArticleId,
    Topic,
    #[default]
    CreatedAt,
    Votes,
    ArticleImgUrl,
    CommentCount,
}

impl SortBy {
    pub fn parse(value: Option<&str>) -> Result<Self, RequestError> {
        let sort_by = match value {
            None => Self::default(),
            Some("author") => Self::Author,
            Some("title") => Self::Title,
            Some("article_id") => Self::ArticleId,
            Some("topic") => Self::Topic,
            Some("created_at") => Self::CreatedAt,
            Some("votes") => Self::Votes,
            Some("article_img_url") => Self::ArticleImgUrl,
            Some("comment_count") => Self::CommentCount,
            Some(_) => return Err(RequestError::InvalidSort),
        };
        Ok(sort_by)
    }

    fn column(self) -> &'static str {
        match self {
            Self::Author => "articles.author",
            Self::Title => "articles.title",
            Self::ArticleId => "articles.article_id",
            Self::Topic => "articles.topic",
            Self::CreatedAt => "articles.created_at",
            Self::Votes => "articles.votes",
            Self::ArticleImgUrl => "articles.article_img_url",
            Self::CommentCount => "comment_count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Case-sensitive: only `ASC` and `DESC` are accepted.
    pub fn parse(value: Option<&str>) -> Result<Self, RequestError> {
        match value {
            None => Ok(Self::default()),
            Some("ASC") => Ok(Self::Asc),
            Some("DESC") => Ok(Self::Desc),
            Some(_) => Err(RequestError::InvalidOrder),
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

fn order_by_clause(sort_by: SortBy, order: SortOrder) -> String {
    format!(
        " ORDER BY {} {}, articles.article_id ASC",
        sort_by.column(),
        order.keyword()
    )
}

pub async fn get_article_by_id_in_db(
    pool: &SqlitePool,
    article_id: i64,
) -> Result<ArticleWithCount, RequestError> {
    let result = sqlx::query_as::<Sqlite, ArticleWithCount>(SINGLE_ARTICLE_QUERY)
        .bind(article_id)
        .fetch_optional(pool)
        .await?;

    match result {
        Some(article) => Ok(article),
        None => Err(RequestError::NotFound("Not found")),
    }
}

pub async fn article_exists_in_db(pool: &SqlitePool, article_id: i64) -> Result<bool, RequestError> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT article_id FROM articles WHERE article_id = $1")
        .bind(article_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

pub async fn list_all_articles(
    pool: &SqlitePool,
    ArticleQueryParams {
        sort_by,
        order,
        topic,
    }: ArticleQueryParams,
) -> Result<Vec<ArticleSummary>, RequestError> {
    let sort_by = SortBy::parse(sort_by.as_deref())?;
    let order = SortOrder::parse(order.as_deref())?;
    let query = format!("{ARTICLE_LIST_QUERY}{}", order_by_clause(sort_by, order));
    tracing::debug!(?sort_by, ?order, ?topic, "listing articles");

    let articles = sqlx::query_as::<Sqlite, ArticleSummary>(&query)
        .bind(topic.as_deref())
        .fetch_all(pool)
        .await?;

    if articles.is_empty() {
        if let Some(topic) = &topic {
            if !topic_exists_in_db(pool, topic).await? {
                return Err(RequestError::NotFound("Not found"));
            }
        }
    }
    Ok(articles)
}

/// Adds `delta` to the article's votes in a single statement.
pub async fn apply_vote_delta_in_db(
    pool: &SqlitePool,
    article_id: i64,
    delta: i64,
) -> Result<Article, RequestError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query_as::<Sqlite, Article>(
        r#"
        UPDATE articles
        SET votes = votes + $1
        WHERE article_id = $2
        RETURNING article_id, title, topic, author, body, created_at, votes, article_img_url
        "#,
    )
    .bind(delta)
    .bind(article_id)
    .fetch_optional(&mut tx)
    .await?;

    let article = match result {
        Some(article) => article,
        None => return Err(RequestError::NotFound("Not found")),
    };
    tx.commit().await?;

    Ok(article)
}
