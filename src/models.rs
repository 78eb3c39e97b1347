use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// A stored article row, as returned after a write.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Article {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: NaiveDateTime,
    pub votes: i64,
    pub article_img_url: Option<String>,
}

/// A single article with its derived `comment_count`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ArticleWithCount {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: NaiveDateTime,
    pub votes: i64,
    pub article_img_url: Option<String>,
    pub comment_count: i64,
}

/// Listing shape: no body, comment count included.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ArticleSummary {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub created_at: NaiveDateTime,
    pub votes: i64,
    pub article_img_url: Option<String>,
    pub comment_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub comment_id: i64,
    pub body: String,
    pub article_id: i64,
    pub author: String,
    pub votes: i64,
    pub created_at: NaiveDateTime,
}
