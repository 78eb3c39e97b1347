use serde::{Deserialize, Serialize};

use crate::models::{ArticleSummary, Comment, Topic, User};

#[derive(Debug, Deserialize, Serialize)]
pub struct TopicsWrapper {
    pub topics: Vec<Topic>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ArticleWrapper<T> {
    pub article: T,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MultipleArticlesWrapper {
    pub articles: Vec<ArticleSummary>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CommentWrapper {
    pub comment: Comment,
}

/// Comments of one article; the envelope key is `articles` on the wire.
#[derive(Debug, Deserialize, Serialize)]
pub struct ArticleCommentsWrapper {
    #[serde(rename = "articles")]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UserWrapper {
    pub user: User,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UsersWrapper {
    pub users: Vec<User>,
}
