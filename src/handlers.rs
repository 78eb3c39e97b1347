use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query,
    },
    http::{header, StatusCode, Uri},
    response::IntoResponse,
    Extension, Json,
};
use sqlx::SqlitePool;

use crate::{
    data_formats::{
        ArticleCommentsWrapper, ArticleQueryParams, ArticleWrapper, CommentRequest,
        CommentWrapper, MultipleArticlesWrapper, TopicsWrapper, UserWrapper, UsersWrapper,
        VoteRequest,
    },
    db_helpers::{
        add_comment_to_article_in_db, apply_comment_vote_delta_in_db, apply_vote_delta_in_db,
        delete_comment_in_db, get_article_by_id_in_db, get_comments_for_article_in_db,
        get_user_by_username_in_db, list_all_articles, list_topics_in_db, list_users_in_db,
    },
    errors::RequestError,
    models::{Article, ArticleWithCount},
    JsonResponse,
};

type JsonResult<T> = Result<JsonResponse<T>, RequestError>;

const ENDPOINTS: &str = include_str!("../endpoints.json");

/// Path ids must be integers; anything else is rejected before touching the store.
fn parse_id(raw: &str) -> Result<i64, RequestError> {
    raw.parse::<i64>().map_err(|_| RequestError::InvalidRequest)
}

// ----------------- Helper Handlers -----------------
pub async fn alive() -> &'static str {
    "alive"
}

pub async fn not_found(uri: Uri) -> RequestError {
    tracing::debug!("no route for {}", uri);
    RequestError::NotFound("Route not found")
}

pub async fn get_endpoints() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], ENDPOINTS)
}

// ----------------- Topic Handlers -----------------
pub async fn get_topics(Extension(pool): Extension<Arc<SqlitePool>>) -> JsonResult<TopicsWrapper> {
    let topics = list_topics_in_db(&pool).await?;
    Ok((StatusCode::OK, Json(TopicsWrapper { topics })))
}

// ----------------- Article Handlers -----------------
pub async fn list_articles(
    Extension(pool): Extension<Arc<SqlitePool>>,
    params: Result<Query<ArticleQueryParams>, QueryRejection>,
) -> JsonResult<MultipleArticlesWrapper> {
    let Query(params) = params?;
    let articles = list_all_articles(&pool, params).await?;
    Ok((StatusCode::OK, Json(MultipleArticlesWrapper { articles })))
}

pub async fn get_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
) -> JsonResult<ArticleWrapper<ArticleWithCount>> {
    let article_id = parse_id(&article_id)?;
    let article = get_article_by_id_in_db(&pool, article_id).await?;
    Ok((StatusCode::OK, Json(ArticleWrapper { article })))
}

pub async fn update_article_votes(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
    payload: Result<Json<VoteRequest>, JsonRejection>,
) -> JsonResult<ArticleWrapper<Article>> {
    let article_id = parse_id(&article_id)?;
    let Json(request) = payload?;
    let delta = request.validate()?;
    let article = apply_vote_delta_in_db(&pool, article_id, delta).await?;
    Ok((StatusCode::OK, Json(ArticleWrapper { article })))
}

// ----------------- Comment Handlers -----------------
pub async fn get_article_comments(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
) -> JsonResult<ArticleCommentsWrapper> {
    let article_id = parse_id(&article_id)?;
    let comments = get_comments_for_article_in_db(&pool, article_id).await?;
    Ok((StatusCode::OK, Json(ArticleCommentsWrapper { comments })))
}

pub async fn post_article_comment(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
    payload: Result<Json<CommentRequest>, JsonRejection>,
) -> JsonResult<CommentWrapper> {
    let article_id = parse_id(&article_id)?;
    let Json(request) = payload?;
    let comment = request.validate()?;
    let comment = add_comment_to_article_in_db(&pool, article_id, comment).await?;
    Ok((StatusCode::CREATED, Json(CommentWrapper { comment })))
}

pub async fn update_comment_votes(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(comment_id): Path<String>,
    payload: Result<Json<VoteRequest>, JsonRejection>,
) -> JsonResult<CommentWrapper> {
    let comment_id = parse_id(&comment_id)?;
    let Json(request) = payload?;
    let delta = request.validate()?;
    let comment = apply_comment_vote_delta_in_db(&pool, comment_id, delta).await?;
    Ok((StatusCode::OK, Json(CommentWrapper { comment })))
}

pub async fn delete_comment(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(comment_id): Path<String>,
) -> Result<StatusCode, RequestError> {
    let comment_id = parse_id(&comment_id)?;
    delete_comment_in_db(&pool, comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ----------------- User Handlers -----------------
pub async fn get_users(Extension(pool): Extension<Arc<SqlitePool>>) -> JsonResult<UsersWrapper> {
    let users = list_users_in_db(&pool).await?;
    Ok((StatusCode::OK, Json(UsersWrapper { users })))
}

pub async fn get_user(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(username): Path<String>,
) -> JsonResult<UserWrapper> {
    let user = get_user_by_username_in_db(&pool, &username).await?;
    Ok((StatusCode::OK, Json(UserWrapper { user })))
}
