use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::JsonResponse;

// SQLite extended result codes surfaced through `DatabaseError::code`.
const SQLITE_MISMATCH: &str = "20";
const SQLITE_CONSTRAINT_CHECK: &str = "275";
const SQLITE_CONSTRAINT_FOREIGNKEY: &str = "787";
const SQLITE_CONSTRAINT_NOTNULL: &str = "1299";

#[derive(Debug)]
pub enum RequestError {
    InvalidRequest,
    BadRequest,
    NotFound(&'static str),
    InvalidSort,
    InvalidOrder,
    DatabaseError(sqlx::Error),
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct RequestErrorJson {
    pub msg: String,
}

impl RequestErrorJson {
    pub fn new(msg: &str) -> RequestErrorJson {
        RequestErrorJson {
            msg: msg.to_string(),
        }
    }
}

impl From<sqlx::Error> for RequestError {
    fn from(value: sqlx::Error) -> Self {
        Self::DatabaseError(value)
    }
}

impl From<JsonRejection> for RequestError {
    fn from(value: JsonRejection) -> Self {
        tracing::debug!("rejected json body: {}", value);
        Self::BadRequest
    }
}

impl From<QueryRejection> for RequestError {
    fn from(value: QueryRejection) -> Self {
        tracing::debug!("rejected query string: {}", value);
        Self::BadRequest
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> axum::response::Response {
        self.to_json_response().into_response()
    }
}

impl RequestError {
    pub fn to_json_response(&self) -> JsonResponse<RequestErrorJson> {
        let (status_code, msg) = match self {
            RequestError::InvalidRequest => (StatusCode::BAD_REQUEST, "Invalid request"),
            RequestError::BadRequest => (StatusCode::BAD_REQUEST, "Bad request"),
            RequestError::NotFound(message) => (StatusCode::NOT_FOUND, *message),
            RequestError::InvalidSort => (StatusCode::BAD_REQUEST, "Invalid sort query"),
            RequestError::InvalidOrder => (StatusCode::BAD_REQUEST, "Invalid order query"),
            RequestError::DatabaseError(e) => database_error_status(e),
        };
        (status_code, Json(RequestErrorJson::new(msg)))
    }
}

pub(crate) fn is_foreign_key_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db_error) => {
            db_error.code().as_deref() == Some(SQLITE_CONSTRAINT_FOREIGNKEY)
                || db_error.message().contains("FOREIGN KEY constraint failed")
        }
        _ => false,
    }
}

/// Maps a driver error onto a client-facing status using the store's error code.
fn database_error_status(error: &sqlx::Error) -> (StatusCode, &'static str) {
    match error {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Not found"),
        sqlx::Error::Database(_) if is_foreign_key_violation(error) => {
            (StatusCode::NOT_FOUND, "Not found")
        }
        sqlx::Error::Database(db_error) => match db_error.code().as_deref() {
            Some(SQLITE_CONSTRAINT_NOTNULL) | Some(SQLITE_CONSTRAINT_CHECK) => {
                (StatusCode::BAD_REQUEST, "Bad request")
            }
            Some(SQLITE_MISMATCH) => (StatusCode::BAD_REQUEST, "Invalid request"),
            _ => {
                tracing::error!("Database error: {}", db_error);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        },
        e => {
            tracing::error!("Database error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
