pub mod config;
mod data_formats;
mod db_helpers;
mod errors;
mod handlers;
mod models;
pub mod seed;

use std::{net::TcpListener, str::FromStr, sync::Arc};

use anyhow::Context;
pub use anyhow::Result;
use axum::http::StatusCode;
use axum::{routing::*, Extension, Json, Router};
pub use config::Config;
pub use data_formats::*;
pub use errors::{RequestError, RequestErrorJson};
use handlers::*;
pub use models::*;
use sqlx::{
    migrate::MigrateDatabase,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Sqlite, SqlitePool,
};
use tokio::signal;
use tower_http::trace::TraceLayer;

pub type JsonResponse<T> = (StatusCode, Json<T>);

pub async fn run_app(app: Router, config: &Config) -> Result<()> {
    let pool = init_db(&config.database_url, config.max_connections).await?;
    let listener = TcpListener::bind(config.address)
        .with_context(|| format!("could not bind {}", config.address))?;
    tracing::info!("Server started on {}", config.address);

    serve(app, listener, pool.clone(), shutdown_signal()).await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Serves `app` on an already bound listener until `shutdown` resolves.
pub async fn serve(
    app: Router,
    listener: TcpListener,
    pool: SqlitePool,
    shutdown: impl std::future::Future<Output = ()>,
) -> Result<()> {
    listener.set_nonblocking(true)?;
    let app = app
        .layer(Extension(Arc::new(pool)))
        .layer(TraceLayer::new_for_http());
    axum::Server::from_tcp(listener)?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

pub async fn init_db(db_url: &str, max_connections: u32) -> Result<SqlitePool> {
    if !Sqlite::database_exists(db_url).await.unwrap_or(false) {
        tracing::info!("Creating database {}", db_url);
        Sqlite::create_database(db_url)
            .await
            .with_context(|| format!("could not create database {db_url}"))?;
    } else {
        tracing::info!("Database already exists");
    }
    let options = SqliteConnectOptions::from_str(db_url)?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

/// A private in-memory database with the schema applied.
///
/// The pool holds a single connection that never expires, since the data
/// lives only as long as that connection.
pub async fn connect_in_memory() -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    tracing::debug!("Running Migrations");
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;
    tracing::debug!("Migrations completed");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", error);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("Failed to install signal handler: {}", error);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::warn!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::warn!("Received SIGTERM, shutting down"),
    }
}

pub fn make_router() -> Router {
    Router::new()
        .route("/api", get(get_endpoints))
        .route("/api/healthcheck", get(alive))
        .route("/api/topics", get(get_topics))
        .route("/api/articles", get(list_articles))
        .route(
            "/api/articles/:article_id",
            get(get_article).patch(update_article_votes),
        )
        .route(
            "/api/articles/:article_id/comments",
            get(get_article_comments).post(post_article_comment),
        )
        .route(
            "/api/comments/:comment_id",
            patch(update_comment_votes).delete(delete_comment),
        )
        .route("/api/users", get(get_users))
        .route("/api/users/:username", get(get_user))
        .fallback(not_found)
}
