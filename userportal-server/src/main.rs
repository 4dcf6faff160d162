use anyhow::Context;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use structopt::StructOpt;

pub mod db;
pub mod error;
pub mod extractors;
pub mod handlers;

pub use error::Error;
use extractors::{AppState, PgPool};

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

#[derive(Debug, StructOpt)]
#[structopt(
    name = "userportal-server",
    about = "Comment API server for the UserPortal task tracker"
)]
struct Opt {
    /// Address to listen on
    #[structopt(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// PostgreSQL connection string
    #[structopt(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub async fn create_sqlx_pool(url: &str) -> anyhow::Result<PgPool> {
    Ok(PgPool::new(
        sqlx::postgres::PgPoolOptions::new()
            .max_connections(10)
            .connect(url)
            .await?,
    ))
}

pub async fn app(db: PgPool) -> Router {
    Router::new()
        .route(
            "/tasks/:task_id/comments",
            get(handlers::list_comments).post(handlers::create_comment),
        )
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(AppState { db })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let opt = Opt::from_args();

    let pool = create_sqlx_pool(&opt.database_url)
        .await
        .context("opening database")?;
    MIGRATOR
        .run(&mut *pool.acquire().await.context("getting migrator connection")?)
        .await
        .context("applying migrations")?;

    let app = app(pool).await;
    tracing::info!("listening on {}", opt.bind);
    axum::Server::bind(&opt.bind)
        .serve(app.into_make_service())
        .await
        .context("serving axum webserver")
}
