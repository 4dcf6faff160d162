use std::ops::{Deref, DerefMut};

use anyhow::Context;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{self, request},
};
use userportal_api::{Error as ApiError, DEFAULT_USERNAME, USERNAME_HEADER};

use crate::Error;

#[derive(Clone, axum::extract::FromRef)]
pub struct AppState {
    pub db: PgPool,
}

#[derive(Clone)]
pub struct PgPool(sqlx::PgPool);

impl PgPool {
    pub fn new(pool: sqlx::PgPool) -> PgPool {
        PgPool(pool)
    }

    pub async fn acquire(&self) -> anyhow::Result<PgConn> {
        Ok(PgConn(
            self.0.acquire().await.context("acquiring db connection")?,
        ))
    }
}

pub struct PgConn(sqlx::pool::PoolConnection<sqlx::Postgres>);

#[async_trait]
impl FromRequestParts<AppState> for PgConn {
    type Rejection = Error;

    async fn from_request_parts(
        req: &mut request::Parts,
        state: &AppState,
    ) -> Result<PgConn, Error> {
        // Surface an acquire failure as the fault of whichever operation
        // this request was for
        let surface = match req.method {
            http::Method::GET => ApiError::FetchFailed,
            _ => ApiError::CreateFailed,
        };
        state
            .db
            .acquire()
            .await
            .map_err(|source| Error::Store { source, surface })
    }
}

impl Deref for PgConn {
    type Target = sqlx::PgConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PgConn {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Identity of the poster, taken on faith from the `X-Username` header.
/// This is the single place a verified identity would plug into once real
/// authentication replaces the header stub.
pub struct ActingUser(pub String);

#[async_trait]
impl<S: Sync> FromRequestParts<S> for ActingUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        req: &mut request::Parts,
        _state: &S,
    ) -> Result<ActingUser, Self::Rejection> {
        let name = req
            .headers
            .get(USERNAME_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_USERNAME);
        Ok(ActingUser(String::from(name)))
    }
}
