use anyhow::{anyhow, Context};
use serde_json::json;

use crate::MAX_COMMENT_LENGTH;

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Comment content required")]
    ContentRequired,

    #[error("Comment content must be at most {MAX_COMMENT_LENGTH} characters")]
    ContentTooLong { length: usize },

    #[error("Invalid task id {0:?}")]
    InvalidTaskId(String),

    #[error("Failed to fetch comments")]
    FetchFailed,

    #[error("Failed to create comment")]
    CreateFailed,
}

impl Error {
    pub fn status_code(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            Error::ContentRequired => StatusCode::BAD_REQUEST,
            Error::ContentTooLong { .. } => StatusCode::BAD_REQUEST,
            Error::InvalidTaskId(_) => StatusCode::BAD_REQUEST,
            Error::FetchFailed => StatusCode::INTERNAL_SERVER_ERROR,
            Error::CreateFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn contents(&self) -> Vec<u8> {
        serde_json::to_vec(&match self {
            Error::ContentRequired => json!({
                "error": self.to_string(),
                "type": "content-required",
            }),
            Error::ContentTooLong { length } => json!({
                "error": self.to_string(),
                "type": "content-too-long",
                "length": length,
            }),
            Error::InvalidTaskId(id) => json!({
                "error": self.to_string(),
                "type": "invalid-task-id",
                "taskId": id,
            }),
            Error::FetchFailed => json!({
                "error": self.to_string(),
                "type": "fetch-failed",
            }),
            Error::CreateFailed => json!({
                "error": self.to_string(),
                "type": "create-failed",
            }),
        })
        .expect("serializing error contents")
    }

    pub fn parse(body: &[u8]) -> anyhow::Result<Error> {
        let data: serde_json::Value =
            serde_json::from_slice(body).context("parsing error contents")?;
        Ok(
            match data
                .get("type")
                .and_then(|t| t.as_str())
                .ok_or_else(|| anyhow!("error type is not a string"))?
            {
                "content-required" => Error::ContentRequired,
                "content-too-long" => Error::ContentTooLong {
                    length: data
                        .get("length")
                        .and_then(|l| l.as_u64())
                        .ok_or_else(|| anyhow!("content-too-long error without a length"))?
                        as usize,
                },
                "invalid-task-id" => Error::InvalidTaskId(String::from(
                    data.get("taskId")
                        .and_then(|id| id.as_str())
                        .ok_or_else(|| anyhow!("invalid-task-id error without the id"))?,
                )),
                "fetch-failed" => Error::FetchFailed,
                "create-failed" => Error::CreateFailed,
                _ => return Err(anyhow!("error contents has unknown type")),
            },
        )
    }
}
