use crate::{Error, TaskId, Time, User, UserId};

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
pub struct CommentId(pub i64);

/// Sentinel id carried by a comment the client synthesized optimistically,
/// before the server assigned the real one.
pub const LOCAL_COMMENT_ID: CommentId = CommentId(-1);

pub const MAX_COMMENT_LENGTH: usize = 500;

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub created_at: Time,
    pub task_id: TaskId,
    pub user_id: UserId,

    /// Denormalized author embed, for display without a second fetch
    pub user: User,
}

impl Comment {
    pub fn is_local(&self) -> bool {
        self.id == LOCAL_COMMENT_ID
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewComment {
    pub content: String,
}

impl NewComment {
    /// Pull the content field out of a raw request body. A missing or
    /// non-string `content` gets the same client error as blank content,
    /// not a deserialization failure.
    pub fn from_body(body: &serde_json::Value) -> Result<NewComment, Error> {
        match body.get("content").and_then(|c| c.as_str()) {
            Some(content) => Ok(NewComment {
                content: String::from(content),
            }),
            None => Err(Error::ContentRequired),
        }
    }

    /// Content as it will be stored: surrounding whitespace stripped
    pub fn trimmed(&self) -> &str {
        self.content.trim()
    }

    pub fn validate(&self) -> Result<(), Error> {
        let trimmed = self.trimmed();
        if trimmed.is_empty() {
            return Err(Error::ContentRequired);
        }
        let length = trimmed.chars().count();
        if length > MAX_COMMENT_LENGTH {
            return Err(Error::ContentTooLong { length });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_content_is_rejected() {
        for content in ["", "   ", "\n\t "] {
            let c = NewComment {
                content: String::from(content),
            };
            assert_eq!(c.validate(), Err(Error::ContentRequired));
        }
    }

    #[test]
    fn length_cap_counts_trimmed_chars() {
        let at_cap = NewComment {
            content: format!("  {}  ", "é".repeat(MAX_COMMENT_LENGTH)),
        };
        assert_eq!(at_cap.validate(), Ok(()));

        let over_cap = NewComment {
            content: "x".repeat(MAX_COMMENT_LENGTH + 1),
        };
        assert_eq!(
            over_cap.validate(),
            Err(Error::ContentTooLong {
                length: MAX_COMMENT_LENGTH + 1
            })
        );
    }

    #[test]
    fn missing_or_non_string_content_is_a_client_error() {
        for body in [
            serde_json::json!({}),
            serde_json::json!({ "content": 5 }),
            serde_json::json!({ "content": null }),
            serde_json::json!({ "content": ["hi"] }),
        ] {
            assert_eq!(NewComment::from_body(&body), Err(Error::ContentRequired));
        }
        assert_eq!(
            NewComment::from_body(&serde_json::json!({ "content": "hi" })),
            Ok(NewComment {
                content: String::from("hi")
            })
        );
    }

    #[test]
    fn regular_content_passes() {
        let c = NewComment {
            content: String::from("  hello  "),
        };
        assert_eq!(c.validate(), Ok(()));
        assert_eq!(c.trimmed(), "hello");
    }
}
