use chrono::Utc;

pub type Time = chrono::DateTime<Utc>;

/// Header carrying the acting username. A stand-in for real authentication:
/// the server trusts it blindly and falls back to [`DEFAULT_USERNAME`].
pub const USERNAME_HEADER: &str = "X-Username";
pub const DEFAULT_USERNAME: &str = "DemoUser";

mod comment;
pub use comment::{Comment, CommentId, NewComment, LOCAL_COMMENT_ID, MAX_COMMENT_LENGTH};

mod error;
pub use error::Error;

mod task;
pub use task::{Task, TaskId, TaskStatus};

mod user;
pub use user::{User, UserId};
