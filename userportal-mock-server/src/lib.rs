use chrono::{Duration, TimeZone, Utc};
use userportal_api::{
    Comment, CommentId, Error, NewComment, TaskId, Time, User, UserId, DEFAULT_USERNAME,
};

/// In-memory stand-in for the comment API, with the same observable
/// semantics as the real server: upsert-by-name identity resolution,
/// newest-first listing, validation at the boundary. The clock is
/// deterministic (one second per created comment) and requests can be made
/// to fail, so tests can drive the rollback path.
pub struct MockServer {
    users: Vec<User>,
    comments: Vec<Comment>,
    now: Time,
    fail_requests: bool,
}

impl MockServer {
    pub fn new() -> MockServer {
        MockServer {
            users: Vec::new(),
            comments: Vec::new(),
            now: Utc
                .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
                .single()
                .expect("building mock epoch"),
            fail_requests: false,
        }
    }

    /// Make every subsequent request fail with a server fault
    pub fn set_fail_requests(&mut self, fail: bool) {
        self.fail_requests = fail;
    }

    pub fn test_num_users(&self) -> usize {
        self.users.len()
    }

    pub fn test_num_comments(&self, task: TaskId) -> usize {
        self.comments.iter().filter(|c| c.task_id == task).count()
    }

    pub fn list_comments(&self, task: TaskId) -> Result<Vec<Comment>, Error> {
        if self.fail_requests {
            return Err(Error::FetchFailed);
        }
        let mut comments = self
            .comments
            .iter()
            .filter(|c| c.task_id == task)
            .cloned()
            .collect::<Vec<_>>();
        comments.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(comments)
    }

    pub fn create_comment(
        &mut self,
        task: TaskId,
        username: Option<&str>,
        data: NewComment,
    ) -> Result<Comment, Error> {
        data.validate()?;
        if self.fail_requests {
            return Err(Error::CreateFailed);
        }
        let username = match username.map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_USERNAME,
        };
        let author = self.upsert_user(username);
        self.now += Duration::seconds(1);
        let comment = Comment {
            id: CommentId(self.comments.len() as i64 + 1),
            content: String::from(data.trimmed()),
            created_at: self.now,
            task_id: task,
            user_id: author.id,
            user: author,
        };
        self.comments.push(comment.clone());
        Ok(comment)
    }

    fn upsert_user(&mut self, name: &str) -> User {
        if let Some(u) = self.users.iter().find(|u| u.username == name) {
            return u.clone();
        }
        let user = User {
            id: UserId(self.users.len() as i64 + 1),
            username: String::from(name),
        };
        self.users.push(user.clone());
        user
    }
}

impl Default for MockServer {
    fn default() -> MockServer {
        MockServer::new()
    }
}
