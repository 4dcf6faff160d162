use crate::api::{Comment, NewComment, TaskId, Time, User, LOCAL_COMMENT_ID};

/// At most one post is in flight at a time; `Pending` keeps the submitted
/// text so a rollback can hand it back to the input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PostState {
    Idle,
    Pending { text: String },
}

/// Owned state for one task's comment thread: the displayed list
/// (newest-first), the draft under the input box, and the optimistic-post
/// state machine.
///
/// A submitted comment is prepended to the list immediately with
/// [`LOCAL_COMMENT_ID`]; the server outcome then either replaces that head
/// element in place ([`CommentThread::reconcile`]) or removes it and
/// restores the draft ([`CommentThread::roll_back`]). Only the head slot is
/// ever touched; the rest of the list is never reordered.
pub struct CommentThread {
    task_id: TaskId,
    author: User,
    comments: Vec<Comment>,
    draft: String,
    post: PostState,
}

impl CommentThread {
    pub fn new(task_id: TaskId, author: User) -> CommentThread {
        CommentThread {
            task_id,
            author,
            comments: Vec::new(),
            draft: String::new(),
            post: PostState::Idle,
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.post, PostState::Pending { .. })
    }

    /// True when the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        !self.is_pending()
            && NewComment {
                content: self.draft.clone(),
            }
            .validate()
            .is_ok()
    }

    /// Replace the displayed list with a freshly fetched one, newest-first
    pub fn load(&mut self, mut comments: Vec<Comment>) {
        if self.is_pending() {
            tracing::warn!("reloading comment list while a post is in flight");
        }
        comments.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        self.comments = comments;
    }

    /// Start a post: prepend the optimistic record, clear the draft, and
    /// return the request to send. Returns `None` (without touching any
    /// state) while another post is in flight or when the draft does not
    /// validate.
    pub fn submit(&mut self, now: Time) -> Option<NewComment> {
        if self.is_pending() {
            return None;
        }
        let data = NewComment {
            content: self.draft.clone(),
        };
        if data.validate().is_err() {
            return None;
        }
        self.comments.insert(
            0,
            Comment {
                id: LOCAL_COMMENT_ID,
                content: String::from(data.trimmed()),
                created_at: now,
                task_id: self.task_id,
                user_id: self.author.id,
                user: self.author.clone(),
            },
        );
        self.post = PostState::Pending {
            text: std::mem::take(&mut self.draft),
        };
        Some(data)
    }

    /// The server confirmed the in-flight post: swap the optimistic head
    /// for the authoritative record.
    pub fn reconcile(&mut self, comment: Comment) {
        match std::mem::replace(&mut self.post, PostState::Idle) {
            PostState::Idle => {
                tracing::warn!(?comment, "reconcile without a pending post");
            }
            PostState::Pending { .. } => match self.comments.first_mut() {
                Some(head) if head.is_local() => *head = comment,
                _ => {
                    tracing::warn!("pending post but no local head comment");
                    self.comments.insert(0, comment);
                }
            },
        }
    }

    /// The in-flight post failed: drop the optimistic head and restore the
    /// submitted text into the draft so the user can retry.
    pub fn roll_back(&mut self) {
        match std::mem::replace(&mut self.post, PostState::Idle) {
            PostState::Idle => {
                tracing::warn!("rollback without a pending post");
            }
            PostState::Pending { text } => {
                if self.comments.first().map_or(false, Comment::is_local) {
                    self.comments.remove(0);
                } else {
                    tracing::warn!("pending post but no local head comment");
                }
                self.draft = text;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use userportal_api::{UserId, DEFAULT_USERNAME};
    use userportal_mock_server::MockServer;

    const TASK: TaskId = TaskId(1);

    fn demo_user() -> User {
        User {
            id: UserId(1),
            username: String::from(DEFAULT_USERNAME),
        }
    }

    fn now() -> Time {
        Utc.with_ymd_and_hms(2026, 1, 2, 12, 0, 0).single().unwrap()
    }

    fn thread_with_history(server: &mut MockServer) -> CommentThread {
        for content in ["first", "second"] {
            server
                .create_comment(
                    TASK,
                    Some(DEFAULT_USERNAME),
                    NewComment {
                        content: String::from(content),
                    },
                )
                .unwrap();
        }
        let mut thread = CommentThread::new(TASK, demo_user());
        thread.load(server.list_comments(TASK).unwrap());
        thread
    }

    #[test]
    fn load_orders_newest_first() {
        let mut server = MockServer::new();
        let thread = thread_with_history(&mut server);
        let contents = thread
            .comments()
            .iter()
            .map(|c| &c.content[..])
            .collect::<Vec<_>>();
        assert_eq!(contents, ["second", "first"]);
    }

    #[test]
    fn optimistic_submit_then_reconcile_replaces_the_head_in_place() {
        let mut server = MockServer::new();
        let mut thread = thread_with_history(&mut server);

        thread.set_draft(String::from("abc"));
        let req = thread.submit(now()).expect("submitting a valid draft");

        // Immediate local echo at the head, input cleared
        assert_eq!(thread.comments().len(), 3);
        assert!(thread.comments()[0].is_local());
        assert_eq!(thread.comments()[0].content, "abc");
        assert_eq!(thread.draft(), "");
        assert!(thread.is_pending());

        let confirmed = server
            .create_comment(TASK, Some(DEFAULT_USERNAME), req)
            .expect("server accepting the post");
        thread.reconcile(confirmed.clone());

        // Same length, head now authoritative, tail untouched
        assert_eq!(thread.comments().len(), 3);
        assert!(!thread.comments()[0].is_local());
        assert_eq!(thread.comments()[0], confirmed);
        assert_eq!(thread.comments()[0].user.username, DEFAULT_USERNAME);
        assert_eq!(thread.comments()[1].content, "second");
        assert_eq!(thread.comments()[2].content, "first");
        assert!(!thread.is_pending());
    }

    #[test]
    fn failed_post_rolls_back_and_restores_the_draft() {
        let mut server = MockServer::new();
        let mut thread = thread_with_history(&mut server);
        let len_before = thread.comments().len();

        thread.set_draft(String::from("xyz"));
        let req = thread.submit(now()).expect("submitting a valid draft");

        server.set_fail_requests(true);
        let res = server.create_comment(TASK, Some(DEFAULT_USERNAME), req);
        assert!(res.is_err());
        thread.roll_back();

        assert_eq!(thread.comments().len(), len_before);
        assert!(thread.comments().iter().all(|c| c.content != "xyz"));
        assert_eq!(thread.draft(), "xyz");
        assert!(!thread.is_pending());
    }

    #[test]
    fn blank_drafts_are_never_submitted() {
        let mut thread = CommentThread::new(TASK, demo_user());
        for draft in ["", "   ", "\n"] {
            thread.set_draft(String::from(draft));
            assert!(!thread.can_submit());
            assert_eq!(thread.submit(now()), None);
        }
        assert!(thread.comments().is_empty());
    }

    #[test]
    fn submission_is_serialized_while_a_post_is_in_flight() {
        let mut thread = CommentThread::new(TASK, demo_user());
        thread.set_draft(String::from("one"));
        assert!(thread.submit(now()).is_some());

        thread.set_draft(String::from("two"));
        assert!(!thread.can_submit());
        assert_eq!(thread.submit(now()), None);

        // The rejected attempt must not have touched the list
        assert_eq!(thread.comments().len(), 1);
        assert_eq!(thread.comments()[0].content, "one");
    }

    #[test]
    fn reconcile_and_rollback_without_pending_post_are_ignored() {
        let mut server = MockServer::new();
        let mut thread = thread_with_history(&mut server);
        let before = thread.comments().to_vec();

        thread.roll_back();
        assert_eq!(thread.comments(), &before[..]);

        thread.reconcile(before[0].clone());
        assert_eq!(thread.comments(), &before[..]);
    }
}
