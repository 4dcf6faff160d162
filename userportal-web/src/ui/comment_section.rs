use chrono::Utc;
use userportal_client::{
    api::{Comment, TaskId, User, UserId, MAX_COMMENT_LENGTH},
    CommentThread,
};
use yew::prelude::*;

use crate::{api, LoginInfo};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentSectionProps {
    pub login: LoginInfo,
    pub task_id: TaskId,
}

pub enum CommentSectionMsg {
    Loaded(Vec<Comment>),
    LoadFailed,
    DraftChanged(String),
    Submit,
    PostConfirmed(Comment),
    PostFailed,
}

/// The comment thread under a task: loads the list once on mount, then
/// drives the optimistic insert/reconcile/rollback protocol through
/// [`CommentThread`]. The submit button stays disabled while a post is in
/// flight, so at most one post is ever outstanding.
pub struct CommentSection {
    thread: CommentThread,
    loaded: bool,
    load_failed: bool,
}

impl Component for CommentSection {
    type Message = CommentSectionMsg;
    type Properties = CommentSectionProps;

    fn create(ctx: &Context<Self>) -> Self {
        let login = ctx.props().login.clone();
        let task_id = ctx.props().task_id;
        ctx.link().send_future(async move {
            match api::fetch_comments(&login, task_id).await {
                Ok(comments) => CommentSectionMsg::Loaded(comments),
                Err(err) => {
                    tracing::error!(?err, "failed to fetch comments");
                    CommentSectionMsg::LoadFailed
                }
            }
        });
        // The id is a sentinel until the server attributes the post
        let author = User {
            id: UserId(0),
            username: ctx.props().login.username.clone(),
        };
        CommentSection {
            thread: CommentThread::new(task_id, author),
            loaded: false,
            load_failed: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CommentSectionMsg::Loaded(comments) => {
                self.thread.load(comments);
                self.loaded = true;
            }
            CommentSectionMsg::LoadFailed => {
                self.loaded = true;
                self.load_failed = true;
            }
            CommentSectionMsg::DraftChanged(text) => self.thread.set_draft(text),
            CommentSectionMsg::Submit => {
                if let Some(data) = self.thread.submit(Utc::now()) {
                    let login = ctx.props().login.clone();
                    let task_id = ctx.props().task_id;
                    ctx.link().send_future(async move {
                        match api::post_comment(&login, task_id, &data).await {
                            Ok(comment) => CommentSectionMsg::PostConfirmed(comment),
                            Err(err) => {
                                tracing::error!(?err, "failed to post comment");
                                CommentSectionMsg::PostFailed
                            }
                        }
                    });
                }
            }
            CommentSectionMsg::PostConfirmed(comment) => self.thread.reconcile(comment),
            CommentSectionMsg::PostFailed => self.thread.roll_back(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let draft_len = self.thread.draft().chars().count();
        let counter = (draft_len > 0).then(|| {
            html! {
                <span class="text-muted">{ format!("{draft_len}/{MAX_COMMENT_LENGTH}") }</span>
            }
        });
        let status_line = if !self.loaded {
            Some(html! { <p class="text-muted">{ "Loading comments..." }</p> })
        } else if self.load_failed {
            Some(html! { <p class="text-danger">{ "Failed to load comments." }</p> })
        } else {
            None
        };
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            CommentSectionMsg::DraftChanged(input.value())
        });
        html! {
            <div class="card">
                <div class="card-header">
                    { "Discussion " }
                    <span class="badge bg-secondary">{ self.thread.comments().len() }</span>
                </div>
                <div class="card-body">
                    <div class="mb-4">
                        <textarea
                            class="form-control"
                            placeholder="Add your comment..."
                            value={self.thread.draft().to_owned()}
                            {oninput}
                        />
                        <div class="d-flex justify-content-between mt-2">
                            { for counter }
                            <button
                                class="btn btn-primary"
                                disabled={!self.thread.can_submit()}
                                onclick={ctx.link().callback(|_| CommentSectionMsg::Submit)}
                            >
                                { if self.thread.is_pending() { "Posting..." } else { "Post Comment" } }
                            </button>
                        </div>
                    </div>
                    { for status_line }
                    <div>
                        { for self.thread.comments().iter().map(view_comment) }
                    </div>
                </div>
            </div>
        }
    }
}

fn view_comment(c: &Comment) -> Html {
    let sending = c
        .is_local()
        .then(|| html! { <span class="text-muted">{ " (sending...)" }</span> });
    html! {
        <div class="mb-3">
            <div class="d-flex justify-content-between">
                <span class="fw-bold">
                    { &c.user.username }
                    { for sending }
                </span>
                <span class="text-muted">
                    { c.created_at.format("%b %e, %H:%M").to_string() }
                </span>
            </div>
            <p class="mb-0">{ &c.content }</p>
        </div>
    }
}
