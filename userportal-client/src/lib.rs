mod task;
pub use task::demo_tasks;

mod thread;
pub use thread::{CommentThread, PostState};

pub mod api {
    pub use userportal_api::*;
}
