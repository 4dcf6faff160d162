mod app;
pub use app::App;

mod comment_section;
pub use comment_section::CommentSection;

mod login;
pub use login::Login;

mod task_details;
pub use task_details::TaskDetails;

mod task_list;
pub use task_list::TaskList;
