use anyhow::Context;
use userportal_client::api::{Comment, Error as ApiError, NewComment, TaskId, USERNAME_HEADER};

use crate::LoginInfo;

// reqwest wants absolute URLs even in the browser, so an empty host falls
// back to the page's own origin rather than a relative path.
fn base_url(login: &LoginInfo) -> anyhow::Result<String> {
    if !login.host.is_empty() {
        return Ok(login.host.clone());
    }
    let window = web_sys::window().context("getting browser window")?;
    window
        .location()
        .origin()
        .ok()
        .context("reading window origin")
}

fn comments_url(base: &str, task: TaskId) -> String {
    format!("{}/tasks/{}/comments", base.trim_end_matches('/'), task.0)
}

async fn api_error(resp: reqwest::Response) -> anyhow::Error {
    match resp.bytes().await {
        Ok(body) => match ApiError::parse(&body) {
            Ok(err) => anyhow::Error::new(err),
            Err(err) => err.context("parsing error response"),
        },
        Err(err) => anyhow::Error::new(err).context("recovering error response body"),
    }
}

pub async fn fetch_comments(login: &LoginInfo, task: TaskId) -> anyhow::Result<Vec<Comment>> {
    let resp = crate::CLIENT
        .get(comments_url(&base_url(login)?, task))
        .send()
        .await
        .context("fetching comments")?;
    if !resp.status().is_success() {
        return Err(api_error(resp).await);
    }
    resp.json().await.context("parsing comment list")
}

pub async fn post_comment(
    login: &LoginInfo,
    task: TaskId,
    data: &NewComment,
) -> anyhow::Result<Comment> {
    let resp = crate::CLIENT
        .post(comments_url(&base_url(login)?, task))
        .header(USERNAME_HEADER, &login.username)
        .json(data)
        .send()
        .await
        .context("posting comment")?;
    if resp.status() != reqwest::StatusCode::CREATED {
        return Err(api_error(resp).await);
    }
    resp.json().await.context("parsing created comment")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_host_is_used_as_is() {
        let login = LoginInfo {
            host: String::from("http://localhost:3000"),
            username: String::from("alice"),
        };
        let url = comments_url(&base_url(&login).unwrap(), TaskId(1));
        assert_eq!(url, "http://localhost:3000/tasks/1/comments");
    }

    #[test]
    fn trailing_slashes_do_not_double_up() {
        assert_eq!(
            comments_url("https://portal.example/", TaskId(7)),
            "https://portal.example/tasks/7/comments"
        );
    }
}
