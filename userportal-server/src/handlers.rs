use axum::{extract::Path, http::StatusCode, Json};
use userportal_api::{Comment, NewComment, TaskId};

use crate::{
    db,
    extractors::{ActingUser, PgConn},
    Error,
};

// Task ids are parsed by hand: a malformed id must yield an explicit client
// error rather than an empty result set.
fn parse_task_id(id: &str) -> Result<TaskId, Error> {
    id.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .map(TaskId)
        .ok_or_else(|| Error::invalid_task_id(id))
}

pub async fn list_comments(
    Path(task_id): Path<String>,
    mut conn: PgConn,
) -> Result<Json<Vec<Comment>>, Error> {
    let task = parse_task_id(&task_id)?;
    Ok(Json(
        db::list_comments(&mut conn, task)
            .await
            .map_err(Error::fetch_failed)?,
    ))
}

pub async fn create_comment(
    Path(task_id): Path<String>,
    user: ActingUser,
    mut conn: PgConn,
    // Deserialized loosely so a body without a string content field gets
    // the content-required error instead of an extractor rejection.
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Comment>), Error> {
    let task = parse_task_id(&task_id)?;
    let data = NewComment::from_body(&body)?;
    data.validate()?;
    let author = db::upsert_user(&mut conn, &user.0)
        .await
        .map_err(Error::create_failed)?;
    let comment = db::create_comment(&mut conn, task, &author, data.trimmed())
        .await
        .map_err(Error::create_failed)?;
    Ok((StatusCode::CREATED, Json(comment)))
}
