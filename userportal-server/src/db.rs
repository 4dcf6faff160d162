use anyhow::Context;
use sqlx::Row;
use userportal_api::{Comment, CommentId, TaskId, Time, User, UserId};

pub async fn list_comments(
    conn: &mut sqlx::PgConnection,
    task: TaskId,
) -> anyhow::Result<Vec<Comment>> {
    let rows = sqlx::query(
        "
            SELECT c.id, c.content, c.created_at, c.task_id, c.user_id, u.username
                FROM comments c
            INNER JOIN users u
                ON u.id = c.user_id
            WHERE c.task_id = $1
            ORDER BY c.created_at DESC, c.id DESC
        ",
    )
    .bind(task.0)
    .fetch_all(conn)
    .await
    .context("querying comments table")?;
    rows.iter().map(comment_from_row).collect()
}

fn comment_from_row(row: &sqlx::postgres::PgRow) -> anyhow::Result<Comment> {
    let user_id = UserId(row.try_get("user_id").context("retrieving the user_id field")?);
    Ok(Comment {
        id: CommentId(row.try_get("id").context("retrieving the id field")?),
        content: row
            .try_get("content")
            .context("retrieving the content field")?,
        created_at: row
            .try_get::<Time, _>("created_at")
            .context("retrieving the created_at field")?,
        task_id: TaskId(
            row.try_get("task_id")
                .context("retrieving the task_id field")?,
        ),
        user_id,
        user: User {
            id: user_id,
            username: row
                .try_get("username")
                .context("retrieving the username field")?,
        },
    })
}

/// Resolve a username to its row, creating it on first use. The upsert is a
/// single statement, so two concurrent first posts under the same new name
/// cannot create two rows; DO UPDATE (rather than DO NOTHING) makes
/// RETURNING yield the existing row on conflict.
pub async fn upsert_user(conn: &mut sqlx::PgConnection, username: &str) -> anyhow::Result<User> {
    let row = sqlx::query(
        "
            INSERT INTO users (username)
            VALUES ($1)
            ON CONFLICT (username) DO UPDATE
                SET username = excluded.username
            RETURNING id, username
        ",
    )
    .bind(username)
    .fetch_one(conn)
    .await
    .with_context(|| format!("upserting user {username:?}"))?;
    Ok(User {
        id: UserId(row.try_get("id").context("retrieving the id field")?),
        username: row
            .try_get("username")
            .context("retrieving the username field")?,
    })
}

pub async fn create_comment(
    conn: &mut sqlx::PgConnection,
    task: TaskId,
    author: &User,
    content: &str,
) -> anyhow::Result<Comment> {
    let row = sqlx::query(
        "
            INSERT INTO comments (content, task_id, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, created_at
        ",
    )
    .bind(content)
    .bind(task.0)
    .bind(author.id.0)
    .fetch_one(conn)
    .await
    .context("inserting comment")?;
    Ok(Comment {
        id: CommentId(row.try_get("id").context("retrieving the id field")?),
        content: String::from(content),
        created_at: row
            .try_get::<Time, _>("created_at")
            .context("retrieving the created_at field")?,
        task_id: task,
        user_id: author.id,
        user: author.clone(),
    })
}
