//! Database operations for threads, comments, replies and likes
//!
//! Runtime-checked `sqlx::query` calls against the schema in `migrations/`.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::forum::entities::{
    generate_id, Comment, Like, NewComment, NewReply, NewThread, Reply, Thread,
};
use crate::backend::forum::repository::{
    CommentRepository, LikeRepository, ReplyRepository, ThreadRepository, COMMENT_NOT_FOUND,
    REPLY_NOT_FOUND, THREAD_NOT_FOUND,
};
use crate::shared::forum::{AddedComment, AddedReply, AddedThread};

/// Postgres-backed forum store
#[derive(Clone)]
pub struct PgForumStore {
    pool: PgPool,
}

impl PgForumStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Constraint violations on insert are the client's fault
pub(crate) fn map_insert_error(err: sqlx::Error) -> BackendError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() || db_err.is_unique_violation() || db_err.is_check_violation() {
            return BackendError::invariant(db_err.message().to_string());
        }
    }
    BackendError::DatabaseError(err)
}

#[async_trait]
impl ThreadRepository for PgForumStore {
    async fn add_thread(&self, thread: NewThread) -> BackendResult<AddedThread> {
        let id = generate_id("thread");

        let row = sqlx::query(
            r#"
            INSERT INTO threads (id, owner, title, body, date)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING id, title, owner
            "#,
        )
        .bind(&id)
        .bind(&thread.owner)
        .bind(&thread.title)
        .bind(&thread.body)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(AddedThread {
            id: row.get("id"),
            title: row.get("title"),
            owner: row.get("owner"),
        })
    }

    async fn get_thread(&self, thread_id: &str) -> BackendResult<Thread> {
        sqlx::query_as::<_, Thread>(
            r#"
            SELECT threads.id, threads.title, threads.body, threads.date, users.username
            FROM threads
            JOIN users ON threads.owner = users.id
            WHERE threads.id = $1
            "#,
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| BackendError::not_found(THREAD_NOT_FOUND))
    }
}

#[async_trait]
impl CommentRepository for PgForumStore {
    async fn add_comment(&self, comment: NewComment) -> BackendResult<AddedComment> {
        let id = generate_id("comment");

        let row = sqlx::query(
            r#"
            INSERT INTO comments (id, owner, thread_id, content)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, owner
            "#,
        )
        .bind(&id)
        .bind(&comment.owner)
        .bind(&comment.thread_id)
        .bind(&comment.content)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(AddedComment {
            id: row.get("id"),
            content: row.get("content"),
            owner: row.get("owner"),
        })
    }

    async fn verify_comment_availability(&self, thread_id: &str, comment_id: &str) -> BackendResult<()> {
        sqlx::query("SELECT 1 FROM comments WHERE id = $1 AND thread_id = $2")
            .bind(comment_id)
            .bind(thread_id)
            .fetch_optional(&self.pool)
            .await?
            .map(|_| ())
            .ok_or_else(|| BackendError::not_found(COMMENT_NOT_FOUND))
    }

    async fn get_owner(&self, comment_id: &str) -> BackendResult<String> {
        let row = sqlx::query("SELECT owner FROM comments WHERE id = $1")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| BackendError::not_found(COMMENT_NOT_FOUND))?;

        Ok(row.get("owner"))
    }

    async fn soft_delete(&self, comment_id: &str) -> BackendResult<()> {
        let result = sqlx::query("UPDATE comments SET is_deleted = TRUE WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(BackendError::not_found(COMMENT_NOT_FOUND));
        }
        Ok(())
    }

    async fn get_comments(&self, thread_id: &str) -> BackendResult<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT comments.id, comments.thread_id, users.username, comments.date,
                   comments.content, comments.is_deleted
            FROM comments
            JOIN users ON comments.owner = users.id
            WHERE comments.thread_id = $1
            ORDER BY comments.date ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }
}

#[async_trait]
impl ReplyRepository for PgForumStore {
    async fn add_reply(&self, reply: NewReply) -> BackendResult<AddedReply> {
        let id = generate_id("reply");

        let row = sqlx::query(
            r#"
            INSERT INTO replies (id, owner, comment_id, content)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, owner
            "#,
        )
        .bind(&id)
        .bind(&reply.owner)
        .bind(&reply.comment_id)
        .bind(&reply.content)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(AddedReply {
            id: row.get("id"),
            content: row.get("content"),
            owner: row.get("owner"),
        })
    }

    async fn verify_reply_availability(&self, comment_id: &str, reply_id: &str) -> BackendResult<()> {
        sqlx::query("SELECT 1 FROM replies WHERE id = $1 AND comment_id = $2")
            .bind(reply_id)
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await?
            .map(|_| ())
            .ok_or_else(|| BackendError::not_found(REPLY_NOT_FOUND))
    }

    async fn get_owner(&self, reply_id: &str) -> BackendResult<String> {
        let row = sqlx::query("SELECT owner FROM replies WHERE id = $1")
            .bind(reply_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| BackendError::not_found(REPLY_NOT_FOUND))?;

        Ok(row.get("owner"))
    }

    async fn soft_delete(&self, reply_id: &str) -> BackendResult<()> {
        let result = sqlx::query("UPDATE replies SET is_deleted = TRUE WHERE id = $1")
            .bind(reply_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(BackendError::not_found(REPLY_NOT_FOUND));
        }
        Ok(())
    }

    async fn get_replies(&self, comment_ids: &[String]) -> BackendResult<Vec<Reply>> {
        if comment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let replies = sqlx::query_as::<_, Reply>(
            r#"
            SELECT replies.id, replies.comment_id, users.username, replies.date,
                   replies.content, replies.is_deleted
            FROM replies
            JOIN users ON replies.owner = users.id
            WHERE replies.comment_id = ANY($1)
            ORDER BY replies.date ASC
            "#,
        )
        .bind(comment_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(replies)
    }
}

#[async_trait]
impl LikeRepository for PgForumStore {
    async fn has_like(&self, like: &Like) -> BackendResult<bool> {
        let row = sqlx::query("SELECT 1 FROM likes WHERE owner = $1 AND comment_id = $2")
            .bind(&like.owner)
            .bind(&like.comment_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    async fn add_like(&self, like: &Like) -> BackendResult<()> {
        sqlx::query("INSERT INTO likes (owner, comment_id) VALUES ($1, $2)")
            .bind(&like.owner)
            .bind(&like.comment_id)
            .execute(&self.pool)
            .await
            .map_err(map_insert_error)?;

        Ok(())
    }

    async fn delete_like(&self, like: &Like) -> BackendResult<()> {
        let result = sqlx::query("DELETE FROM likes WHERE owner = $1 AND comment_id = $2")
            .bind(&like.owner)
            .bind(&like.comment_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(BackendError::not_found("like not found"));
        }
        Ok(())
    }

    async fn count_likes(&self, comment_ids: &[String]) -> BackendResult<HashMap<String, i64>> {
        if comment_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query(
            r#"
            SELECT comment_id, COUNT(*) AS like_count
            FROM likes
            WHERE comment_id = ANY($1)
            GROUP BY comment_id
            "#,
        )
        .bind(comment_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.get::<String, _>("comment_id"), row.get::<i64, _>("like_count")))
            .collect())
    }
}
