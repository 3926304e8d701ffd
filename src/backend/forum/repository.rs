//! Repository ports for the forum
//!
//! The use cases only talk to these traits. `PgForumStore` implements them
//! on PostgreSQL and `MemoryStore` implements them in process.
//!
//! Existence checks return `NotFoundError` with the message clients see, so
//! implementations must agree on those strings.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::backend::error::BackendResult;
use crate::backend::forum::entities::{Comment, Like, NewComment, NewReply, NewThread, Reply, Thread};
use crate::shared::forum::{AddedComment, AddedReply, AddedThread};

pub const THREAD_NOT_FOUND: &str = "thread not found";
pub const COMMENT_NOT_FOUND: &str = "comment not found";
pub const REPLY_NOT_FOUND: &str = "reply not found";

#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn add_thread(&self, thread: NewThread) -> BackendResult<AddedThread>;

    /// Fails with `thread not found`
    async fn get_thread(&self, thread_id: &str) -> BackendResult<Thread>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(&self, comment: NewComment) -> BackendResult<AddedComment>;

    /// Succeeds only if `comment_id` exists and belongs to `thread_id`
    async fn verify_comment_availability(&self, thread_id: &str, comment_id: &str) -> BackendResult<()>;

    async fn get_owner(&self, comment_id: &str) -> BackendResult<String>;

    async fn soft_delete(&self, comment_id: &str) -> BackendResult<()>;

    /// All comments of a thread, oldest first, deleted ones included
    async fn get_comments(&self, thread_id: &str) -> BackendResult<Vec<Comment>>;
}

#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn add_reply(&self, reply: NewReply) -> BackendResult<AddedReply>;

    /// Succeeds only if `reply_id` exists and belongs to `comment_id`
    async fn verify_reply_availability(&self, comment_id: &str, reply_id: &str) -> BackendResult<()>;

    async fn get_owner(&self, reply_id: &str) -> BackendResult<String>;

    async fn soft_delete(&self, reply_id: &str) -> BackendResult<()>;

    /// Replies of every listed comment, oldest first
    async fn get_replies(&self, comment_ids: &[String]) -> BackendResult<Vec<Reply>>;
}

#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn has_like(&self, like: &Like) -> BackendResult<bool>;

    async fn add_like(&self, like: &Like) -> BackendResult<()>;

    async fn delete_like(&self, like: &Like) -> BackendResult<()>;

    /// Like count per comment id; comments without likes are absent
    async fn count_likes(&self, comment_ids: &[String]) -> BackendResult<HashMap<String, i64>>;
}
