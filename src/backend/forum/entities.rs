//! Forum entities
//!
//! Validated inputs (`NewThread`, `NewComment`, `NewReply`, `Like`) and the
//! rows read back from a store (`Thread`, `Comment`, `Reply`).

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::error::{require_present, required_string, SharedError};
use crate::shared::forum::{CommentDetail, ContentPayload, ReplyDetail, ThreadPayload};

/// Shown in place of a soft-deleted comment's content
pub const DELETED_COMMENT_PLACEHOLDER: &str = "**komentar telah dihapus**";

/// Shown in place of a soft-deleted reply's content
pub const DELETED_REPLY_PLACEHOLDER: &str = "**balasan telah dihapus**";

/// Column width of `threads.title`
pub const MAX_TITLE_LEN: usize = 50;

/// Generate a prefixed identifier, e.g. `thread-5f0c...`
pub fn generate_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

/// A thread about to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    pub owner: String,
    pub title: String,
    pub body: String,
}

impl NewThread {
    pub fn parse(owner: &str, payload: &ThreadPayload) -> Result<Self, SharedError> {
        const ACTION: &str = "create a new thread";
        require_present(&[payload.title.as_ref(), payload.body.as_ref()], ACTION)?;

        let title = required_string(payload.title.as_ref(), ACTION)?;
        let body = required_string(payload.body.as_ref(), ACTION)?;

        if title.chars().count() > MAX_TITLE_LEN {
            return Err(SharedError::validation(
                "title",
                format!("cannot create a new thread because the title exceeds {} characters", MAX_TITLE_LEN),
            ));
        }

        Ok(Self {
            owner: owner.to_string(),
            title,
            body,
        })
    }
}

/// A comment about to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub owner: String,
    pub thread_id: String,
    pub content: String,
}

impl NewComment {
    pub fn parse(owner: &str, thread_id: &str, payload: &ContentPayload) -> Result<Self, SharedError> {
        let content = required_string(payload.content.as_ref(), "create a new comment")?;
        Ok(Self {
            owner: owner.to_string(),
            thread_id: thread_id.to_string(),
            content,
        })
    }
}

/// A reply about to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReply {
    pub owner: String,
    pub comment_id: String,
    pub content: String,
}

impl NewReply {
    pub fn parse(owner: &str, comment_id: &str, payload: &ContentPayload) -> Result<Self, SharedError> {
        let content = required_string(payload.content.as_ref(), "create a new reply")?;
        Ok(Self {
            owner: owner.to_string(),
            comment_id: comment_id.to_string(),
            content,
        })
    }
}

/// The (user, comment) like relation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Like {
    pub owner: String,
    pub comment_id: String,
}

impl Like {
    pub fn new(owner: impl Into<String>, comment_id: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            comment_id: comment_id.into(),
        }
    }
}

/// Thread row joined with its owner's username
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

/// Comment row joined with its owner's username
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Comment {
    pub id: String,
    pub thread_id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_deleted: bool,
}

impl Comment {
    /// Content as clients see it
    pub fn display_content(&self) -> &str {
        if self.is_deleted {
            DELETED_COMMENT_PLACEHOLDER
        } else {
            &self.content
        }
    }

    pub fn into_detail(self, like_count: i64, replies: Vec<ReplyDetail>) -> CommentDetail {
        CommentDetail {
            content: self.display_content().to_string(),
            id: self.id,
            username: self.username,
            date: self.date,
            like_count,
            replies,
        }
    }
}

/// Reply row joined with its owner's username
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Reply {
    pub id: String,
    pub comment_id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_deleted: bool,
}

impl Reply {
    /// Content as clients see it
    pub fn display_content(&self) -> &str {
        if self.is_deleted {
            DELETED_REPLY_PLACEHOLDER
        } else {
            &self.content
        }
    }

    pub fn into_detail(self) -> ReplyDetail {
        ReplyDetail {
            content: self.display_content().to_string(),
            id: self.id,
            date: self.date,
            username: self.username,
        }
    }
}
