//! In-process store
//!
//! Implements every repository port over tables held behind a single
//! `tokio::sync::RwLock`. Rows are kept in insertion order, which is also
//! their date order, so listings match the `ORDER BY date ASC` of the
//! Postgres store. Foreign keys are checked on insert the way the schema
//! checks them.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::{AuthenticationRepository, TokenManager, REFRESH_TOKEN_NOT_FOUND};
use crate::backend::auth::users::{NewUser, UserRepository, USERNAME_NOT_AVAILABLE, USERNAME_NOT_FOUND};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::forum::entities::{
    generate_id, Comment, Like, NewComment, NewReply, NewThread, Reply, Thread,
};
use crate::backend::forum::repository::{
    CommentRepository, LikeRepository, ReplyRepository, ThreadRepository, COMMENT_NOT_FOUND,
    REPLY_NOT_FOUND, THREAD_NOT_FOUND,
};
use crate::backend::forum::service::ForumService;
use crate::shared::forum::{AddedComment, AddedReply, AddedThread, AddedUser};

#[derive(Debug, Clone)]
struct UserRow {
    id: String,
    username: String,
    password: String,
    fullname: String,
}

#[derive(Debug, Clone)]
struct ThreadRow {
    id: String,
    owner: String,
    title: String,
    body: String,
    date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct PostRow {
    id: String,
    owner: String,
    parent_id: String,
    date: DateTime<Utc>,
    content: String,
    is_deleted: bool,
}

#[derive(Debug, Default)]
struct Tables {
    users: Vec<UserRow>,
    authentications: Vec<String>,
    threads: Vec<ThreadRow>,
    comments: Vec<PostRow>,
    replies: Vec<PostRow>,
    likes: HashSet<Like>,
}

impl Tables {
    fn username_of(&self, user_id: &str) -> String {
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.username.clone())
            .unwrap_or_default()
    }

    fn require_user(&self, user_id: &str) -> BackendResult<()> {
        if self.users.iter().any(|u| u.id == user_id) {
            Ok(())
        } else {
            Err(BackendError::invariant(format!("user {} does not exist", user_id)))
        }
    }

    fn comment(&self, comment_id: &str) -> Option<&PostRow> {
        self.comments.iter().find(|c| c.id == comment_id)
    }

    fn reply_mut(&mut self, reply_id: &str) -> Option<&mut PostRow> {
        self.replies.iter_mut().find(|r| r.id == reply_id)
    }
}

/// Shared in-memory tables; clones see the same data
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forum use cases backed by this store
    pub fn forum_service(&self) -> ForumService {
        let store = Arc::new(self.clone());
        ForumService::new(store.clone(), store.clone(), store.clone(), store)
    }

    /// Auth use cases backed by this store
    pub fn auth_service(&self, tokens: Arc<TokenManager>, bcrypt_cost: u32) -> AuthService {
        let store = Arc::new(self.clone());
        AuthService::new(store.clone(), store, tokens, bcrypt_cost)
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn verify_available_username(&self, username: &str) -> BackendResult<()> {
        let tables = self.tables.read().await;
        if tables.users.iter().any(|u| u.username == username) {
            return Err(BackendError::invariant(USERNAME_NOT_AVAILABLE));
        }
        Ok(())
    }

    async fn add_user(&self, user: NewUser) -> BackendResult<AddedUser> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.username == user.username) {
            return Err(BackendError::invariant(USERNAME_NOT_AVAILABLE));
        }

        let row = UserRow {
            id: generate_id("user"),
            username: user.username,
            password: user.password,
            fullname: user.fullname,
        };
        let added = AddedUser {
            id: row.id.clone(),
            username: row.username.clone(),
            fullname: row.fullname.clone(),
        };
        tables.users.push(row);
        Ok(added)
    }

    async fn get_password_by_username(&self, username: &str) -> BackendResult<String> {
        let tables = self.tables.read().await;
        tables
            .users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.password.clone())
            .ok_or_else(|| BackendError::invariant(USERNAME_NOT_FOUND))
    }

    async fn get_id_by_username(&self, username: &str) -> BackendResult<String> {
        let tables = self.tables.read().await;
        tables
            .users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.id.clone())
            .ok_or_else(|| BackendError::invariant(USERNAME_NOT_FOUND))
    }
}

#[async_trait]
impl AuthenticationRepository for MemoryStore {
    async fn add_token(&self, token: &str) -> BackendResult<()> {
        self.tables.write().await.authentications.push(token.to_string());
        Ok(())
    }

    async fn check_availability_token(&self, token: &str) -> BackendResult<()> {
        let tables = self.tables.read().await;
        if tables.authentications.iter().any(|t| t == token) {
            Ok(())
        } else {
            Err(BackendError::invariant(REFRESH_TOKEN_NOT_FOUND))
        }
    }

    async fn delete_token(&self, token: &str) -> BackendResult<()> {
        self.tables.write().await.authentications.retain(|t| t != token);
        Ok(())
    }
}

#[async_trait]
impl ThreadRepository for MemoryStore {
    async fn add_thread(&self, thread: NewThread) -> BackendResult<AddedThread> {
        let mut tables = self.tables.write().await;
        tables.require_user(&thread.owner)?;

        let row = ThreadRow {
            id: generate_id("thread"),
            owner: thread.owner,
            title: thread.title,
            body: thread.body,
            date: Utc::now(),
        };
        let added = AddedThread {
            id: row.id.clone(),
            title: row.title.clone(),
            owner: row.owner.clone(),
        };
        tables.threads.push(row);
        Ok(added)
    }

    async fn get_thread(&self, thread_id: &str) -> BackendResult<Thread> {
        let tables = self.tables.read().await;
        let row = tables
            .threads
            .iter()
            .find(|t| t.id == thread_id)
            .ok_or_else(|| BackendError::not_found(THREAD_NOT_FOUND))?;

        Ok(Thread {
            id: row.id.clone(),
            title: row.title.clone(),
            body: row.body.clone(),
            date: row.date,
            username: tables.username_of(&row.owner),
        })
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn add_comment(&self, comment: NewComment) -> BackendResult<AddedComment> {
        let mut tables = self.tables.write().await;
        tables.require_user(&comment.owner)?;
        if !tables.threads.iter().any(|t| t.id == comment.thread_id) {
            return Err(BackendError::invariant(format!("thread {} does not exist", comment.thread_id)));
        }

        let row = PostRow {
            id: generate_id("comment"),
            owner: comment.owner,
            parent_id: comment.thread_id,
            date: Utc::now(),
            content: comment.content,
            is_deleted: false,
        };
        let added = AddedComment {
            id: row.id.clone(),
            content: row.content.clone(),
            owner: row.owner.clone(),
        };
        tables.comments.push(row);
        Ok(added)
    }

    async fn verify_comment_availability(&self, thread_id: &str, comment_id: &str) -> BackendResult<()> {
        let tables = self.tables.read().await;
        match tables.comment(comment_id) {
            Some(c) if c.parent_id == thread_id => Ok(()),
            _ => Err(BackendError::not_found(COMMENT_NOT_FOUND)),
        }
    }

    async fn get_owner(&self, comment_id: &str) -> BackendResult<String> {
        let tables = self.tables.read().await;
        tables
            .comment(comment_id)
            .map(|c| c.owner.clone())
            .ok_or_else(|| BackendError::not_found(COMMENT_NOT_FOUND))
    }

    async fn soft_delete(&self, comment_id: &str) -> BackendResult<()> {
        let mut tables = self.tables.write().await;
        let row = tables
            .comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .ok_or_else(|| BackendError::not_found(COMMENT_NOT_FOUND))?;
        row.is_deleted = true;
        Ok(())
    }

    async fn get_comments(&self, thread_id: &str) -> BackendResult<Vec<Comment>> {
        let tables = self.tables.read().await;
        Ok(tables
            .comments
            .iter()
            .filter(|c| c.parent_id == thread_id)
            .map(|c| Comment {
                id: c.id.clone(),
                thread_id: c.parent_id.clone(),
                username: tables.username_of(&c.owner),
                date: c.date,
                content: c.content.clone(),
                is_deleted: c.is_deleted,
            })
            .collect())
    }
}

#[async_trait]
impl ReplyRepository for MemoryStore {
    async fn add_reply(&self, reply: NewReply) -> BackendResult<AddedReply> {
        let mut tables = self.tables.write().await;
        tables.require_user(&reply.owner)?;
        if tables.comment(&reply.comment_id).is_none() {
            return Err(BackendError::invariant(format!("comment {} does not exist", reply.comment_id)));
        }

        let row = PostRow {
            id: generate_id("reply"),
            owner: reply.owner,
            parent_id: reply.comment_id,
            date: Utc::now(),
            content: reply.content,
            is_deleted: false,
        };
        let added = AddedReply {
            id: row.id.clone(),
            content: row.content.clone(),
            owner: row.owner.clone(),
        };
        tables.replies.push(row);
        Ok(added)
    }

    async fn verify_reply_availability(&self, comment_id: &str, reply_id: &str) -> BackendResult<()> {
        let tables = self.tables.read().await;
        if tables
            .replies
            .iter()
            .any(|r| r.id == reply_id && r.parent_id == comment_id)
        {
            Ok(())
        } else {
            Err(BackendError::not_found(REPLY_NOT_FOUND))
        }
    }

    async fn get_owner(&self, reply_id: &str) -> BackendResult<String> {
        let tables = self.tables.read().await;
        tables
            .replies
            .iter()
            .find(|r| r.id == reply_id)
            .map(|r| r.owner.clone())
            .ok_or_else(|| BackendError::not_found(REPLY_NOT_FOUND))
    }

    async fn soft_delete(&self, reply_id: &str) -> BackendResult<()> {
        let mut tables = self.tables.write().await;
        let row = tables
            .reply_mut(reply_id)
            .ok_or_else(|| BackendError::not_found(REPLY_NOT_FOUND))?;
        row.is_deleted = true;
        Ok(())
    }

    async fn get_replies(&self, comment_ids: &[String]) -> BackendResult<Vec<Reply>> {
        let tables = self.tables.read().await;
        Ok(tables
            .replies
            .iter()
            .filter(|r| comment_ids.contains(&r.parent_id))
            .map(|r| Reply {
                id: r.id.clone(),
                comment_id: r.parent_id.clone(),
                username: tables.username_of(&r.owner),
                date: r.date,
                content: r.content.clone(),
                is_deleted: r.is_deleted,
            })
            .collect())
    }
}

#[async_trait]
impl LikeRepository for MemoryStore {
    async fn has_like(&self, like: &Like) -> BackendResult<bool> {
        Ok(self.tables.read().await.likes.contains(like))
    }

    async fn add_like(&self, like: &Like) -> BackendResult<()> {
        let mut tables = self.tables.write().await;
        tables.require_user(&like.owner)?;
        if tables.comment(&like.comment_id).is_none() {
            return Err(BackendError::invariant(format!("comment {} does not exist", like.comment_id)));
        }
        if !tables.likes.insert(like.clone()) {
            return Err(BackendError::invariant("like already exists"));
        }
        Ok(())
    }

    async fn delete_like(&self, like: &Like) -> BackendResult<()> {
        if self.tables.write().await.likes.remove(like) {
            Ok(())
        } else {
            Err(BackendError::not_found("like not found"))
        }
    }

    async fn count_likes(&self, comment_ids: &[String]) -> BackendResult<HashMap<String, i64>> {
        let tables = self.tables.read().await;
        let mut counts = HashMap::new();
        for like in tables.likes.iter().filter(|l| comment_ids.contains(&l.comment_id)) {
            *counts.entry(like.comment_id.clone()).or_insert(0) += 1;
        }
        Ok(counts)
    }
}
