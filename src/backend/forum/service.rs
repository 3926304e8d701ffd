/**
 * Forum Use Cases
 *
 * `ForumService` orchestrates every forum operation on top of the
 * repository ports. Each use case is a short linear chain:
 *
 * 1. Parse and validate the payload
 * 2. Check that the targeted resources exist (scoped to their parent)
 * 3. Compare the requester with the stored owner (deletes only)
 * 4. Run a single mutating or read query
 *
 * The thread-detail read is the only aggregation: thread, comments,
 * replies of all comments, and like counts of all comments are fetched
 * with one query each and grouped in memory.
 */

use std::collections::HashMap;
use std::sync::Arc;

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::forum::entities::{Like, NewComment, NewReply, NewThread};
use crate::backend::forum::repository::{
    CommentRepository, LikeRepository, ReplyRepository, ThreadRepository,
};
use crate::shared::forum::{
    AddedComment, AddedReply, AddedThread, ContentPayload, ReplyDetail, ThreadDetail, ThreadPayload,
};

/// Whether a toggle left the comment liked or not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeToggle {
    Liked,
    Unliked,
}

/// Forum use cases over shared repository handles
#[derive(Clone)]
pub struct ForumService {
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
    replies: Arc<dyn ReplyRepository>,
    likes: Arc<dyn LikeRepository>,
}

impl ForumService {
    pub fn new(
        threads: Arc<dyn ThreadRepository>,
        comments: Arc<dyn CommentRepository>,
        replies: Arc<dyn ReplyRepository>,
        likes: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            threads,
            comments,
            replies,
            likes,
        }
    }

    /// Create a thread owned by `owner`
    pub async fn add_thread(&self, owner: &str, payload: &ThreadPayload) -> BackendResult<AddedThread> {
        let thread = NewThread::parse(owner, payload)?;
        let added = self.threads.add_thread(thread).await?;
        tracing::info!("Thread {} created by {}", added.id, owner);
        Ok(added)
    }

    /// Comment on an existing thread
    pub async fn add_comment(
        &self,
        owner: &str,
        thread_id: &str,
        payload: &ContentPayload,
    ) -> BackendResult<AddedComment> {
        let comment = NewComment::parse(owner, thread_id, payload)?;

        self.threads.get_thread(thread_id).await?;

        let added = self.comments.add_comment(comment).await?;
        tracing::info!("Comment {} added to thread {}", added.id, thread_id);
        Ok(added)
    }

    /// Reply to a comment of a thread
    pub async fn add_reply(
        &self,
        owner: &str,
        thread_id: &str,
        comment_id: &str,
        payload: &ContentPayload,
    ) -> BackendResult<AddedReply> {
        let reply = NewReply::parse(owner, comment_id, payload)?;

        self.comments
            .verify_comment_availability(thread_id, comment_id)
            .await?;

        let added = self.replies.add_reply(reply).await?;
        tracing::info!("Reply {} added to comment {}", added.id, comment_id);
        Ok(added)
    }

    /// Soft delete a comment owned by the requester
    pub async fn delete_comment(&self, requester: &str, thread_id: &str, comment_id: &str) -> BackendResult<()> {
        self.comments
            .verify_comment_availability(thread_id, comment_id)
            .await?;

        let owner = self.comments.get_owner(comment_id).await?;
        if owner != requester {
            tracing::warn!("User {} tried to delete comment {} owned by {}", requester, comment_id, owner);
            return Err(BackendError::authorization("you are not the owner of this comment"));
        }

        self.comments.soft_delete(comment_id).await?;
        tracing::info!("Comment {} soft deleted", comment_id);
        Ok(())
    }

    /// Soft delete a reply owned by the requester
    pub async fn delete_reply(
        &self,
        requester: &str,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
    ) -> BackendResult<()> {
        self.comments
            .verify_comment_availability(thread_id, comment_id)
            .await?;
        self.replies
            .verify_reply_availability(comment_id, reply_id)
            .await?;

        let owner = self.replies.get_owner(reply_id).await?;
        if owner != requester {
            tracing::warn!("User {} tried to delete reply {} owned by {}", requester, reply_id, owner);
            return Err(BackendError::authorization("you are not the owner of this reply"));
        }

        self.replies.soft_delete(reply_id).await?;
        tracing::info!("Reply {} soft deleted", reply_id);
        Ok(())
    }

    /// Like a comment, or take the like back if it is already there
    pub async fn toggle_like(&self, requester: &str, thread_id: &str, comment_id: &str) -> BackendResult<LikeToggle> {
        self.comments
            .verify_comment_availability(thread_id, comment_id)
            .await?;

        let like = Like::new(requester, comment_id);

        if self.likes.has_like(&like).await? {
            self.likes.delete_like(&like).await?;
            tracing::debug!("User {} unliked comment {}", requester, comment_id);
            Ok(LikeToggle::Unliked)
        } else {
            self.likes.add_like(&like).await?;
            tracing::debug!("User {} liked comment {}", requester, comment_id);
            Ok(LikeToggle::Liked)
        }
    }

    /// Thread with its comments, their replies and like counts
    pub async fn get_thread_detail(&self, thread_id: &str) -> BackendResult<ThreadDetail> {
        let thread = self.threads.get_thread(thread_id).await?;
        let comments = self.comments.get_comments(thread_id).await?;

        let comment_ids: Vec<String> = comments.iter().map(|c| c.id.clone()).collect();
        let replies = self.replies.get_replies(&comment_ids).await?;
        let like_counts = self.likes.count_likes(&comment_ids).await?;

        // Replies arrive oldest first; pushing keeps that order per comment.
        let mut replies_by_comment: HashMap<String, Vec<ReplyDetail>> = HashMap::new();
        for reply in replies {
            replies_by_comment
                .entry(reply.comment_id.clone())
                .or_default()
                .push(reply.into_detail());
        }

        let comments = comments
            .into_iter()
            .map(|comment| {
                let like_count = like_counts.get(&comment.id).copied().unwrap_or(0);
                let replies = replies_by_comment.remove(&comment.id).unwrap_or_default();
                comment.into_detail(like_count, replies)
            })
            .collect::<Vec<_>>();

        tracing::debug!("Thread {} assembled with {} comments", thread_id, comments.len());

        Ok(ThreadDetail {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.date,
            username: thread.username,
            comments,
        })
    }
}
