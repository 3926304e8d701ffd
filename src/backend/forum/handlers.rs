/**
 * Forum Handlers
 *
 * HTTP handlers for threads, comments, replies and likes. Write routes take
 * an [`AuthUser`] and act on behalf of `user.id`; the thread-detail read is
 * public.
 *
 * Path parameters are forwarded as-is. Scoping (comment in thread, reply in
 * comment) and ownership are checked by [`ForumService`].
 */

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::error::conversion::json_body;
use crate::backend::error::BackendResult;
use crate::backend::forum::service::ForumService;
use crate::backend::middleware::AuthUser;
use crate::shared::forum::{
    AddedCommentData, AddedReplyData, AddedThreadData, ApiResponse, ContentPayload, ThreadData,
    ThreadPayload,
};

/// `POST /threads`
pub async fn post_thread(
    State(forum): State<ForumService>,
    AuthUser(user): AuthUser,
    body: Result<Json<ThreadPayload>, JsonRejection>,
) -> BackendResult<(StatusCode, Json<ApiResponse<AddedThreadData>>)> {
    let payload = json_body(body, "create a new thread")?;
    let added_thread = forum.add_thread(&user.id, &payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedThreadData { added_thread })),
    ))
}

/// `GET /threads/{threadId}`
pub async fn get_thread(
    State(forum): State<ForumService>,
    Path(thread_id): Path<String>,
) -> BackendResult<Json<ApiResponse<ThreadData>>> {
    let thread = forum.get_thread_detail(&thread_id).await?;
    Ok(Json(ApiResponse::success(ThreadData { thread })))
}

/// `POST /threads/{threadId}/comments`
pub async fn post_comment(
    State(forum): State<ForumService>,
    AuthUser(user): AuthUser,
    Path(thread_id): Path<String>,
    body: Result<Json<ContentPayload>, JsonRejection>,
) -> BackendResult<(StatusCode, Json<ApiResponse<AddedCommentData>>)> {
    let payload = json_body(body, "create a new comment")?;
    let added_comment = forum.add_comment(&user.id, &thread_id, &payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedCommentData { added_comment })),
    ))
}

/// `DELETE /threads/{threadId}/comments/{commentId}`
pub async fn delete_comment(
    State(forum): State<ForumService>,
    AuthUser(user): AuthUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> BackendResult<Json<ApiResponse<()>>> {
    forum.delete_comment(&user.id, &thread_id, &comment_id).await?;
    Ok(Json(ApiResponse::ok()))
}

/// `POST /threads/{threadId}/comments/{commentId}/replies`
pub async fn post_reply(
    State(forum): State<ForumService>,
    AuthUser(user): AuthUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
    body: Result<Json<ContentPayload>, JsonRejection>,
) -> BackendResult<(StatusCode, Json<ApiResponse<AddedReplyData>>)> {
    let payload = json_body(body, "create a new reply")?;
    let added_reply = forum
        .add_reply(&user.id, &thread_id, &comment_id, &payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedReplyData { added_reply })),
    ))
}

/// `DELETE /threads/{threadId}/comments/{commentId}/replies/{replyId}`
pub async fn delete_reply(
    State(forum): State<ForumService>,
    AuthUser(user): AuthUser,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
) -> BackendResult<Json<ApiResponse<()>>> {
    forum
        .delete_reply(&user.id, &thread_id, &comment_id, &reply_id)
        .await?;
    Ok(Json(ApiResponse::ok()))
}

/// `PUT /threads/{threadId}/comments/{commentId}/likes`
pub async fn put_like(
    State(forum): State<ForumService>,
    AuthUser(user): AuthUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> BackendResult<Json<ApiResponse<()>>> {
    forum.toggle_like(&user.id, &thread_id, &comment_id).await?;
    Ok(Json(ApiResponse::ok()))
}
