/**
 * Forum Route Handlers
 *
 * # Routes
 *
 * - `POST /threads` - Create a thread (auth)
 * - `GET /threads/{threadId}` - Thread detail (public)
 * - `POST /threads/{threadId}/comments` - Comment (auth)
 * - `DELETE /threads/{threadId}/comments/{commentId}` - Delete comment (auth, owner)
 * - `POST /threads/{threadId}/comments/{commentId}/replies` - Reply (auth)
 * - `DELETE /threads/{threadId}/comments/{commentId}/replies/{replyId}` - Delete reply (auth, owner)
 * - `PUT /threads/{threadId}/comments/{commentId}/likes` - Toggle like (auth)
 *
 * Authentication is enforced per handler through the `AuthUser` extractor.
 */

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::forum::handlers::{
    delete_comment, delete_reply, get_thread, post_comment, post_reply, post_thread, put_like,
};
use crate::backend::server::state::AppState;

/// Configure forum routes
pub fn configure_forum_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/threads", post(post_thread))
        .route("/threads/{thread_id}", get(get_thread))
        .route("/threads/{thread_id}/comments", post(post_comment))
        .route(
            "/threads/{thread_id}/comments/{comment_id}",
            delete(delete_comment),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies",
            post(post_reply),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}",
            delete(delete_reply),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/likes",
            put(put_like),
        )
}
