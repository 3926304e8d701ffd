/**
 * Forum Wire Types
 *
 * This module defines the JSON bodies exchanged over the HTTP API.
 * Response types serialize with camelCase keys; request payloads keep
 * every property as an untyped `serde_json::Value` so validation can tell
 * a missing property apart from a wrongly typed one.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Success envelope wrapping every response body
///
/// ```json
/// { "status": "success", "data": { ... } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Success envelope carrying `data`
    pub fn success(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope without a body
    pub fn ok() -> Self {
        Self {
            status: "success".to_string(),
            data: None,
        }
    }
}

/// `POST /users` request body
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RegisterUserPayload {
    pub username: Option<Value>,
    pub password: Option<Value>,
    pub fullname: Option<Value>,
}

/// `POST /authentications` request body
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoginPayload {
    pub username: Option<Value>,
    pub password: Option<Value>,
}

/// `PUT` and `DELETE /authentications` request body
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenPayload {
    pub refresh_token: Option<Value>,
}

/// `POST /threads` request body
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThreadPayload {
    pub title: Option<Value>,
    pub body: Option<Value>,
}

/// Comment and reply request body
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContentPayload {
    pub content: Option<Value>,
}

/// A freshly registered user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddedUser {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

/// Access and refresh token issued on login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Access token issued on refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshedToken {
    pub access_token: String,
}

/// A freshly created thread
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

/// A freshly created comment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

/// A freshly created reply
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

/// Thread with every comment, reply and like count
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThreadDetail {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentDetail>,
}

/// One comment inside a [`ThreadDetail`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentDetail {
    pub id: String,
    pub username: String,
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
    pub content: String,
    pub like_count: i64,
    pub replies: Vec<ReplyDetail>,
}

/// One reply inside a [`CommentDetail`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplyDetail {
    pub id: String,
    pub content: String,
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
    pub username: String,
}

/// ISO-8601 dates with millisecond precision, e.g. `2021-08-08T07:19:09.775Z`
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        DateTime::<Utc>::deserialize(deserializer)
    }
}

/// Data wrappers keyed the way clients read them
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedUserData {
    pub added_user: AddedUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedThreadData {
    pub added_thread: AddedThread,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedCommentData {
    pub added_comment: AddedComment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedReplyData {
    pub added_reply: AddedReply,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadData {
    pub thread: ThreadDetail,
}
