use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::policy::NavView;

// --- Identity ---

/// User
///
/// A dashboard login account from the `users` table. Internal only: handlers
/// expose [`UserProfile`] and [`SessionResponse`] instead, so the argon2
/// password hash never reaches a wire model. Accounts are provisioned
/// operationally (seed SQL), not through the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Default)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// The role label; resolved to a `policy::Role` during authentication.
    pub role: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
}

/// UserProfile
///
/// Output schema for the authenticated user's own profile (GET /api/auth/me).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub role: String,
}

/// LoginRequest
///
/// Input payload for POST /api/auth/login.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// SessionResponse
///
/// Output of a successful login: the profile plus the sidebar menu derived
/// from the role, so the frontend renders navigation without a second call.
/// The three session cookies ride on the same response.
#[derive(Debug, Clone, Serialize, TS, ToSchema)]
#[ts(export)]
pub struct SessionResponse {
    pub id: Uuid,
    pub username: String,
    pub role: String,
    pub views: Vec<NavView>,
}

// --- Content resources ---

/// Post
///
/// A news/blog entry from the `posts` table.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    // S3 key of the cover image, when one was uploaded.
    pub cover_image: Option<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
    // S3 key resulting from the presigned upload flow.
    pub cover_image_key: Option<String>,
}

/// Partial update payload. Only fields present in the JSON are touched.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_key: Option<String>,
}

/// Game
///
/// A game record from the `games` table. Quiz questions hang off a game.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Game {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub cover_image: Option<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateGameRequest {
    pub name: String,
    pub description: String,
    pub category: String,
    pub cover_image_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateGameRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_key: Option<String>,
}

/// Member
///
/// A staff member shown on the site, from the `members` table.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub photo: Option<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateMemberRequest {
    pub name: String,
    pub position: String,
    pub photo_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateMemberRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_key: Option<String>,
}

/// Authority
///
/// An institutional authority shown on the site, from the `authorities` table.
/// Same shape as [`Member`]; kept separate because the screens, the API
/// resource and the table are separate.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Authority {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub photo: Option<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateAuthorityRequest {
    pub name: String,
    pub position: String,
    pub photo_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateAuthorityRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_key: Option<String>,
}

/// Event
///
/// A scheduled event from the `events` table.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[ts(type = "string")]
    pub starts_at: DateTime<Utc>,
    pub cover_image: Option<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    #[ts(type = "string")]
    pub starts_at: DateTime<Utc>,
    pub cover_image_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateEventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_key: Option<String>,
}

/// Impression
///
/// A print job request from the `impressions` table: a named file queued for
/// printing, with a copy count and a delivered flag flipped by the print room.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Impression {
    pub id: Uuid,
    pub name: String,
    // S3 key of the document to print.
    pub file_key: String,
    pub copies: i32,
    pub delivered: bool,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateImpressionRequest {
    pub name: String,
    pub file_key: String,
    pub copies: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateImpressionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copies: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered: Option<bool>,
}

/// Question
///
/// A quiz question from the `questions` table, always attached to a game.
/// `answer_index` points into `options`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Question {
    pub id: Uuid,
    pub game_id: Uuid,
    pub prompt: String,
    pub options: Vec<String>,
    pub answer_index: i32,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateQuestionRequest {
    pub game_id: Uuid,
    pub prompt: String,
    pub options: Vec<String>,
    pub answer_index: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateQuestionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_index: Option<i32>,
}

// --- Dashboard & media ---

/// DashboardStats
///
/// Output schema for the home-screen counters (GET /api/stats).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct DashboardStats {
    pub total_posts: i64,
    pub total_games: i64,
    pub total_members: i64,
    pub total_events: i64,
    /// Print jobs still waiting on the print room (`delivered = false`).
    pub pending_impressions: i64,
}

/// PresignedUrlRequest
///
/// Input payload for requesting a short-lived upload URL
/// (POST /api/upload/presigned). The server derives the object key and
/// constrains the upload to the declared MIME type.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, TS, Default)]
#[ts(export)]
pub struct PresignedUrlRequest {
    /// The original filename, used to derive the file extension.
    #[schema(example = "portada.png")]
    pub filename: String,
    /// The MIME type the upload will be constrained to.
    #[schema(example = "image/png")]
    pub file_type: String,
}

/// PresignedUrlResponse
///
/// The temporary URL for the direct client-to-storage PUT, plus the object
/// key to store on the owning record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, TS, Default)]
#[ts(export)]
pub struct PresignedUrlResponse {
    pub upload_url: String,
    pub media_key: String,
}
