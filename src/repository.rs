use crate::models::{
    Authority, CreateAuthorityRequest, CreateEventRequest, CreateGameRequest,
    CreateImpressionRequest, CreateMemberRequest, CreatePostRequest, CreateQuestionRequest,
    DashboardStats, Event, Game, Impression, Member, Post, Question, UpdateAuthorityRequest,
    UpdateEventRequest, UpdateGameRequest, UpdateImpressionRequest, UpdateMemberRequest,
    UpdatePostRequest, UpdateQuestionRequest, User,
};
use async_trait::async_trait;
use sqlx::{PgPool, query_builder::QueryBuilder};
use std::sync::Arc;
use uuid::Uuid;

/// Repository Trait
///
/// The abstract contract for all persistence operations. Handlers interact
/// with the data layer through this trait only, so the concrete backing
/// (Postgres, mocks in tests) is swappable.
///
/// **Send + Sync + async_trait** make the trait object (`Arc<dyn Repository>`)
/// shareable across axum's asynchronous task boundaries.
#[async_trait]
pub trait Repository: Send + Sync {
    // --- Identity ---
    // Resolves a user by primary key; used by the AuthUser extractor on every
    // authenticated API request.
    async fn get_user(&self, id: Uuid) -> Option<User>;
    // Resolves a user by login name; used only by the login handler.
    async fn get_user_by_username(&self, username: &str) -> Option<User>;

    // --- Home dashboard ---
    async fn get_stats(&self) -> DashboardStats;

    // --- Posts ---
    async fn list_posts(&self) -> Vec<Post>;
    async fn get_post(&self, id: Uuid) -> Option<Post>;
    async fn create_post(&self, req: CreatePostRequest) -> Option<Post>;
    async fn update_post(&self, id: Uuid, req: UpdatePostRequest) -> Option<Post>;
    async fn delete_post(&self, id: Uuid) -> bool;

    // --- Games ---
    async fn list_games(&self) -> Vec<Game>;
    async fn get_game(&self, id: Uuid) -> Option<Game>;
    async fn create_game(&self, req: CreateGameRequest) -> Option<Game>;
    async fn update_game(&self, id: Uuid, req: UpdateGameRequest) -> Option<Game>;
    async fn delete_game(&self, id: Uuid) -> bool;

    // --- Members ---
    async fn list_members(&self) -> Vec<Member>;
    async fn get_member(&self, id: Uuid) -> Option<Member>;
    async fn create_member(&self, req: CreateMemberRequest) -> Option<Member>;
    async fn update_member(&self, id: Uuid, req: UpdateMemberRequest) -> Option<Member>;
    async fn delete_member(&self, id: Uuid) -> bool;

    // --- Authorities ---
    async fn list_authorities(&self) -> Vec<Authority>;
    async fn get_authority(&self, id: Uuid) -> Option<Authority>;
    async fn create_authority(&self, req: CreateAuthorityRequest) -> Option<Authority>;
    async fn update_authority(&self, id: Uuid, req: UpdateAuthorityRequest) -> Option<Authority>;
    async fn delete_authority(&self, id: Uuid) -> bool;

    // --- Events ---
    async fn list_events(&self) -> Vec<Event>;
    async fn get_event(&self, id: Uuid) -> Option<Event>;
    async fn create_event(&self, req: CreateEventRequest) -> Option<Event>;
    async fn update_event(&self, id: Uuid, req: UpdateEventRequest) -> Option<Event>;
    async fn delete_event(&self, id: Uuid) -> bool;

    // --- Impressions (print jobs) ---
    async fn list_impressions(&self) -> Vec<Impression>;
    async fn get_impression(&self, id: Uuid) -> Option<Impression>;
    async fn create_impression(&self, req: CreateImpressionRequest) -> Option<Impression>;
    async fn update_impression(&self, id: Uuid, req: UpdateImpressionRequest)
    -> Option<Impression>;
    async fn delete_impression(&self, id: Uuid) -> bool;

    // --- Quiz questions ---
    // Optionally filtered by owning game (the questions screen lives inside
    // the games screen).
    async fn list_questions(&self, game_id: Option<Uuid>) -> Vec<Question>;
    async fn get_question(&self, id: Uuid) -> Option<Question>;
    async fn create_question(&self, req: CreateQuestionRequest) -> Option<Question>;
    async fn update_question(&self, id: Uuid, req: UpdateQuestionRequest) -> Option<Question>;
    async fn delete_question(&self, id: Uuid) -> bool;
}

/// RepositoryState
///
/// The concrete type used to share the persistence layer across the
/// application state.
pub type RepositoryState = Arc<dyn Repository>;

/// PostgresRepository
///
/// The concrete implementation of the `Repository` trait, backed by Postgres.
///
/// Queries use sqlx's runtime API (`query_as` + `bind`) throughout: every
/// failure is logged and degraded to an empty/None result rather than
/// propagated, since no handler can do anything smarter with a database error
/// than report the request failed.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a new repository instance using the initialized connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const POST_COLUMNS: &str = "id, title, body, cover_image, created_at, updated_at";
const GAME_COLUMNS: &str = "id, name, description, category, cover_image, created_at, updated_at";
const MEMBER_COLUMNS: &str = "id, name, position, photo, created_at";
const EVENT_COLUMNS: &str = "id, title, description, starts_at, cover_image, created_at, updated_at";
const IMPRESSION_COLUMNS: &str = "id, name, file_key, copies, delivered, created_at";
const QUESTION_COLUMNS: &str = "id, game_id, prompt, options, answer_index, created_at";

#[async_trait]
impl Repository for PostgresRepository {
    // --- Identity ---

    async fn get_user(&self, id: Uuid) -> Option<User> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, role, password_hash FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("get_user error: {:?}", e);
            None
        })
    }

    async fn get_user_by_username(&self, username: &str) -> Option<User> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, role, password_hash FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("get_user_by_username error: {:?}", e);
            None
        })
    }

    // --- Home dashboard ---

    /// Compiles the counters for the home screen in one call.
    async fn get_stats(&self) -> DashboardStats {
        let total_posts = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await
            .unwrap_or(0);
        let total_games = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM games")
            .fetch_one(&self.pool)
            .await
            .unwrap_or(0);
        let total_members = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM members")
            .fetch_one(&self.pool)
            .await
            .unwrap_or(0);
        let total_events = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await
            .unwrap_or(0);
        let pending_impressions =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM impressions WHERE delivered = false")
                .fetch_one(&self.pool)
                .await
                .unwrap_or(0);

        DashboardStats {
            total_posts,
            total_games,
            total_members,
            total_events,
            pending_impressions,
        }
    }

    // --- Posts ---

    async fn list_posts(&self) -> Vec<Post> {
        sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("list_posts error: {:?}", e);
            vec![]
        })
    }

    async fn get_post(&self, id: Uuid) -> Option<Post> {
        sqlx::query_as::<_, Post>(&format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("get_post error: {:?}", e);
                None
            })
    }

    async fn create_post(&self, req: CreatePostRequest) -> Option<Post> {
        sqlx::query_as::<_, Post>(&format!(
            "INSERT INTO posts (id, title, body, cover_image, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, NOW(), NOW()) RETURNING {POST_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(req.title)
        .bind(req.body)
        .bind(req.cover_image_key)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| tracing::error!("create_post error: {:?}", e))
        .ok()
    }

    /// Partial update via COALESCE: a column changes only when the matching
    /// request field is present.
    async fn update_post(&self, id: Uuid, req: UpdatePostRequest) -> Option<Post> {
        sqlx::query_as::<_, Post>(&format!(
            "UPDATE posts SET title = COALESCE($2, title), body = COALESCE($3, body), \
             cover_image = COALESCE($4, cover_image), updated_at = NOW() \
             WHERE id = $1 RETURNING {POST_COLUMNS}"
        ))
        .bind(id)
        .bind(req.title)
        .bind(req.body)
        .bind(req.cover_image_key)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("update_post error: {:?}", e);
            None
        })
    }

    async fn delete_post(&self, id: Uuid) -> bool {
        match sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
        {
            Ok(res) => res.rows_affected() > 0,
            Err(e) => {
                tracing::error!("delete_post error: {:?}", e);
                false
            }
        }
    }

    // --- Games ---

    async fn list_games(&self) -> Vec<Game> {
        sqlx::query_as::<_, Game>(&format!("SELECT {GAME_COLUMNS} FROM games ORDER BY name ASC"))
            .fetch_all(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("list_games error: {:?}", e);
                vec![]
            })
    }

    async fn get_game(&self, id: Uuid) -> Option<Game> {
        sqlx::query_as::<_, Game>(&format!("SELECT {GAME_COLUMNS} FROM games WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("get_game error: {:?}", e);
                None
            })
    }

    async fn create_game(&self, req: CreateGameRequest) -> Option<Game> {
        sqlx::query_as::<_, Game>(&format!(
            "INSERT INTO games (id, name, description, category, cover_image, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, NOW(), NOW()) RETURNING {GAME_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(req.name)
        .bind(req.description)
        .bind(req.category)
        .bind(req.cover_image_key)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| tracing::error!("create_game error: {:?}", e))
        .ok()
    }

    async fn update_game(&self, id: Uuid, req: UpdateGameRequest) -> Option<Game> {
        sqlx::query_as::<_, Game>(&format!(
            "UPDATE games SET name = COALESCE($2, name), description = COALESCE($3, description), \
             category = COALESCE($4, category), cover_image = COALESCE($5, cover_image), \
             updated_at = NOW() WHERE id = $1 RETURNING {GAME_COLUMNS}"
        ))
        .bind(id)
        .bind(req.name)
        .bind(req.description)
        .bind(req.category)
        .bind(req.cover_image_key)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("update_game error: {:?}", e);
            None
        })
    }

    /// Questions cascade with their game (FK ON DELETE CASCADE).
    async fn delete_game(&self, id: Uuid) -> bool {
        match sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
        {
            Ok(res) => res.rows_affected() > 0,
            Err(e) => {
                tracing::error!("delete_game error: {:?}", e);
                false
            }
        }
    }

    // --- Members ---

    async fn list_members(&self) -> Vec<Member> {
        sqlx::query_as::<_, Member>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members ORDER BY name ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("list_members error: {:?}", e);
            vec![]
        })
    }

    async fn get_member(&self, id: Uuid) -> Option<Member> {
        sqlx::query_as::<_, Member>(&format!("SELECT {MEMBER_COLUMNS} FROM members WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("get_member error: {:?}", e);
                None
            })
    }

    async fn create_member(&self, req: CreateMemberRequest) -> Option<Member> {
        sqlx::query_as::<_, Member>(&format!(
            "INSERT INTO members (id, name, position, photo, created_at) \
             VALUES ($1, $2, $3, $4, NOW()) RETURNING {MEMBER_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(req.name)
        .bind(req.position)
        .bind(req.photo_key)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| tracing::error!("create_member error: {:?}", e))
        .ok()
    }

    async fn update_member(&self, id: Uuid, req: UpdateMemberRequest) -> Option<Member> {
        sqlx::query_as::<_, Member>(&format!(
            "UPDATE members SET name = COALESCE($2, name), position = COALESCE($3, position), \
             photo = COALESCE($4, photo) WHERE id = $1 RETURNING {MEMBER_COLUMNS}"
        ))
        .bind(id)
        .bind(req.name)
        .bind(req.position)
        .bind(req.photo_key)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("update_member error: {:?}", e);
            None
        })
    }

    async fn delete_member(&self, id: Uuid) -> bool {
        match sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
        {
            Ok(res) => res.rows_affected() > 0,
            Err(e) => {
                tracing::error!("delete_member error: {:?}", e);
                false
            }
        }
    }

    // --- Authorities ---

    async fn list_authorities(&self) -> Vec<Authority> {
        sqlx::query_as::<_, Authority>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM authorities ORDER BY name ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("list_authorities error: {:?}", e);
            vec![]
        })
    }

    async fn get_authority(&self, id: Uuid) -> Option<Authority> {
        sqlx::query_as::<_, Authority>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM authorities WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("get_authority error: {:?}", e);
            None
        })
    }

    async fn create_authority(&self, req: CreateAuthorityRequest) -> Option<Authority> {
        sqlx::query_as::<_, Authority>(&format!(
            "INSERT INTO authorities (id, name, position, photo, created_at) \
             VALUES ($1, $2, $3, $4, NOW()) RETURNING {MEMBER_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(req.name)
        .bind(req.position)
        .bind(req.photo_key)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| tracing::error!("create_authority error: {:?}", e))
        .ok()
    }

    async fn update_authority(&self, id: Uuid, req: UpdateAuthorityRequest) -> Option<Authority> {
        sqlx::query_as::<_, Authority>(&format!(
            "UPDATE authorities SET name = COALESCE($2, name), position = COALESCE($3, position), \
             photo = COALESCE($4, photo) WHERE id = $1 RETURNING {MEMBER_COLUMNS}"
        ))
        .bind(id)
        .bind(req.name)
        .bind(req.position)
        .bind(req.photo_key)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("update_authority error: {:?}", e);
            None
        })
    }

    async fn delete_authority(&self, id: Uuid) -> bool {
        match sqlx::query("DELETE FROM authorities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
        {
            Ok(res) => res.rows_affected() > 0,
            Err(e) => {
                tracing::error!("delete_authority error: {:?}", e);
                false
            }
        }
    }

    // --- Events ---

    async fn list_events(&self) -> Vec<Event> {
        sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY starts_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("list_events error: {:?}", e);
            vec![]
        })
    }

    async fn get_event(&self, id: Uuid) -> Option<Event> {
        sqlx::query_as::<_, Event>(&format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("get_event error: {:?}", e);
                None
            })
    }

    async fn create_event(&self, req: CreateEventRequest) -> Option<Event> {
        sqlx::query_as::<_, Event>(&format!(
            "INSERT INTO events (id, title, description, starts_at, cover_image, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, NOW(), NOW()) RETURNING {EVENT_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(req.title)
        .bind(req.description)
        .bind(req.starts_at)
        .bind(req.cover_image_key)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| tracing::error!("create_event error: {:?}", e))
        .ok()
    }

    async fn update_event(&self, id: Uuid, req: UpdateEventRequest) -> Option<Event> {
        sqlx::query_as::<_, Event>(&format!(
            "UPDATE events SET title = COALESCE($2, title), description = COALESCE($3, description), \
             starts_at = COALESCE($4, starts_at), cover_image = COALESCE($5, cover_image), \
             updated_at = NOW() WHERE id = $1 RETURNING {EVENT_COLUMNS}"
        ))
        .bind(id)
        .bind(req.title)
        .bind(req.description)
        .bind(req.starts_at)
        .bind(req.cover_image_key)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("update_event error: {:?}", e);
            None
        })
    }

    async fn delete_event(&self, id: Uuid) -> bool {
        match sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
        {
            Ok(res) => res.rows_affected() > 0,
            Err(e) => {
                tracing::error!("delete_event error: {:?}", e);
                false
            }
        }
    }

    // --- Impressions ---

    /// Pending jobs first, then newest first, mirroring the print-room queue.
    async fn list_impressions(&self) -> Vec<Impression> {
        sqlx::query_as::<_, Impression>(&format!(
            "SELECT {IMPRESSION_COLUMNS} FROM impressions ORDER BY delivered ASC, created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("list_impressions error: {:?}", e);
            vec![]
        })
    }

    async fn get_impression(&self, id: Uuid) -> Option<Impression> {
        sqlx::query_as::<_, Impression>(&format!(
            "SELECT {IMPRESSION_COLUMNS} FROM impressions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("get_impression error: {:?}", e);
            None
        })
    }

    async fn create_impression(&self, req: CreateImpressionRequest) -> Option<Impression> {
        sqlx::query_as::<_, Impression>(&format!(
            "INSERT INTO impressions (id, name, file_key, copies, delivered, created_at) \
             VALUES ($1, $2, $3, $4, false, NOW()) RETURNING {IMPRESSION_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(req.name)
        .bind(req.file_key)
        .bind(req.copies)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| tracing::error!("create_impression error: {:?}", e))
        .ok()
    }

    async fn update_impression(
        &self,
        id: Uuid,
        req: UpdateImpressionRequest,
    ) -> Option<Impression> {
        sqlx::query_as::<_, Impression>(&format!(
            "UPDATE impressions SET name = COALESCE($2, name), copies = COALESCE($3, copies), \
             delivered = COALESCE($4, delivered) WHERE id = $1 RETURNING {IMPRESSION_COLUMNS}"
        ))
        .bind(id)
        .bind(req.name)
        .bind(req.copies)
        .bind(req.delivered)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("update_impression error: {:?}", e);
            None
        })
    }

    async fn delete_impression(&self, id: Uuid) -> bool {
        match sqlx::query("DELETE FROM impressions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
        {
            Ok(res) => res.rows_affected() > 0,
            Err(e) => {
                tracing::error!("delete_impression error: {:?}", e);
                false
            }
        }
    }

    // --- Quiz questions ---

    /// Flexible listing built with QueryBuilder so the optional game filter
    /// stays safely parameterized.
    async fn list_questions(&self, game_id: Option<Uuid>) -> Vec<Question> {
        let mut builder: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new(format!("SELECT {QUESTION_COLUMNS} FROM questions"));

        if let Some(game) = game_id {
            builder.push(" WHERE game_id = ");
            builder.push_bind(game);
        }
        builder.push(" ORDER BY created_at ASC");

        match builder.build_query_as::<Question>().fetch_all(&self.pool).await {
            Ok(q) => q,
            Err(e) => {
                tracing::error!("list_questions error: {:?}", e);
                vec![]
            }
        }
    }

    async fn get_question(&self, id: Uuid) -> Option<Question> {
        sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("get_question error: {:?}", e);
            None
        })
    }

    async fn create_question(&self, req: CreateQuestionRequest) -> Option<Question> {
        sqlx::query_as::<_, Question>(&format!(
            "INSERT INTO questions (id, game_id, prompt, options, answer_index, created_at) \
             VALUES ($1, $2, $3, $4, $5, NOW()) RETURNING {QUESTION_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(req.game_id)
        .bind(req.prompt)
        .bind(req.options)
        .bind(req.answer_index)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| tracing::error!("create_question error: {:?}", e))
        .ok()
    }

    async fn update_question(&self, id: Uuid, req: UpdateQuestionRequest) -> Option<Question> {
        sqlx::query_as::<_, Question>(&format!(
            "UPDATE questions SET prompt = COALESCE($2, prompt), options = COALESCE($3, options), \
             answer_index = COALESCE($4, answer_index) WHERE id = $1 RETURNING {QUESTION_COLUMNS}"
        ))
        .bind(id)
        .bind(req.prompt)
        .bind(req.options)
        .bind(req.answer_index)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("update_question error: {:?}", e);
            None
        })
    }

    async fn delete_question(&self, id: Uuid) -> bool {
        match sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
        {
            Ok(res) => res.rows_affected() > 0,
            Err(e) => {
                tracing::error!("delete_question error: {:?}", e);
                false
            }
        }
    }
}
