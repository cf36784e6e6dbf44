// Shared test scaffolding: a controllable in-memory Repository stub, token
// helpers, and AppState assembly. Each integration-test binary pulls this in
// with `mod common;`.
#![allow(dead_code)]

use async_trait::async_trait;
use gamecenter_portal::{
    ActivityTracker, AppState, MockStorageService,
    config::{AppConfig, Env},
    models::{
        Authority, CreateAuthorityRequest, CreateEventRequest, CreateGameRequest,
        CreateImpressionRequest, CreateMemberRequest, CreatePostRequest, CreateQuestionRequest,
        DashboardStats, Event, Game, Impression, Member, Post, Question, UpdateAuthorityRequest,
        UpdateEventRequest, UpdateGameRequest, UpdateImpressionRequest, UpdateMemberRequest,
        UpdatePostRequest, UpdateQuestionRequest, User,
    },
    repository::Repository,
    session::Claims,
};
use jsonwebtoken::{EncodingKey, Header, encode};
use std::{
    sync::Arc,
    time::{Duration, SystemTime},
};
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test-secret-value-1234567890";

/// StubRepo
///
/// A canned Repository: `users` drives authentication, list methods return
/// the pre-seeded rows, create methods synthesize a row from the request so
/// handler plumbing can be asserted end to end. Everything else reports
/// missing/failed, which is what most authorization tests want.
#[derive(Default)]
pub struct StubRepo {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub games: Vec<Game>,
    pub stats: DashboardStats,
}

#[async_trait]
impl Repository for StubRepo {
    async fn get_user(&self, id: Uuid) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }
    async fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users.iter().find(|u| u.username == username).cloned()
    }

    async fn get_stats(&self) -> DashboardStats {
        self.stats.clone()
    }

    async fn list_posts(&self) -> Vec<Post> {
        self.posts.clone()
    }
    async fn get_post(&self, id: Uuid) -> Option<Post> {
        self.posts.iter().find(|p| p.id == id).cloned()
    }
    async fn create_post(&self, req: CreatePostRequest) -> Option<Post> {
        Some(Post {
            id: Uuid::new_v4(),
            title: req.title,
            body: req.body,
            cover_image: req.cover_image_key,
            ..Post::default()
        })
    }
    async fn update_post(&self, _id: Uuid, _req: UpdatePostRequest) -> Option<Post> {
        None
    }
    async fn delete_post(&self, _id: Uuid) -> bool {
        false
    }

    async fn list_games(&self) -> Vec<Game> {
        self.games.clone()
    }
    async fn get_game(&self, id: Uuid) -> Option<Game> {
        self.games.iter().find(|g| g.id == id).cloned()
    }
    async fn create_game(&self, req: CreateGameRequest) -> Option<Game> {
        Some(Game {
            id: Uuid::new_v4(),
            name: req.name,
            description: req.description,
            category: req.category,
            cover_image: req.cover_image_key,
            ..Game::default()
        })
    }
    async fn update_game(&self, _id: Uuid, _req: UpdateGameRequest) -> Option<Game> {
        None
    }
    async fn delete_game(&self, _id: Uuid) -> bool {
        false
    }

    async fn list_members(&self) -> Vec<Member> {
        vec![]
    }
    async fn get_member(&self, _id: Uuid) -> Option<Member> {
        None
    }
    async fn create_member(&self, req: CreateMemberRequest) -> Option<Member> {
        Some(Member {
            id: Uuid::new_v4(),
            name: req.name,
            position: req.position,
            photo: req.photo_key,
            ..Member::default()
        })
    }
    async fn update_member(&self, _id: Uuid, _req: UpdateMemberRequest) -> Option<Member> {
        None
    }
    async fn delete_member(&self, _id: Uuid) -> bool {
        false
    }

    async fn list_authorities(&self) -> Vec<Authority> {
        vec![]
    }
    async fn get_authority(&self, _id: Uuid) -> Option<Authority> {
        None
    }
    async fn create_authority(&self, req: CreateAuthorityRequest) -> Option<Authority> {
        Some(Authority {
            id: Uuid::new_v4(),
            name: req.name,
            position: req.position,
            photo: req.photo_key,
            ..Authority::default()
        })
    }
    async fn update_authority(
        &self,
        _id: Uuid,
        _req: UpdateAuthorityRequest,
    ) -> Option<Authority> {
        None
    }
    async fn delete_authority(&self, _id: Uuid) -> bool {
        false
    }

    async fn list_events(&self) -> Vec<Event> {
        vec![]
    }
    async fn get_event(&self, _id: Uuid) -> Option<Event> {
        None
    }
    async fn create_event(&self, req: CreateEventRequest) -> Option<Event> {
        Some(Event {
            id: Uuid::new_v4(),
            title: req.title,
            description: req.description,
            starts_at: req.starts_at,
            cover_image: req.cover_image_key,
            ..Event::default()
        })
    }
    async fn update_event(&self, _id: Uuid, _req: UpdateEventRequest) -> Option<Event> {
        None
    }
    async fn delete_event(&self, _id: Uuid) -> bool {
        false
    }

    async fn list_impressions(&self) -> Vec<Impression> {
        vec![]
    }
    async fn get_impression(&self, _id: Uuid) -> Option<Impression> {
        None
    }
    async fn create_impression(&self, req: CreateImpressionRequest) -> Option<Impression> {
        Some(Impression {
            id: Uuid::new_v4(),
            name: req.name,
            file_key: req.file_key,
            copies: req.copies,
            delivered: false,
            ..Impression::default()
        })
    }
    async fn update_impression(
        &self,
        _id: Uuid,
        _req: UpdateImpressionRequest,
    ) -> Option<Impression> {
        None
    }
    async fn delete_impression(&self, _id: Uuid) -> bool {
        false
    }

    async fn list_questions(&self, _game_id: Option<Uuid>) -> Vec<Question> {
        vec![]
    }
    async fn get_question(&self, _id: Uuid) -> Option<Question> {
        None
    }
    async fn create_question(&self, req: CreateQuestionRequest) -> Option<Question> {
        Some(Question {
            id: Uuid::new_v4(),
            game_id: req.game_id,
            prompt: req.prompt,
            options: req.options,
            answer_index: req.answer_index,
            ..Question::default()
        })
    }
    async fn update_question(&self, _id: Uuid, _req: UpdateQuestionRequest) -> Option<Question> {
        None
    }
    async fn delete_question(&self, _id: Uuid) -> bool {
        false
    }
}

/// A user row with the given role label. The password hash is filled by the
/// login tests that need one; everything else ignores it.
pub fn user_with_role(id: Uuid, username: &str, role: &str) -> User {
    User {
        id,
        username: username.to_string(),
        role: role.to_string(),
        password_hash: String::new(),
    }
}

/// Signs a token the way the server does, with a configurable expiry offset
/// (negative = already expired).
pub fn make_token(user_id: Uuid, exp_offset: i64) -> String {
    let now = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;

    let claims = Claims {
        sub: user_id,
        iat: now as usize,
        exp: (now + exp_offset) as usize,
    };

    let key = EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes());
    encode(&Header::default(), &claims, &key).unwrap()
}

/// Assembles an AppState around a stub repository, with the test secret and a
/// configurable environment and inactivity window.
pub fn test_state(env: Env, repo: StubRepo, idle: Duration) -> AppState {
    let mut config = AppConfig::default();
    config.env = env;
    config.jwt_secret = TEST_JWT_SECRET.to_string();

    AppState {
        repo: Arc::new(repo),
        storage: Arc::new(MockStorageService::new()),
        sessions: Arc::new(ActivityTracker::new(idle)),
        config,
    }
}

/// The common case: production env (bypass off), 10-minute window.
pub fn prod_state(repo: StubRepo) -> AppState {
    test_state(Env::Production, repo, Duration::from_secs(600))
}
