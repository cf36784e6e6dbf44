use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use gamecenter_portal::{create_router, models::Post};
use serde_json::{Value, json};
use tower::util::ServiceExt;
use uuid::Uuid;

mod common;
use common::{StubRepo, make_token, prod_state, user_with_role};

// Router-level tests of the API handlers: login issues the session, the
// policy table gates every content family, and the media pipeline hands out
// mock URLs.

fn hash(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string()
}

fn app_with_user(role: &str) -> (Router, Uuid) {
    let user_id = Uuid::new_v4();
    let mut user = user_with_role(user_id, "ana", role);
    user.password_hash = hash("secreta123");
    let state = prod_state(StubRepo {
        users: vec![user],
        ..StubRepo::default()
    });
    (create_router(state), user_id)
}

fn get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("token", token)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header("token", token);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// --- Session ---

#[tokio::test]
async fn login_sets_the_three_session_cookies() {
    let (app, user_id) = app_with_user("Admin");

    let response = app
        .oneshot(post_json(
            "/api/auth/login",
            None,
            json!({"username": "ana", "password": "secreta123"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookies: Vec<String> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    assert_eq!(set_cookies.len(), 3);
    assert!(set_cookies[0].starts_with("token="));
    assert!(set_cookies[0].contains("HttpOnly"));
    // Username and role ride JSON-encoded, the role in its quoted wire form.
    assert!(set_cookies[1].starts_with("user=\"ana\""));
    assert!(set_cookies[2].starts_with("role=\"Admin\""));

    let body = body_json(response).await;
    assert_eq!(body["id"], json!(user_id.to_string()));
    assert_eq!(body["role"], json!("Admin"));
    assert_eq!(body["views"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn login_rejects_bad_credentials_uniformly() {
    let (app, _) = app_with_user("Admin");

    // Wrong password and unknown username are indistinguishable.
    let wrong_password = app
        .clone()
        .oneshot(post_json(
            "/api/auth/login",
            None,
            json!({"username": "ana", "password": "nope"}),
        ))
        .await
        .unwrap();
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);

    let unknown_user = app
        .oneshot(post_json(
            "/api/auth/login",
            None,
            json!({"username": "bob", "password": "secreta123"}),
        ))
        .await
        .unwrap();
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_clears_cookies_even_without_a_session() {
    let (app, _) = app_with_user("Admin");

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/auth/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let set_cookies: Vec<String> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    assert_eq!(set_cookies.len(), 3);
    assert!(set_cookies.iter().all(|c| c.contains("Max-Age=0")));
}

#[tokio::test]
async fn me_returns_the_session_profile() {
    let (app, user_id) = app_with_user("Comunicación");
    let token = make_token(user_id, 3600);

    let response = app.oneshot(get("/api/auth/me", &token)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["username"], json!("ana"));
    assert_eq!(body["role"], json!("Comunicación"));
}

#[tokio::test]
async fn views_endpoint_returns_the_menu_for_the_role() {
    let (app, user_id) = app_with_user("Comunicación");
    let token = make_token(user_id, 3600);

    let response = app.oneshot(get("/api/auth/views", &token)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["posts", "eventos"]);
}

// --- Feature gating on the content API ---

#[tokio::test]
async fn desarrollador_may_write_questions_but_not_posts() {
    let (app, user_id) = app_with_user("Desarrollador");
    let token = make_token(user_id, 3600);

    let created = app
        .clone()
        .oneshot(post_json(
            "/api/questions",
            Some(&token),
            json!({
                "game_id": Uuid::new_v4().to_string(),
                "prompt": "¿En qué año salió el juego?",
                "options": ["1998", "2004"],
                "answer_index": 1
            }),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::OK);
    let body = body_json(created).await;
    assert_eq!(body["prompt"], json!("¿En qué año salió el juego?"));

    let denied = app
        .oneshot(post_json(
            "/api/posts",
            Some(&token),
            json!({"title": "Nota", "body": "..."}),
        ))
        .await
        .unwrap();
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn comunicacion_may_write_posts() {
    let (app, user_id) = app_with_user("Comunicación");
    let token = make_token(user_id, 3600);

    let response = app
        .oneshot(post_json(
            "/api/posts",
            Some(&token),
            json!({"title": "Nota", "body": "Contenido", "cover_image_key": "media/x.png"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["title"], json!("Nota"));
    assert_eq!(body["cover_image"], json!("media/x.png"));
}

#[tokio::test]
async fn question_answer_index_must_point_into_options() {
    let (app, user_id) = app_with_user("Admin");
    let token = make_token(user_id, 3600);

    let response = app
        .oneshot(post_json(
            "/api/questions",
            Some(&token),
            json!({
                "game_id": Uuid::new_v4().to_string(),
                "prompt": "¿?",
                "options": ["a", "b"],
                "answer_index": 2
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn listing_and_fetching_round_trip_through_the_repository() {
    let user_id = Uuid::new_v4();
    let seeded = Post {
        id: Uuid::new_v4(),
        title: "Torneo de primavera".to_string(),
        ..Post::default()
    };
    let state = prod_state(StubRepo {
        users: vec![user_with_role(user_id, "ana", "Admin")],
        posts: vec![seeded.clone()],
        ..StubRepo::default()
    });
    let app = create_router(state);
    let token = make_token(user_id, 3600);

    let list = app
        .clone()
        .oneshot(get("/api/posts", &token))
        .await
        .unwrap();
    assert_eq!(list.status(), StatusCode::OK);
    assert_eq!(body_json(list).await.as_array().unwrap().len(), 1);

    let one = app
        .clone()
        .oneshot(get(&format!("/api/posts/{}", seeded.id), &token))
        .await
        .unwrap();
    assert_eq!(one.status(), StatusCode::OK);
    assert_eq!(body_json(one).await["title"], json!("Torneo de primavera"));

    let missing = app
        .oneshot(get(&format!("/api/posts/{}", Uuid::new_v4()), &token))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

// --- Dashboard & media ---

#[tokio::test]
async fn stats_are_open_to_every_authenticated_role() {
    let (app, user_id) = app_with_user("Impresiones");
    let token = make_token(user_id, 3600);

    let response = app.oneshot(get("/api/stats", &token)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total_posts"], json!(0));
    assert_eq!(body["pending_impressions"], json!(0));
}

#[tokio::test]
async fn presigned_upload_returns_a_keyed_url() {
    let (app, user_id) = app_with_user("Comunicación");
    let token = make_token(user_id, 3600);

    let response = app
        .oneshot(post_json(
            "/api/upload/presigned",
            Some(&token),
            json!({"filename": "portada.png", "file_type": "image/png"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let media_key = body["media_key"].as_str().unwrap();
    assert!(media_key.starts_with("media/"));
    assert!(media_key.ends_with(".png"));
    assert!(body["upload_url"].as_str().unwrap().contains("mock-bucket"));
}
