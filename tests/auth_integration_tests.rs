use axum::{
    extract::FromRequestParts,
    http::{Method, Request, StatusCode, Uri, header, request::Parts},
};
use gamecenter_portal::{auth::AuthUser, config::Env, policy::Role};
use std::time::Duration;
use uuid::Uuid;

mod common;
use common::{StubRepo, make_token, prod_state, test_state, user_with_role};

// Extractor-level tests: drive AuthUser::from_request_parts directly against
// a stubbed state, one failure mode at a time.

const TEST_USER_ID: Uuid = Uuid::from_u128(1);

/// Helper to get the mutable Parts struct from a generated Request.
fn get_request_parts(method: Method, uri: Uri) -> Parts {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let (parts, _) = request.into_parts();
    parts
}

fn repo_with(role: &str) -> StubRepo {
    StubRepo {
        users: vec![user_with_role(TEST_USER_ID, "ana", role)],
        ..StubRepo::default()
    }
}

#[tokio::test]
async fn token_header_resolves_the_user_and_role() {
    let state = prod_state(repo_with("Desarrollador"));
    let token = make_token(TEST_USER_ID, 3600);

    let mut parts = get_request_parts(Method::GET, "/api/games".parse().unwrap());
    parts.headers.insert(
        header::HeaderName::from_static("token"),
        header::HeaderValue::from_str(&token).unwrap(),
    );

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(auth_user.is_ok());
    let user = auth_user.unwrap();
    assert_eq!(user.id, TEST_USER_ID);
    assert_eq!(user.username, "ana");
    assert_eq!(user.role, Role::Desarrollador);
}

#[tokio::test]
async fn session_cookie_works_as_fallback_transport() {
    let state = prod_state(repo_with("Admin"));
    let token = make_token(TEST_USER_ID, 3600);

    let mut parts = get_request_parts(Method::GET, "/api/posts".parse().unwrap());
    parts.headers.insert(
        header::COOKIE,
        header::HeaderValue::from_str(&format!("token={token}; role=\"Admin\"")).unwrap(),
    );

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await;
    assert!(auth_user.is_ok());
    assert_eq!(auth_user.unwrap().role, Role::Admin);
}

#[tokio::test]
async fn missing_credentials_are_rejected() {
    let state = prod_state(repo_with("Admin"));
    let mut parts = get_request_parts(Method::GET, "/api/posts".parse().unwrap());

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(auth_user.is_err());
    assert_eq!(auth_user.unwrap_err(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let state = prod_state(repo_with("Admin"));
    // Past jsonwebtoken's default leeway.
    let token = make_token(TEST_USER_ID, -120);

    let mut parts = get_request_parts(Method::GET, "/api/posts".parse().unwrap());
    parts.headers.insert(
        header::HeaderName::from_static("token"),
        header::HeaderValue::from_str(&token).unwrap(),
    );

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await;
    assert_eq!(auth_user.unwrap_err(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn deleted_user_is_rejected_despite_valid_token() {
    // Empty repo: the token verifies but the subject no longer exists.
    let state = prod_state(StubRepo::default());
    let token = make_token(TEST_USER_ID, 3600);

    let mut parts = get_request_parts(Method::GET, "/api/posts".parse().unwrap());
    parts.headers.insert(
        header::HeaderName::from_static("token"),
        header::HeaderValue::from_str(&token).unwrap(),
    );

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await;
    assert_eq!(auth_user.unwrap_err(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unrecognized_stored_role_is_forbidden() {
    // The session is fine; the account's role label is outside the closed
    // set, which is an authorization problem, not an authentication one.
    let state = prod_state(repo_with("Invitado"));
    let token = make_token(TEST_USER_ID, 3600);

    let mut parts = get_request_parts(Method::GET, "/api/posts".parse().unwrap());
    parts.headers.insert(
        header::HeaderName::from_static("token"),
        header::HeaderValue::from_str(&token).unwrap(),
    );

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await;
    assert_eq!(auth_user.unwrap_err(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn idle_session_is_rejected_lazily() {
    let state = test_state(Env::Production, repo_with("Admin"), Duration::ZERO);
    let token = make_token(TEST_USER_ID, 3600);

    let mut parts = get_request_parts(Method::GET, "/api/posts".parse().unwrap());
    parts.headers.insert(
        header::HeaderName::from_static("token"),
        header::HeaderValue::from_str(&token).unwrap(),
    );

    // First request starts the window; the second finds it idle.
    assert!(
        AuthUser::from_request_parts(&mut parts, &state)
            .await
            .is_ok()
    );
    std::thread::sleep(Duration::from_millis(5));
    let second = AuthUser::from_request_parts(&mut parts, &state).await;
    assert_eq!(second.unwrap_err(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn local_bypass_resolves_a_real_user() {
    let user_id = Uuid::new_v4();
    let state = test_state(
        Env::Local,
        StubRepo {
            users: vec![user_with_role(user_id, "dev", "Admin")],
            ..StubRepo::default()
        },
        Duration::from_secs(600),
    );

    let mut parts = get_request_parts(Method::GET, "/api/posts".parse().unwrap());
    parts.headers.insert(
        header::HeaderName::from_static("x-user-id"),
        header::HeaderValue::from_str(&user_id.to_string()).unwrap(),
    );

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(auth_user.is_ok());
    let user = auth_user.unwrap();
    assert_eq!(user.id, user_id);
    assert_eq!(user.role, Role::Admin);
}

#[tokio::test]
async fn local_bypass_is_disabled_in_production() {
    let user_id = Uuid::new_v4();
    let state = prod_state(StubRepo {
        users: vec![user_with_role(user_id, "dev", "Admin")],
        ..StubRepo::default()
    });

    let mut parts = get_request_parts(Method::GET, "/api/posts".parse().unwrap());
    // Provide ONLY the local bypass header.
    parts.headers.insert(
        header::HeaderName::from_static("x-user-id"),
        header::HeaderValue::from_str(&user_id.to_string()).unwrap(),
    );

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await;
    assert_eq!(auth_user.unwrap_err(), StatusCode::UNAUTHORIZED);
}
