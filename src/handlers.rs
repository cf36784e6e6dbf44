use crate::{
    AppState,
    auth::{AuthUser, require_feature},
    models::{
        Authority, CreateAuthorityRequest, CreateEventRequest, CreateGameRequest,
        CreateImpressionRequest, CreateMemberRequest, CreatePostRequest, CreateQuestionRequest,
        DashboardStats, Event, Game, Impression, LoginRequest, Member, Post,
        PresignedUrlRequest, PresignedUrlResponse, Question, SessionResponse,
        UpdateAuthorityRequest, UpdateEventRequest, UpdateGameRequest, UpdateImpressionRequest,
        UpdateMemberRequest, UpdatePostRequest, UpdateQuestionRequest, UserProfile,
    },
    policy::{Feature, NavView, Role},
    session,
};
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use uuid::Uuid;

// --- Filter Structs ---

/// QuestionFilter
///
/// Accepted query parameters for the question listing endpoint
/// (GET /api/questions). The questions screen lives inside a game's detail
/// view, so listings are usually scoped to one game.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct QuestionFilter {
    /// Restrict the listing to one game's questions.
    pub game: Option<Uuid>,
}

// --- Session Handlers ---

/// login
///
/// [Public Route] Verifies a username/password pair against the stored argon2
/// hash, issues a signed session token and sets the three session cookies
/// (`token`, `user`, `role`) on the response.
///
/// *Uniformity*: an unknown username, a wrong password and an unparsable
/// stored hash are indistinguishable from the outside (401), so the endpoint
/// leaks nothing about which accounts exist.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session established", body = SessionResponse),
        (status = 401, description = "Bad credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, StatusCode> {
    let user = state
        .repo
        .get_user_by_username(&payload.username)
        .await
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let stored_hash = PasswordHash::new(&user.password_hash).map_err(|_| {
        tracing::error!(user = %user.id, "stored password hash is not a valid PHC string");
        StatusCode::UNAUTHORIZED
    })?;

    if Argon2::default()
        .verify_password(payload.password.as_bytes(), &stored_hash)
        .is_err()
    {
        return Err(StatusCode::UNAUTHORIZED);
    }

    // An account with a role outside the closed set cannot form a session.
    let role = Role::from_label(&user.role).ok_or(StatusCode::FORBIDDEN)?;

    let token = session::issue_token(user.id, &state.config.jwt_secret)
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

    // Fresh inactivity window for the new session.
    state.sessions.reset(user.id);

    tracing::info!(user = %user.id, role = role.label(), "login");

    let body = SessionResponse {
        id: user.id,
        username: user.username.clone(),
        role: role.label().to_string(),
        views: role.views(),
    };

    let mut response = Json(body).into_response();
    session::apply_cookies(
        response.headers_mut(),
        &session::session_cookies(&token, &user.username, role),
    );
    Ok(response)
}

/// logout
///
/// [Public Route] Destroys the session: clears the three cookies and drops
/// the inactivity record. Best-effort: it succeeds even when the
/// token is already dead, so a stuck client can always escape.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses((status = 204, description = "Session destroyed"))
)]
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(claims) = session::cookie_value(&headers, session::TOKEN_COOKIE)
        .and_then(|token| session::verify_token(&token, &state.config.jwt_secret))
    {
        state.sessions.forget(claims.sub);
    }

    let mut response = StatusCode::NO_CONTENT.into_response();
    session::apply_cookies(response.headers_mut(), &session::clearing_cookies());
    response
}

/// get_me
///
/// [Authenticated Route] The authenticated user's own profile.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses((status = 200, description = "Profile", body = UserProfile))
)]
pub async fn get_me(user: AuthUser) -> Json<UserProfile> {
    Json(UserProfile {
        id: user.id,
        username: user.username,
        role: user.role.label().to_string(),
    })
}

/// get_views
///
/// [Authenticated Route] The sidebar menu for the session role: the ordered
/// `{name, icon}` entries derived from the role's feature grants. Pure data
/// lookup; cannot fail.
#[utoipa::path(
    get,
    path = "/api/auth/views",
    responses((status = 200, description = "Navigation views", body = [NavView]))
)]
pub async fn get_views(user: AuthUser) -> Json<Vec<NavView>> {
    Json(user.role.views())
}

// --- Dashboard & Media ---

/// get_stats
///
/// [Authenticated Route] Counters for the home screen. Every role lands on
/// home, so no feature check applies here.
#[utoipa::path(
    get,
    path = "/api/stats",
    responses((status = 200, description = "Stats", body = DashboardStats))
)]
pub async fn get_stats(_user: AuthUser, State(state): State<AppState>) -> Json<DashboardStats> {
    Json(state.repo.get_stats().await)
}

/// get_presigned_url
///
/// [Authenticated Route] Generates a temporary URL for a direct
/// client-to-storage upload (cover images, photos, print files). The URL is
/// short-lived, constrained to the declared content type, and keyed under a
/// fresh UUID so uploads can never collide or overwrite.
#[utoipa::path(
    post,
    path = "/api/upload/presigned",
    request_body = PresignedUrlRequest,
    responses((status = 200, description = "URL", body = PresignedUrlResponse))
)]
pub async fn get_presigned_url(
    _user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<PresignedUrlRequest>,
) -> impl IntoResponse {
    let extension = std::path::Path::new(&payload.filename)
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or("bin");
    let object_key = format!("media/{}.{}", Uuid::new_v4(), extension);

    match state
        .storage
        .get_presigned_upload_url(&object_key, &payload.file_type)
        .await
    {
        Ok(url) => {
            let response = PresignedUrlResponse {
                upload_url: url,
                media_key: object_key,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!("storage error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed").into_response()
        }
    }
}

// --- Posts ---
//
// Every content handler follows the same contract: resolve the session
// (AuthUser extractor), check the feature grant against the policy table,
// delegate to the repository. 404 when the row is missing, 500 when an
// insert did not come back.

/// [Posts] List all posts, newest first.
#[utoipa::path(get, path = "/api/posts",
    responses((status = 200, description = "Posts", body = [Post])))]
pub async fn list_posts(
    user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Post>>, StatusCode> {
    require_feature(&user, Feature::Posts)?;
    Ok(Json(state.repo.list_posts().await))
}

/// [Posts] Retrieve one post.
#[utoipa::path(get, path = "/api/posts/{id}",
    params(("id" = Uuid, Path, description = "Post ID")),
    responses((status = 200, description = "Post", body = Post)))]
pub async fn get_post(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Post>, StatusCode> {
    require_feature(&user, Feature::Posts)?;
    state.repo.get_post(id).await.map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// [Posts] Create a post.
#[utoipa::path(post, path = "/api/posts", request_body = CreatePostRequest,
    responses((status = 200, description = "Created", body = Post)))]
pub async fn create_post(
    user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<Json<Post>, StatusCode> {
    require_feature(&user, Feature::Posts)?;
    state
        .repo
        .create_post(payload)
        .await
        .map(Json)
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// [Posts] Partially update a post.
#[utoipa::path(put, path = "/api/posts/{id}", request_body = UpdatePostRequest,
    responses((status = 200, description = "Updated", body = Post)))]
pub async fn update_post(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<Json<Post>, StatusCode> {
    require_feature(&user, Feature::Posts)?;
    state
        .repo
        .update_post(id, payload)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// [Posts] Delete a post.
#[utoipa::path(delete, path = "/api/posts/{id}",
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn delete_post(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    require_feature(&user, Feature::Posts)?;
    if state.repo.delete_post(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

// --- Games ---

/// [Games] List all games.
#[utoipa::path(get, path = "/api/games",
    responses((status = 200, description = "Games", body = [Game])))]
pub async fn list_games(
    user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Game>>, StatusCode> {
    require_feature(&user, Feature::Juegos)?;
    Ok(Json(state.repo.list_games().await))
}

/// [Games] Retrieve one game.
#[utoipa::path(get, path = "/api/games/{id}",
    params(("id" = Uuid, Path, description = "Game ID")),
    responses((status = 200, description = "Game", body = Game)))]
pub async fn get_game(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Game>, StatusCode> {
    require_feature(&user, Feature::Juegos)?;
    state.repo.get_game(id).await.map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// [Games] Create a game.
#[utoipa::path(post, path = "/api/games", request_body = CreateGameRequest,
    responses((status = 200, description = "Created", body = Game)))]
pub async fn create_game(
    user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateGameRequest>,
) -> Result<Json<Game>, StatusCode> {
    require_feature(&user, Feature::Juegos)?;
    state
        .repo
        .create_game(payload)
        .await
        .map(Json)
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// [Games] Partially update a game.
#[utoipa::path(put, path = "/api/games/{id}", request_body = UpdateGameRequest,
    responses((status = 200, description = "Updated", body = Game)))]
pub async fn update_game(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateGameRequest>,
) -> Result<Json<Game>, StatusCode> {
    require_feature(&user, Feature::Juegos)?;
    state
        .repo
        .update_game(id, payload)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// [Games] Delete a game. Its quiz questions go with it.
#[utoipa::path(delete, path = "/api/games/{id}",
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn delete_game(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    require_feature(&user, Feature::Juegos)?;
    if state.repo.delete_game(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

// --- Members ---

/// [Members] List all members.
#[utoipa::path(get, path = "/api/members",
    responses((status = 200, description = "Members", body = [Member])))]
pub async fn list_members(
    user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Member>>, StatusCode> {
    require_feature(&user, Feature::Miembros)?;
    Ok(Json(state.repo.list_members().await))
}

/// [Members] Retrieve one member.
#[utoipa::path(get, path = "/api/members/{id}",
    params(("id" = Uuid, Path, description = "Member ID")),
    responses((status = 200, description = "Member", body = Member)))]
pub async fn get_member(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Member>, StatusCode> {
    require_feature(&user, Feature::Miembros)?;
    state.repo.get_member(id).await.map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// [Members] Create a member.
#[utoipa::path(post, path = "/api/members", request_body = CreateMemberRequest,
    responses((status = 200, description = "Created", body = Member)))]
pub async fn create_member(
    user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateMemberRequest>,
) -> Result<Json<Member>, StatusCode> {
    require_feature(&user, Feature::Miembros)?;
    state
        .repo
        .create_member(payload)
        .await
        .map(Json)
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// [Members] Partially update a member.
#[utoipa::path(put, path = "/api/members/{id}", request_body = UpdateMemberRequest,
    responses((status = 200, description = "Updated", body = Member)))]
pub async fn update_member(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMemberRequest>,
) -> Result<Json<Member>, StatusCode> {
    require_feature(&user, Feature::Miembros)?;
    state
        .repo
        .update_member(id, payload)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// [Members] Delete a member.
#[utoipa::path(delete, path = "/api/members/{id}",
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn delete_member(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    require_feature(&user, Feature::Miembros)?;
    if state.repo.delete_member(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

// --- Authorities ---

/// [Authorities] List all authorities.
#[utoipa::path(get, path = "/api/authorities",
    responses((status = 200, description = "Authorities", body = [Authority])))]
pub async fn list_authorities(
    user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Authority>>, StatusCode> {
    require_feature(&user, Feature::Autoridades)?;
    Ok(Json(state.repo.list_authorities().await))
}

/// [Authorities] Retrieve one authority.
#[utoipa::path(get, path = "/api/authorities/{id}",
    params(("id" = Uuid, Path, description = "Authority ID")),
    responses((status = 200, description = "Authority", body = Authority)))]
pub async fn get_authority(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Authority>, StatusCode> {
    require_feature(&user, Feature::Autoridades)?;
    state
        .repo
        .get_authority(id)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// [Authorities] Create an authority.
#[utoipa::path(post, path = "/api/authorities", request_body = CreateAuthorityRequest,
    responses((status = 200, description = "Created", body = Authority)))]
pub async fn create_authority(
    user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateAuthorityRequest>,
) -> Result<Json<Authority>, StatusCode> {
    require_feature(&user, Feature::Autoridades)?;
    state
        .repo
        .create_authority(payload)
        .await
        .map(Json)
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// [Authorities] Partially update an authority.
#[utoipa::path(put, path = "/api/authorities/{id}", request_body = UpdateAuthorityRequest,
    responses((status = 200, description = "Updated", body = Authority)))]
pub async fn update_authority(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAuthorityRequest>,
) -> Result<Json<Authority>, StatusCode> {
    require_feature(&user, Feature::Autoridades)?;
    state
        .repo
        .update_authority(id, payload)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// [Authorities] Delete an authority.
#[utoipa::path(delete, path = "/api/authorities/{id}",
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn delete_authority(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    require_feature(&user, Feature::Autoridades)?;
    if state.repo.delete_authority(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

// --- Events ---

/// [Events] List all events, soonest last.
#[utoipa::path(get, path = "/api/events",
    responses((status = 200, description = "Events", body = [Event])))]
pub async fn list_events(
    user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Event>>, StatusCode> {
    require_feature(&user, Feature::Eventos)?;
    Ok(Json(state.repo.list_events().await))
}

/// [Events] Retrieve one event.
#[utoipa::path(get, path = "/api/events/{id}",
    params(("id" = Uuid, Path, description = "Event ID")),
    responses((status = 200, description = "Event", body = Event)))]
pub async fn get_event(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Event>, StatusCode> {
    require_feature(&user, Feature::Eventos)?;
    state.repo.get_event(id).await.map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// [Events] Create an event.
#[utoipa::path(post, path = "/api/events", request_body = CreateEventRequest,
    responses((status = 200, description = "Created", body = Event)))]
pub async fn create_event(
    user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<Json<Event>, StatusCode> {
    require_feature(&user, Feature::Eventos)?;
    state
        .repo
        .create_event(payload)
        .await
        .map(Json)
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// [Events] Partially update an event.
#[utoipa::path(put, path = "/api/events/{id}", request_body = UpdateEventRequest,
    responses((status = 200, description = "Updated", body = Event)))]
pub async fn update_event(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<Json<Event>, StatusCode> {
    require_feature(&user, Feature::Eventos)?;
    state
        .repo
        .update_event(id, payload)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// [Events] Delete an event.
#[utoipa::path(delete, path = "/api/events/{id}",
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn delete_event(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    require_feature(&user, Feature::Eventos)?;
    if state.repo.delete_event(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

// --- Impressions (print jobs) ---

/// [Impressions] List the print queue, pending jobs first.
#[utoipa::path(get, path = "/api/impresiones",
    responses((status = 200, description = "Print jobs", body = [Impression])))]
pub async fn list_impressions(
    user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Impression>>, StatusCode> {
    require_feature(&user, Feature::Impresiones)?;
    Ok(Json(state.repo.list_impressions().await))
}

/// [Impressions] Retrieve one print job.
#[utoipa::path(get, path = "/api/impresiones/{id}",
    params(("id" = Uuid, Path, description = "Print job ID")),
    responses((status = 200, description = "Print job", body = Impression)))]
pub async fn get_impression(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Impression>, StatusCode> {
    require_feature(&user, Feature::Impresiones)?;
    state
        .repo
        .get_impression(id)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// [Impressions] Queue a print job.
#[utoipa::path(post, path = "/api/impresiones", request_body = CreateImpressionRequest,
    responses((status = 200, description = "Created", body = Impression)))]
pub async fn create_impression(
    user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateImpressionRequest>,
) -> Result<Json<Impression>, StatusCode> {
    require_feature(&user, Feature::Impresiones)?;
    state
        .repo
        .create_impression(payload)
        .await
        .map(Json)
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// [Impressions] Update a print job (rename, copy count, delivered flag).
#[utoipa::path(put, path = "/api/impresiones/{id}", request_body = UpdateImpressionRequest,
    responses((status = 200, description = "Updated", body = Impression)))]
pub async fn update_impression(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateImpressionRequest>,
) -> Result<Json<Impression>, StatusCode> {
    require_feature(&user, Feature::Impresiones)?;
    state
        .repo
        .update_impression(id, payload)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// [Impressions] Remove a print job from the queue.
#[utoipa::path(delete, path = "/api/impresiones/{id}",
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn delete_impression(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    require_feature(&user, Feature::Impresiones)?;
    if state.repo.delete_impression(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

// --- Quiz questions ---

/// [Questions] List questions, optionally scoped to one game.
#[utoipa::path(get, path = "/api/questions", params(QuestionFilter),
    responses((status = 200, description = "Questions", body = [Question])))]
pub async fn list_questions(
    user: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<QuestionFilter>,
) -> Result<Json<Vec<Question>>, StatusCode> {
    require_feature(&user, Feature::Preguntas)?;
    Ok(Json(state.repo.list_questions(filter.game).await))
}

/// [Questions] Retrieve one question.
#[utoipa::path(get, path = "/api/questions/{id}",
    params(("id" = Uuid, Path, description = "Question ID")),
    responses((status = 200, description = "Question", body = Question)))]
pub async fn get_question(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Question>, StatusCode> {
    require_feature(&user, Feature::Preguntas)?;
    state
        .repo
        .get_question(id)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// [Questions] Create a question. `answer_index` must point into `options`.
#[utoipa::path(post, path = "/api/questions", request_body = CreateQuestionRequest,
    responses(
        (status = 200, description = "Created", body = Question),
        (status = 422, description = "Answer index out of range")
    ))]
pub async fn create_question(
    user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<Json<Question>, StatusCode> {
    require_feature(&user, Feature::Preguntas)?;
    if payload.answer_index < 0 || payload.answer_index as usize >= payload.options.len() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    state
        .repo
        .create_question(payload)
        .await
        .map(Json)
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// [Questions] Partially update a question.
#[utoipa::path(put, path = "/api/questions/{id}", request_body = UpdateQuestionRequest,
    responses((status = 200, description = "Updated", body = Question)))]
pub async fn update_question(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateQuestionRequest>,
) -> Result<Json<Question>, StatusCode> {
    require_feature(&user, Feature::Preguntas)?;
    state
        .repo
        .update_question(id, payload)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// [Questions] Delete a question.
#[utoipa::path(delete, path = "/api/questions/{id}",
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn delete_question(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    require_feature(&user, Feature::Preguntas)?;
    if state.repo.delete_question(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}
