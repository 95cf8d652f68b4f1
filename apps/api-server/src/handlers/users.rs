//! User handlers.

use actix_web::{HttpResponse, web};

use scribe_core::domain::User;
use scribe_core::ports::Page;
use scribe_core::validation::validate_new_user;
use scribe_shared::dto::{CreateUserRequest, PageQuery, UserListResponse, UserPublic};

use crate::middleware::auth::Identity;
use crate::middleware::error::{ApiError, ApiResult};
use crate::state::AppState;

/// POST /v1/users - public registration.
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let req = body.into_inner();
    let name = req.name.as_deref().unwrap_or("");
    let email = req.email.as_deref().unwrap_or("");
    let password = req.password.as_deref().unwrap_or("");
    validate_new_user(name, email, password)?;

    let password_hash = state
        .passwords
        .hash(password)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    // Any role string is accepted; absent means "user".
    let role = req.role.unwrap_or_else(|| "user".to_string());

    let user = User::new(name.to_string(), email.to_string(), password_hash, role);
    let user = state.users.append(user).await?;

    tracing::info!(user = %user.id, "user registered");
    Ok(HttpResponse::Created().json(UserPublic::from(&user)))
}

/// GET /v1/users - auth required.
pub async fn list(
    _identity: Identity,
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> ApiResult<HttpResponse> {
    let page = Page::from_query(query.page.as_deref(), query.limit.as_deref());
    let (users, total) = state.users.list(page).await;

    Ok(HttpResponse::Ok().json(UserListResponse {
        data: users.iter().map(UserPublic::from).collect(),
        total,
        page: page.page,
        limit: page.limit,
    }))
}

/// GET /v1/users/{id} - auth required.
pub async fn get_by_id(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let user = state.users.find_by_id(&id).await.ok_or_else(|| {
        ApiError::NotFound("User with the specified ID does not exist".to_string())
    })?;

    Ok(HttpResponse::Ok().json(UserPublic::from(&user)))
}
