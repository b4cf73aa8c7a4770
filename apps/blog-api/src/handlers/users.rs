//! User handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::NewUser;
use quill_shared::dto::CreateUserRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /users
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let user = state
        .users
        .create(NewUser {
            username: req.username,
            email: req.email,
        })
        .await?;

    Ok(HttpResponse::Created().json(user))
}

/// GET /users
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.list().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// GET /users/{id}
pub async fn find_one(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let user = state.users.get(&path).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// DELETE /users/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    state.users.delete(&path).await?;
    Ok(HttpResponse::NoContent().finish())
}
