//! Post handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::{NewPost, PostPatch, PostQuery, PostStatus};
use quill_shared::dto::{CreatePostRequest, LikeResponse, ListPostsQuery, UpdatePostRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state
        .posts
        .create(NewPost {
            title: req.title,
            content: req.content,
            summary: req.summary,
            author_id: req.author_id,
            categories: req.categories,
        })
        .await?;

    Ok(HttpResponse::Created().json(post))
}

/// PATCH|PUT /posts/{id} - `id` may be a post ID or slug.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let status = req
        .status
        .as_deref()
        .map(str::parse::<PostStatus>)
        .transpose()?;

    let post = state
        .posts
        .update(
            &path,
            PostPatch {
                title: req.title,
                content: req.content,
                summary: req.summary,
                author_id: req.author_id,
                categories: req.categories,
                status,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /posts/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    state.posts.delete(&path).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /posts?search=&sortBy=&sortOrder=&page=&limit=
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let params = query.into_inner();
    let query = PostQuery::new(
        params.search,
        params.sort_by.as_deref(),
        params.sort_order.as_deref(),
        params.page,
        params.limit,
        state.posts.config().max_page_limit,
    );

    let page = state.posts.find(&query).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// GET /posts/{id} - every read counts as a view.
pub async fn find_one(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.find_one(&path).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /posts/{id}/like/{user_id}
pub async fn toggle_like(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (id, user_id) = path.into_inner();
    let (post, outcome) = state.posts.toggle_like(&id, &user_id).await?;

    Ok(HttpResponse::Ok().json(LikeResponse {
        message: outcome.message().to_string(),
        post,
    }))
}
