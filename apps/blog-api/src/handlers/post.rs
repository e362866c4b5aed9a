//! Post CRUD handlers.

use actix_web::{HttpResponse, http::header, web};

use blog_core::domain::Post;
use blog_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
    }
}

/// GET /api/post
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_posts().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/post/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    match state.posts.get_post(id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(to_response(post))),
        None => Err(AppError::NotFound),
    }
}

/// POST /api/post
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input
    if req.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }

    let created = state.posts.add_post(Post::new(req.title)).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/post/{}", created.id)))
        .json(to_response(created)))
}

/// PUT /api/post/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    // Validate input before touching the service
    if id != req.id {
        return Err(AppError::BadRequest(
            "Path id does not match body id".to_string(),
        ));
    }
    if req.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }

    let post = Post {
        id: req.id,
        title: req.title,
    };

    match state.posts.update_post(post).await? {
        Some(updated) => Ok(HttpResponse::Ok().json(to_response(updated))),
        None => Err(AppError::NotFound),
    }
}

/// DELETE /api/post/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if state.posts.delete_post(id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound)
    }
}
