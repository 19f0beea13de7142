//! Blog post handlers.

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;

use quill_core::{DomainError, RepoError};
use quill_core::domain::{Author, BlogPost, NewPost, PostPatch};
use quill_shared::dto::{CreatePostRequest, PostView, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_view(post: BlogPost) -> PostView {
    PostView {
        id: post.id,
        author: post.author.full_name(),
        title: post.title,
        content: post.content,
        created: post.created,
    }
}

fn not_found(id: Uuid) -> DomainError {
    DomainError::NotFound {
        entity_type: "Post",
        id,
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    tracing::debug!(count = posts.len(), "Listing posts");

    let views: Vec<PostView> = posts.into_iter().map(to_view).collect();
    Ok(HttpResponse::Ok().json(views))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state.posts.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(to_view(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = BlogPost::new(NewPost {
        title: req.title,
        content: req.content,
        author: Author::new(req.author.first_name, req.author.last_name),
    });
    let saved = state.posts.insert(post).await?;
    tracing::info!(post_id = %saved.id, "Post created");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/posts/{}", saved.id)))
        .json(to_view(saved)))
}

/// PUT /posts/{id}
///
/// Only `title` and `content` are updatable; fields left out of the body
/// keep their stored values.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if req.id != id {
        return Err(DomainError::Validation(format!(
            "Request path id ({}) and request body id ({}) must match",
            id, req.id
        ))
        .into());
    }

    let mut post = state.posts.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

    let patch = PostPatch {
        title: req.title,
        content: req.content,
    };
    if post.apply(patch) {
        state.posts.update(post).await?;
        tracing::info!(post_id = %id, "Post updated");
    } else {
        tracing::debug!(post_id = %id, "Update left post unchanged");
    }

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await.map_err(|e| match e {
        RepoError::NotFound => AppError::from(not_found(id)),
        other => AppError::from(other),
    })?;
    tracing::info!(post_id = %id, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
