//! Post resource handlers.
//!
//! Every route here sits behind [`RequireAuth`](crate::middleware::auth::RequireAuth),
//! so an [`Identity`] is always present by the time a handler runs.

use actix_web::{HttpResponse, web};

use scribe_core::DomainError;
use scribe_core::domain::{Post, PostDraft, PostId};
use scribe_shared::Collection;
use scribe_shared::dto::{PostRequest, PostResponse};

use crate::middleware::auth::Identity;
use crate::middleware::body::Input;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

async fn find_post(state: &AppState, id: PostId) -> AppResult<Post> {
    state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::post_not_found(id).into())
}

/// GET /api/posts
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;

    let body: Collection<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/posts
pub async fn store(
    state: web::Data<AppState>,
    identity: Identity,
    body: Input<PostRequest>,
) -> AppResult<HttpResponse> {
    let draft = PostDraft::validate(body.title.as_deref())?;

    let post = state.posts.create(draft).await?;
    tracing::info!(post_id = post.id, user_id = %identity.user_id, "Post created");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// GET /api/posts/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<PostId>) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// PUT /api/posts/{id}
///
/// The post is looked up before the body is validated, so a missing
/// post answers 404 even when the title is also invalid.
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<PostId>,
    body: Input<PostRequest>,
) -> AppResult<HttpResponse> {
    let mut post = find_post(&state, path.into_inner()).await?;
    let draft = PostDraft::validate(body.title.as_deref())?;

    post.retitle(draft);
    let post = state.posts.save(post).await?;
    tracing::info!(post_id = post.id, user_id = %identity.user_id, "Post updated");

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/posts/{id}
pub async fn destroy(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;
    state.posts.delete(post.id).await?;
    tracing::info!(post_id = post.id, user_id = %identity.user_id, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
