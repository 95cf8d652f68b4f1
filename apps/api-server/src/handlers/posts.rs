//! Post handlers.

use actix_web::{HttpResponse, web};

use scribe_core::domain::Post;
use scribe_core::ports::{Page, PostFilter};
use scribe_core::validation::validate_new_post;
use scribe_shared::dto::{CreatePostRequest, PostListQuery, PostListResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::ApiResult;
use crate::state::AppState;

/// GET /v1/posts - public listing with optional exact-match filters.
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<PostListQuery>,
) -> ApiResult<HttpResponse> {
    let q = query.into_inner();
    let filter = PostFilter {
        author: q.author,
        category: q.category,
    };
    let page = Page::from_query(q.page.as_deref(), q.limit.as_deref());

    let (posts, total) = state.posts.list(&filter, page).await;

    Ok(HttpResponse::Ok().json(PostListResponse { data: posts, total }))
}

/// POST /v1/posts - auth required. The author is the authenticated
/// subject, never taken from the body.
pub async fn create(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> ApiResult<HttpResponse> {
    let req = body.into_inner();
    let title = req.title.as_deref().unwrap_or("");
    let content = req.content.as_deref().unwrap_or("");
    let category = validate_new_post(title, content, req.category.as_deref().unwrap_or(""))?;

    let post = Post::new(
        identity.subject,
        title.to_string(),
        content.to_string(),
        category,
        req.tags.unwrap_or_default(),
        req.is_published.unwrap_or(false),
    );
    let post = state.posts.append(post).await?;

    tracing::info!(post = %post.id, author = %post.author_id, "post created");
    Ok(HttpResponse::Created().json(post))
}
