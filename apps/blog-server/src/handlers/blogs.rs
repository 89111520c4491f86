//! Blog post handlers.
//!
//! Store failures never reach the client: each handler logs them and falls
//! back to the listing redirect or, for create, the form.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::RepoError;
use blog_core::domain::{Post, PostFields};
use blog_shared::BlogForm;

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{self, EditView, IndexView, NewView, ShowView, redirect};

const BLOGS_PATH: &str = "/blogs";

/// GET /
pub async fn root() -> HttpResponse {
    redirect(BLOGS_PATH)
}

/// GET /blogs
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = match state.posts.find_all().await {
        Ok(blogs) => blogs,
        Err(e) => {
            log_store_error(&e, "list posts");
            Vec::new()
        }
    };

    views::render(&IndexView::new(&blogs))
}

/// GET /blogs/new
pub async fn new_form() -> AppResult<HttpResponse> {
    views::render(&NewView {
        form: &BlogForm::default(),
    })
}

/// POST /blogs
pub async fn create(
    state: web::Data<AppState>,
    form: web::Form<BlogForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    match state.posts.create(post_fields(&form)).await {
        Ok(post) => {
            tracing::info!(post_id = %post.id, "Post created");
            Ok(redirect(BLOGS_PATH))
        }
        Err(e) => {
            log_store_error(&e, "create post");
            views::render(&NewView { form: &form })
        }
    }
}

/// GET /blogs/{id}
pub async fn show(state: web::Data<AppState>, id: web::Path<String>) -> AppResult<HttpResponse> {
    match find_post(&state, &id).await {
        Some(blog) => views::render(&ShowView { blog: &blog }),
        None => Ok(redirect(BLOGS_PATH)),
    }
}

/// GET /blogs/{id}/edit
pub async fn edit(state: web::Data<AppState>, id: web::Path<String>) -> AppResult<HttpResponse> {
    match find_post(&state, &id).await {
        Some(blog) => views::render(&EditView { blog: &blog }),
        None => Ok(redirect(BLOGS_PATH)),
    }
}

/// PUT /blogs/{id}
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<String>,
    form: web::Form<BlogForm>,
) -> HttpResponse {
    let Some(id) = parse_id(&id) else {
        return redirect(BLOGS_PATH);
    };

    match state.posts.update_by_id(id, post_fields(&form)).await {
        Ok(Some(post)) => {
            tracing::info!(post_id = %post.id, "Post updated");
            redirect(&format!("{BLOGS_PATH}/{id}"))
        }
        Ok(None) => {
            log_store_error(&RepoError::NotFound, "update post");
            redirect(BLOGS_PATH)
        }
        Err(e) => {
            log_store_error(&e, "update post");
            redirect(BLOGS_PATH)
        }
    }
}

/// DELETE /blogs/{id}
///
/// Always ends on the listing, whether or not anything was deleted.
pub async fn destroy(state: web::Data<AppState>, id: web::Path<String>) -> HttpResponse {
    if let Some(id) = parse_id(&id) {
        match state.posts.delete_by_id(id).await {
            Ok(()) => tracing::info!(post_id = %id, "Post deleted"),
            Err(e) => log_store_error(&e, "delete post"),
        }
    }

    redirect(BLOGS_PATH)
}

fn post_fields(form: &BlogForm) -> PostFields {
    PostFields::new(&form.title, &form.image, &form.body)
}

/// A path segment that is not a UUID cannot name a stored post.
fn parse_id(raw: &str) -> Option<Uuid> {
    match Uuid::parse_str(raw) {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::warn!(post_id = %raw, error = %e, "Malformed post id");
            None
        }
    }
}

async fn find_post(state: &AppState, raw_id: &str) -> Option<Post> {
    let id = parse_id(raw_id)?;

    match state.posts.find_by_id(id).await {
        Ok(Some(post)) => Some(post),
        Ok(None) => {
            log_store_error(&RepoError::NotFound, "find post");
            None
        }
        Err(e) => {
            log_store_error(&e, "find post");
            None
        }
    }
}

fn log_store_error(e: &RepoError, action: &'static str) {
    if e.is_not_found() {
        tracing::warn!(action, "Post not found");
    } else {
        tracing::error!(action, error = %e, "Store operation failed");
    }
}
