//! Server-rendered views and response helpers.

use actix_web::HttpResponse;
use actix_web::http::header::{self, ContentType};
use askama::Template;

use blog_core::domain::{Post, sanitize_body};
use blog_shared::BlogForm;

use crate::middleware::error::AppResult;

/// Characters of body shown per post on the listing.
const EXCERPT_CHARS: usize = 100;

/// Listing of every post.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexView<'a> {
    pub entries: Vec<ListingEntry<'a>>,
}

impl<'a> IndexView<'a> {
    pub fn new(blogs: &'a [Post]) -> Self {
        Self {
            entries: blogs
                .iter()
                .map(|blog| ListingEntry {
                    blog,
                    excerpt: excerpt(&blog.body),
                })
                .collect(),
        }
    }
}

pub struct ListingEntry<'a> {
    pub blog: &'a Post,
    /// Well-formed HTML, safe to render unescaped.
    pub excerpt: String,
}

/// Creation form, optionally pre-filled after a failed create.
#[derive(Template)]
#[template(path = "new.html")]
pub struct NewView<'a> {
    pub form: &'a BlogForm,
}

#[derive(Template)]
#[template(path = "show.html")]
pub struct ShowView<'a> {
    pub blog: &'a Post,
}

#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditView<'a> {
    pub blog: &'a Post,
}

/// Render a view into a `200 OK` HTML response.
pub fn render<T: Template>(view: &T) -> AppResult<HttpResponse> {
    let html = view.render()?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}

/// `302 Found` to `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.to_owned()))
        .finish()
}

/// First characters of a sanitized body.
///
/// A cut can land inside a tag or leave elements open, so the prefix goes
/// back through the sanitizer, which drops partial tags and closes the rest.
fn excerpt(body: &str) -> String {
    match body.char_indices().nth(EXCERPT_CHARS) {
        None => body.to_string(),
        Some((cut, _)) => format!("{}...", sanitize_body(&body[..cut])),
    }
}
