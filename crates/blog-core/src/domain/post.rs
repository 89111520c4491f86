use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::sanitize::sanitize_body;

/// Post entity - a persisted blog post.
///
/// `id` and `created` are assigned by the store on creation and never change
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub image: String,
    pub body: String,
    pub created: DateTime<Utc>,
}

impl Post {
    /// Build a freshly stored post from its fields.
    pub fn from_fields(id: Uuid, fields: PostFields, created: DateTime<Utc>) -> Self {
        Self {
            id,
            title: fields.title,
            image: fields.image,
            body: fields.body,
            created,
        }
    }

    /// Replace the editable fields, leaving `id` and `created` alone.
    pub fn apply(&mut self, fields: PostFields) {
        self.title = fields.title;
        self.image = fields.image;
        self.body = fields.body;
    }
}

/// The editable part of a post, as written on create and update.
///
/// The body is sanitized on construction, so anything holding a
/// `PostFields` is safe to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    title: String,
    image: String,
    body: String,
}

impl PostFields {
    pub fn new(title: &str, image: &str, body: &str) -> Self {
        Self {
            title: title.to_owned(),
            image: image.to_owned(),
            body: sanitize_body(body),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Split into `(title, image, body)`.
    pub fn into_parts(self) -> (String, String, String) {
        (self.title, self.image, self.body)
    }
}
