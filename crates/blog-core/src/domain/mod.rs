//! Domain entities - the core business objects.

mod post;
mod sanitize;

pub use post::{Post, PostFields};
pub use sanitize::sanitize_body;
