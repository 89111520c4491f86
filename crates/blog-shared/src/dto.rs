//! Data Transfer Objects - form payloads accepted by the blog routes.

use serde::Deserialize;

/// Urlencoded blog form, as posted by the new and edit views.
///
/// Keys use the nested `blog[...]` naming of the HTML forms. A key missing
/// from the payload decodes as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BlogForm {
    #[serde(rename = "blog[title]", default)]
    pub title: String,
    #[serde(rename = "blog[image]", default)]
    pub image: String,
    #[serde(rename = "blog[body]", default)]
    pub body: String,
}
