//! # Blog Shared
//!
//! Request types shared between the server and anything that talks to it.

pub mod dto;

pub use dto::BlogForm;
