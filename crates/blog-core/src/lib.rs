//! # Blog Core
//!
//! The domain layer of the restful blog.
//! This crate holds the `Post` entity and the storage port, with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
