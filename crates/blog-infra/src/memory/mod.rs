//! In-memory store implementations.

mod post;

pub use post::InMemoryPostRepository;
