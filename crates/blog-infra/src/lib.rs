//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.

pub mod post_service;

pub use post_service::InMemoryPostService;
