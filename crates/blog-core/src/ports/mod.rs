//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod post_service;

pub use post_service::PostService;
