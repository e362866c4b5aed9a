//! Post service implementations.

mod memory;

pub use memory::InMemoryPostService;
