//! Collection store implementations.

mod memory;

pub use memory::{InMemoryFiles, InMemoryPosts, InMemoryUsers};
