//! Collaborator implementations

pub mod http_random;
pub mod local_random;
pub mod memory_store;

#[cfg(test)]
pub mod tests;

pub use http_random::*;
pub use local_random::*;
pub use memory_store::*;
