//! Tests for battle collaborator services
//!
//! The HTTP source is exercised against a local wiremock server; the store
//! and local sources run fully in memory.

pub mod memory_store;
