// src/core/mod.rs
//! Loading, indexing and analysis. Nothing in here touches the filesystem.

pub mod context;
pub mod corpus;
pub mod engine;
pub mod index;
pub mod karaka;
pub mod loader;
pub mod script;
pub mod trie;
pub mod types;
