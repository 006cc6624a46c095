//! Client-state infrastructure shared across Reelforge crates.
//!
//! This crate contains:
//! - The persistent key-value storage adapter (JSON-safe, failure-isolated)
//! - The observable view-state stores (session, reels, UI)
//!
//! ## Architecture
//! - Depends on `reelforge-domain` only
//! - Stores are plain values created by the composition root and shared via
//!   `Arc`; there are no ambient singletons here

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod storage;
pub mod stores;

// Re-export commonly used types and traits for convenience
pub use storage::{FileStore, KeyValueStore, KeyValueStoreExt, MemoryStore};
pub use stores::{ReelsStore, SessionStore, SubscriptionId, UiStore};
