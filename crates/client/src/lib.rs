//! # Reelforge Client
//!
//! HTTP transport and typed API surface over the Reelforge backend.
//!
//! This crate contains:
//! - A thin HTTP transport (timeout, default JSON headers, cancellation)
//! - The API client with bearer-token injection and the centralized 401
//!   policy
//! - The fixed, resource-grouped catalog of backend operations
//! - The configuration loader (environment first, then config files)
//!
//! ## Architecture
//! - Depends on `reelforge-domain` and `reelforge-common`
//! - Contains all "impure" code of the data layer (network I/O)
//! - Performs no UI side effects: a 401 clears persisted session state and
//!   notifies an injected observer, nothing more

pub mod api;
pub mod config;
pub mod http;

// Re-export commonly used items
pub use api::{Api, ApiClient, ApiError, ApiErrorCategory, UnauthorizedObserver};
pub use http::HttpClient;
