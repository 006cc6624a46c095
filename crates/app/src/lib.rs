//! # Reelforge App
//!
//! Composition root of the client data layer.
//!
//! This crate contains:
//! - [`AppContext`]: the dependency-injection container that wires storage,
//!   stores, and the API surface
//! - Telemetry bootstrap for embedding binaries
//!
//! The view layer receives store handles and the API catalog from
//! [`AppContext`] explicitly; nothing in the data layer is a global.

pub mod context;
pub mod telemetry;

pub use context::AppContext;
