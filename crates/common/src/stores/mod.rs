//! Observable view-state stores
//!
//! Three independently-lifetimed containers mediate between asynchronous
//! backend calls and rendering: session, reels/processing, and UI
//! preferences. Each holds its state behind a lock, exposes setters that
//! replace state and notify subscribers synchronously, and hands out cloned
//! snapshots. Page logic orchestrates "fetch via the API surface, then write
//! the result into a store" — stores never call the network themselves.

mod reels;
mod session;
mod subscribers;
mod ui;

pub use reels::{ReelsState, ReelsStore};
pub use session::{SessionState, SessionStore};
pub use subscribers::SubscriptionId;
pub use ui::{UiState, UiStore};
