//! Transport-level view models
//!
//! Server-owned entities are immutable snapshots on the client: a fetch
//! replaces the prior value wholesale. There is no merge/patch logic here.

mod envelope;
mod reel;
mod session;
mod settings;
mod social;
mod user;
mod video;

pub use envelope::ApiResponse;
pub use reel::{PendingPublishCount, Reel, ReelStatus};
pub use session::{AuthTokens, Session};
pub use settings::{NotificationSettings, Theme, UserSettings, UserSettingsUpdate};
pub use social::{
    DisconnectOutcome, FacebookLoginUrl, InstagramPost, InstagramStatus, RefreshTokenOutcome,
    SocialAccountStatus,
};
pub use user::{User, UserUpdate};
pub use video::{ProcessingState, ProcessingStatus, Video, VideoStatus};
