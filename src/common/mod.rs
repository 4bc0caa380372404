pub mod commands;
pub mod events;
pub mod types;

pub use commands::{CommunityTab, DashboardTab, FeedTab, Page, UiCommand};
pub use events::AppEvent;
pub use types::{
    ConnectionStatus, Conversation, LOCAL_USER_ID, Member, MemberPreview, Message, Notification,
    NotificationKind, Participant, Profile, Project, default_avatar,
};
