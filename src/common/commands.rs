use serde::{Deserialize, Serialize};

/// Top-level pages reachable from the navigation bar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Community,
    Notifications,
    Messages,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Home,
        Page::Community,
        Page::Notifications,
        Page::Messages,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Community => "Community",
            Page::Notifications => "Notifications",
            Page::Messages => "Messages",
        }
    }
}

/// Directory tabs on the community page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommunityTab {
    #[default]
    All,
    Network,
    Pending,
}

/// Feed tabs on the notifications page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedTab {
    #[default]
    All,
    Unread,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    Profile,
}

/// Actions the UI hands to the state layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Navigate(Page),
    SelectConversation(String),
    SetDraft(String),
    SubmitDraft,
    SelectCommunityTab(CommunityTab),
    ToggleInterest(String),
    ToggleProject(String),
    ClearFilters,
    Connect {
        member_id: String,
    },
    AcceptMember {
        member_id: String,
    },
    /// Open the conversation with a connected member.
    MessageMember {
        member_id: String,
    },
    SelectFeedTab(FeedTab),
    MarkAsRead(String),
    MarkAllAsRead,
    AcceptConnection(String),
    DeclineConnection(String),
    SelectDashboardTab(DashboardTab),
}
