/// Side effects raised by a state transition, consumed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Toast { title: String, description: String },
    /// A connection request was accepted from the notification feed.
    MemberConnected(String),
    /// Jump to the conversation held with this participant.
    OpenConversationWith(String),
}

impl AppEvent {
    pub fn toast(title: impl Into<String>, description: impl Into<String>) -> Self {
        AppEvent::Toast {
            title: title.into(),
            description: description.into(),
        }
    }
}
