use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity constant for the person using the application.
pub const LOCAL_USER_ID: &str = "current-user";

/// Someone the local user talks to or sees in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    #[serde(default = "default_avatar")]
    pub avatar: String,
}

pub fn default_avatar() -> String {
    "/placeholder.svg".to_string()
}

/// A single chat message. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// A thread between the local user and one participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: String,
    pub participant: Participant,
    pub messages: Vec<Message>,
    pub last_message_timestamp: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new(
        id: impl Into<String>,
        participant: Participant,
        messages: Vec<Message>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let last_message_timestamp = messages
            .last()
            .map(|message| message.timestamp)
            .unwrap_or(created_at);
        Self {
            id: id.into(),
            participant,
            messages,
            last_message_timestamp,
            created_at,
        }
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Copy of this conversation with `message` appended.
    pub fn with_message(&self, message: Message) -> Self {
        let mut next = self.clone();
        next.last_message_timestamp = message.timestamp;
        next.messages.push(message);
        next
    }
}

/// Relationship between the local user and a directory member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    None,
    Pending,
    Connected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub avatar: String,
    pub interests: Vec<String>,
    pub projects: Vec<String>,
    pub status: ConnectionStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Connection,
    Message,
    Project,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    pub action_required: bool,
    pub user: Option<Participant>,
}

impl Notification {
    /// Connection requests are the only notifications that can be answered.
    pub fn is_answerable(&self) -> bool {
        self.kind == NotificationKind::Connection && self.user.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub members: u32,
    pub progress: u8,
    pub due_in: String,
}

/// Short person card used by the dashboard previews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberPreview {
    pub id: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub department: String,
    pub joined: String,
    pub interests: Vec<String>,
    pub skills: Vec<String>,
}
