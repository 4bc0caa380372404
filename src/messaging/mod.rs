pub mod composer;
pub mod selector;
pub mod state;
pub mod store;
pub mod time_format;
pub mod view;

use serde::{Deserialize, Serialize};

pub use state::MessagingState;

/// Why an action left the messaging state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    EmptyDraft,
    NoActiveConversation,
    UnknownConversation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Ignored(IgnoreReason),
}

impl Outcome {
    pub fn is_accepted(self) -> bool {
        self == Outcome::Accepted
    }
}

/// Display order of the conversation list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ConversationOrder {
    /// Collection order; a new message does not move its conversation.
    #[default]
    Insertion,
    /// Newest `last_message_timestamp` first.
    Recency,
}
