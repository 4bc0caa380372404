//! Read-only projections rendered by the messages page.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

use super::time_format::format_relative;
use super::{ConversationOrder, MessagingState};

pub const EMPTY_THREAD_HINT: &str = "Select a conversation to start messaging";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationRow {
    pub id: String,
    pub participant_name: String,
    /// Text of the most recent message, empty when there is none.
    pub preview: String,
    pub time_label: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadMessage {
    pub id: String,
    pub text: String,
    pub time_label: String,
    pub is_own: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThreadView {
    Empty,
    Thread {
        conversation_id: String,
        participant_name: String,
        messages: Vec<ThreadMessage>,
    },
}

fn label<Tz>(timestamp: DateTime<Utc>, now: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_relative(&timestamp.with_timezone(tz), &now.with_timezone(tz))
}

pub fn conversation_list<Tz>(
    state: &MessagingState,
    now: DateTime<Utc>,
    tz: &Tz,
) -> Vec<ConversationRow>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut conversations: Vec<_> = state.store().conversations().iter().collect();
    if state.order() == ConversationOrder::Recency {
        conversations.sort_by(|a, b| b.last_message_timestamp.cmp(&a.last_message_timestamp));
    }

    conversations
        .into_iter()
        .map(|conversation| ConversationRow {
            id: conversation.id.clone(),
            participant_name: conversation.participant.name.clone(),
            preview: conversation
                .last_message()
                .map(|message| message.text.clone())
                .unwrap_or_default(),
            time_label: label(conversation.last_message_timestamp, now, tz),
            is_active: state.active_id() == Some(conversation.id.as_str()),
        })
        .collect()
}

pub fn thread<Tz>(state: &MessagingState, now: DateTime<Utc>, tz: &Tz) -> ThreadView
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(conversation) = state.active() else {
        return ThreadView::Empty;
    };

    ThreadView::Thread {
        conversation_id: conversation.id.clone(),
        participant_name: conversation.participant.name.clone(),
        messages: conversation
            .messages
            .iter()
            .map(|message| ThreadMessage {
                id: message.id.clone(),
                text: message.text.clone(),
                time_label: label(message.timestamp, now, tz),
                is_own: message.sender_id == state.local_user_id(),
            })
            .collect(),
    }
}
