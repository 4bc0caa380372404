use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Conversation, Message, Participant};
use crate::error::SeedError;

/// Largest accepted `minutes_ago` magnitude (about a century).
pub const MAX_OFFSET_MINUTES: i64 = 100 * 366 * 24 * 60;

/// On-disk shape of a conversation seed. Times are offsets from startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConversation {
    pub id: String,
    pub participant: Participant,
    #[serde(default)]
    pub messages: Vec<SeedMessage>,
    #[serde(default)]
    pub created_minutes_ago: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedMessage {
    pub id: String,
    pub sender_id: String,
    pub text: String,
    pub minutes_ago: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub conversations: Vec<SeedConversation>,
}

impl SeedFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, SeedError> {
        let seed: SeedFile = serde_json::from_str(content)?;
        seed.validate()?;
        Ok(seed)
    }

    pub fn validate(&self) -> Result<(), SeedError> {
        let mut conversation_ids = HashSet::new();
        let mut message_ids = HashSet::new();

        for conversation in &self.conversations {
            if !conversation_ids.insert(conversation.id.as_str()) {
                return Err(SeedError::DuplicateConversation(conversation.id.clone()));
            }
            if let Some(minutes) = conversation.created_minutes_ago {
                check_offset(&conversation.id, minutes)?;
            }
            for message in &conversation.messages {
                if !message_ids.insert(message.id.as_str()) {
                    return Err(SeedError::DuplicateMessage(message.id.clone()));
                }
                if message.text.trim().is_empty() {
                    return Err(SeedError::EmptyMessage(message.id.clone()));
                }
                check_offset(&message.id, message.minutes_ago)?;
            }
        }
        Ok(())
    }

    /// Resolve offsets against `now`. Messages come out oldest first.
    pub fn into_conversations(self, now: DateTime<Utc>) -> Vec<Conversation> {
        self.conversations
            .into_iter()
            .map(|seed| {
                let mut messages = seed.messages;
                messages.sort_by_key(|message| std::cmp::Reverse(message.minutes_ago));

                let oldest = messages.first().map(|m| m.minutes_ago).unwrap_or(0);
                let created_at =
                    now - Duration::minutes(seed.created_minutes_ago.unwrap_or(oldest));

                let messages = messages
                    .into_iter()
                    .map(|message| Message {
                        id: message.id,
                        sender_id: message.sender_id,
                        text: message.text,
                        timestamp: now - Duration::minutes(message.minutes_ago),
                    })
                    .collect();

                Conversation::new(seed.id, seed.participant, messages, created_at)
            })
            .collect()
    }
}

fn check_offset(id: &str, minutes: i64) -> Result<(), SeedError> {
    if minutes.checked_abs().is_some_and(|abs| abs <= MAX_OFFSET_MINUTES) {
        Ok(())
    } else {
        Err(SeedError::OffsetOutOfRange {
            id: id.to_string(),
            minutes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SAMPLE: &str = r#"{
        "conversations": [
            {
                "id": "conv-a",
                "participant": { "id": "member-4", "name": "Member 4" },
                "messages": [
                    { "id": "a-2", "sender_id": "current-user", "text": "Later one", "minutes_ago": 5 },
                    { "id": "a-1", "sender_id": "member-4", "text": "Earlier one", "minutes_ago": 90 }
                ]
            },
            {
                "id": "conv-b",
                "participant": { "id": "member-6", "name": "Member 6", "avatar": "/six.svg" },
                "created_minutes_ago": 60
            }
        ]
    }"#;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 16, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_and_materialize() {
        let conversations = SeedFile::parse(SAMPLE).unwrap().into_conversations(now());
        assert_eq!(conversations.len(), 2);

        let a = &conversations[0];
        assert_eq!(a.participant.avatar, "/placeholder.svg");
        assert_eq!(a.messages[0].text, "Earlier one");
        assert_eq!(a.last_message_timestamp, now() - Duration::minutes(5));
        assert_eq!(a.created_at, now() - Duration::minutes(90));

        let b = &conversations[1];
        assert!(b.messages.is_empty());
        assert_eq!(b.last_message_timestamp, now() - Duration::minutes(60));
    }

    #[test]
    fn test_rejects_duplicate_conversation() {
        let json = r#"{ "conversations": [
            { "id": "x", "participant": { "id": "p", "name": "P" } },
            { "id": "x", "participant": { "id": "q", "name": "Q" } }
        ] }"#;
        assert!(matches!(
            SeedFile::parse(json),
            Err(SeedError::DuplicateConversation(id)) if id == "x"
        ));
    }

    #[test]
    fn test_rejects_duplicate_message_and_blank_text() {
        let duplicate = r#"{ "conversations": [
            { "id": "x", "participant": { "id": "p", "name": "P" }, "messages": [
                { "id": "m", "sender_id": "p", "text": "one", "minutes_ago": 2 },
                { "id": "m", "sender_id": "p", "text": "two", "minutes_ago": 1 }
            ] }
        ] }"#;
        assert!(matches!(
            SeedFile::parse(duplicate),
            Err(SeedError::DuplicateMessage(_))
        ));

        let blank = r#"{ "conversations": [
            { "id": "x", "participant": { "id": "p", "name": "P" }, "messages": [
                { "id": "m", "sender_id": "p", "text": "  ", "minutes_ago": 2 }
            ] }
        ] }"#;
        assert!(matches!(SeedFile::parse(blank), Err(SeedError::EmptyMessage(_))));
    }

    #[test]
    fn test_rejects_offsets_out_of_range() {
        let huge_message = format!(
            r#"{{ "conversations": [
                {{ "id": "x", "participant": {{ "id": "p", "name": "P" }}, "messages": [
                    {{ "id": "m", "sender_id": "p", "text": "old", "minutes_ago": {} }}
                ] }}
            ] }}"#,
            i64::MAX
        );
        assert!(matches!(
            SeedFile::parse(&huge_message),
            Err(SeedError::OffsetOutOfRange { id, .. }) if id == "m"
        ));

        let huge_created = format!(
            r#"{{ "conversations": [
                {{ "id": "x", "participant": {{ "id": "p", "name": "P" }}, "created_minutes_ago": {} }}
            ] }}"#,
            i64::MIN
        );
        assert!(matches!(
            SeedFile::parse(&huge_created),
            Err(SeedError::OffsetOutOfRange { id, .. }) if id == "x"
        ));

        let edge = format!(
            r#"{{ "conversations": [
                {{ "id": "x", "participant": {{ "id": "p", "name": "P" }}, "created_minutes_ago": {MAX_OFFSET_MINUTES} }}
            ] }}"#
        );
        let conversations = SeedFile::parse(&edge).unwrap().into_conversations(now());
        assert_eq!(
            conversations[0].created_at,
            now() - Duration::minutes(MAX_OFFSET_MINUTES)
        );
    }

    #[test]
    fn test_malformed_json_and_missing_file() {
        assert!(matches!(SeedFile::parse("{"), Err(SeedError::Json(_))));
        assert!(matches!(
            SeedFile::load("does/not/exist.json"),
            Err(SeedError::Io { .. })
        ));
    }
}
