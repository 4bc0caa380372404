use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::common::{Conversation, Message};

use super::IgnoreReason;

/// Authoritative list of conversations for the session.
///
/// Conversations are shared behind `Arc`; a mutation swaps in a fresh `Arc`
/// for the touched conversation and leaves the others pointer-equal, so
/// cloning a store is cheap and changes are visible by identity.
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    conversations: Vec<Arc<Conversation>>,
}

impl ConversationStore {
    pub fn new(seed: Vec<Conversation>) -> Self {
        let mut seen = HashSet::new();
        let conversations = seed
            .into_iter()
            .filter(|conversation| {
                let fresh = seen.insert(conversation.id.clone());
                if !fresh {
                    log::warn!("Dropping duplicate conversation id `{}`", conversation.id);
                }
                fresh
            })
            .map(Arc::new)
            .collect();
        Self { conversations }
    }

    pub fn conversations(&self) -> &[Arc<Conversation>] {
        &self.conversations
    }

    pub fn first(&self) -> Option<&Arc<Conversation>> {
        self.conversations.first()
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Conversation>> {
        self.conversations
            .iter()
            .find(|conversation| conversation.id == id)
    }

    pub fn find_by_participant(&self, participant_id: &str) -> Option<&Arc<Conversation>> {
        self.conversations
            .iter()
            .find(|conversation| conversation.participant.id == participant_id)
    }

    /// Append a message from `sender_id` to the conversation.
    ///
    /// Returns the next store together with the replaced conversation. The
    /// stored text is the trimmed input.
    pub fn send_message(
        &self,
        conversation_id: &str,
        text: &str,
        sender_id: &str,
        now: DateTime<Utc>,
    ) -> Result<(Self, Arc<Conversation>), IgnoreReason> {
        let text = text.trim();
        if text.is_empty() {
            return Err(IgnoreReason::EmptyDraft);
        }

        let index = self
            .conversations
            .iter()
            .position(|conversation| conversation.id == conversation_id)
            .ok_or(IgnoreReason::UnknownConversation)?;

        let message = Message {
            id: format!("msg-{}", Uuid::new_v4()),
            sender_id: sender_id.to_string(),
            text: text.to_string(),
            timestamp: now,
        };

        let updated = Arc::new(self.conversations[index].with_message(message));
        let mut conversations = self.conversations.clone();
        conversations[index] = Arc::clone(&updated);

        Ok((Self { conversations }, updated))
    }

    /// Ids of conversations not pointer-equal to their counterpart in
    /// `previous`.
    pub fn changed_since(&self, previous: &ConversationStore) -> Vec<String> {
        self.conversations
            .iter()
            .filter(|conversation| {
                previous
                    .get(&conversation.id)
                    .is_none_or(|old| !Arc::ptr_eq(old, conversation))
            })
            .map(|conversation| conversation.id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{LOCAL_USER_ID, Participant};
    use chrono::{Duration, TimeZone};

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 16, hour, minute, 0).unwrap()
    }

    fn conversation(id: &str, texts: &[&str]) -> Conversation {
        let messages = texts
            .iter()
            .enumerate()
            .map(|(i, text)| Message {
                id: format!("{id}-m{i}"),
                sender_id: "member-9".to_string(),
                text: text.to_string(),
                timestamp: at(8, 0) + Duration::minutes(i as i64),
            })
            .collect();
        Conversation::new(
            id,
            Participant {
                id: format!("{id}-peer"),
                name: format!("Peer of {id}"),
                avatar: String::new(),
            },
            messages,
            at(7, 0),
        )
    }

    #[test]
    fn test_send_appends_trimmed_message() {
        let store = ConversationStore::new(vec![conversation("c1", &["hello"])]);
        let (next, updated) = store
            .send_message("c1", "  see you soon \n", LOCAL_USER_ID, at(9, 30))
            .unwrap();

        assert_eq!(updated.messages.len(), 2);
        let last = updated.last_message().unwrap();
        assert_eq!(last.text, "see you soon");
        assert_eq!(last.sender_id, LOCAL_USER_ID);
        assert_eq!(last.timestamp, at(9, 30));
        assert_eq!(updated.last_message_timestamp, at(9, 30));
        assert!(last.id.starts_with("msg-"));
        assert!(Arc::ptr_eq(next.get("c1").unwrap(), &updated));

        // The previous snapshot is untouched.
        assert_eq!(store.get("c1").unwrap().messages.len(), 1);
    }

    #[test]
    fn test_blank_text_is_ignored() {
        let store = ConversationStore::new(vec![conversation("c1", &["hello"])]);
        for blank in ["", "   ", "\t\n"] {
            let result = store.send_message("c1", blank, LOCAL_USER_ID, at(9, 0));
            assert!(matches!(result, Err(IgnoreReason::EmptyDraft)));
        }
        assert_eq!(store.get("c1").unwrap().messages.len(), 1);
    }

    #[test]
    fn test_unknown_conversation_is_ignored() {
        let store = ConversationStore::new(vec![conversation("c1", &[])]);
        let result = store.send_message("nope", "hi", LOCAL_USER_ID, at(9, 0));
        assert!(matches!(result, Err(IgnoreReason::UnknownConversation)));
    }

    #[test]
    fn test_changed_since_reports_only_touched_conversation() {
        let store = ConversationStore::new(vec![
            conversation("c1", &["a"]),
            conversation("c2", &["b"]),
        ]);
        let (next, _) = store
            .send_message("c2", "reply", LOCAL_USER_ID, at(10, 0))
            .unwrap();

        assert_eq!(next.changed_since(&store), vec!["c2".to_string()]);
        assert!(Arc::ptr_eq(
            next.get("c1").unwrap(),
            store.get("c1").unwrap()
        ));
        assert!(store.changed_since(&store).is_empty());
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let store = ConversationStore::new(vec![
            conversation("c1", &["first"]),
            conversation("c1", &["second"]),
        ]);
        assert_eq!(store.conversations().len(), 1);
        assert_eq!(store.get("c1").unwrap().messages[0].text, "first");
    }

    #[test]
    fn test_empty_conversation_uses_creation_time() {
        let empty = conversation("c1", &[]);
        assert_eq!(empty.last_message_timestamp, empty.created_at);
    }
}
