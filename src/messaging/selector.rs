use std::sync::Arc;

use crate::common::Conversation;

use super::store::ConversationStore;

/// Tracks the conversation currently on screen, if any.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    active: Option<Arc<Conversation>>,
}

impl Selection {
    /// Start on the first conversation of the store.
    pub fn initial(store: &ConversationStore) -> Self {
        Self {
            active: store.first().cloned(),
        }
    }

    pub fn active(&self) -> Option<&Arc<Conversation>> {
        self.active.as_ref()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_ref().map(|conversation| conversation.id.as_str())
    }

    /// Point at `conversation_id`. An unknown id keeps the previous selection
    /// and returns `None`.
    pub fn select(&self, store: &ConversationStore, conversation_id: &str) -> Option<Self> {
        store.get(conversation_id).map(|conversation| Self {
            active: Some(Arc::clone(conversation)),
        })
    }

    /// Re-resolve the active conversation against a newer store snapshot.
    pub fn refreshed(&self, store: &ConversationStore) -> Self {
        Self {
            active: self
                .active_id()
                .and_then(|id| store.get(id))
                .cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{LOCAL_USER_ID, Participant};
    use chrono::{TimeZone, Utc};

    fn store() -> ConversationStore {
        let created = Utc.with_ymd_and_hms(2024, 5, 16, 7, 0, 0).unwrap();
        let make = |id: &str| {
            Conversation::new(
                id,
                Participant {
                    id: format!("{id}-peer"),
                    name: id.to_uppercase(),
                    avatar: String::new(),
                },
                Vec::new(),
                created,
            )
        };
        ConversationStore::new(vec![make("c1"), make("c2")])
    }

    #[test]
    fn test_initial_selects_first() {
        let store = store();
        assert_eq!(Selection::initial(&store).active_id(), Some("c1"));
        assert!(Selection::initial(&ConversationStore::default())
            .active()
            .is_none());
    }

    #[test]
    fn test_select_known_and_unknown() {
        let store = store();
        let selection = Selection::initial(&store);

        let picked = selection.select(&store, "c2").unwrap();
        assert_eq!(picked.active_id(), Some("c2"));
        assert!(Arc::ptr_eq(picked.active().unwrap(), store.get("c2").unwrap()));

        assert!(picked.select(&store, "missing").is_none());
    }

    #[test]
    fn test_refresh_follows_new_copy() {
        let store = store();
        let selection = Selection::initial(&store);
        let now = Utc.with_ymd_and_hms(2024, 5, 16, 9, 0, 0).unwrap();
        let (next, updated) = store.send_message("c1", "hi", LOCAL_USER_ID, now).unwrap();

        let refreshed = selection.refreshed(&next);
        assert!(Arc::ptr_eq(refreshed.active().unwrap(), &updated));
        assert_eq!(refreshed.active().unwrap().messages.len(), 1);
    }
}
