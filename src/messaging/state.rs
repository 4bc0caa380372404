use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::common::Conversation;

use super::composer::Composer;
use super::selector::Selection;
use super::store::ConversationStore;
use super::{ConversationOrder, IgnoreReason, Outcome};

/// Snapshot of the messaging page.
///
/// Update methods never mutate `self`; they return the next snapshot in a
/// [`Transition`]. Rejected actions hand back a clone of the current one.
#[derive(Debug, Clone)]
pub struct MessagingState {
    store: ConversationStore,
    selection: Selection,
    composer: Composer,
    local_user_id: String,
    order: ConversationOrder,
}

#[derive(Debug, Clone)]
pub struct Transition {
    pub state: MessagingState,
    pub outcome: Outcome,
}

impl Transition {
    fn accepted(state: MessagingState) -> Self {
        Self {
            state,
            outcome: Outcome::Accepted,
        }
    }

    fn ignored(state: &MessagingState, reason: IgnoreReason) -> Self {
        log::debug!("Messaging action ignored: {reason:?}");
        Self {
            state: state.clone(),
            outcome: Outcome::Ignored(reason),
        }
    }
}

impl MessagingState {
    pub fn new(
        seed: Vec<Conversation>,
        local_user_id: impl Into<String>,
        order: ConversationOrder,
    ) -> Self {
        let store = ConversationStore::new(seed);
        let selection = Selection::initial(&store);
        Self {
            store,
            selection,
            composer: Composer::default(),
            local_user_id: local_user_id.into(),
            order,
        }
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn active(&self) -> Option<&Arc<Conversation>> {
        self.selection.active()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.selection.active_id()
    }

    pub fn draft(&self) -> &str {
        self.composer.draft()
    }

    pub fn local_user_id(&self) -> &str {
        &self.local_user_id
    }

    pub fn order(&self) -> ConversationOrder {
        self.order
    }

    /// Make `conversation_id` active. Unknown ids keep the current selection.
    pub fn select(&self, conversation_id: &str) -> Transition {
        match self.selection.select(&self.store, conversation_id) {
            Some(selection) => Transition::accepted(Self {
                selection,
                ..self.clone()
            }),
            None => Transition::ignored(self, IgnoreReason::UnknownConversation),
        }
    }

    pub fn set_draft(&self, text: impl Into<String>) -> Transition {
        Transition::accepted(Self {
            composer: Composer::with_draft(text),
            ..self.clone()
        })
    }

    /// Append `text` from the local user to `conversation_id`.
    pub fn send_message(
        &self,
        conversation_id: &str,
        text: &str,
        now: DateTime<Utc>,
    ) -> Transition {
        if text.trim().is_empty() {
            return Transition::ignored(self, IgnoreReason::EmptyDraft);
        }
        if self.selection.active().is_none() {
            return Transition::ignored(self, IgnoreReason::NoActiveConversation);
        }

        match self
            .store
            .send_message(conversation_id, text, &self.local_user_id, now)
        {
            Ok((store, updated)) => {
                log::debug!(
                    "Appended message to {} ({} messages)",
                    updated.id,
                    updated.messages.len()
                );
                let selection = self.selection.refreshed(&store);
                Transition::accepted(Self {
                    store,
                    selection,
                    ..self.clone()
                })
            }
            Err(reason) => Transition::ignored(self, reason),
        }
    }

    /// Send the draft to the active conversation and clear it. A rejected
    /// submit keeps the draft as typed.
    pub fn submit(&self, now: DateTime<Utc>) -> Transition {
        if self.composer.is_blank() {
            return Transition::ignored(self, IgnoreReason::EmptyDraft);
        }
        let Some(active_id) = self.selection.active_id() else {
            return Transition::ignored(self, IgnoreReason::NoActiveConversation);
        };

        let transition = self.send_message(active_id, self.composer.draft(), now);
        if !transition.outcome.is_accepted() {
            return transition;
        }

        Transition::accepted(MessagingState {
            composer: Composer::cleared(),
            ..transition.state
        })
    }
}
