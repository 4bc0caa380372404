use chrono::{DateTime, Duration, Utc};

use crate::common::{AppEvent, Page, UiCommand};
use crate::community::Directory;
use crate::config::AppConfig;
use crate::dashboard::Dashboard;
use crate::messaging::MessagingState;
use crate::notifications::Feed;
use crate::seed::{self, SeedFile};

const MAX_TOASTS: usize = 5;
const DEFAULT_TOAST_SECONDS: i64 = 3;

/// Toast lifetime from config, falling back to the default when it does not
/// fit a `Duration`.
fn toast_duration(seconds: u64) -> Duration {
    i64::try_from(seconds)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or_else(|| {
            log::warn!(
                "toast_seconds {seconds} is out of range; using {DEFAULT_TOAST_SECONDS}s"
            );
            Duration::seconds(DEFAULT_TOAST_SECONDS)
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub raised_at: DateTime<Utc>,
}

/// Short-lived banners, oldest first.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    duration: Duration,
}

impl ToastQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            duration,
        }
    }

    pub fn push(&mut self, title: String, description: String, now: DateTime<Utc>) {
        self.toasts.push(Toast {
            title,
            description,
            raised_at: now,
        });
        if self.toasts.len() > MAX_TOASTS {
            self.toasts.remove(0);
        }
    }

    pub fn prune(&mut self, now: DateTime<Utc>) {
        let duration = self.duration;
        self.toasts
            .retain(|toast| now.signed_duration_since(toast.raised_at) < duration);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Everything the UI renders from.
pub struct AppState {
    pub page: Page,
    pub messaging: MessagingState,
    pub directory: Directory,
    pub feed: Feed,
    pub dashboard: Dashboard,
    pub toasts: ToastQueue,
}

impl AppState {
    pub fn from_config(config: &AppConfig, now: DateTime<Utc>) -> Self {
        let seed = match &config.seed_file {
            Some(path) => SeedFile::load(path).unwrap_or_else(|err| {
                log::error!("{err}; falling back to built-in conversations");
                seed::builtin_seed()
            }),
            None => seed::builtin_seed(),
        };

        let conversations = seed.into_conversations(now);
        log::info!("Loaded {} conversations", conversations.len());

        Self {
            page: config.start_page,
            messaging: MessagingState::new(
                conversations,
                config.local_user_id.clone(),
                config.conversation_order,
            ),
            directory: Directory::new(seed::generate_members(
                config.member_count,
                config.member_seed,
            )),
            feed: Feed::new(seed::notifications(now)),
            dashboard: Dashboard::new(
                seed::projects(),
                seed::recent_connections(),
                seed::profile(),
            ),
            toasts: ToastQueue::new(toast_duration(config.toast_seconds)),
        }
    }

    pub fn apply(&mut self, command: UiCommand, now: DateTime<Utc>) {
        let events = match command {
            UiCommand::Navigate(page) => {
                self.page = page;
                Vec::new()
            }
            UiCommand::SelectConversation(id) => {
                self.messaging = self.messaging.select(&id).state;
                Vec::new()
            }
            UiCommand::SetDraft(text) => {
                self.messaging = self.messaging.set_draft(text).state;
                Vec::new()
            }
            UiCommand::SubmitDraft => {
                let transition = self.messaging.submit(now);
                for id in transition.state.store().changed_since(self.messaging.store()) {
                    log::info!("Conversation {id} updated");
                }
                self.messaging = transition.state;
                Vec::new()
            }
            UiCommand::SelectCommunityTab(tab) => {
                self.directory.select_tab(tab);
                Vec::new()
            }
            UiCommand::ToggleInterest(interest) => {
                self.directory.toggle_interest(&interest);
                Vec::new()
            }
            UiCommand::ToggleProject(project) => {
                self.directory.toggle_project(&project);
                Vec::new()
            }
            UiCommand::ClearFilters => {
                self.directory.clear_filters();
                Vec::new()
            }
            UiCommand::Connect { member_id } => self.directory.connect(&member_id),
            UiCommand::AcceptMember { member_id } => self.directory.accept(&member_id),
            UiCommand::MessageMember { member_id } => self.directory.message(&member_id),
            UiCommand::SelectFeedTab(tab) => {
                self.feed.select_tab(tab);
                Vec::new()
            }
            UiCommand::MarkAsRead(id) => {
                self.feed.mark_as_read(&id);
                Vec::new()
            }
            UiCommand::MarkAllAsRead => self.feed.mark_all_as_read(),
            UiCommand::AcceptConnection(id) => self.feed.accept_connection(&id),
            UiCommand::DeclineConnection(id) => self.feed.decline_connection(&id),
            UiCommand::SelectDashboardTab(tab) => {
                self.dashboard.select_tab(tab);
                Vec::new()
            }
        };

        self.handle_events(events, now);
    }

    fn handle_events(&mut self, events: Vec<AppEvent>, now: DateTime<Utc>) {
        for event in events {
            match event {
                AppEvent::Toast { title, description } => {
                    self.toasts.push(title, description, now);
                }
                AppEvent::MemberConnected(member_id) => {
                    if !self.directory.mark_connected(&member_id) {
                        log::debug!("{member_id} is not in the directory");
                    }
                }
                AppEvent::OpenConversationWith(member_id) => {
                    self.open_conversation_with(&member_id, now);
                }
            }
        }
    }

    fn open_conversation_with(&mut self, member_id: &str, now: DateTime<Utc>) {
        let conversation_id = self
            .messaging
            .store()
            .find_by_participant(member_id)
            .map(|conversation| conversation.id.clone());

        match conversation_id {
            Some(id) => {
                self.messaging = self.messaging.select(&id).state;
                self.page = Page::Messages;
            }
            None => self.toasts.push(
                "Message Sent".to_string(),
                "Check your messages for the conversation".to_string(),
                now,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{ConnectionStatus, FeedTab};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 16, 12, 0, 0).unwrap()
    }

    fn state() -> AppState {
        let config = AppConfig {
            member_seed: Some(1),
            ..AppConfig::default()
        };
        AppState::from_config(&config, now())
    }

    #[test]
    fn test_compose_flow_through_commands() {
        let mut state = state();
        state.apply(UiCommand::Navigate(Page::Messages), now());
        state.apply(UiCommand::SelectConversation("conv-2".to_string()), now());
        state.apply(UiCommand::SetDraft("Thursday works for me".to_string()), now());
        state.apply(UiCommand::SubmitDraft, now());

        let active = state.messaging.active().unwrap();
        assert_eq!(active.id, "conv-2");
        assert_eq!(active.messages.len(), 3);
        assert_eq!(state.messaging.draft(), "");
        assert_eq!(state.page, Page::Messages);
    }

    #[test]
    fn test_accepting_request_connects_member() {
        let mut state = state();
        state.apply(UiCommand::AcceptConnection("notif-1".to_string()), now());

        assert_eq!(
            state.directory.member("member-3").unwrap().status,
            ConnectionStatus::Connected
        );
        assert_eq!(state.toasts.toasts().len(), 1);
        assert_eq!(state.toasts.toasts()[0].title, "Connection Accepted");
        assert_eq!(state.feed.notifications().len(), 4);
    }

    #[test]
    fn test_message_member_opens_existing_conversation() {
        let mut state = state();
        state.directory.mark_connected("member-5");
        state.apply(
            UiCommand::MessageMember {
                member_id: "member-5".to_string(),
            },
            now(),
        );
        assert_eq!(state.page, Page::Messages);
        assert_eq!(state.messaging.active_id(), Some("conv-2"));

        state.directory.mark_connected("member-9");
        state.apply(
            UiCommand::MessageMember {
                member_id: "member-9".to_string(),
            },
            now(),
        );
        assert_eq!(state.toasts.toasts()[0].title, "Message Sent");
    }

    #[test]
    fn test_unread_badge_tracks_feed() {
        let mut state = state();
        assert_eq!(state.feed.unread_count(), 3);
        state.apply(UiCommand::SelectFeedTab(FeedTab::Unread), now());
        state.apply(UiCommand::MarkAllAsRead, now());
        assert_eq!(state.feed.unread_count(), 0);
        assert!(state.feed.visible().is_empty());
    }

    #[test]
    fn test_toasts_expire() {
        let mut queue = ToastQueue::new(Duration::seconds(3));
        queue.push("a".to_string(), String::new(), now());
        queue.push("b".to_string(), String::new(), now() + Duration::seconds(2));

        queue.prune(now() + Duration::seconds(3));
        let titles: Vec<_> = queue.toasts().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["b"]);

        queue.prune(now() + Duration::seconds(10));
        assert!(queue.toasts().is_empty());
    }

    #[test]
    fn test_toast_queue_is_bounded() {
        let mut queue = ToastQueue::new(Duration::seconds(3));
        for i in 0..8 {
            queue.push(format!("t{i}"), String::new(), now());
        }
        assert_eq!(queue.toasts().len(), MAX_TOASTS);
        assert_eq!(queue.toasts()[0].title, "t3");
    }

    #[test]
    fn test_toast_duration_out_of_range_uses_default() {
        assert_eq!(toast_duration(7), Duration::seconds(7));
        assert_eq!(toast_duration(10_000_000_000_000_000), Duration::seconds(3));
        assert_eq!(toast_duration(u64::MAX), Duration::seconds(3));

        let config = AppConfig {
            toast_seconds: u64::MAX,
            ..AppConfig::default()
        };
        let mut state = AppState::from_config(&config, now());
        state.apply(UiCommand::MarkAllAsRead, now());
        state.toasts.prune(now() + Duration::seconds(1));
        assert_eq!(state.toasts.toasts().len(), 1);
    }

    #[test]
    fn test_seed_file_with_huge_offset_falls_back() {
        let path = std::env::temp_dir().join(format!(
            "nexus-seed-{}.json",
            uuid::Uuid::new_v4()
        ));
        let content = format!(
            r#"{{ "conversations": [
                {{ "id": "x", "participant": {{ "id": "p", "name": "P" }}, "messages": [
                    {{ "id": "m", "sender_id": "p", "text": "old", "minutes_ago": {} }}
                ] }}
            ] }}"#,
            i64::MAX
        );
        std::fs::write(&path, content).unwrap();

        let config = AppConfig {
            seed_file: Some(path.display().to_string()),
            ..AppConfig::default()
        };
        let state = AppState::from_config(&config, now());
        std::fs::remove_file(&path).ok();

        assert_eq!(state.messaging.store().conversations().len(), 2);
        assert!(state.messaging.store().get("conv-1").is_some());
    }

    #[test]
    fn test_bad_seed_file_falls_back() {
        let config = AppConfig {
            seed_file: Some("missing/seed.json".to_string()),
            ..AppConfig::default()
        };
        let state = AppState::from_config(&config, now());
        assert_eq!(state.messaging.store().conversations().len(), 2);
    }
}
