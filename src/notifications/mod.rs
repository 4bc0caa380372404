//! Notification feed.

use crate::common::{AppEvent, FeedTab, Notification};

#[derive(Debug, Clone, Default)]
pub struct Feed {
    notifications: Vec<Notification>,
    tab: FeedTab,
}

impl Feed {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self {
            notifications,
            tab: FeedTab::All,
        }
    }

    pub fn tab(&self) -> FeedTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: FeedTab) {
        self.tab = tab;
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn visible(&self) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|notification| self.tab == FeedTab::All || !notification.read)
            .collect()
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Connection requests still waiting for an answer.
    pub fn pending_requests(&self) -> usize {
        self.notifications
            .iter()
            .filter(|n| n.is_answerable() && n.action_required)
            .count()
    }

    pub fn mark_as_read(&mut self, notification_id: &str) -> bool {
        match self
            .notifications
            .iter_mut()
            .find(|notification| notification.id == notification_id)
        {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_as_read(&mut self) -> Vec<AppEvent> {
        for notification in &mut self.notifications {
            notification.read = true;
        }
        vec![AppEvent::toast("All notifications marked as read", "")]
    }

    /// Accept a connection request and drop it from the feed.
    pub fn accept_connection(&mut self, notification_id: &str) -> Vec<AppEvent> {
        let Some(notification) = self.take_answerable(notification_id) else {
            return Vec::new();
        };
        let Some(user) = notification.user else {
            return Vec::new();
        };
        vec![
            AppEvent::toast(
                "Connection Accepted",
                format!("You are now connected with {}", user.name),
            ),
            AppEvent::MemberConnected(user.id),
        ]
    }

    pub fn decline_connection(&mut self, notification_id: &str) -> Vec<AppEvent> {
        let Some(notification) = self.take_answerable(notification_id) else {
            return Vec::new();
        };
        let name = notification
            .user
            .map(|user| user.name)
            .unwrap_or_default();
        vec![AppEvent::toast(
            "Connection Declined",
            format!("You declined the connection request from {name}"),
        )]
    }

    fn take_answerable(&mut self, notification_id: &str) -> Option<Notification> {
        let index = self
            .notifications
            .iter()
            .position(|n| n.id == notification_id && n.is_answerable())?;
        Some(self.notifications.remove(index))
    }
}
