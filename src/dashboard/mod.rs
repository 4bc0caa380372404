//! Home page: overview stats and the local user's profile.

use crate::common::{ConnectionStatus, DashboardTab, MemberPreview, Profile, Project};
use crate::community::Directory;
use crate::notifications::Feed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub pending_requests: usize,
    pub active_projects: usize,
    pub connections: usize,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    tab: DashboardTab,
    projects: Vec<Project>,
    recent_connections: Vec<MemberPreview>,
    profile: Profile,
}

impl Dashboard {
    pub fn new(
        projects: Vec<Project>,
        recent_connections: Vec<MemberPreview>,
        profile: Profile,
    ) -> Self {
        Self {
            tab: DashboardTab::Overview,
            projects,
            recent_connections,
            profile,
        }
    }

    pub fn tab(&self) -> DashboardTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.tab = tab;
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn recent_connections(&self) -> &[MemberPreview] {
        &self.recent_connections
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn stats(&self, feed: &Feed, directory: &Directory) -> Stats {
        Stats {
            pending_requests: feed.pending_requests(),
            active_projects: self.projects.len(),
            connections: directory.count_with_status(ConnectionStatus::Connected),
        }
    }

    /// People who asked to connect, with their directory role when known.
    pub fn pending_connections(&self, feed: &Feed, directory: &Directory) -> Vec<MemberPreview> {
        feed.notifications()
            .iter()
            .filter(|notification| notification.is_answerable() && notification.action_required)
            .filter_map(|notification| notification.user.as_ref())
            .map(|user| MemberPreview {
                id: user.id.clone(),
                name: user.name.clone(),
                role: directory
                    .member(&user.id)
                    .map(|member| member.role.clone())
                    .unwrap_or_else(|| "Member".to_string()),
            })
            .collect()
    }
}
