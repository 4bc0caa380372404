//! Member directory with filters and connection requests.

use crate::common::{AppEvent, CommunityTab, ConnectionStatus, Member};

pub const INTERESTS: [&str; 9] = [
    "UI/UX",
    "Front-end",
    "Back-end",
    "AI/ML",
    "Data Science",
    "Mobile",
    "DevOps",
    "Security",
    "Blockchain",
];

pub const PROJECTS: [&str; 5] = [
    "App Redesign",
    "Platform Migration",
    "New Feature Development",
    "Analytics Dashboard",
    "API Integration",
];

pub const NO_MATCHES_HINT: &str = "No members match your current filters.";

#[derive(Debug, Clone, Default)]
pub struct Directory {
    members: Vec<Member>,
    tab: CommunityTab,
    selected_interests: Vec<String>,
    selected_projects: Vec<String>,
}

impl Directory {
    pub fn new(members: Vec<Member>) -> Self {
        Self {
            members,
            ..Self::default()
        }
    }

    pub fn member(&self, member_id: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.id == member_id)
    }

    pub fn tab(&self) -> CommunityTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: CommunityTab) {
        self.tab = tab;
    }

    pub fn is_interest_selected(&self, interest: &str) -> bool {
        self.selected_interests.iter().any(|i| i == interest)
    }

    pub fn is_project_selected(&self, project: &str) -> bool {
        self.selected_projects.iter().any(|p| p == project)
    }

    pub fn has_filters(&self) -> bool {
        !self.selected_interests.is_empty() || !self.selected_projects.is_empty()
    }

    pub fn toggle_interest(&mut self, interest: &str) {
        toggle(&mut self.selected_interests, interest);
    }

    pub fn toggle_project(&mut self, project: &str) {
        toggle(&mut self.selected_projects, project);
    }

    /// Drop interest and project filters. The tab is kept.
    pub fn clear_filters(&mut self) {
        self.selected_interests.clear();
        self.selected_projects.clear();
    }

    /// Members visible under the current tab and filters, in directory order.
    pub fn filtered(&self) -> Vec<&Member> {
        self.members
            .iter()
            .filter(|member| match self.tab {
                CommunityTab::All => true,
                CommunityTab::Network => member.status == ConnectionStatus::Connected,
                CommunityTab::Pending => member.status == ConnectionStatus::Pending,
            })
            .filter(|member| matches_any(&member.interests, &self.selected_interests))
            .filter(|member| matches_any(&member.projects, &self.selected_projects))
            .collect()
    }

    pub fn count_with_status(&self, status: ConnectionStatus) -> usize {
        self.members
            .iter()
            .filter(|member| member.status == status)
            .count()
    }

    /// Send a request to a member we have no relationship with yet.
    pub fn connect(&mut self, member_id: &str) -> Vec<AppEvent> {
        if !self.transition(member_id, ConnectionStatus::None, ConnectionStatus::Pending) {
            return Vec::new();
        }
        vec![AppEvent::toast(
            "Connection Request Sent",
            "They'll be notified about your request",
        )]
    }

    pub fn accept(&mut self, member_id: &str) -> Vec<AppEvent> {
        if !self.transition(
            member_id,
            ConnectionStatus::Pending,
            ConnectionStatus::Connected,
        ) {
            return Vec::new();
        }
        vec![AppEvent::toast(
            "Connection Accepted",
            "You can now message this member",
        )]
    }

    /// Record a connection accepted elsewhere (the notification feed).
    pub fn mark_connected(&mut self, member_id: &str) -> bool {
        match self.members.iter_mut().find(|member| member.id == member_id) {
            Some(member) => {
                member.status = ConnectionStatus::Connected;
                true
            }
            None => false,
        }
    }

    pub fn message(&self, member_id: &str) -> Vec<AppEvent> {
        match self.member(member_id) {
            Some(member) if member.status == ConnectionStatus::Connected => {
                vec![AppEvent::OpenConversationWith(member.id.clone())]
            }
            _ => Vec::new(),
        }
    }

    fn transition(&mut self, member_id: &str, from: ConnectionStatus, to: ConnectionStatus) -> bool {
        let Some(member) = self.members.iter_mut().find(|member| member.id == member_id) else {
            log::warn!("Unknown member `{member_id}`");
            return false;
        };
        if member.status != from {
            log::debug!(
                "Ignoring {:?} -> {:?} for {member_id}: status is {:?}",
                from,
                to,
                member.status
            );
            return false;
        }
        member.status = to;
        log::info!("Member {member_id} is now {to:?}");
        true
    }
}

fn toggle(selection: &mut Vec<String>, value: &str) {
    if let Some(index) = selection.iter().position(|v| v == value) {
        selection.remove(index);
    } else {
        selection.push(value.to_string());
    }
}

/// Any-of match; an empty selection matches everything.
fn matches_any(values: &[String], selected: &[String]) -> bool {
    selected.is_empty() || values.iter().any(|value| selected.contains(value))
}
