//! Mock data the application starts with.

pub mod file;
pub mod members;

use chrono::{DateTime, Duration, Utc};

use crate::common::{
    LOCAL_USER_ID, MemberPreview, Notification, NotificationKind, Participant, Profile, Project,
    default_avatar,
};

pub use file::{SeedConversation, SeedFile, SeedMessage};
pub use members::generate_members;

fn participant(id: &str, name: &str) -> Participant {
    Participant {
        id: id.to_string(),
        name: name.to_string(),
        avatar: default_avatar(),
    }
}

fn seed_message(id: &str, sender_id: &str, text: &str, minutes_ago: i64) -> SeedMessage {
    SeedMessage {
        id: id.to_string(),
        sender_id: sender_id.to_string(),
        text: text.to_string(),
        minutes_ago,
    }
}

pub fn builtin_seed() -> SeedFile {
    const HOUR: i64 = 60;
    const DAY: i64 = 24 * HOUR;

    SeedFile {
        conversations: vec![
            SeedConversation {
                id: "conv-1".to_string(),
                participant: participant("member-2", "Member 2"),
                messages: vec![
                    seed_message(
                        "msg-1",
                        "member-2",
                        "Hi there! I saw your interest in the Platform Migration project.",
                        2 * HOUR,
                    ),
                    seed_message(
                        "msg-2",
                        LOCAL_USER_ID,
                        "Hey! Yes, I've been working on that recently. Are you involved as well?",
                        HOUR,
                    ),
                    seed_message(
                        "msg-3",
                        "member-2",
                        "I just joined the team last week. I was hoping we could collaborate on the frontend components.",
                        30,
                    ),
                ],
                created_minutes_ago: None,
            },
            SeedConversation {
                id: "conv-2".to_string(),
                participant: participant("member-5", "Member 5"),
                messages: vec![
                    seed_message(
                        "msg-4",
                        LOCAL_USER_ID,
                        "Do you have time to discuss the API integration this week?",
                        2 * DAY,
                    ),
                    seed_message(
                        "msg-5",
                        "member-5",
                        "Sure, how about Thursday afternoon?",
                        DAY,
                    ),
                ],
                created_minutes_ago: None,
            },
        ],
    }
}

pub fn notifications(now: DateTime<Utc>) -> Vec<Notification> {
    let notification = |id: &str,
                        kind: NotificationKind,
                        title: &str,
                        description: &str,
                        ago: Duration,
                        read: bool,
                        user: Option<Participant>| Notification {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        description: description.to_string(),
        timestamp: now - ago,
        read,
        action_required: kind == NotificationKind::Connection,
        user,
    };

    vec![
        notification(
            "notif-1",
            NotificationKind::Connection,
            "Connection Request",
            "Member 3 wants to connect with you",
            Duration::minutes(30),
            false,
            Some(participant("member-3", "Member 3")),
        ),
        notification(
            "notif-2",
            NotificationKind::Message,
            "New Message",
            "Member 2 sent you a new message",
            Duration::hours(3),
            false,
            Some(participant("member-2", "Member 2")),
        ),
        notification(
            "notif-3",
            NotificationKind::Project,
            "Project Update",
            "You were added to the \"Platform Migration\" project",
            Duration::days(1),
            true,
            None,
        ),
        notification(
            "notif-4",
            NotificationKind::System,
            "Welcome to NetworkNexus",
            "Complete your profile to get started connecting with colleagues",
            Duration::days(2),
            true,
            None,
        ),
        notification(
            "notif-5",
            NotificationKind::Connection,
            "Connection Request",
            "Member 7 wants to connect with you",
            Duration::hours(4),
            false,
            Some(participant("member-7", "Member 7")),
        ),
    ]
}

pub fn projects() -> Vec<Project> {
    let project = |id: &str, name: &str, description: &str, members: u32, progress: u8, due_in: &str| Project {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        members,
        progress,
        due_in: due_in.to_string(),
    };

    vec![
        project(
            "proj-1",
            "Platform Migration",
            "Migrating the current platform to a new architecture",
            8,
            65,
            "5 days",
        ),
        project(
            "proj-2",
            "API Integration",
            "Implementing third-party API integrations",
            5,
            30,
            "2 weeks",
        ),
        project(
            "proj-3",
            "New Feature Development",
            "Developing new features for the product dashboard",
            4,
            10,
            "3 weeks",
        ),
    ]
}

pub fn recent_connections() -> Vec<MemberPreview> {
    [
        ("member-2", "Member 2", "Product Manager"),
        ("member-5", "Member 5", "Data Scientist"),
        ("member-8", "Member 8", "Backend Developer"),
    ]
    .into_iter()
    .map(|(id, name, role)| MemberPreview {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
    })
    .collect()
}

pub fn profile() -> Profile {
    let strings = |values: &[&str]| -> Vec<String> { values.iter().map(|v| v.to_string()).collect() };
    Profile {
        name: "You".to_string(),
        email: "user@example.com".to_string(),
        department: "Engineering".to_string(),
        joined: "January 2023".to_string(),
        interests: strings(&["UI/UX", "Front-end", "API Design", "Data Visualization"]),
        skills: strings(&[
            "JavaScript",
            "React",
            "TypeScript",
            "UI Design",
            "API Development",
        ]),
    }
}
