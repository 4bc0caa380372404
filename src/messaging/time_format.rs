//! Human-readable timestamp labels.
//!
//! Every function takes `now` explicitly so labels are reproducible.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

/// Label for a timestamp in the conversation list and thread.
///
/// Same calendar day renders the time of day, the previous calendar day
/// renders `Yesterday`, anything else renders month and day. Calendar days
/// are taken in the zone carried by the arguments.
pub fn format_relative<Tz>(timestamp: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let days = now
        .date_naive()
        .signed_duration_since(timestamp.date_naive())
        .num_days();

    match days {
        0 => timestamp.format("%H:%M").to_string(),
        1 => "Yesterday".to_string(),
        _ => timestamp.format("%b %-d").to_string(),
    }
}

/// Coarse "time ago" label used by the notification feed.
pub fn format_elapsed(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp).max(chrono::Duration::zero());
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 60 {
        format!("{minutes} min{} ago", plural(minutes))
    } else if hours < 24 {
        format!("{hours} hour{} ago", plural(hours))
    } else {
        format!("{days} day{} ago", plural(days))
    }
}

fn plural(count: i64) -> &'static str {
    if count == 1 { "" } else { "s" }
}
