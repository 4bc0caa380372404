use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{LOCAL_USER_ID, Page};
use crate::messaging::ConversationOrder;

pub const DEFAULT_CONFIG_PATH: &str = "config/nexus.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub local_user_id: String,
    pub member_count: usize,
    /// Fixed seed for the generated directory; random when unset.
    pub member_seed: Option<u64>,
    /// JSON file replacing the built-in conversations.
    pub seed_file: Option<String>,
    pub conversation_order: ConversationOrder,
    pub toast_seconds: u64,
    pub start_page: Page,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            local_user_id: LOCAL_USER_ID.to_string(),
            member_count: 12,
            member_seed: None,
            seed_file: None,
            conversation_order: ConversationOrder::Insertion,
            toast_seconds: 3,
            start_page: Page::Home,
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content).unwrap_or_else(|err| {
            log::warn!("Failed to parse config file {}: {err}", path.display());
            AppConfig::default()
        }),
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

pub fn parse_config(content: &str) -> serde_json::Result<AppConfig> {
    serde_json::from_str::<AppConfig>(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.local_user_id, "current-user");
        assert_eq!(config.member_count, 12);
        assert_eq!(config.conversation_order, ConversationOrder::Insertion);
        assert_eq!(config.toast_seconds, 3);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config =
            parse_config(r#"{ "conversation_order": "recency", "member_seed": 9 }"#).unwrap();
        assert_eq!(config.conversation_order, ConversationOrder::Recency);
        assert_eq!(config.member_seed, Some(9));
        assert_eq!(config.member_count, 12);
        assert_eq!(config.start_page, Page::Home);
    }

    #[test]
    fn test_start_page_and_bad_order() {
        let config = parse_config(r#"{ "start_page": "messages" }"#).unwrap();
        assert_eq!(config.start_page, Page::Messages);
        assert!(parse_config(r#"{ "conversation_order": "alphabetical" }"#).is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        assert_eq!(load_config("no/such/nexus.json"), AppConfig::default());
    }
}
