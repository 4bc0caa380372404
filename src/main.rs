mod common;
mod community;
mod config;
mod dashboard;
mod error;
mod messaging;
mod notifications;
mod seed;
mod ui;

use clap::Parser;
use dotenvy::dotenv;
use ui::NexusApp;

use crate::common::Page;
use crate::config::AppConfig;
use crate::messaging::ConversationOrder;

#[derive(Parser)]
#[command(
    name = "network_nexus",
    version,
    about = "NetworkNexus social networking demo"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(
        long,
        env = "NEXUS_CONFIG",
        default_value = config::DEFAULT_CONFIG_PATH,
        value_name = "FILE"
    )]
    config: String,
    /// Seed for the generated member directory
    #[arg(long, value_name = "SEED")]
    member_seed: Option<u64>,
    /// Conversation list ordering
    #[arg(long, value_enum)]
    order: Option<ConversationOrder>,
    /// Page shown at startup
    #[arg(long, value_enum)]
    page: Option<Page>,
}

impl Cli {
    fn apply_overrides(&self, mut config: AppConfig) -> AppConfig {
        if let Some(seed) = self.member_seed {
            config.member_seed = Some(seed);
        }
        if let Some(order) = self.order {
            config.conversation_order = order;
        }
        if let Some(page) = self.page {
            config.start_page = page;
        }
        config
    }
}

fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let app_config = cli.apply_overrides(config::load_config(&cli.config));
    log::info!(
        "Starting as {} with {} members, {:?} ordering",
        app_config.local_user_id,
        app_config.member_count,
        app_config.conversation_order
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_title("NetworkNexus"),
        ..Default::default()
    };

    eframe::run_native(
        "NetworkNexus",
        options,
        Box::new(move |cc| Ok(Box::new(NexusApp::new(cc, &app_config)))),
    )
}
