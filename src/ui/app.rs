use chrono::{Local, Utc};
use eframe::egui;

use crate::common::{Page, UiCommand};
use crate::config::AppConfig;
use crate::messaging::view;

use super::components::{
    chat_area, community, conversation_list, home, input_bar, nav_bar, notifications, toasts,
};
use super::state::AppState;

pub struct NexusApp {
    state: AppState,
}

impl NexusApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self {
            state: AppState::from_config(config, Utc::now()),
        }
    }

    fn apply_commands(&mut self, commands: Vec<UiCommand>) {
        let now = Utc::now();
        for command in commands {
            log::debug!("Applying {command:?}");
            self.state.apply(command, now);
        }
    }

    fn render_messages(&self, ctx: &egui::Context, commands: &mut Vec<UiCommand>) {
        let now = Utc::now();
        let messaging = &self.state.messaging;

        egui::SidePanel::left("conversation_list")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                let rows = view::conversation_list(messaging, now, &Local);
                conversation_list::render(ui, &rows, commands);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let thread = view::thread(messaging, now, &Local);
            if !chat_area::render(ui, &thread) {
                return;
            }

            ui.separator();
            let mut draft = messaging.draft().to_string();
            let actions = input_bar::render(ui, &mut draft);
            if actions.edited {
                commands.push(UiCommand::SetDraft(draft));
            }
            if actions.submitted {
                commands.push(UiCommand::SubmitDraft);
            }
        });
    }
}

impl eframe::App for NexusApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.toasts.prune(Utc::now());
        let mut commands = Vec::new();

        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            nav_bar::render(
                ui,
                self.state.page,
                self.state.feed.unread_count(),
                &mut commands,
            );
        });

        match self.state.page {
            Page::Home => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    home::render(ui, &self.state, &mut commands);
                });
            }
            Page::Community => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    community::render(ui, &self.state.directory, &mut commands);
                });
            }
            Page::Notifications => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    notifications::render(ui, &self.state.feed, Utc::now(), &mut commands);
                });
            }
            Page::Messages => self.render_messages(ctx, &mut commands),
        }

        toasts::render(ctx, &self.state.toasts);
        self.apply_commands(commands);

        if !self.state.toasts.toasts().is_empty() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
