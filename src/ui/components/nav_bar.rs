use eframe::egui;

use crate::common::{Page, UiCommand};

pub fn render(ui: &mut egui::Ui, current: Page, unread: usize, commands: &mut Vec<UiCommand>) {
    ui.horizontal(|ui| {
        ui.heading("NetworkNexus");
        ui.add_space(24.0);

        for page in Page::ALL {
            let label = match page {
                Page::Notifications if unread > 0 => format!("{} ({unread})", page.label()),
                _ => page.label().to_string(),
            };
            if ui.selectable_label(current == page, label).clicked() && current != page {
                commands.push(UiCommand::Navigate(page));
            }
        }
    });
}
