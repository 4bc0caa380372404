use eframe::egui;

use crate::common::UiCommand;
use crate::messaging::view::ConversationRow;

pub fn render(ui: &mut egui::Ui, rows: &[ConversationRow], commands: &mut Vec<UiCommand>) {
    ui.heading("Conversations");
    ui.separator();

    if rows.is_empty() {
        ui.label(egui::RichText::new("No conversations yet").weak());
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for row in rows {
            let response = ui
                .selectable_label(row.is_active, egui::RichText::new(&row.participant_name).strong())
                .on_hover_text(&row.preview);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(truncate(&row.preview, 36)).weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(&row.time_label).small().weak());
                });
            });
            ui.add_space(6.0);

            if response.clicked() && !row.is_active {
                commands.push(UiCommand::SelectConversation(row.id.clone()));
            }
        }
    });
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max_chars).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn test_truncate_on_char_boundary() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("héllo wörld", 5), "héllo…");
    }
}
