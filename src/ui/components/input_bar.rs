use eframe::egui;

#[derive(Default)]
pub struct InputActions {
    pub edited: bool,
    pub submitted: bool,
}

/// Composer row. Clearing the buffer after a send is left to the caller.
pub fn render(ui: &mut egui::Ui, draft: &mut String) -> InputActions {
    let mut actions = InputActions::default();
    ui.horizontal(|ui| {
        let width = ui.available_width() - 60.0;
        let response = ui.add(
            egui::TextEdit::singleline(draft)
                .hint_text("Type a message...")
                .desired_width(width),
        );
        actions.edited = response.changed();

        if ui.button("Send").clicked() {
            actions.submitted = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            actions.submitted = true;
            response.request_focus();
        }
    });

    actions
}
