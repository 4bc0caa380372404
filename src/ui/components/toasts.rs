use eframe::egui;

use crate::ui::state::ToastQueue;

pub fn render(ctx: &egui::Context, toasts: &ToastQueue) {
    if toasts.toasts().is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toast_area"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
        .show(ctx, |ui| {
            for toast in toasts.toasts() {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(egui::RichText::new(&toast.title).strong());
                    if !toast.description.is_empty() {
                        ui.label(&toast.description);
                    }
                });
                ui.add_space(6.0);
            }
        });
}
