use eframe::egui;

use crate::messaging::view::{EMPTY_THREAD_HINT, ThreadView};

/// Returns false when there is no thread to compose into.
pub fn render(ui: &mut egui::Ui, thread: &ThreadView) -> bool {
    let ThreadView::Thread {
        participant_name,
        messages,
        ..
    } = thread
    else {
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new(EMPTY_THREAD_HINT).weak());
        });
        return false;
    };

    ui.heading(participant_name);
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .max_height((ui.available_height() - 48.0).max(0.0))
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                let layout = if message.is_own {
                    egui::Layout::top_down(egui::Align::Max)
                } else {
                    egui::Layout::top_down(egui::Align::Min)
                };

                ui.with_layout(layout, |ui| {
                    let fill = if message.is_own {
                        ui.visuals().selection.bg_fill
                    } else {
                        ui.visuals().faint_bg_color
                    };
                    egui::Frame::group(ui.style()).fill(fill).show(ui, |ui| {
                        ui.set_max_width(ui.available_width() * 0.8);
                        ui.label(&message.text);
                        ui.label(egui::RichText::new(&message.time_label).small().weak());
                    });
                });
                ui.add_space(4.0);
            }
        });

    true
}
