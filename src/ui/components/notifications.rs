use chrono::{DateTime, Utc};
use eframe::egui;

use crate::common::{FeedTab, Notification, NotificationKind, UiCommand};
use crate::messaging::time_format::format_elapsed;
use crate::notifications::Feed;

pub fn render(
    ui: &mut egui::Ui,
    feed: &Feed,
    now: DateTime<Utc>,
    commands: &mut Vec<UiCommand>,
) {
    ui.horizontal(|ui| {
        ui.heading("Notifications");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(feed.unread_count() > 0, egui::Button::new("Mark all as read"))
                .clicked()
            {
                commands.push(UiCommand::MarkAllAsRead);
            }
        });
    });
    ui.label(
        egui::RichText::new("Stay updated on connection requests and important updates.").weak(),
    );
    ui.separator();

    ui.horizontal(|ui| {
        if ui.selectable_label(feed.tab() == FeedTab::All, "All").clicked() {
            commands.push(UiCommand::SelectFeedTab(FeedTab::All));
        }
        let unread = format!("Unread ({})", feed.unread_count());
        if ui.selectable_label(feed.tab() == FeedTab::Unread, unread).clicked() {
            commands.push(UiCommand::SelectFeedTab(FeedTab::Unread));
        }
    });
    ui.separator();

    let visible = feed.visible();
    if visible.is_empty() {
        let hint = match feed.tab() {
            FeedTab::All => "No notifications",
            FeedTab::Unread => "You're all caught up",
        };
        ui.label(egui::RichText::new(hint).weak());
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for notification in visible {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                render_notification(ui, notification, now, commands);
            });
            ui.add_space(6.0);
        }
    });
}

fn render_notification(
    ui: &mut egui::Ui,
    notification: &Notification,
    now: DateTime<Utc>,
    commands: &mut Vec<UiCommand>,
) {
    let (icon, color) = match notification.kind {
        NotificationKind::Connection => ("👤", egui::Color32::LIGHT_BLUE),
        NotificationKind::Message => ("🔔", egui::Color32::from_rgb(59, 130, 246)),
        NotificationKind::Project => ("🔔", egui::Color32::GREEN),
        NotificationKind::System => ("🔔", egui::Color32::from_rgb(168, 85, 247)),
    };

    ui.horizontal(|ui| {
        ui.colored_label(color, icon);
        let title = egui::RichText::new(&notification.title);
        ui.label(if notification.read { title } else { title.strong() });
        if !notification.read {
            ui.colored_label(egui::Color32::LIGHT_BLUE, "●");
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(format_elapsed(notification.timestamp, now)).small().weak());
        });
    });
    ui.label(egui::RichText::new(&notification.description).weak());

    ui.horizontal(|ui| {
        if notification.is_answerable() && notification.action_required {
            if ui.button("Accept").clicked() {
                commands.push(UiCommand::AcceptConnection(notification.id.clone()));
            }
            if ui.button("Decline").clicked() {
                commands.push(UiCommand::DeclineConnection(notification.id.clone()));
            }
        }
        if !notification.read && ui.small_button("Mark as read").clicked() {
            commands.push(UiCommand::MarkAsRead(notification.id.clone()));
        }
    });
}
