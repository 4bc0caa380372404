use eframe::egui;

use crate::common::{DashboardTab, MemberPreview, UiCommand};
use crate::dashboard::Stats;
use crate::ui::state::AppState;

pub fn render(ui: &mut egui::Ui, state: &AppState, commands: &mut Vec<UiCommand>) {
    let dashboard = &state.dashboard;

    ui.heading("Welcome back");
    ui.label(egui::RichText::new("Here's what's happening in your network.").weak());
    ui.separator();

    ui.horizontal(|ui| {
        for (tab, label) in [
            (DashboardTab::Overview, "Overview"),
            (DashboardTab::Profile, "My Profile"),
        ] {
            if ui.selectable_label(dashboard.tab() == tab, label).clicked() {
                commands.push(UiCommand::SelectDashboardTab(tab));
            }
        }
    });
    ui.separator();

    match dashboard.tab() {
        DashboardTab::Overview => render_overview(ui, state, commands),
        DashboardTab::Profile => render_profile(ui, state),
    }
}

fn render_overview(ui: &mut egui::Ui, state: &AppState, commands: &mut Vec<UiCommand>) {
    let dashboard = &state.dashboard;
    let stats: Stats = dashboard.stats(&state.feed, &state.directory);

    ui.columns(3, |columns| {
        stat_card(&mut columns[0], "Pending Requests", stats.pending_requests);
        stat_card(&mut columns[1], "Active Projects", stats.active_projects);
        stat_card(&mut columns[2], "Connections", stats.connections);
    });
    ui.add_space(12.0);

    ui.label(egui::RichText::new("Active Projects").strong());
    for project in dashboard.projects() {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&project.name).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(&project.due_in).small());
                });
            });
            ui.label(egui::RichText::new(&project.description).weak());
            ui.label(egui::RichText::new(format!("{} members", project.members)).small());
            ui.add(
                egui::ProgressBar::new(f32::from(project.progress) / 100.0).show_percentage(),
            );
        });
    }
    ui.add_space(12.0);

    ui.columns(2, |columns| {
        let pending = dashboard.pending_connections(&state.feed, &state.directory);
        preview_list(&mut columns[0], "Pending Connections", &pending);
        if !pending.is_empty() && columns[0].link("View all").clicked() {
            commands.push(UiCommand::Navigate(crate::common::Page::Notifications));
        }

        preview_list(
            &mut columns[1],
            "Recent Connections",
            dashboard.recent_connections(),
        );
        if columns[1].link("View network").clicked() {
            commands.push(UiCommand::Navigate(crate::common::Page::Community));
        }
    });
}

fn stat_card(ui: &mut egui::Ui, label: &str, value: usize) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(label).weak());
        ui.heading(value.to_string());
    });
}

fn preview_list(ui: &mut egui::Ui, title: &str, members: &[MemberPreview]) {
    ui.label(egui::RichText::new(title).strong());
    if members.is_empty() {
        ui.label(egui::RichText::new("Nothing here yet").weak());
        return;
    }
    for member in members {
        ui.horizontal(|ui| {
            ui.label(&member.name);
            ui.label(egui::RichText::new(&member.role).small().weak());
        });
    }
}

fn render_profile(ui: &mut egui::Ui, state: &AppState) {
    let profile = state.dashboard.profile();

    egui::Grid::new("profile_grid")
        .num_columns(2)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            for (label, value) in [
                ("Email", &profile.email),
                ("Department", &profile.department),
                ("Joined", &profile.joined),
            ] {
                ui.label(egui::RichText::new(label).weak());
                ui.label(value);
                ui.end_row();
            }
        });
    ui.add_space(12.0);

    ui.label(egui::RichText::new("Interests").strong());
    ui.horizontal_wrapped(|ui| {
        for interest in &profile.interests {
            ui.label(egui::RichText::new(interest).italics());
        }
    });
    ui.add_space(8.0);

    ui.label(egui::RichText::new("Skills").strong());
    ui.horizontal_wrapped(|ui| {
        for skill in &profile.skills {
            ui.label(egui::RichText::new(skill).italics());
        }
    });
}
