use eframe::egui;

use crate::common::{CommunityTab, ConnectionStatus, Member, UiCommand};
use crate::community::{Directory, INTERESTS, NO_MATCHES_HINT, PROJECTS};

pub fn render(ui: &mut egui::Ui, directory: &Directory, commands: &mut Vec<UiCommand>) {
    ui.heading("Community");
    ui.label(
        egui::RichText::new("Connect with colleagues based on shared interests and projects.")
            .weak(),
    );
    ui.separator();

    ui.columns(2, |columns| {
        render_filters(&mut columns[0], directory, commands);
        render_members(&mut columns[1], directory, commands);
    });
}

fn render_filters(ui: &mut egui::Ui, directory: &Directory, commands: &mut Vec<UiCommand>) {
    ui.label(egui::RichText::new("FILTER BY INTERESTS").small().strong());
    ui.horizontal_wrapped(|ui| {
        for interest in INTERESTS {
            if ui
                .selectable_label(directory.is_interest_selected(interest), interest)
                .clicked()
            {
                commands.push(UiCommand::ToggleInterest(interest.to_string()));
            }
        }
    });

    ui.add_space(12.0);
    ui.label(egui::RichText::new("FILTER BY PROJECTS").small().strong());
    ui.horizontal_wrapped(|ui| {
        for project in PROJECTS {
            if ui
                .selectable_label(directory.is_project_selected(project), project)
                .clicked()
            {
                commands.push(UiCommand::ToggleProject(project.to_string()));
            }
        }
    });
}

fn render_members(ui: &mut egui::Ui, directory: &Directory, commands: &mut Vec<UiCommand>) {
    ui.horizontal(|ui| {
        for (tab, label) in [
            (CommunityTab::All, "All Members"),
            (CommunityTab::Network, "My Network"),
            (CommunityTab::Pending, "Pending"),
        ] {
            if ui.selectable_label(directory.tab() == tab, label).clicked() {
                commands.push(UiCommand::SelectCommunityTab(tab));
            }
        }
    });
    ui.separator();

    let members = directory.filtered();
    if members.is_empty() {
        ui.label(egui::RichText::new(NO_MATCHES_HINT).weak());
        if directory.has_filters() && ui.link("Clear all filters").clicked() {
            commands.push(UiCommand::ClearFilters);
        }
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for member in members {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                render_member(ui, member, commands);
            });
            ui.add_space(6.0);
        }
    });
}

fn render_member(ui: &mut egui::Ui, member: &Member, commands: &mut Vec<UiCommand>) {
    ui.label(egui::RichText::new(&member.name).strong());
    ui.label(egui::RichText::new(format!("{} • {}", member.role, member.department)).weak());

    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new("INTERESTS").small());
        for interest in &member.interests {
            ui.label(egui::RichText::new(interest).small().italics());
        }
    });
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new("PROJECTS").small());
        for project in &member.projects {
            ui.label(egui::RichText::new(project).small().italics());
        }
    });

    let member_id = member.id.clone();
    match member.status {
        ConnectionStatus::None => {
            if ui.button("Connect").clicked() {
                commands.push(UiCommand::Connect { member_id });
            }
        }
        ConnectionStatus::Pending => {
            if ui.button("Accept Request").clicked() {
                commands.push(UiCommand::AcceptMember { member_id });
            }
        }
        ConnectionStatus::Connected => {
            if ui.button("Message").clicked() {
                commands.push(UiCommand::MessageMember { member_id });
            }
        }
    }
}
