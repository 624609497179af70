//! Employee record edit form.

use eframe::egui::{self, Align, Layout, ScrollArea, Ui};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, CHECK, FLOPPY_DISK};

use crate::departments;
use crate::form::DraftPatch;
use crate::models::{Gender, Role};

use super::app::App;
use super::components::{back_button, colors, panel_header, primary_button_with_icon, styled_button_with_icon};

/// Action requested by the edit panel.
pub enum Action {
    None,
    Back,
    Reload,
    Save { and_return: bool },
}

/// Parse date input flexibly, accepting multiple formats.
fn parse_flexible_date(input: &str) -> Option<chrono::NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    for fmt in &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"] {
        if let Ok(date) = chrono::NaiveDate::parse_from_str(input, fmt) {
            return Some(date);
        }
    }
    None
}

/// Show the edit panel.
pub fn show(app: &mut App, ui: &mut Ui) -> Action {
    let mut action = Action::None;

    if back_button(ui) {
        action = Action::Back;
    }

    let title = match app.session.employee_id {
        Some(id) => format!("Edit Employee #{id}"),
        None => "Edit Employee".to_string(),
    };
    panel_header(ui, &title);

    if app.session.initial_loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading employee record...");
        });
        return action;
    }

    // Toolbar
    ui.horizontal(|ui| {
        let can_reload = app.session.employee_id.is_some() && !app.session.submitting;
        ui.add_enabled_ui(can_reload, |ui| {
            if styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Reload").clicked() {
                action = Action::Reload;
            }
        });
    });

    ui.add_space(10.0);

    show_form(app, ui);

    ui.add_space(15.0);
    ui.separator();
    ui.add_space(10.0);

    ui.horizontal(|ui| {
        if app.session.submitting {
            ui.spinner();
            ui.label("Saving...");
        } else if app.session.return_pending() {
            ui.weak("Returning...");
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.add_enabled_ui(app.session.can_submit(), |ui| {
                if primary_button_with_icon(ui, CHECK, "Save & Return").clicked() {
                    action = Action::Save { and_return: true };
                }
                ui.add_space(6.0);
                if styled_button_with_icon(ui, FLOPPY_DISK, "Save Changes").clicked() {
                    action = Action::Save { and_return: false };
                }
            });
        });
    });

    action
}

fn show_form(app: &mut App, ui: &mut Ui) {
    ScrollArea::vertical().id_salt("edit_form_scroll").show(ui, |ui| {
        egui::Grid::new("edit_form_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Full Name:");
                ui.add(egui::TextEdit::singleline(&mut app.session.draft.name).desired_width(250.0));
                ui.end_row();

                ui.label("Email:");
                ui.add(egui::TextEdit::singleline(&mut app.session.draft.email).desired_width(250.0));
                ui.end_row();

                ui.label("Gender:");
                ui.horizontal(|ui| {
                    for gender in [Gender::Male, Gender::Female] {
                        if ui
                            .radio(app.session.draft.gender == gender, gender.label())
                            .clicked()
                        {
                            app.session.draft.apply(DraftPatch::Gender(gender));
                        }
                    }
                });
                ui.end_row();

                date_field(ui, "Date of Birth:", &mut app.session.draft.date_of_birth);
                date_field(ui, "Join Date:", &mut app.session.draft.join_date);

                ui.label("Mobile Number:");
                ui.add(egui::TextEdit::singleline(&mut app.session.draft.contact_number).desired_width(160.0));
                ui.end_row();

                ui.label("Aadhaar Number:");
                ui.add(egui::TextEdit::singleline(&mut app.session.draft.aadhaar_number).desired_width(160.0));
                ui.end_row();

                ui.label("Account Number:");
                ui.add(egui::TextEdit::singleline(&mut app.session.draft.account_number).desired_width(160.0));
                ui.end_row();

                ui.label("Department:");
                egui::ComboBox::from_id_salt("edit_department")
                    .width(220.0)
                    .selected_text(pick_label(&app.session.draft.department))
                    .show_ui(ui, |ui| {
                        for dept in departments::departments() {
                            if ui
                                .selectable_label(app.session.draft.department == dept, dept)
                                .clicked()
                            {
                                app.session.draft.apply(DraftPatch::Department(dept.to_string()));
                            }
                        }
                    });
                ui.end_row();

                ui.label("Designation:");
                ui.add_enabled_ui(!app.session.draft.department.is_empty(), |ui| {
                    egui::ComboBox::from_id_salt("edit_designation")
                        .width(220.0)
                        .selected_text(pick_label(&app.session.draft.designation))
                        .show_ui(ui, |ui| {
                            for title in app.session.draft.available_designations() {
                                if ui
                                    .selectable_label(app.session.draft.designation == *title, *title)
                                    .clicked()
                                {
                                    app.session.draft.apply(DraftPatch::Designation(title.to_string()));
                                }
                            }
                        });
                });
                ui.end_row();

                ui.label("Previous Company:");
                ui.add(egui::TextEdit::singleline(&mut app.session.draft.previous_company).desired_width(250.0));
                ui.end_row();

                ui.label("PF Number:");
                ui.add(egui::TextEdit::singleline(&mut app.session.draft.pf_number).desired_width(160.0));
                ui.end_row();

                ui.label("Salary:");
                ui.add(
                    egui::TextEdit::singleline(&mut app.session.draft.salary)
                        .desired_width(120.0)
                        .hint_text("e.g. 50000"),
                );
                ui.end_row();

                ui.label("Current Address:");
                ui.add(egui::TextEdit::multiline(&mut app.session.draft.address).desired_rows(2).desired_width(300.0));
                ui.end_row();

                ui.label("Permanent Address:");
                ui.add(
                    egui::TextEdit::multiline(&mut app.session.draft.permanent_address)
                        .desired_rows(2)
                        .desired_width(300.0)
                        .hint_text("Same as current if left blank"),
                );
                ui.end_row();

                ui.label("Role:");
                egui::ComboBox::from_id_salt("edit_role")
                    .width(120.0)
                    .selected_text(app.session.draft.role.label())
                    .show_ui(ui, |ui| {
                        for role in [Role::User, Role::Admin] {
                            if ui
                                .selectable_label(app.session.draft.role == role, role.label())
                                .clicked()
                            {
                                app.session.draft.apply(DraftPatch::Role(role));
                            }
                        }
                    });
                ui.end_row();

                ui.label("Active:");
                let mut active = app.session.draft.active;
                if ui.checkbox(&mut active, "").changed() {
                    app.session.draft.apply(DraftPatch::Active(active));
                }
                ui.end_row();
            });
    });
}

fn pick_label(value: &str) -> &str {
    if value.is_empty() { "Select..." } else { value }
}

/// Date entry with parse feedback. The value stays text; the parse is
/// advisory only and never rewrites what was typed.
fn date_field(ui: &mut Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.vertical(|ui| {
        let valid = value.trim().is_empty() || parse_flexible_date(value).is_some();
        let text_color = if valid {
            ui.visuals().text_color()
        } else {
            colors::ERROR
        };

        ui.add(
            egui::TextEdit::singleline(value)
                .desired_width(140.0)
                .hint_text("YYYY-MM-DD")
                .text_color(text_color),
        );

        if !valid {
            ui.colored_label(colors::ERROR, "Invalid date format");
        } else {
            ui.weak("Format: YYYY-MM-DD");
        }
    });
    ui.end_row();
}
