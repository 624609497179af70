//! Entry panel: pick which employee record to edit.

use eframe::egui::{self, Ui};
use egui_phosphor::regular::FOLDER_OPEN;

use super::app::App;
use super::components::{panel_header, primary_button_with_icon};

/// Action requested by the open panel.
pub enum Action {
    None,
    /// Open an edit session. `None` deliberately opens without an id and
    /// lands in the terminal no-id state.
    Open(Option<i64>),
}

/// Show the open panel.
pub fn show(app: &mut App, ui: &mut Ui) -> Action {
    let mut action = Action::None;

    panel_header(ui, "Open Employee Record");

    ui.label("Enter the ID of the employee record to edit.");
    ui.add_space(10.0);

    ui.horizontal(|ui| {
        ui.label("Employee ID:");
        let response = ui.add(
            egui::TextEdit::singleline(&mut app.id_input)
                .desired_width(120.0)
                .hint_text("e.g. 42"),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.add_space(10.0);

        if primary_button_with_icon(ui, FOLDER_OPEN, "Open").clicked() || submitted {
            action = open_action(app);
        }
    });

    action
}

fn open_action(app: &mut App) -> Action {
    let input = app.id_input.trim().to_string();
    if input.is_empty() {
        return Action::Open(None);
    }
    match input.parse::<i64>() {
        Ok(id) => Action::Open(Some(id)),
        Err(_) => {
            app.notify_error("Error", "Employee ID must be a number");
            Action::None
        }
    }
}
