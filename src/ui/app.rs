//! Main application UI.

use std::time::{Duration, Instant};

use eframe::egui::{self, Align, Layout};
use tokio::sync::mpsc;

use crate::api::{EmployeeApi, EmployeeGateway};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::form::{EditSession, LoadTicket};
use crate::models::EmployeeRecord;
use crate::session::CurrentUser;
use crate::submit::{self, SaveOutcome};
use crate::validate;

use super::components::colors;
use super::{edit_panel, open_panel};

/// Current panel being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Open,
    Edit,
}

/// Messages from async tasks to UI.
///
/// Each message carries the session epoch it was spawned under; the session
/// drops anything stamped by an epoch it no longer accepts.
pub enum UiMessage {
    RecordLoaded {
        epoch: u64,
        record: EmployeeRecord,
    },
    LoadFailed {
        epoch: u64,
        error: AppError,
    },
    SaveFinished {
        epoch: u64,
        outcome: SaveOutcome,
        and_return: bool,
    },
}

/// A transient modal notice, dismissed with its OK button.
#[derive(Clone)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

/// Main application state.
pub struct App {
    // Runtime and portal client
    pub rt: tokio::runtime::Runtime,
    pub api: EmployeeApi,

    // Message channel for async communication
    pub tx: mpsc::UnboundedSender<UiMessage>,
    pub rx: mpsc::UnboundedReceiver<UiMessage>,

    // Navigation
    pub current_panel: Panel,

    // The one edit session
    pub session: EditSession,
    pub id_input: String,

    // Dialogs
    pub error_notice: Option<Notice>,
    pub success_notice: Option<Notice>,

    // Configuration and identity
    pub config: AppConfig,
    pub user: Option<CurrentUser>,
}

impl App {
    pub fn new(
        config: AppConfig,
        user: Option<CurrentUser>,
        rt: tokio::runtime::Runtime,
        initial_id: Option<i64>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let api = EmployeeApi::new(&config.api.base_url, config.api.timeout_secs);

        let mut app = Self {
            rt,
            api,
            tx,
            rx,
            current_panel: Panel::default(),
            session: EditSession::new(),
            id_input: initial_id.map(|id| id.to_string()).unwrap_or_default(),
            error_notice: None,
            success_notice: None,
            config,
            user,
        };

        // Jump straight into the edit screen when launched with an id.
        if initial_id.is_some() {
            app.open_employee(initial_id);
        }

        app
    }

    /// Show a transient error notice.
    pub fn notify_error(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.error_notice = Some(Notice {
            title: title.into(),
            body: body.into(),
        });
    }

    /// Show a transient success notice.
    pub fn notify_success(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.success_notice = Some(Notice {
            title: title.into(),
            body: body.into(),
        });
    }

    /// Open an edit session for the given employee.
    ///
    /// Without an id the session lands in its terminal no-id state: the form
    /// shows empty and disabled behind an error notice, nothing is fetched.
    pub fn open_employee(&mut self, id: Option<i64>) {
        self.current_panel = Panel::Edit;
        match self.session.begin(id) {
            Ok(ticket) => self.spawn_fetch(ticket),
            Err(e) => self.notify_error("Error", e.user_message()),
        }
    }

    /// Re-fetch the current employee, discarding local edits.
    pub fn reload(&mut self) {
        let id = self.session.employee_id;
        self.open_employee(id);
    }

    /// Leave the edit screen, dropping the session and any open notices.
    pub fn close_edit(&mut self) {
        self.session.close();
        self.error_notice = None;
        self.success_notice = None;
        self.current_panel = Panel::Open;
    }

    /// Validate and, if clean, submit the draft.
    pub fn save_employee(&mut self, and_return: bool) {
        let violations = validate::validate(&self.session.draft);
        if !violations.is_empty() {
            self.notify_error("Validation Error", violations.join("\n"));
            return;
        }

        // None means the controls were disabled anyway (no id, load or
        // save still in flight).
        let Some(ticket) = self.session.begin_submit() else {
            return;
        };

        let payload = submit::build_payload(&self.session.draft);
        let api = self.api.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            let outcome = submit::save_employee(&api, ticket.id, &payload).await;
            let _ = tx.send(UiMessage::SaveFinished {
                epoch: ticket.epoch,
                outcome,
                and_return,
            });
        });
    }

    fn spawn_fetch(&mut self, ticket: LoadTicket) {
        let api = self.api.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match api.fetch(ticket.id).await {
                Ok(record) => {
                    let _ = tx.send(UiMessage::RecordLoaded {
                        epoch: ticket.epoch,
                        record,
                    });
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::LoadFailed {
                        epoch: ticket.epoch,
                        error: e,
                    });
                }
            }
        });
    }

    /// Poll async operation results.
    fn poll_async_results(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                UiMessage::RecordLoaded { epoch, record } => {
                    self.session.hydrate(epoch, &record);
                }
                UiMessage::LoadFailed { epoch, error } => {
                    if self.session.load_failed(epoch) {
                        tracing::error!("Failed to load employee: {error}");
                        self.notify_error("Error", "Failed to fetch employee data");
                    }
                }
                UiMessage::SaveFinished {
                    epoch,
                    outcome,
                    and_return,
                } => {
                    // Stale means the session was reopened while the save
                    // was in flight; its result belongs to nobody now.
                    if !self.session.finish_submit(epoch) {
                        continue;
                    }
                    match outcome {
                        SaveOutcome::Saved => {
                            self.notify_success("Success!", "Employee updated successfully");
                            if and_return {
                                self.session.schedule_return(Instant::now());
                            }
                        }
                        SaveOutcome::Failed { title, body } => {
                            self.notify_error(title, body);
                        }
                    }
                }
            }
        }
    }

    /// Render status bar (display only, no interaction).
    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(28.0)
            .show(ctx, |ui| {
                ui.disable();
                ui.horizontal(|ui| {
                    match &self.user {
                        Some(user) => {
                            ui.colored_label(colors::SUCCESS, user.status_label());
                        }
                        None => {
                            ui.colored_label(colors::NEUTRAL, "Not signed in");
                        }
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.colored_label(colors::NEUTRAL, self.api.base_url());
                    });
                });
            });
    }

    /// Render modal dialogs (error, success).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(notice) = self.error_notice.clone() {
            egui::Window::new(notice.title.as_str())
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, notice.body.as_str());
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_notice = None;
                    }
                });
        }

        if let Some(notice) = self.success_notice.clone() {
            egui::Window::new(notice.title.as_str())
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::SUCCESS, notice.body.as_str());
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.success_notice = None;
                    }
                });
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async results
        self.poll_async_results();

        // Fire the delayed return once its delay has elapsed.
        if self.session.take_due_return(Instant::now()) {
            self.close_edit();
        }

        // Request repaint during async operations
        if self.session.initial_loading || self.session.submitting {
            ctx.request_repaint();
        }
        if self.session.return_pending() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // Status bar
        self.show_status_bar(ctx);

        // Modal dialogs
        self.show_dialogs(ctx);

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| match self.current_panel {
            Panel::Open => {
                if let open_panel::Action::Open(id) = open_panel::show(self, ui) {
                    self.open_employee(id);
                }
            }
            Panel::Edit => match edit_panel::show(self, ui) {
                edit_panel::Action::None => {}
                edit_panel::Action::Back => {
                    self.close_edit();
                }
                edit_panel::Action::Reload => {
                    self.reload();
                }
                edit_panel::Action::Save { and_return } => {
                    self.save_employee(and_return);
                }
            },
        });
    }
}
