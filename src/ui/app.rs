//! Application shell: routing, async message plumbing, and dialogs.

use std::sync::Arc;

use chrono::{DateTime, Local};
use eframe::egui::{self, Align, Layout, RichText};
use egui_phosphor::regular::SIGN_OUT;
use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{AttendanceRecord, Member, RosterKind, SaveAttendance, SaveMember};
use crate::session::SessionStore;

use super::attendance_panel::{self, AttendanceAction, AttendanceForm, AttendancePanel};
use super::auth_screen::{self, AuthAction, AuthForm, AuthMode};
use super::dashboard;
use super::roster_panel::{self, MemberForm, RosterAction, RosterPanel};
use super::toast::Toast;

/// Top-level gate: login screen or the app shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Auth,
    Shell,
}

/// Current view inside the app shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Dashboard,
    Students,
    Teachers,
    Attendance,
}

impl Panel {
    pub const ALL: [Panel; 4] = [Panel::Dashboard, Panel::Students, Panel::Teachers, Panel::Attendance];

    /// Get the display name for the panel.
    pub fn name(&self) -> &'static str {
        match self {
            Panel::Dashboard => "Dashboard",
            Panel::Students => "Students",
            Panel::Teachers => "Teachers",
            Panel::Attendance => "Attendance",
        }
    }
}

/// List-load state machine for a panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}

/// Messages from async tasks to UI.
pub enum UiMessage {
    // Auth
    LoggedIn(String),
    Registered,
    AuthFailed(String),

    // Rosters
    RosterLoaded(RosterKind, Vec<Member>),
    RosterLoadFailed(RosterKind, String),
    /// `true` when the save was an update rather than a create.
    RosterSaved(RosterKind, bool),
    RosterDeleted(RosterKind),

    // Attendance
    AttendanceLoaded(Vec<AttendanceRecord>),
    AttendanceLoadFailed(String),
    AttendanceSaved(bool),
    AttendanceDeleted,

    // Shared
    OperationFailed(String),
    SessionExpired,
}

/// Log level for UI messages.
#[derive(Clone, Copy, Debug)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Log entry for display in the UI.
#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

/// Pending delete awaiting user confirmation.
#[derive(Clone)]
pub enum DeleteTarget {
    Roster(RosterKind, i64, String),
    Attendance(i64),
}

/// Main application state.
pub struct App {
    rt: tokio::runtime::Runtime,
    api: Arc<ApiClient>,
    session: Arc<SessionStore>,

    tx: mpsc::UnboundedSender<UiMessage>,
    rx: mpsc::UnboundedReceiver<UiMessage>,

    // Navigation
    pub screen: Screen,
    pub current_panel: Panel,

    // Screens and panels
    pub auth: AuthForm,
    pub students: RosterPanel,
    pub teachers: RosterPanel,
    pub attendance: AttendancePanel,

    // Dialogs and feedback
    pub toast: Toast,
    pub delete_target: Option<DeleteTarget>,
    pub log_messages: Vec<LogEntry>,
}

impl App {
    pub fn new(config: &AppConfig, session: Arc<SessionStore>, rt: tokio::runtime::Runtime) -> crate::error::Result<Self> {
        let api = Arc::new(ApiClient::new(&config.api, session.clone())?);
        let (tx, rx) = mpsc::unbounded_channel();

        let screen = if session.is_logged_in() {
            tracing::info!("Stored session found, opening app shell");
            Screen::Shell
        } else {
            Screen::Auth
        };

        Ok(Self {
            rt,
            api,
            session,
            tx,
            rx,
            screen,
            current_panel: Panel::default(),
            auth: AuthForm::default(),
            students: RosterPanel::new(RosterKind::Students),
            teachers: RosterPanel::new(RosterKind::Teachers),
            attendance: AttendancePanel::new(),
            toast: Toast::default(),
            delete_target: None,
            log_messages: Vec::new(),
        })
    }

    fn roster(&self, kind: RosterKind) -> &RosterPanel {
        match kind {
            RosterKind::Students => &self.students,
            RosterKind::Teachers => &self.teachers,
        }
    }

    fn roster_mut(&mut self, kind: RosterKind) -> &mut RosterPanel {
        match kind {
            RosterKind::Students => &mut self.students,
            RosterKind::Teachers => &mut self.teachers,
        }
    }

    /// Log a message to the UI activity log.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.log_messages.push(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
            level,
        });

        // Keep only last 100 messages
        if self.log_messages.len() > 100 {
            self.log_messages.remove(0);
        }
    }

    pub fn log_info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn log_success(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    pub fn log_error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Switch to a view, triggering its data load where one exists.
    /// The dashboard is static and loads nothing.
    pub fn navigate(&mut self, panel: Panel) {
        self.current_panel = panel;
        match panel {
            Panel::Dashboard => {}
            Panel::Students => self.load_roster(RosterKind::Students),
            Panel::Teachers => self.load_roster(RosterKind::Teachers),
            Panel::Attendance => self.load_attendance(),
        }
    }

    /// Enter the app shell, always landing on the dashboard.
    fn show_app(&mut self) {
        self.screen = Screen::Shell;
        self.navigate(Panel::Dashboard);
    }

    /// Drop the session and fall back to the login screen.
    fn show_auth(&mut self) {
        if let Err(e) = self.session.clear() {
            tracing::warn!("Failed to clear stored session: {e}");
        }
        self.screen = Screen::Auth;
        self.auth.reset_to_login();
        self.delete_target = None;
        self.students.form.reset();
        self.students.saving = false;
        self.teachers.form.reset();
        self.teachers.saving = false;
        self.attendance.form.reset();
        self.attendance.saving = false;
    }

    fn logout(&mut self) {
        tracing::info!("Logging out");
        self.log_info("Logged out");
        self.show_auth();
    }

    // --- Async operations ---

    fn submit_auth(&mut self) {
        if self.auth.in_flight {
            return;
        }
        if let Err(msg) = self.auth.validate() {
            self.toast.error(msg);
            return;
        }

        self.auth.in_flight = true;
        let api = self.api.clone();
        let tx = self.tx.clone();
        let name = self.auth.name.clone();
        let email = self.auth.email.clone();
        let password = self.auth.password.clone();

        match self.auth.mode {
            AuthMode::Login => {
                self.rt.spawn(async move {
                    match api.login(&email, &password).await {
                        Ok(token) => {
                            let _ = tx.send(UiMessage::LoggedIn(token));
                        }
                        Err(e) => {
                            let _ = tx.send(UiMessage::AuthFailed(e.to_string()));
                        }
                    }
                });
            }
            AuthMode::Register => {
                self.rt.spawn(async move {
                    match api.register(&name, &email, &password).await {
                        Ok(()) => {
                            let _ = tx.send(UiMessage::Registered);
                        }
                        Err(e) => {
                            let _ = tx.send(UiMessage::AuthFailed(e.to_string()));
                        }
                    }
                });
            }
        }
    }

    fn load_roster(&mut self, kind: RosterKind) {
        self.roster_mut(kind).load_state = LoadState::Loading;
        let api = self.api.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match api.list_roster(kind).await {
                Ok(rows) => {
                    let _ = tx.send(UiMessage::RosterLoaded(kind, rows));
                }
                Err(AppError::Unauthorized) => {
                    let _ = tx.send(UiMessage::SessionExpired);
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::RosterLoadFailed(kind, e.to_string()));
                }
            }
        });
    }

    fn save_member(&mut self, kind: RosterKind, id: Option<i64>, body: SaveMember) {
        self.roster_mut(kind).saving = true;
        let api = self.api.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            let result = match id {
                Some(id) => api.update_member(kind, id, &body).await.map(|()| true),
                None => api.create_member(kind, &body).await.map(|()| false),
            };
            match result {
                Ok(updated) => {
                    let _ = tx.send(UiMessage::RosterSaved(kind, updated));
                }
                Err(AppError::Unauthorized) => {
                    let _ = tx.send(UiMessage::SessionExpired);
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(e.to_string()));
                }
            }
        });
    }

    fn delete_member_by_id(&mut self, kind: RosterKind, id: i64) {
        let api = self.api.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match api.delete_member(kind, id).await {
                Ok(()) => {
                    let _ = tx.send(UiMessage::RosterDeleted(kind));
                }
                Err(AppError::Unauthorized) => {
                    let _ = tx.send(UiMessage::SessionExpired);
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(e.to_string()));
                }
            }
        });
    }

    fn load_attendance(&mut self) {
        self.attendance.load_state = LoadState::Loading;
        let api = self.api.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match api.list_attendance().await {
                Ok(rows) => {
                    let _ = tx.send(UiMessage::AttendanceLoaded(rows));
                }
                Err(AppError::Unauthorized) => {
                    let _ = tx.send(UiMessage::SessionExpired);
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::AttendanceLoadFailed(e.to_string()));
                }
            }
        });
    }

    fn save_attendance(&mut self, id: Option<i64>, body: SaveAttendance) {
        self.attendance.saving = true;
        let api = self.api.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            let result = match id {
                Some(id) => api.update_attendance(id, &body).await.map(|()| true),
                None => api.create_attendance(&body).await.map(|()| false),
            };
            match result {
                Ok(updated) => {
                    let _ = tx.send(UiMessage::AttendanceSaved(updated));
                }
                Err(AppError::Unauthorized) => {
                    let _ = tx.send(UiMessage::SessionExpired);
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(e.to_string()));
                }
            }
        });
    }

    fn delete_attendance_by_id(&mut self, id: i64) {
        let api = self.api.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match api.delete_attendance(id).await {
                Ok(()) => {
                    let _ = tx.send(UiMessage::AttendanceDeleted);
                }
                Err(AppError::Unauthorized) => {
                    let _ = tx.send(UiMessage::SessionExpired);
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(e.to_string()));
                }
            }
        });
    }

    // --- Message handling ---

    /// Apply async task results to UI state.
    ///
    /// Each failed operation produced exactly one message, so exactly one
    /// toast is shown per failure; panels only adjust their own state here.
    fn poll_messages(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                UiMessage::LoggedIn(token) => {
                    if let Err(e) = self.session.set(&token) {
                        tracing::warn!("Failed to persist session token: {e}");
                        self.log(LogLevel::Warning, "Session will not survive a restart");
                    }
                    self.auth.in_flight = false;
                    self.auth.password.clear();
                    self.toast.success("Login successful!");
                    self.log_success("Logged in");
                    self.show_app();
                }
                UiMessage::Registered => {
                    self.auth.in_flight = false;
                    self.toast.success("Registration successful! Please login.");
                    self.log_success("Admin account registered");
                    if self.auth.mode == AuthMode::Register {
                        self.auth.toggle_mode();
                    }
                }
                UiMessage::AuthFailed(e) => {
                    self.auth.in_flight = false;
                    self.toast.error(e.clone());
                    self.log_error(e);
                }
                UiMessage::RosterLoaded(kind, rows) => {
                    let panel = self.roster_mut(kind);
                    panel.rows = rows;
                    panel.load_state = LoadState::Loaded;
                }
                UiMessage::RosterLoadFailed(kind, e) => {
                    self.roster_mut(kind).load_state = LoadState::Error(e.clone());
                    self.toast.error(e.clone());
                    self.log_error(e);
                }
                UiMessage::RosterSaved(kind, updated) => {
                    let panel = self.roster_mut(kind);
                    panel.saving = false;
                    panel.form.reset();
                    let verb = if updated { "updated" } else { "added" };
                    self.toast.success(format!("{} {verb} successfully", kind.title()));
                    self.log_success(format!("{} {verb}", kind.title()));
                    self.load_roster(kind);
                }
                UiMessage::RosterDeleted(kind) => {
                    self.toast.success(format!("{} deleted", kind.title()));
                    self.log_success(format!("{} deleted", kind.title()));
                    self.load_roster(kind);
                }
                UiMessage::AttendanceLoaded(rows) => {
                    self.attendance.rows = rows;
                    self.attendance.load_state = LoadState::Loaded;
                }
                UiMessage::AttendanceLoadFailed(e) => {
                    self.attendance.load_state = LoadState::Error(e.clone());
                    self.toast.error(e.clone());
                    self.log_error(e);
                }
                UiMessage::AttendanceSaved(updated) => {
                    self.attendance.saving = false;
                    self.attendance.form.reset();
                    let verb = if updated { "updated" } else { "added" };
                    self.toast.success(format!("Record {verb} successfully"));
                    self.log_success(format!("Attendance record {verb}"));
                    self.load_attendance();
                }
                UiMessage::AttendanceDeleted => {
                    self.toast.success("Record deleted");
                    self.log_success("Attendance record deleted");
                    self.load_attendance();
                }
                UiMessage::OperationFailed(e) => {
                    // Form stays open so the user can correct and retry
                    self.students.saving = false;
                    self.teachers.saving = false;
                    self.attendance.saving = false;
                    self.toast.error(e.clone());
                    self.log_error(e);
                }
                UiMessage::SessionExpired => {
                    tracing::info!("Session rejected by backend, returning to login");
                    self.log_info("Session expired");
                    self.show_auth();
                }
            }
        }
    }

    // --- Panel action handling ---

    fn apply_roster_action(&mut self, kind: RosterKind, action: RosterAction) {
        match action {
            RosterAction::Reload => self.load_roster(kind),
            RosterAction::OpenCreate => self.roster_mut(kind).form = MemberForm::create(),
            RosterAction::CancelForm => self.roster_mut(kind).form.reset(),
            RosterAction::EditRow(idx) => {
                let member = self.roster(kind).rows.get(idx).cloned();
                match member {
                    Some(m) if m.id.is_some() => self.roster_mut(kind).form = MemberForm::edit(&m),
                    _ => {
                        let msg = format!("Invalid {} ID", kind.singular());
                        self.toast.error(msg.clone());
                        self.log_error(msg);
                    }
                }
            }
            RosterAction::DeleteRow(idx) => {
                let target = self
                    .roster(kind)
                    .rows
                    .get(idx)
                    .and_then(|m| m.id.map(|id| (id, m.name.clone())));
                match target {
                    Some((id, name)) => self.delete_target = Some(DeleteTarget::Roster(kind, id, name)),
                    None => {
                        let msg = format!("Invalid {} ID", kind.singular());
                        self.toast.error(msg.clone());
                        self.log_error(msg);
                    }
                }
            }
            RosterAction::Submit => {
                if self.roster(kind).saving {
                    return;
                }
                let form = self.roster(kind).form.clone();
                if form.is_editing && form.id.is_none() {
                    self.toast.error("Missing record ID");
                    return;
                }
                let id = if form.is_editing { form.id } else { None };
                match form.validate() {
                    Ok(body) => self.save_member(kind, id, body),
                    Err(msg) => self.toast.error(msg),
                }
            }
        }
    }

    fn apply_attendance_action(&mut self, action: AttendanceAction) {
        match action {
            AttendanceAction::Reload => self.load_attendance(),
            AttendanceAction::OpenCreate => self.attendance.form = AttendanceForm::create(),
            AttendanceAction::CancelForm => self.attendance.form.reset(),
            AttendanceAction::EditRow(idx) => {
                let record = self.attendance.rows.get(idx).cloned();
                match record {
                    Some(r) if r.id.is_some() => self.attendance.form = AttendanceForm::edit(&r),
                    _ => {
                        self.toast.error("Invalid record ID");
                        self.log_error("Invalid record ID");
                    }
                }
            }
            AttendanceAction::DeleteRow(idx) => {
                let id = self.attendance.rows.get(idx).and_then(|r| r.id);
                match id {
                    Some(id) => self.delete_target = Some(DeleteTarget::Attendance(id)),
                    None => {
                        self.toast.error("Invalid record ID");
                        self.log_error("Invalid record ID");
                    }
                }
            }
            AttendanceAction::Submit => {
                if self.attendance.saving {
                    return;
                }
                let form = self.attendance.form.clone();
                if form.is_editing && form.id.is_none() {
                    self.toast.error("Missing record ID");
                    return;
                }
                let id = if form.is_editing { form.id } else { None };
                match form.validate() {
                    Ok(body) => self.save_attendance(id, body),
                    Err(msg) => self.toast.error(msg),
                }
            }
        }
    }

    // --- Rendering ---

    fn show_nav_bar(&mut self, ctx: &egui::Context) {
        let current = self.current_panel;
        let mut nav_to = None;
        let mut logout_clicked = false;

        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Campus Admin").strong());
                ui.separator();

                for panel in Panel::ALL {
                    if ui.selectable_label(current == panel, panel.name()).clicked() {
                        nav_to = Some(panel);
                    }
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button(format!("{SIGN_OUT} Logout")).clicked() {
                        logout_clicked = true;
                    }
                });
            });
        });

        if logout_clicked {
            self.logout();
        } else if let Some(panel) = nav_to {
            self.navigate(panel);
        }
    }

    /// Render the delete confirmation dialog.
    /// No delete request is issued until the user confirms.
    fn show_confirm_dialog(&mut self, ctx: &egui::Context) {
        let Some(target) = self.delete_target.clone() else {
            return;
        };

        let message = match &target {
            DeleteTarget::Roster(kind, _, name) => format!("Delete {} '{}'?", kind.singular(), name),
            DeleteTarget::Attendance(id) => format!("Delete attendance record {id}?"),
        };

        egui::Window::new("Confirm Delete")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        self.delete_target = None;
                    }
                    if ui.button("Delete").clicked() {
                        self.delete_target = None;
                        match target {
                            DeleteTarget::Roster(kind, id, _) => self.delete_member_by_id(kind, id),
                            DeleteTarget::Attendance(id) => self.delete_attendance_by_id(id),
                        }
                    }
                });
            });
    }

    fn is_busy(&self) -> bool {
        self.auth.in_flight
            || self.students.load_state == LoadState::Loading
            || self.teachers.load_state == LoadState::Loading
            || self.attendance.load_state == LoadState::Loading
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async results
        self.poll_messages();

        // Request repaint during async operations
        if self.is_busy() {
            ctx.request_repaint();
        }

        match self.screen {
            Screen::Auth => {
                let action = egui::CentralPanel::default()
                    .show(ctx, |ui| auth_screen::show(&mut self.auth, ui))
                    .inner;
                match action {
                    Some(AuthAction::ToggleMode) => self.auth.toggle_mode(),
                    Some(AuthAction::Submit) => self.submit_auth(),
                    None => {}
                }
            }
            Screen::Shell => {
                self.show_nav_bar(ctx);
                self.show_confirm_dialog(ctx);

                match self.current_panel {
                    Panel::Dashboard => {
                        let next = egui::CentralPanel::default()
                            .show(ctx, |ui| dashboard::show(self, ui))
                            .inner;
                        if let Some(panel) = next {
                            self.navigate(panel);
                        }
                    }
                    Panel::Students => {
                        let action = egui::CentralPanel::default()
                            .show(ctx, |ui| roster_panel::show(&mut self.students, ui))
                            .inner;
                        if let Some(action) = action {
                            self.apply_roster_action(RosterKind::Students, action);
                        }
                    }
                    Panel::Teachers => {
                        let action = egui::CentralPanel::default()
                            .show(ctx, |ui| roster_panel::show(&mut self.teachers, ui))
                            .inner;
                        if let Some(action) = action {
                            self.apply_roster_action(RosterKind::Teachers, action);
                        }
                    }
                    Panel::Attendance => {
                        let action = egui::CentralPanel::default()
                            .show(ctx, |ui| attendance_panel::show(&mut self.attendance, ui))
                            .inner;
                        if let Some(action) = action {
                            self.apply_attendance_action(action);
                        }
                    }
                }
            }
        }

        self.toast.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::ui::toast::ToastKind;

    fn test_app(name: &str) -> App {
        let config = AppConfig::default();
        let session = Arc::new(SessionStore::open(
            std::env::temp_dir().join(format!("campus-admin-test-{name}-{}.token", std::process::id())),
        ));
        let rt = tokio::runtime::Runtime::new().unwrap();
        App::new(&config, session, rt).unwrap()
    }

    fn member_without_id() -> Member {
        serde_json::from_value(serde_json::json!({
            "name": "Ghost", "email": "g@x.com", "admin_id": 1
        }))
        .unwrap()
    }

    fn record_without_id() -> AttendanceRecord {
        serde_json::from_value(serde_json::json!({
            "date": "2026-03-01", "status": "present"
        }))
        .unwrap()
    }

    #[test]
    fn test_edit_row_without_id_never_opens_form() {
        let mut app = test_app("edit-noid");
        app.students.rows = vec![member_without_id()];

        app.apply_roster_action(RosterKind::Students, RosterAction::EditRow(0));

        assert!(!app.students.form.is_open);
        let (text, kind, _) = app.toast.visible_at(Instant::now()).unwrap();
        assert_eq!(text, "Invalid student ID");
        assert_eq!(kind, ToastKind::Error);
    }

    #[test]
    fn test_delete_row_without_id_requests_nothing() {
        let mut app = test_app("delete-noid");
        app.teachers.rows = vec![member_without_id()];

        app.apply_roster_action(RosterKind::Teachers, RosterAction::DeleteRow(0));

        assert!(app.delete_target.is_none());
        let (text, kind, _) = app.toast.visible_at(Instant::now()).unwrap();
        assert_eq!(text, "Invalid teacher ID");
        assert_eq!(kind, ToastKind::Error);
    }

    #[test]
    fn test_attendance_edit_row_without_id_never_opens_form() {
        let mut app = test_app("att-edit-noid");
        app.attendance.rows = vec![record_without_id()];

        app.apply_attendance_action(AttendanceAction::EditRow(0));

        assert!(!app.attendance.form.is_open);
        let (text, kind, _) = app.toast.visible_at(Instant::now()).unwrap();
        assert_eq!(text, "Invalid record ID");
        assert_eq!(kind, ToastKind::Error);
    }

    #[test]
    fn test_attendance_delete_row_without_id_requests_nothing() {
        let mut app = test_app("att-delete-noid");
        app.attendance.rows = vec![record_without_id()];

        app.apply_attendance_action(AttendanceAction::DeleteRow(0));

        assert!(app.delete_target.is_none());
        assert!(app.toast.visible_at(Instant::now()).is_some());
    }

    #[test]
    fn test_out_of_range_row_reports_error() {
        let mut app = test_app("oob-row");

        app.apply_roster_action(RosterKind::Students, RosterAction::EditRow(7));

        assert!(!app.students.form.is_open);
        assert!(app.toast.visible_at(Instant::now()).is_some());
    }

    #[test]
    fn test_submit_ignored_while_roster_save_in_flight() {
        let mut app = test_app("roster-inflight");
        // An empty form would normally toast a validation error on submit
        app.students.form = MemberForm::create();
        app.students.saving = true;

        app.apply_roster_action(RosterKind::Students, RosterAction::Submit);

        assert!(app.toast.visible_at(Instant::now()).is_none());
        assert!(app.students.form.is_open);
    }

    #[test]
    fn test_submit_ignored_while_attendance_save_in_flight() {
        let mut app = test_app("att-inflight");
        app.attendance.form = AttendanceForm::create();
        app.attendance.saving = true;

        app.apply_attendance_action(AttendanceAction::Submit);

        assert!(app.toast.visible_at(Instant::now()).is_none());
        assert!(app.attendance.form.is_open);
    }
}
