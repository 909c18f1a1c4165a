//! Roster panel: list, search, and CRUD form for students or teachers.
//!
//! The same panel code drives both rosters; [`RosterKind`] supplies labels
//! and endpoint paths. Row actions are reported by row index into the
//! panel's row vector and applied by the app shell, which owns the toast,
//! the confirmation dialog, and the async spawns.

use eframe::egui::{self, ScrollArea, TextEdit, Ui};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, PENCIL, PLUS, TRASH};

use crate::models::{Member, RosterKind, SaveMember};

use super::app::LoadState;
use super::components::{colors, danger_button, icon_button, panel_header};

/// State for one roster panel.
pub struct RosterPanel {
    pub kind: RosterKind,
    pub rows: Vec<Member>,
    pub load_state: LoadState,
    pub search: String,
    pub form: MemberForm,
    /// A save request is in flight; Submit is ignored until it resolves.
    pub saving: bool,
}

impl RosterPanel {
    pub fn new(kind: RosterKind) -> Self {
        Self {
            kind,
            rows: Vec::new(),
            load_state: LoadState::Idle,
            search: String::new(),
            form: MemberForm::default(),
            saving: false,
        }
    }
}

/// Form state for member create/edit.
#[derive(Default, Clone)]
pub struct MemberForm {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub admin_id: String,
    pub is_open: bool,
    pub is_editing: bool,
}

impl MemberForm {
    /// Reset the form to default (closed) state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Blank form opened in create mode.
    pub fn create() -> Self {
        Self {
            is_open: true,
            ..Default::default()
        }
    }

    /// Form pre-filled for editing an existing member.
    /// The password field always starts blank; passwords are never echoed.
    pub fn edit(member: &Member) -> Self {
        Self {
            id: member.id,
            name: member.name.clone(),
            email: member.email.clone(),
            password: String::new(),
            admin_id: member.admin_id.map(|v| v.to_string()).unwrap_or_default(),
            is_open: true,
            is_editing: true,
        }
    }

    /// Validate and build the request body.
    pub fn validate(&self) -> Result<SaveMember, String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        if self.email.trim().is_empty() {
            return Err("Email is required".to_string());
        }
        if !self.is_editing && self.password.is_empty() {
            return Err("Password is required".to_string());
        }
        let admin_id = self
            .admin_id
            .trim()
            .parse()
            .map_err(|_| "Admin ID must be a number".to_string())?;

        Ok(SaveMember {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            admin_id,
        })
    }
}

/// What the user asked the panel to do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterAction {
    Reload,
    OpenCreate,
    /// Edit the record at this index in `rows`.
    EditRow(usize),
    /// Request deletion of the record at this index in `rows`.
    DeleteRow(usize),
    Submit,
    CancelForm,
}

/// Show the roster panel.
pub fn show(panel: &mut RosterPanel, ui: &mut Ui) -> Option<RosterAction> {
    let mut action = None;

    panel_header(ui, panel.kind.label());

    ui.horizontal(|ui| {
        if icon_button(ui, PLUS, &format!("Add {}", panel.kind.title())).clicked() {
            action = Some(RosterAction::OpenCreate);
        }

        ui.add_space(10.0);

        if icon_button(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
            action = Some(RosterAction::Reload);
        }

        ui.add_space(20.0);

        ui.label("Search:");
        ui.add(
            TextEdit::singleline(&mut panel.search)
                .desired_width(200.0)
                .hint_text("Name or email..."),
        );
        if !panel.search.is_empty() && ui.button("Clear").clicked() {
            panel.search.clear();
        }
    });

    ui.add_space(15.0);

    match &panel.load_state {
        LoadState::Idle => {}
        LoadState::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading...");
            });
        }
        LoadState::Error(e) => {
            ui.colored_label(colors::ERROR, format!("Failed to load {}: {e}", panel.kind.label().to_lowercase()));
        }
        LoadState::Loaded => {
            show_table(panel, ui, &mut action);
        }
    }

    if panel.form.is_open {
        show_form_dialog(panel, ui.ctx(), &mut action);
    }

    action
}

fn show_table(panel: &RosterPanel, ui: &mut Ui, action: &mut Option<RosterAction>) {
    let needle = panel.search.to_lowercase();
    let visible: Vec<usize> = panel
        .rows
        .iter()
        .enumerate()
        .filter(|(_, m)| {
            needle.is_empty() || m.name.to_lowercase().contains(&needle) || m.email.to_lowercase().contains(&needle)
        })
        .map(|(idx, _)| idx)
        .collect();

    ui.label(format!(
        "Showing {} of {} {}",
        visible.len(),
        panel.rows.len(),
        panel.kind.label().to_lowercase()
    ));

    ui.add_space(10.0);

    if panel.rows.is_empty() {
        ui.label(format!("No {}s found", panel.kind.singular()));
        return;
    }

    ScrollArea::vertical().id_salt("roster_scroll").show(ui, |ui| {
        ui.add_space(4.0);
        egui::Grid::new("roster_grid")
            .num_columns(5)
            .striped(true)
            .min_col_width(60.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.strong("ID");
                ui.strong("Name");
                ui.strong("Email");
                ui.strong("Admin");
                ui.strong("Actions");
                ui.end_row();

                for idx in visible {
                    let m = &panel.rows[idx];
                    ui.label(m.id.map(|v| v.to_string()).unwrap_or_else(|| "#".to_string()));
                    ui.label(&m.name);
                    ui.label(&m.email);
                    ui.label(m.admin_id.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string()));

                    ui.horizontal(|ui| {
                        if icon_button(ui, PENCIL, "Edit").clicked() {
                            *action = Some(RosterAction::EditRow(idx));
                        }
                        ui.add_space(4.0);
                        if danger_button(ui, TRASH, "Delete").clicked() {
                            *action = Some(RosterAction::DeleteRow(idx));
                        }
                    });

                    ui.end_row();
                }
            });
    });
}

fn show_form_dialog(panel: &mut RosterPanel, ctx: &egui::Context, action: &mut Option<RosterAction>) {
    let title = if panel.form.is_editing {
        format!("Edit {}", panel.kind.title())
    } else {
        format!("Add {}", panel.kind.title())
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(400.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            egui::Grid::new("member_form_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Name:");
                    ui.add(TextEdit::singleline(&mut panel.form.name).desired_width(250.0));
                    ui.end_row();

                    ui.label("Email:");
                    ui.add(TextEdit::singleline(&mut panel.form.email).desired_width(250.0));
                    ui.end_row();

                    ui.label("Password:");
                    let hint = if panel.form.is_editing { "Leave blank to keep" } else { "" };
                    ui.add(
                        TextEdit::singleline(&mut panel.form.password)
                            .password(true)
                            .desired_width(250.0)
                            .hint_text(hint),
                    );
                    ui.end_row();

                    ui.label("Admin ID:");
                    ui.add(TextEdit::singleline(&mut panel.form.admin_id).desired_width(100.0));
                    ui.end_row();
                });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    *action = Some(RosterAction::CancelForm);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add_enabled(!panel.saving, egui::Button::new("Save")).clicked() {
                        *action = Some(RosterAction::Submit);
                    }
                    if panel.saving {
                        ui.spinner();
                    }
                });
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: Option<i64>) -> Member {
        serde_json::from_value(serde_json::json!({
            "id": id, "name": "Ann", "email": "a@x.com", "admin_id": 1
        }))
        .unwrap()
    }

    #[test]
    fn test_edit_form_never_echoes_password() {
        let form = MemberForm::edit(&member(Some(3)));
        assert!(form.password.is_empty());
        assert!(form.is_editing);
        assert!(form.is_open);
        assert_eq!(form.id, Some(3));
        assert_eq!(form.name, "Ann");
        assert_eq!(form.admin_id, "1");
    }

    #[test]
    fn test_create_form_starts_blank() {
        let form = MemberForm::create();
        assert!(form.is_open);
        assert!(!form.is_editing);
        assert_eq!(form.id, None);
        assert!(form.name.is_empty());
    }

    #[test]
    fn test_validate_requires_name_email() {
        let mut form = MemberForm::create();
        form.admin_id = "1".into();
        form.password = "pw".into();
        assert!(form.validate().is_err());

        form.name = "Ann".into();
        assert!(form.validate().is_err());

        form.email = "a@x.com".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_validate_password_required_only_on_create() {
        let mut create = MemberForm::create();
        create.name = "Ann".into();
        create.email = "a@x.com".into();
        create.admin_id = "1".into();
        assert!(create.validate().is_err());

        let mut edit = MemberForm::edit(&member(Some(3)));
        edit.admin_id = "1".into();
        // Blank password on edit means "keep current"
        assert!(edit.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_numeric_admin_id() {
        let mut form = MemberForm::create();
        form.name = "Ann".into();
        form.email = "a@x.com".into();
        form.password = "pw".into();
        form.admin_id = "abc".into();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_validate_trims_fields() {
        let mut form = MemberForm::create();
        form.name = "  Ann  ".into();
        form.email = " a@x.com ".into();
        form.password = "pw".into();
        form.admin_id = " 2 ".into();

        let body = form.validate().unwrap();
        assert_eq!(body.name, "Ann");
        assert_eq!(body.email, "a@x.com");
        assert_eq!(body.admin_id, 2);
    }
}
