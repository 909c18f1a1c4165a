//! Attendance panel: list with status tints plus the record form.

use chrono::{Local, NaiveDate};
use eframe::egui::{self, CornerRadius, Margin, ScrollArea, TextEdit, Ui};
use egui_extras::DatePickerButton;
use egui_phosphor::regular::{ARROWS_CLOCKWISE, PENCIL, PLUS, TRASH};

use crate::models::attendance::STATUS_CHOICES;
use crate::models::{AttendanceRecord, SaveAttendance};

use super::app::LoadState;
use super::components::{colors, danger_button, icon_button, panel_header, status_tint};

/// State for the attendance panel.
pub struct AttendancePanel {
    pub rows: Vec<AttendanceRecord>,
    pub load_state: LoadState,
    pub form: AttendanceForm,
    /// A save request is in flight; Submit is ignored until it resolves.
    pub saving: bool,
}

impl AttendancePanel {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            load_state: LoadState::Idle,
            form: AttendanceForm::default(),
            saving: false,
        }
    }
}

impl Default for AttendancePanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Form state for attendance create/edit.
#[derive(Clone)]
pub struct AttendanceForm {
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub status: String,
    pub student_id: String,
    pub teacher_id: String,
    pub admin_id: String,
    pub is_open: bool,
    pub is_editing: bool,
}

impl Default for AttendanceForm {
    fn default() -> Self {
        Self {
            id: None,
            date: Local::now().date_naive(),
            status: STATUS_CHOICES[0].to_string(),
            student_id: String::new(),
            teacher_id: String::new(),
            admin_id: String::new(),
            is_open: false,
            is_editing: false,
        }
    }
}

impl AttendanceForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Blank form opened in create mode, dated today.
    pub fn create() -> Self {
        Self {
            is_open: true,
            ..Default::default()
        }
    }

    /// Form pre-filled for editing an existing record.
    pub fn edit(record: &AttendanceRecord) -> Self {
        Self {
            id: record.id,
            date: parse_record_date(&record.date).unwrap_or_else(|| Local::now().date_naive()),
            status: record.status.clone(),
            student_id: record.student_id.map(|v| v.to_string()).unwrap_or_default(),
            teacher_id: record.teacher_id.map(|v| v.to_string()).unwrap_or_default(),
            // Backend rows occasionally omit admin_id; default to the primary admin
            admin_id: record.admin_id.unwrap_or(1).to_string(),
            is_open: true,
            is_editing: true,
        }
    }

    /// Validate and build the request body.
    pub fn validate(&self) -> Result<SaveAttendance, String> {
        let student_id = parse_id(&self.student_id, "Student ID")?;
        let teacher_id = parse_id(&self.teacher_id, "Teacher ID")?;
        let admin_id = parse_id(&self.admin_id, "Admin ID")?;

        if self.status.trim().is_empty() {
            return Err("Status is required".to_string());
        }

        Ok(SaveAttendance {
            date: self.date.format("%Y-%m-%d").to_string(),
            status: self.status.clone(),
            student_id,
            teacher_id,
            admin_id,
        })
    }
}

fn parse_id(input: &str, label: &str) -> Result<i64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{label} is required"));
    }
    trimmed.parse().map_err(|_| format!("{label} must be a number"))
}

/// Accept ISO dates, also tolerating a trailing time component.
fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let head = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// What the user asked the panel to do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceAction {
    Reload,
    OpenCreate,
    EditRow(usize),
    DeleteRow(usize),
    Submit,
    CancelForm,
}

/// Show the attendance panel.
pub fn show(panel: &mut AttendancePanel, ui: &mut Ui) -> Option<AttendanceAction> {
    let mut action = None;

    panel_header(ui, "Attendance");

    ui.horizontal(|ui| {
        if icon_button(ui, PLUS, "Add Record").clicked() {
            action = Some(AttendanceAction::OpenCreate);
        }
        ui.add_space(10.0);
        if icon_button(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
            action = Some(AttendanceAction::Reload);
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
            ui.colored_label(colors::ERROR, format!("Failed to load attendance: {e}"));
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

fn show_table(panel: &AttendancePanel, ui: &mut Ui, action: &mut Option<AttendanceAction>) {
    if panel.rows.is_empty() {
        ui.label("No records found");
        return;
    }

    ScrollArea::vertical().id_salt("attendance_scroll").show(ui, |ui| {
        ui.add_space(4.0);
        egui::Grid::new("attendance_grid")
            .num_columns(6)
            .striped(true)
            .min_col_width(60.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.strong("ID");
                ui.strong("Date");
                ui.strong("Status");
                ui.strong("Student");
                ui.strong("Teacher");
                ui.strong("Actions");
                ui.end_row();

                for (idx, record) in panel.rows.iter().enumerate() {
                    ui.label(record.id.map(|v| v.to_string()).unwrap_or_else(|| "#".to_string()));
                    ui.label(&record.date);

                    egui::Frame::new()
                        .fill(status_tint(&record.status))
                        .inner_margin(Margin::symmetric(8, 2))
                        .corner_radius(CornerRadius::same(4))
                        .show(ui, |ui| {
                            ui.label(&record.status);
                        });

                    ui.label(record.student_id.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string()));
                    ui.label(record.teacher_id.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string()));

                    ui.horizontal(|ui| {
                        if icon_button(ui, PENCIL, "Edit").clicked() {
                            *action = Some(AttendanceAction::EditRow(idx));
                        }
                        ui.add_space(4.0);
                        if danger_button(ui, TRASH, "Delete").clicked() {
                            *action = Some(AttendanceAction::DeleteRow(idx));
                        }
                    });

                    ui.end_row();
                }
            });
    });
}

fn show_form_dialog(panel: &mut AttendancePanel, ctx: &egui::Context, action: &mut Option<AttendanceAction>) {
    let title = if panel.form.is_editing { "Edit Record" } else { "Add Record" };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(380.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            egui::Grid::new("attendance_form_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Date:");
                    ui.add(DatePickerButton::new(&mut panel.form.date).id_salt("attendance_date"));
                    ui.end_row();

                    ui.label("Status:");
                    egui::ComboBox::from_id_salt("attendance_status")
                        .width(150.0)
                        .selected_text(panel.form.status.clone())
                        .show_ui(ui, |ui| {
                            for choice in STATUS_CHOICES {
                                // Stored statuses vary in casing; match them loosely
                                let selected = panel.form.status.eq_ignore_ascii_case(choice);
                                if ui.selectable_label(selected, choice).clicked() {
                                    panel.form.status = choice.to_string();
                                }
                            }
                        });
                    ui.end_row();

                    ui.label("Student ID:");
                    ui.add(TextEdit::singleline(&mut panel.form.student_id).desired_width(100.0));
                    ui.end_row();

                    ui.label("Teacher ID:");
                    ui.add(TextEdit::singleline(&mut panel.form.teacher_id).desired_width(100.0));
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
                    *action = Some(AttendanceAction::CancelForm);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add_enabled(!panel.saving, egui::Button::new("Save")).clicked() {
                        *action = Some(AttendanceAction::Submit);
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

    fn record(json: serde_json::Value) -> AttendanceRecord {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_edit_form_parses_iso_date() {
        let r = record(serde_json::json!({
            "id": 4, "date": "2026-03-01", "status": "Late",
            "student_id": 5, "teacher_id": 2, "admin_id": 1
        }));
        let form = AttendanceForm::edit(&r);
        assert_eq!(form.id, Some(4));
        assert_eq!(form.date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert_eq!(form.status, "Late");
        assert_eq!(form.student_id, "5");
        assert_eq!(form.teacher_id, "2");
        assert_eq!(form.admin_id, "1");
    }

    #[test]
    fn test_edit_form_tolerates_datetime_suffix() {
        let r = record(serde_json::json!({"id": 4, "date": "2026-03-01T00:00:00.000Z", "status": "present"}));
        let form = AttendanceForm::edit(&r);
        assert_eq!(form.date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    }

    #[test]
    fn test_edit_then_save_keeps_status_casing() {
        let r = record(serde_json::json!({
            "id": 4, "date": "2026-03-01", "status": "Present",
            "student_id": 5, "teacher_id": 2, "admin_id": 1
        }));
        let form = AttendanceForm::edit(&r);
        assert_eq!(form.status, "Present");
        assert_eq!(form.validate().unwrap().status, "Present");
    }

    #[test]
    fn test_edit_form_defaults_missing_admin_id() {
        let r = record(serde_json::json!({"id": 4, "date": "2026-03-01", "status": "present"}));
        let form = AttendanceForm::edit(&r);
        assert_eq!(form.admin_id, "1");
    }

    #[test]
    fn test_unparseable_date_falls_back_to_today() {
        let r = record(serde_json::json!({"id": 4, "date": "03/01/2026", "status": "present"}));
        let form = AttendanceForm::edit(&r);
        assert_eq!(form.date, Local::now().date_naive());
    }

    #[test]
    fn test_validate_requires_numeric_ids() {
        let mut form = AttendanceForm::create();
        assert!(form.validate().is_err());

        form.student_id = "5".into();
        form.teacher_id = "2".into();
        form.admin_id = "x".into();
        assert!(form.validate().is_err());

        form.admin_id = "1".into();
        let body = form.validate().unwrap();
        assert_eq!(body.student_id, 5);
        assert_eq!(body.teacher_id, 2);
        assert_eq!(body.status, "present");
    }

    #[test]
    fn test_validate_formats_iso_date() {
        let mut form = AttendanceForm::create();
        form.date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        form.student_id = "5".into();
        form.teacher_id = "2".into();
        form.admin_id = "1".into();
        assert_eq!(form.validate().unwrap().date, "2026-03-09");
    }
}
