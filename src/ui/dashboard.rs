//! Dashboard: stat cards, navigation cards, and the recent-activity log.
//!
//! The dashboard is static; it renders cached counts and never triggers a
//! load of its own.

use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{CALENDAR_CHECK, CHALKBOARD_TEACHER, STUDENT};

use super::app::{App, LogLevel, Panel};
use super::components::{colors, dashboard_card};

/// Show the dashboard.
///
/// Returns `Some(panel)` if navigation is requested.
pub fn show(app: &App, ui: &mut Ui) -> Option<Panel> {
    let mut next_panel = None;

    ui.vertical_centered(|ui| {
        ui.add_space(30.0);

        ui.label(RichText::new("Campus Admin").size(32.0).strong());
        ui.add_space(5.0);
        ui.label(RichText::new("Student, teacher, and attendance management").size(14.0).weak());

        ui.add_space(30.0);

        ui.horizontal(|ui| {
            let available = ui.available_width();
            let start_offset = ((available - 510.0) / 2.0).max(0.0);
            ui.add_space(start_offset);

            stat_card(ui, "Students", &app.students.rows.len().to_string(), "Enrolled students");
            stat_card(ui, "Teachers", &app.teachers.rows.len().to_string(), "Teaching staff");
            stat_card(
                ui,
                "Attendance Records",
                &app.attendance.rows.len().to_string(),
                "Logged records",
            );
        });

        ui.add_space(30.0);

        // Navigation cards row
        let available = ui.available_width();
        let num_cards = 3.0;
        let spacing = 30.0;
        let total_spacing = spacing * (num_cards - 1.0);
        let card_width = ((available - total_spacing) / num_cards).clamp(150.0, 250.0);
        let card_size = egui::vec2(card_width, card_width * 0.75);
        let total_width = card_width * num_cards + total_spacing;
        let start_offset = ((available - total_width) / 2.0).max(0.0);

        ui.horizontal(|ui| {
            ui.add_space(start_offset);

            if dashboard_card(ui, "Manage Students", "Enrollment records", STUDENT, card_size).clicked() {
                next_panel = Some(Panel::Students);
            }

            ui.add_space(spacing);

            if dashboard_card(ui, "Manage Teachers", "Teaching staff", CHALKBOARD_TEACHER, card_size).clicked() {
                next_panel = Some(Panel::Teachers);
            }

            ui.add_space(spacing);

            if dashboard_card(ui, "Attendance", "Daily records", CALENDAR_CHECK, card_size).clicked() {
                next_panel = Some(Panel::Attendance);
            }
        });

        ui.add_space(30.0);
    });

    // Recent activity
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::symmetric(10, 0))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new("Recent Activity").strong());
            ui.add_space(10.0);

            ScrollArea::vertical().max_height(150.0).show(ui, |ui| {
                if app.log_messages.is_empty() {
                    ui.label(RichText::new("No recent activity").weak());
                } else {
                    for entry in app.log_messages.iter().rev().take(10) {
                        let color = match entry.level {
                            LogLevel::Info => colors::NEUTRAL,
                            LogLevel::Success => colors::SUCCESS,
                            LogLevel::Warning => colors::WARNING,
                            LogLevel::Error => colors::ERROR,
                        };

                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(entry.timestamp.format("%H:%M:%S").to_string())
                                    .small()
                                    .color(Color32::DARK_GRAY),
                            );
                            ui.label(RichText::new(&entry.message).color(color));
                        });
                    }
                }
            });
        });

    next_panel
}

/// Render a stat card with title, value, and subtitle.
fn stat_card(ui: &mut Ui, title: &str, value: &str, subtitle: &str) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::same(5))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(150.0);

            ui.vertical(|ui| {
                ui.label(RichText::new(title).small());
                ui.label(RichText::new(value).heading().strong());
                ui.label(RichText::new(subtitle).small().weak());
            });
        });
}
