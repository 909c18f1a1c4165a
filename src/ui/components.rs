//! Shared UI components.

use eframe::egui::{self, Color32, Response, RichText, Sense, StrokeKind, Ui};

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const WARNING: Color32 = Color32::from_rgb(255, 200, 100);
    pub const NEUTRAL: Color32 = Color32::from_rgb(150, 150, 150);
}

/// Background tint for an attendance status value, case-insensitive.
/// Unrecognized statuses get the neutral tint.
pub fn status_tint(status: &str) -> Color32 {
    match status.trim().to_ascii_lowercase().as_str() {
        "present" => Color32::from_rgba_unmultiplied(16, 185, 129, 51),
        "absent" => Color32::from_rgba_unmultiplied(239, 68, 68, 51),
        "late" => Color32::from_rgba_unmultiplied(245, 158, 11, 51),
        _ => Color32::from_rgba_unmultiplied(148, 163, 184, 51),
    }
}

/// Render a clickable dashboard card with dynamic size.
///
/// Returns the response which can be checked for `.clicked()`.
pub fn dashboard_card(ui: &mut Ui, title: &str, description: &str, icon: &str, size: egui::Vec2) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact(&response);
        let scale = size.x / 200.0;

        ui.painter().rect_filled(rect, 8.0, visuals.bg_fill);
        ui.painter()
            .rect_stroke(rect, 8.0, visuals.bg_stroke, StrokeKind::Outside);

        let icon_pos = egui::pos2(rect.center().x, rect.top() + size.y * 0.23);
        ui.painter().text(
            icon_pos,
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(36.0 * scale),
            visuals.text_color(),
        );

        let title_pos = egui::pos2(rect.center().x, rect.center().y + size.y * 0.07);
        ui.painter().text(
            title_pos,
            egui::Align2::CENTER_CENTER,
            title,
            egui::FontId::proportional(18.0 * scale),
            visuals.text_color(),
        );

        let desc_pos = egui::pos2(rect.center().x, rect.bottom() - size.y * 0.17);
        ui.painter().text(
            desc_pos,
            egui::Align2::CENTER_CENTER,
            description,
            egui::FontId::proportional(12.0 * scale),
            ui.visuals().weak_text_color(),
        );
    }

    response
}

/// Render a panel header with title.
pub fn panel_header(ui: &mut Ui, title: &str) {
    ui.heading(RichText::new(title).size(24.0));
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(20.0);
}

/// Button with a phosphor icon prefix.
pub fn icon_button(ui: &mut Ui, icon: &str, label: &str) -> Response {
    ui.button(format!("{icon} {label}"))
}

/// Red-tinted button for destructive row actions.
pub fn danger_button(ui: &mut Ui, icon: &str, label: &str) -> Response {
    ui.add(egui::Button::new(
        RichText::new(format!("{icon} {label}")).color(colors::ERROR),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tint_is_case_insensitive() {
        assert_eq!(status_tint("present"), status_tint("Present"));
        assert_eq!(status_tint("present"), status_tint("PRESENT"));
        assert_eq!(status_tint("late"), status_tint(" Late "));
    }

    #[test]
    fn test_known_statuses_have_distinct_tints() {
        let present = status_tint("present");
        let absent = status_tint("absent");
        let late = status_tint("late");
        assert_ne!(present, absent);
        assert_ne!(present, late);
        assert_ne!(absent, late);
    }

    #[test]
    fn test_unknown_status_gets_neutral_tint() {
        let neutral = status_tint("");
        assert_eq!(status_tint("excused"), neutral);
        assert_eq!(status_tint("???"), neutral);
        assert_ne!(status_tint("present"), neutral);
    }
}
