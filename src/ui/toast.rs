//! Transient toast notifications.
//!
//! One message at a time: a new notification replaces whatever is showing,
//! and the current one auto-hides after three seconds. There is no queue.

use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, Color32, CornerRadius, Margin, RichText};

use super::components::colors;

const SHOW_FOR: Duration = Duration::from_secs(3);

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

struct ToastMessage {
    text: String,
    kind: ToastKind,
    deadline: Instant,
}

/// Last-write-wins notification sink.
#[derive(Default)]
pub struct Toast {
    current: Option<ToastMessage>,
}

impl Toast {
    /// Display a message, replacing any pending one and restarting the timer.
    pub fn notify(&mut self, text: impl Into<String>, kind: ToastKind) {
        self.current = Some(ToastMessage {
            text: text.into(),
            kind,
            deadline: Instant::now() + SHOW_FOR,
        });
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.notify(text, ToastKind::Success);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.notify(text, ToastKind::Error);
    }

    /// The message still visible at `now`, dropping it once expired.
    pub(crate) fn visible_at(&mut self, now: Instant) -> Option<(&str, ToastKind, Instant)> {
        if let Some(msg) = &self.current
            && msg.deadline <= now
        {
            self.current = None;
        }
        self.current.as_ref().map(|m| (m.text.as_str(), m.kind, m.deadline))
    }

    /// Render the toast overlay and schedule the repaint that hides it.
    pub fn show(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let Some((text, kind, deadline)) = self.visible_at(now) else {
            return;
        };

        let fill = match kind {
            ToastKind::Success => colors::SUCCESS,
            ToastKind::Error => colors::ERROR,
        };

        egui::Area::new(egui::Id::new("toast"))
            .anchor(Align2::CENTER_BOTTOM, [0.0, -24.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(fill)
                    .inner_margin(Margin::symmetric(14, 8))
                    .corner_radius(CornerRadius::same(6))
                    .show(ui, |ui| {
                        ui.label(RichText::new(text).color(Color32::BLACK).strong());
                    });
            });

        ctx.request_repaint_after(deadline - now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sink_shows_nothing() {
        let mut toast = Toast::default();
        assert!(toast.visible_at(Instant::now()).is_none());
    }

    #[test]
    fn test_message_visible_then_expires() {
        let mut toast = Toast::default();
        toast.success("Saved");

        let now = Instant::now();
        let (text, kind, deadline) = toast.visible_at(now).expect("visible right away");
        assert_eq!(text, "Saved");
        assert_eq!(kind, ToastKind::Success);

        assert!(toast.visible_at(deadline + Duration::from_millis(1)).is_none());
        // And it stays gone
        assert!(toast.visible_at(deadline + Duration::from_secs(10)).is_none());
    }

    #[test]
    fn test_new_message_replaces_pending_one() {
        let mut toast = Toast::default();
        toast.success("first");
        toast.error("second");

        let (text, kind, _) = toast.visible_at(Instant::now()).unwrap();
        assert_eq!(text, "second");
        assert_eq!(kind, ToastKind::Error);
    }

    #[test]
    fn test_replacement_restarts_timer() {
        let mut toast = Toast::default();
        toast.success("first");
        let (_, _, first_deadline) = toast.visible_at(Instant::now()).unwrap();

        toast.success("second");
        let (_, _, second_deadline) = toast.visible_at(Instant::now()).unwrap();
        assert!(second_deadline >= first_deadline);
    }
}
