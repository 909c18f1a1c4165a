//! Login / registration screen.

use eframe::egui::{self, RichText, TextEdit, Ui};

/// Which form the auth screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Auth form state.
#[derive(Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub in_flight: bool,
}

/// What the user asked the auth screen to do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Submit,
    ToggleMode,
}

impl AuthForm {
    /// Switch between login and register, keeping the typed email.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        self.name.clear();
        self.password.clear();
    }

    /// Back to a clean login form (after logout or session expiry).
    pub fn reset_to_login(&mut self) {
        *self = Self::default();
    }

    /// Check required fields before submitting.
    pub fn validate(&self) -> Result<(), String> {
        if self.mode == AuthMode::Register && self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        if self.email.trim().is_empty() {
            return Err("Email is required".to_string());
        }
        if self.password.is_empty() {
            return Err("Password is required".to_string());
        }
        Ok(())
    }
}

/// Show the auth screen.
pub fn show(form: &mut AuthForm, ui: &mut Ui) -> Option<AuthAction> {
    let mut action = None;

    let (title, submit_label, toggle_question, toggle_label) = match form.mode {
        AuthMode::Login => ("Admin Login", "Login", "Don't have an account?", "Register"),
        AuthMode::Register => ("Admin Register", "Register", "Already have an account?", "Login"),
    };

    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(RichText::new("Campus Admin").size(32.0).strong());
        ui.add_space(5.0);
        ui.label(RichText::new("School management console").size(14.0).weak());
        ui.add_space(30.0);

        ui.group(|ui| {
            ui.set_width(360.0);
            ui.add_space(10.0);
            ui.heading(title);
            ui.add_space(15.0);

            egui::Grid::new("auth_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    if form.mode == AuthMode::Register {
                        ui.label("Name:");
                        ui.add(TextEdit::singleline(&mut form.name).desired_width(220.0));
                        ui.end_row();
                    }

                    ui.label("Email:");
                    ui.add(TextEdit::singleline(&mut form.email).desired_width(220.0));
                    ui.end_row();

                    ui.label("Password:");
                    ui.add(TextEdit::singleline(&mut form.password).password(true).desired_width(220.0));
                    ui.end_row();
                });

            ui.add_space(15.0);

            ui.horizontal(|ui| {
                let submit = ui.add_enabled(!form.in_flight, egui::Button::new(submit_label));
                if submit.clicked() {
                    action = Some(AuthAction::Submit);
                }
                if form.in_flight {
                    ui.spinner();
                }
            });

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new(toggle_question).weak());
                if ui.link(toggle_label).clicked() {
                    action = Some(AuthAction::ToggleMode);
                }
            });
            ui.add_space(10.0);
        });
    });

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_switches_mode_and_clears_secrets() {
        let mut form = AuthForm {
            email: "a@x.com".into(),
            password: "pw".into(),
            ..Default::default()
        };

        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::Register);
        assert!(form.password.is_empty());
        assert_eq!(form.email, "a@x.com");

        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::Login);
    }

    #[test]
    fn test_login_does_not_require_name() {
        let form = AuthForm {
            email: "a@x.com".into(),
            password: "pw".into(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_register_requires_name() {
        let mut form = AuthForm {
            mode: AuthMode::Register,
            email: "a@x.com".into(),
            password: "pw".into(),
            ..Default::default()
        };
        assert!(form.validate().is_err());

        form.name = "Admin".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_missing_credentials_rejected() {
        let mut form = AuthForm::default();
        assert!(form.validate().is_err());

        form.email = "a@x.com".into();
        assert!(form.validate().is_err());

        form.password = "pw".into();
        assert!(form.validate().is_ok());
    }
}
