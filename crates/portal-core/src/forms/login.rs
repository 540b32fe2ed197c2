//! Login form state machine.

use std::collections::HashMap;

use crate::forms::rules;
use crate::forms::{FormPhase, SUBMIT_ERROR};
use crate::role::LoginRole;

/// State of the sign-in form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    email: String,
    password: String,
    role: LoginRole,
    errors: HashMap<String, String>,
    phase: FormPhase,
}

impl LoginForm {
    /// A fresh form with the given tab preselected.
    pub fn new(role: LoginRole) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    pub fn role(&self) -> LoginRole {
        self.role
    }

    pub fn set_role(&mut self, role: LoginRole) {
        self.role = role;
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Editing a field clears its error and returns the form to editing
    /// after a failed submission.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.field_edited("email");
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.field_edited("password");
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Runs validation and, when it passes, enters the submitting phase.
    ///
    /// Returns true exactly when the caller should issue the gateway call.
    /// A form already submitting returns false without touching anything:
    /// that is the reentrancy gate.
    pub fn try_submit(&mut self) -> bool {
        if self.phase == FormPhase::Submitting {
            return false;
        }
        self.phase = FormPhase::Validating;

        let mut errors = HashMap::new();
        if self.email.trim().is_empty() {
            errors.insert("email".into(), "Email is required".into());
        } else if !rules::valid_email(&self.email) {
            errors.insert("email".into(), "Please enter a valid email address".into());
        }
        if self.password.is_empty() {
            errors.insert("password".into(), "Password is required".into());
        } else if self.password.len() < rules::LOGIN_PASSWORD_MIN {
            errors.insert(
                "password".into(),
                format!("Password must be at least {} characters", rules::LOGIN_PASSWORD_MIN),
            );
        }

        if errors.is_empty() {
            self.errors.clear();
            self.phase = FormPhase::Submitting;
            true
        } else {
            self.errors = errors;
            self.phase = FormPhase::Editing;
            false
        }
    }

    /// Records a gateway failure as the single `submit` error. The form is
    /// retryable: the next edit or submit attempt leaves the failed phase.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.errors.clear();
        self.errors.insert(SUBMIT_ERROR.into(), message.into());
        self.phase = FormPhase::Failed;
    }

    pub fn submit_succeeded(&mut self) {
        self.errors.clear();
        self.phase = FormPhase::Succeeded;
    }

    fn field_edited(&mut self, field: &str) {
        self.errors.remove(field);
        self.errors.remove(SUBMIT_ERROR);
        if matches!(self.phase, FormPhase::Failed | FormPhase::Succeeded) {
            self.phase = FormPhase::Editing;
        }
    }
}
