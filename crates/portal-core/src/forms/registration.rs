//! Registration form state machine.
//!
//! One form serves both tabs: the common fields are always validated, the
//! role-specific block depends on the active tab, and both agreements are
//! required regardless.

use std::collections::HashMap;

use crate::forms::rules;
use crate::forms::{FormPhase, SUBMIT_ERROR};
use crate::role::LoginRole;

/// Field names, shared between the form, its error map and the callers
/// that build gateway requests from it.
pub mod fields {
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirm_password";
    // Student tab
    pub const STUDENT_ID: &str = "student_id";
    pub const UNIVERSITY: &str = "university";
    pub const DEPARTMENT: &str = "department";
    pub const GRADUATION_YEAR: &str = "graduation_year";
    // Recruiter tab
    pub const COMPANY_NAME: &str = "company_name";
    pub const POSITION: &str = "position";
    pub const COMPANY_WEBSITE: &str = "company_website";
    pub const COMPANY_SIZE: &str = "company_size";
    // Agreements
    pub const AGREE_TERMS: &str = "agree_to_terms";
    pub const AGREE_PRIVACY: &str = "agree_to_privacy";
}

/// State of the account-creation form.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    role: LoginRole,
    values: HashMap<String, String>,
    agree_to_terms: bool,
    agree_to_privacy: bool,
    errors: HashMap<String, String>,
    phase: FormPhase,
}

impl RegistrationForm {
    pub fn new(role: LoginRole) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    pub fn role(&self) -> LoginRole {
        self.role
    }

    /// Switching tabs keeps typed values but drops stale errors.
    pub fn set_role(&mut self, role: LoginRole) {
        if self.role != role {
            self.role = role;
            self.errors.clear();
            self.phase = FormPhase::Editing;
        }
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set_value(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
        self.field_edited(field);
    }

    pub fn set_agreements(&mut self, terms: bool, privacy: bool) {
        self.agree_to_terms = terms;
        self.agree_to_privacy = privacy;
        self.field_edited(fields::AGREE_TERMS);
        self.errors.remove(fields::AGREE_PRIVACY);
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

    /// Runs the full rule set and enters the submitting phase on success.
    /// Same contract as [`LoginForm::try_submit`](super::LoginForm::try_submit):
    /// true means "make exactly one gateway call now".
    pub fn try_submit(&mut self) -> bool {
        if self.phase == FormPhase::Submitting {
            return false;
        }
        self.phase = FormPhase::Validating;

        let errors = self.run_rules();
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

    /// Records a gateway failure. Per-field messages from the backend are
    /// merged under their field names next to the single `submit` error.
    pub fn submit_failed(
        &mut self,
        message: impl Into<String>,
        field_errors: &HashMap<String, String>,
    ) {
        self.errors.clear();
        self.errors.insert(SUBMIT_ERROR.into(), message.into());
        for (field, error) in field_errors {
            self.errors.insert(field.clone(), error.clone());
        }
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

    fn run_rules(&self) -> HashMap<String, String> {
        let mut errors = HashMap::new();
        let mut require = |field: &str, message: &str, errors: &mut HashMap<String, String>| {
            if self.value(field).trim().is_empty() {
                errors.insert(field.into(), message.into());
                return false;
            }
            true
        };

        require(fields::FIRST_NAME, "First name is required", &mut errors);
        require(fields::LAST_NAME, "Last name is required", &mut errors);

        if require(fields::EMAIL, "Email is required", &mut errors)
            && !rules::valid_email(self.value(fields::EMAIL))
        {
            errors.insert(
                fields::EMAIL.into(),
                "Please enter a valid email address".into(),
            );
        }

        let password = self.value(fields::PASSWORD);
        if password.is_empty() {
            errors.insert(fields::PASSWORD.into(), "Password is required".into());
        } else if password.len() < rules::REGISTRATION_PASSWORD_MIN {
            errors.insert(
                fields::PASSWORD.into(),
                format!(
                    "Password must be at least {} characters",
                    rules::REGISTRATION_PASSWORD_MIN
                ),
            );
        } else if !rules::has_required_character_classes(password) {
            errors.insert(
                fields::PASSWORD.into(),
                "Password must contain uppercase, lowercase, and number".into(),
            );
        }

        let confirm = self.value(fields::CONFIRM_PASSWORD);
        if confirm.is_empty() {
            errors.insert(
                fields::CONFIRM_PASSWORD.into(),
                "Please confirm your password".into(),
            );
        } else if confirm != password {
            errors.insert(fields::CONFIRM_PASSWORD.into(), "Passwords do not match".into());
        }

        if require(fields::PHONE, "Phone number is required", &mut errors)
            && !rules::valid_phone(self.value(fields::PHONE))
        {
            errors.insert(
                fields::PHONE.into(),
                "Please enter a valid phone number".into(),
            );
        }

        match self.role {
            LoginRole::Student => {
                require(fields::STUDENT_ID, "Student ID is required", &mut errors);
                require(fields::UNIVERSITY, "University is required", &mut errors);
                require(fields::DEPARTMENT, "Department is required", &mut errors);
                require(
                    fields::GRADUATION_YEAR,
                    "Graduation year is required",
                    &mut errors,
                );
            }
            LoginRole::Recruiter => {
                require(fields::COMPANY_NAME, "Company name is required", &mut errors);
                require(fields::POSITION, "Your position is required", &mut errors);
                if require(
                    fields::COMPANY_WEBSITE,
                    "Company website is required",
                    &mut errors,
                ) && !rules::valid_website(self.value(fields::COMPANY_WEBSITE))
                {
                    errors.insert(
                        fields::COMPANY_WEBSITE.into(),
                        "Please enter a valid website URL".into(),
                    );
                }
                require(fields::COMPANY_SIZE, "Company size is required", &mut errors);
            }
        }

        if !self.agree_to_terms {
            errors.insert(
                fields::AGREE_TERMS.into(),
                "You must agree to the terms and conditions".into(),
            );
        }
        if !self.agree_to_privacy {
            errors.insert(
                fields::AGREE_PRIVACY.into(),
                "You must agree to the privacy policy".into(),
            );
        }

        errors
    }
}
