use std::sync::{PoisonError, RwLock};

use mime::Mime;

use crate::domain::models::password_policy::{self, PasswordEvaluation};

/// Image handed over by the image picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileImage {
    bytes: Vec<u8>,
    file_name: String,
    content_type: Mime,
}

impl ProfileImage {
    pub fn new(bytes: Vec<u8>, file_name: impl Into<String>, content_type: Mime) -> Self {
        Self {
            bytes,
            file_name: file_name.into(),
            content_type,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &Mime {
        &self.content_type
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub profile_image: Option<ProfileImage>,
}

/// Message shown under the form after a failed submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionError {
    pub message: String,
}

impl SubmissionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Live form values plus the current error message.
///
/// Every write replaces a whole value under its own lock, so overlapping
/// writers end with one of the written values and never a mix.
#[derive(Debug, Default)]
pub struct FormFieldState {
    form: RwLock<RegistrationForm>,
    error: RwLock<Option<SubmissionError>>,
}

impl FormFieldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_full_name(&self, full_name: impl Into<String>) {
        self.write_form(|form| form.full_name = full_name.into());
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.write_form(|form| form.email = email.into());
    }

    /// Store the new password and return its fresh rule evaluation.
    pub fn set_password(&self, password: impl Into<String>) -> PasswordEvaluation {
        let password = password.into();
        let evaluation = password_policy::evaluate(&password);
        self.write_form(|form| form.password = password);
        evaluation
    }

    pub fn set_profile_image(&self, image: Option<ProfileImage>) {
        self.write_form(|form| form.profile_image = image);
    }

    /// Copy of the current values, taken at submit time.
    pub fn snapshot(&self) -> RegistrationForm {
        self.form
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn password_evaluation(&self) -> PasswordEvaluation {
        let form = self.form.read().unwrap_or_else(PoisonError::into_inner);
        password_policy::evaluate(&form.password)
    }

    /// Submit is only offered while the password meets every rule.
    pub fn can_submit(&self) -> bool {
        self.password_evaluation().is_valid()
    }

    pub fn error(&self) -> Option<SubmissionError> {
        self.error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_error(&self, error: SubmissionError) {
        *self.error.write().unwrap_or_else(PoisonError::into_inner) = Some(error);
    }

    pub fn clear_error(&self) {
        *self.error.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn write_form(&self, update: impl FnOnce(&mut RegistrationForm)) {
        let mut form = self.form.write().unwrap_or_else(PoisonError::into_inner);
        update(&mut form);
    }
}
