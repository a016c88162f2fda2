use std::sync::Arc;

use tracing::info;

use crate::{
    domain::{
        gateways::{
            image_upload_gateway::ImageUploadGateway, registration_gateway::RegistrationGateway,
        },
        models::{
            form::{FormFieldState, ProfileImage},
            password_policy::PasswordEvaluation,
        },
        services::{
            email_validator::EmailValidator,
            session_service::{DurableStorage, Navigator, UserContextSink},
        },
    },
    usecase::register_user_usecase::{RegisterUserUsecase, SubmissionOutcome},
};

/* Signup form binding */

/// What the input widgets and the submit button talk to.
///
/// Clones share the same field state and controller.
pub struct SignupForm<R, I, V, S, C, N>
where
    R: RegistrationGateway,
    I: ImageUploadGateway,
    V: EmailValidator,
    S: DurableStorage,
    C: UserContextSink,
    N: Navigator,
{
    fields: Arc<FormFieldState>,
    usecase: Arc<RegisterUserUsecase<R, I, V, S, C, N>>,
}

impl<R, I, V, S, C, N> Clone for SignupForm<R, I, V, S, C, N>
where
    R: RegistrationGateway,
    I: ImageUploadGateway,
    V: EmailValidator,
    S: DurableStorage,
    C: UserContextSink,
    N: Navigator,
{
    fn clone(&self) -> Self {
        Self {
            fields: Arc::clone(&self.fields),
            usecase: Arc::clone(&self.usecase),
        }
    }
}

impl<R, I, V, S, C, N> SignupForm<R, I, V, S, C, N>
where
    R: RegistrationGateway,
    I: ImageUploadGateway,
    V: EmailValidator,
    S: DurableStorage,
    C: UserContextSink,
    N: Navigator,
{
    pub fn new(usecase: RegisterUserUsecase<R, I, V, S, C, N>) -> Self {
        Self {
            fields: Arc::new(FormFieldState::new()),
            usecase: Arc::new(usecase),
        }
    }

    pub fn fields(&self) -> &FormFieldState {
        &self.fields
    }

    // input events

    pub fn on_full_name_change(&self, value: impl Into<String>) {
        self.fields.set_full_name(value);
    }

    pub fn on_email_change(&self, value: impl Into<String>) {
        self.fields.set_email(value);
    }

    pub fn on_password_change(&self, value: impl Into<String>) -> PasswordEvaluation {
        self.fields.set_password(value)
    }

    pub fn on_image_selected(&self, image: Option<ProfileImage>) {
        self.fields.set_profile_image(image);
    }

    // view state

    /// One line per password rule, in rule order.
    pub fn password_checklist(&self) -> Vec<String> {
        self.fields
            .password_evaluation()
            .evaluations()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.fields.can_submit() && !self.usecase.is_submitting()
    }

    pub fn error_message(&self) -> Option<String> {
        self.fields.error().map(|e| e.message)
    }

    // submit

    pub async fn on_submit(&self) -> SubmissionOutcome
    where
        R: Send + Sync,
        I: Send + Sync,
        V: Send + Sync,
        S: Send + Sync,
        C: Send + Sync,
        N: Send + Sync,
    {
        info!("signup submitted");
        self.usecase.submit(&self.fields).await
    }
}
