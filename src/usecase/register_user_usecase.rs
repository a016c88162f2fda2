use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use crate::domain::{
    error::{StorageError, SubmitError, ValidationError},
    gateways::{image_upload_gateway::ImageUploadGateway, registration_gateway::RegistrationGateway},
    models::{
        form::{FormFieldState, ProfileImage, RegistrationForm, SubmissionError},
        password_policy,
        registration::{DEFAULT_AVATAR_URL, RegistrationPayload, Session},
        user::ImageUrl,
    },
    services::{
        email_validator::EmailValidator,
        session_service::{DASHBOARD_ROUTE, DurableStorage, Navigator, TOKEN_STORAGE_KEY, UserContextSink},
    },
};

/// How a single submit ended
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Token stored, user pushed, dashboard requested.
    Authenticated(Session),
    /// The error field was set from this error.
    Failed(SubmitError),
    /// Server accepted the signup but sent no token; nothing was persisted.
    MissingToken,
    /// Another submit was still running; nothing was touched.
    AlreadySubmitting,
}

/// Submission controller for the signup form.
///
/// Runs validation, the optional image upload, the registration call and the
/// session hand-off in order, stopping at the first failure and reporting it
/// through the form's error field.
pub struct RegisterUserUsecase<R, I, V, S, C, N>
where
    R: RegistrationGateway,
    I: ImageUploadGateway,
    V: EmailValidator,
    S: DurableStorage,
    C: UserContextSink,
    N: Navigator,
{
    registration_gateway: R,
    image_upload_gateway: I,
    email_validator: V,
    storage: S,
    user_context: C,
    navigator: N,
    default_avatar_url: ImageUrl,
    in_flight: AtomicBool,
}

impl<R, I, V, S, C, N> RegisterUserUsecase<R, I, V, S, C, N>
where
    R: RegistrationGateway,
    I: ImageUploadGateway,
    V: EmailValidator,
    S: DurableStorage,
    C: UserContextSink,
    N: Navigator,
{
    pub fn new(
        registration_gateway: R,
        image_upload_gateway: I,
        email_validator: V,
        storage: S,
        user_context: C,
        navigator: N,
    ) -> Self {
        Self {
            registration_gateway,
            image_upload_gateway,
            email_validator,
            storage,
            user_context,
            navigator,
            default_avatar_url: DEFAULT_AVATAR_URL.to_string(),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn with_default_avatar_url(mut self, url: impl Into<ImageUrl>) -> Self {
        self.default_avatar_url = url.into();
        self
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Local checks, in the order the form reports them.
    pub fn validate(&self, form: &RegistrationForm) -> Result<(), ValidationError> {
        if form.full_name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if !self.email_validator.is_valid(&form.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !password_policy::evaluate(&form.password).is_valid() {
            return Err(ValidationError::PasswordRequirements);
        }
        Ok(())
    }

    pub async fn submit(&self, fields: &FormFieldState) -> SubmissionOutcome
    where
        R: Send + Sync,
        I: Send + Sync,
        V: Send + Sync,
        S: Send + Sync,
        C: Send + Sync,
        N: Send + Sync,
    {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            debug!("submit ignored, a submission is already in flight");
            return SubmissionOutcome::AlreadySubmitting;
        };

        let span = info_span!("signup_submit", attempt = %Uuid::new_v4());
        let form = fields.snapshot();

        match self.run(form, fields).instrument(span).await {
            Ok(Some(session)) => SubmissionOutcome::Authenticated(session),
            Ok(None) => SubmissionOutcome::MissingToken,
            Err(error) => {
                fields.set_error(SubmissionError::new(error.user_message()));
                SubmissionOutcome::Failed(error)
            }
        }
    }

    async fn run(
        &self,
        form: RegistrationForm,
        fields: &FormFieldState,
    ) -> Result<Option<Session>, SubmitError>
    where
        R: Send + Sync,
        I: Send + Sync,
    {
        if let Err(e) = self.validate(&form) {
            debug!(reason = %e, "signup form rejected");
            return Err(e.into());
        }
        fields.clear_error();

        let profile_image_url = self.resolve_profile_image(form.profile_image.as_ref()).await?;

        let payload = RegistrationPayload {
            full_name: form.full_name,
            email: form.email,
            password: form.password,
            profile_image_url,
        };

        info!("submitting registration");
        let response = self
            .registration_gateway
            .register(&payload)
            .await
            .map_err(|e| {
                warn!(error = %e, "registration failed");
                SubmitError::Registration(e)
            })?;

        if response.token().is_none() {
            warn!("registration succeeded without a token, staying on the form");
            return Ok(None);
        }
        let (Some(token), Some(user)) = (response.token, response.user) else {
            warn!("registration response has a token but no user");
            return Err(SubmitError::IncompleteResponse);
        };

        let session = Session::new(token, user);
        self.establish_session(&session).map_err(|e| {
            warn!(error = %e, "failed to persist session token");
            SubmitError::Session(e)
        })?;

        info!(user_id = ?session.user().id(), "signup complete");
        Ok(Some(session))
    }

    /// Default avatar unless an image was picked and the store returned a URL.
    async fn resolve_profile_image(
        &self,
        image: Option<&ProfileImage>,
    ) -> Result<ImageUrl, SubmitError>
    where
        I: Send + Sync,
    {
        let Some(image) = image else {
            return Ok(self.default_avatar_url.clone());
        };

        info!(file_name = image.file_name(), size = image.bytes().len(), "uploading profile image");
        let url = self.image_upload_gateway.upload(image).await.map_err(|e| {
            warn!(error = %e, "profile image upload failed");
            SubmitError::Upload(e)
        })?;

        Ok(url
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| self.default_avatar_url.clone()))
    }

    // token first: if it can't be stored, nobody else hears about the session
    fn establish_session(&self, session: &Session) -> Result<(), StorageError> {
        self.storage.set_item(TOKEN_STORAGE_KEY, session.token())?;
        self.user_context.update_user(session.user().clone());
        self.navigator.navigate(DASHBOARD_ROUTE);
        Ok(())
    }
}

/// Holds the in-flight flag for the lifetime of one submission.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
