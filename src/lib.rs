//! Client-side signup workflow: form state, password policy, and the
//! validate → upload → register → session hand-off pipeline.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod presentation;
pub mod usecase;

use crate::{
    config::{ClientConfig, ConfigError},
    infrastructure::{
        api_client::ApiClient, file_storage::FileStorage,
        http_image_upload_gateway::HttpImageUploadGateway,
        http_registration_gateway::HttpRegistrationGateway,
        in_memory_user_context::InMemoryUserContext, regex_email_validator::RegexEmailValidator,
        watch_navigator::WatchNavigator,
    },
    presentation::signup_form::SignupForm,
    usecase::register_user_usecase::RegisterUserUsecase,
};

pub type HttpSignupForm = SignupForm<
    HttpRegistrationGateway,
    HttpImageUploadGateway,
    RegexEmailValidator,
    FileStorage,
    InMemoryUserContext,
    WatchNavigator,
>;

/// Signup form wired to the HTTP API, plus handles on the collaborators the
/// rest of the app reads from after a successful signup.
#[derive(Clone)]
pub struct SignupClient {
    pub form: HttpSignupForm,
    pub storage: FileStorage,
    pub user_context: InMemoryUserContext,
    pub navigator: WatchNavigator,
}

pub fn build_signup_client(config: &ClientConfig) -> Result<SignupClient, ConfigError> {
    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()?;
    let api = ApiClient::new(http, config.api_base_url.clone());

    let registration_gateway =
        HttpRegistrationGateway::with_path(api.clone(), config.register_path.clone());
    let image_upload_gateway =
        HttpImageUploadGateway::with_path(api.clone(), config.upload_image_path.clone());
    let storage = FileStorage::new(config.storage_path.clone());
    let user_context = InMemoryUserContext::new();
    let navigator = WatchNavigator::new();

    let usecase = RegisterUserUsecase::new(
        registration_gateway,
        image_upload_gateway,
        RegexEmailValidator::new(),
        storage.clone(),
        user_context.clone(),
        navigator.clone(),
    )
    .with_default_avatar_url(config.default_avatar_url.clone());

    Ok(SignupClient {
        form: SignupForm::new(usecase),
        storage,
        user_context,
        navigator,
    })
}

#[cfg(test)]
mod tests {
    use axum::{
        Json, Router,
        extract::Multipart,
        http::StatusCode,
        response::IntoResponse,
        routing::post,
    };
    use rstest::*;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    use crate::{
        domain::{
            models::form::ProfileImage,
            services::session_service::{DASHBOARD_ROUTE, DurableStorage, TOKEN_STORAGE_KEY},
        },
        infrastructure::{
            api_client::{REGISTER_PATH, UPLOAD_IMAGE_PATH},
            test_server,
        },
        usecase::register_user_usecase::SubmissionOutcome,
    };

    use super::*;

    async fn upload_image(mut multipart: Multipart) -> impl IntoResponse {
        while let Some(field) = multipart.next_field().await.unwrap() {
            if field.name() == Some("image") {
                let file_name = field.file_name().unwrap_or_default().to_string();
                return Json(json!({ "imageUrl": format!("https://cdn.example.com/{}", file_name) }))
                    .into_response();
            }
        }
        (StatusCode::BAD_REQUEST, Json(json!({ "message": "No file uploaded" }))).into_response()
    }

    async fn register(Json(body): Json<Value>) -> impl IntoResponse {
        match body["email"].as_str() {
            Some("taken@example.com") => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "message": "Email already in use" })),
                )
                    .into_response();
            }
            Some("partial@example.com") => {
                return (
                    StatusCode::CREATED,
                    Json(json!({ "token": "abc", "user": { "_id": "u1", "email": body["email"] } })),
                )
                    .into_response();
            }
            Some("quiet@example.com") => return StatusCode::CREATED.into_response(),
            _ => {}
        }
        (
            StatusCode::CREATED,
            Json(json!({
                "token": "abc",
                "user": {
                    "_id": "665f1c2e9b1e8a0012345678",
                    "fullName": body["fullName"],
                    "email": body["email"],
                    "profileImageUrl": body["profileImageUrl"],
                },
            })),
        )
            .into_response()
    }

    struct Fixture {
        client: SignupClient,
        _dir: TempDir,
    }

    #[fixture]
    async fn fixture() -> Fixture {
        let router = Router::new()
            .route(REGISTER_PATH, post(register))
            .route(UPLOAD_IMAGE_PATH, post(upload_image));
        let api = test_server::spawn(router).await;
        let dir = tempfile::tempdir().unwrap();

        let config = ClientConfig {
            api_base_url: api.url(""),
            storage_path: dir.path().join("storage.json"),
            ..ClientConfig::default()
        };

        Fixture {
            client: build_signup_client(&config).unwrap(),
            _dir: dir,
        }
    }

    fn fill(form: &HttpSignupForm, email: &str) {
        form.on_full_name_change("Jane Doe");
        form.on_email_change(email);
        form.on_password_change("Abcdef1!");
    }

    #[rstest]
    #[tokio::test]
    async fn test_signup_with_image_end_to_end(#[future] fixture: Fixture) {
        let fixture = fixture.await;
        let client = &fixture.client;
        fill(&client.form, "jane@example.com");
        client.form.on_image_selected(Some(ProfileImage::new(
            vec![0xff, 0xd8, 0xff],
            "jane.jpg",
            mime::IMAGE_JPEG,
        )));
        let mut routes = client.navigator.subscribe();

        let outcome = client.form.on_submit().await;

        let SubmissionOutcome::Authenticated(session) = outcome else {
            panic!("expected authenticated outcome");
        };
        assert_eq!(
            session.user().profile_image_url(),
            Some("https://cdn.example.com/jane.jpg")
        );
        assert_eq!(
            client.storage.get_item(TOKEN_STORAGE_KEY).unwrap(),
            Some("abc".to_string())
        );
        assert_eq!(
            client.user_context.current_user().unwrap().id(),
            Some("665f1c2e9b1e8a0012345678")
        );
        assert!(routes.has_changed().unwrap());
        assert_eq!(routes.borrow_and_update().as_deref(), Some(DASHBOARD_ROUTE));
    }

    #[rstest]
    #[tokio::test]
    async fn test_signup_without_image_sends_default_avatar(#[future] fixture: Fixture) {
        let fixture = fixture.await;
        let client = &fixture.client;
        fill(&client.form, "jane@example.com");

        let outcome = client.form.on_submit().await;

        let SubmissionOutcome::Authenticated(session) = outcome else {
            panic!("expected authenticated outcome");
        };
        assert_eq!(
            session.user().profile_image_url(),
            Some(crate::domain::models::registration::DEFAULT_AVATAR_URL)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_signup_taken_email(#[future] fixture: Fixture) {
        let fixture = fixture.await;
        let client = &fixture.client;
        fill(&client.form, "taken@example.com");

        client.form.on_submit().await;

        assert_eq!(
            client.form.error_message().as_deref(),
            Some("Email already in use")
        );
        assert_eq!(client.storage.get_item(TOKEN_STORAGE_KEY).unwrap(), None);
        assert_eq!(client.user_context.current_user(), None);
        assert_eq!(client.navigator.current_route(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn test_signup_with_partial_user(#[future] fixture: Fixture) {
        let fixture = fixture.await;
        let client = &fixture.client;
        fill(&client.form, "partial@example.com");

        let outcome = client.form.on_submit().await;

        assert!(matches!(outcome, SubmissionOutcome::Authenticated(_)));
        assert_eq!(client.form.error_message(), None);
        assert_eq!(
            client.storage.get_item(TOKEN_STORAGE_KEY).unwrap(),
            Some("abc".to_string())
        );
        let user = client.user_context.current_user().unwrap();
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({ "_id": "u1", "email": "partial@example.com" })
        );
        assert_eq!(client.navigator.current_route().as_deref(), Some(DASHBOARD_ROUTE));
    }

    #[rstest]
    #[tokio::test]
    async fn test_signup_with_empty_success_body(#[future] fixture: Fixture) {
        let fixture = fixture.await;
        let client = &fixture.client;
        fill(&client.form, "quiet@example.com");

        let outcome = client.form.on_submit().await;

        assert!(matches!(outcome, SubmissionOutcome::MissingToken));
        assert_eq!(client.form.error_message(), None);
        assert_eq!(client.storage.get_item(TOKEN_STORAGE_KEY).unwrap(), None);
        assert_eq!(client.user_context.current_user(), None);
        assert_eq!(client.navigator.current_route(), None);
    }
}
