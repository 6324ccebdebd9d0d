//! Account, authentication and admin user endpoints.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_api::resources::accounts::{
//!     get_user_profile, login_user, set_csrf_token, UserLoginPayload,
//! };
//!
//! // Arm the cookie jar with a CSRF token first
//! set_csrf_token(&client).await?;
//!
//! login_user(&client, &UserLoginPayload::with_email("ada@example.com", "pw")).await?;
//! let me = get_user_profile(&client).await?;
//! println!("Hello {} {}", me.name, me.surname);
//! ```

use serde::{Deserialize, Serialize};

use super::{segment, MessageResponse};
use crate::clients::{ApiClient, HttpError, MultipartForm};

/// Payload for [`register_user`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRegisterPayload {
    /// Desired username.
    pub username: String,
    /// Email address; a verification link is sent here.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

/// Payload for [`login_user`].
///
/// Either `username` or `email` identifies the account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UserLoginPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Plain-text password.
    pub password: String,
}

impl UserLoginPayload {
    /// Login by username.
    #[must_use]
    pub fn with_username(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            email: None,
            password: password.into(),
        }
    }

    /// Login by email address.
    #[must_use]
    pub fn with_email(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: None,
            email: Some(email.into()),
            password: password.into(),
        }
    }
}

/// A user account as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: u64,
    pub username: String,
    pub email: String,
    /// Given name.
    pub name: String,
    pub surname: String,
    /// `false` until the email address is verified.
    pub is_active: bool,
    /// Grants access to the admin user and product endpoints.
    pub is_staff: bool,
}

/// Fields for [`update_profile`]; only present fields are sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProfileUpdatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
}

impl ProfileUpdatePayload {
    fn into_form(self) -> MultipartForm {
        let mut form = MultipartForm::new();
        if let Some(name) = self.name {
            form = form.text("name", name);
        }
        if let Some(surname) = self.surname {
            form = form.text("surname", surname);
        }
        form
    }
}

/// The profile record returned by [`update_profile`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub id: u64,
    pub name: String,
    pub surname: String,
    /// URL of the profile image, if one was uploaded.
    #[serde(default)]
    pub image: Option<String>,
}

/// A file to send to [`upload_profile_image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// File name reported in the multipart part.
    pub file_name: String,
    /// Content type of the part, e.g. `image/png`.
    pub mime_type: Option<String>,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Creates an upload from raw bytes.
    #[must_use]
    pub fn new(file_name: impl Into<String>, mime_type: Option<&str>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.map(String::from),
            bytes,
        }
    }
}

/// Response of [`upload_profile_image`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadImageResponse {
    /// Confirmation message.
    pub detail: String,
    /// URL of the stored image.
    pub image: String,
}

/// Payload for [`admin_create_user`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminCreateUserPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub surname: String,
    /// Defaults to `true` when deserialized without the field.
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_staff: bool,
}

const fn default_true() -> bool {
    true
}

/// Payload for [`update_user`]; only present fields are sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AdminUserUpdatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
}

/// Asks the backend to set the CSRF cookie.
///
/// With a [`crate::clients::CookieJar`] provider the cookie is captured and
/// attached to every following mutation.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn set_csrf_token(client: &ApiClient) -> Result<MessageResponse, HttpError> {
    client.get("/accounts/set-csrf-token").await
}

/// Registers a new account. The backend emails a verification link.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn register_user(
    client: &ApiClient,
    payload: &UserRegisterPayload,
) -> Result<MessageResponse, HttpError> {
    client.post("/accounts/register", payload).await
}

/// Confirms an email address with the `uid`/`token` pair from the link.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn verify_email(
    client: &ApiClient,
    uidb64: &str,
    token: &str,
) -> Result<MessageResponse, HttpError> {
    let path = format!(
        "/accounts/verify-email/{}/{}",
        segment(uidb64),
        segment(token)
    );
    client.get(&path).await
}

/// Logs in with username or email and password.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn login_user(
    client: &ApiClient,
    payload: &UserLoginPayload,
) -> Result<MessageResponse, HttpError> {
    client.post("/accounts/login", payload).await
}

/// Logs the current user out.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn logout_user(client: &ApiClient) -> Result<MessageResponse, HttpError> {
    client
        .post("/accounts/logout", &serde_json::json!({}))
        .await
}

/// Returns the logged-in user's account.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn get_user_profile(client: &ApiClient) -> Result<UserProfile, HttpError> {
    client.get("/accounts/profile").await
}

/// Updates the logged-in user's name and surname (multipart form).
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn update_profile(
    client: &ApiClient,
    payload: ProfileUpdatePayload,
) -> Result<Profile, HttpError> {
    client
        .patch_multipart("/accounts/profile", payload.into_form())
        .await
}

/// Uploads a new profile image, replacing any previous one.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn upload_profile_image(
    client: &ApiClient,
    image: ImageUpload,
) -> Result<UploadImageResponse, HttpError> {
    let form = MultipartForm::new().file(
        "image",
        image.file_name,
        image.mime_type.as_deref(),
        image.bytes,
    );
    client
        .post_multipart("/accounts/upload-profile-image", form)
        .await
}

/// Deletes the logged-in user's account.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn delete_account(client: &ApiClient) -> Result<MessageResponse, HttpError> {
    client.delete("/accounts/profile").await
}

/// Creates a user (superuser only).
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn admin_create_user(
    client: &ApiClient,
    payload: &AdminCreateUserPayload,
) -> Result<UserProfile, HttpError> {
    client.post("/accounts/users", payload).await
}

/// Fetches a user by id (staff only).
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn get_user_detail(client: &ApiClient, user_id: u64) -> Result<UserProfile, HttpError> {
    client.get(&format!("/accounts/users/{user_id}")).await
}

/// Partially updates a user (staff only).
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn update_user(
    client: &ApiClient,
    user_id: u64,
    payload: &AdminUserUpdatePayload,
) -> Result<UserProfile, HttpError> {
    client
        .patch(&format!("/accounts/users/{user_id}"), payload)
        .await
}

/// Deletes a user (superuser only).
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn delete_user(client: &ApiClient, user_id: u64) -> Result<MessageResponse, HttpError> {
    client.delete(&format!("/accounts/users/{user_id}")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_payload_omits_absent_identifier() {
        let json = serde_json::to_value(UserLoginPayload::with_email("a@b.c", "pw")).unwrap();
        assert_eq!(json, serde_json::json!({"email": "a@b.c", "password": "pw"}));
    }

    #[test]
    fn test_profile_update_form_only_has_present_fields() {
        let form = ProfileUpdatePayload {
            name: None,
            surname: Some("Lovelace".to_string()),
        }
        .into_form();

        assert_eq!(form.len(), 1);
        assert_eq!(form.text_value("surname"), Some("Lovelace"));
        assert!(form.text_value("name").is_none());
    }

    #[test]
    fn test_admin_update_payload_serializes_sparse() {
        let payload = AdminUserUpdatePayload {
            is_staff: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            serde_json::json!({"is_staff": true})
        );
    }

    #[test]
    fn test_admin_create_payload_defaults_flags() {
        let payload: AdminCreateUserPayload = serde_json::from_str(
            r#"{"username": "u", "email": "e@x.y", "password": "p", "name": "n", "surname": "s"}"#,
        )
        .unwrap();
        assert!(payload.is_active);
        assert!(!payload.is_staff);
    }

    #[test]
    fn test_profile_image_is_optional() {
        let profile: Profile =
            serde_json::from_str(r#"{"id": 1, "name": "Ada", "surname": "Lovelace"}"#).unwrap();
        assert!(profile.image.is_none());
    }
}
