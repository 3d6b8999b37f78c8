use chrono::{DateTime, Utc};
use model::entities::{user, user_preferences, user_profile};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for registering an account
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct UserCreate {
    /// Letters and digits only
    #[validate(
        length(min = 1, max = 50),
        custom(function = "crate::validation::validate_username")
    )]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Account fields that can be changed after registration
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct UserUpdate {
    #[validate(
        length(min = 1, max = 50),
        custom(function = "crate::validation::validate_username")
    )]
    pub username: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    /// New plaintext password; stored hashed
    #[validate(length(min = 1))]
    pub password: Option<String>,
}

/// Role and activation flags; absent flags are left unchanged
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserStatusUpdate {
    pub is_active: Option<bool>,
    pub is_admin: Option<bool>,
}

impl UserStatusUpdate {
    pub fn active(flag: bool) -> Self {
        Self {
            is_active: Some(flag),
            is_admin: None,
        }
    }

    pub fn admin(flag: bool) -> Self {
        Self {
            is_active: None,
            is_admin: Some(flag),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct UserProfileUpdate {
    #[validate(length(max = 100))]
    pub first_name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
    #[validate(length(max = 50))]
    pub phone_number: Option<String>,
    #[validate(length(max = 200))]
    pub company_name: Option<String>,
}

/// Preferences carry no settings yet; the update only touches the row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserPreferencesUpdate {}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserProfileResponse {
    pub id: i32,
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub company_name: String,
}

impl From<user_profile::Model> for UserProfileResponse {
    fn from(model: user_profile::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            first_name: model.first_name,
            last_name: model.last_name,
            phone_number: model.phone_number,
            company_name: model.company_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserPreferencesResponse {
    pub id: i32,
    pub user_id: i32,
}

impl From<user_preferences::Model> for UserPreferencesResponse {
    fn from(model: user_preferences::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
        }
    }
}

/// Public view of an account. The password hash is never exposed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub is_admin: bool,
    pub profile: Option<UserProfileResponse>,
    pub preferences: Option<UserPreferencesResponse>,
}

impl
    From<(
        user::Model,
        Option<user_profile::Model>,
        Option<user_preferences::Model>,
    )> for UserResponse
{
    fn from(
        (model, profile, preferences): (
            user::Model,
            Option<user_profile::Model>,
            Option<user_preferences::Model>,
        ),
    ) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            is_active: model.is_active,
            is_admin: model.is_admin,
            profile: profile.map(UserProfileResponse::from),
            preferences: preferences.map(UserPreferencesResponse::from),
        }
    }
}

/// Credentials for `POST /login` and `POST /token`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    /// Expiry instant of the token (UTC)
    pub exp: DateTime<Utc>,
    /// Always `bearer`
    pub token_type: String,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(username: &str, email: &str) -> UserCreate {
        UserCreate {
            username: username.to_string(),
            email: email.to_string(),
            password: "x".to_string(),
        }
    }

    #[test]
    fn test_username_must_be_alphanumeric() {
        assert!(create("diver1", "a@b.com").validate().is_ok());
        assert!(create("diver_1", "a@b.com").validate().is_err());
        assert!(create("", "a@b.com").validate().is_err());
    }

    #[test]
    fn test_email_must_be_valid() {
        assert!(create("diver1", "not-an-email").validate().is_err());
    }

    #[test]
    fn test_response_never_carries_password_hash() {
        let model = user::Model {
            id: 7,
            username: "diver1".to_string(),
            email: "a@b.com".to_string(),
            hashed_password: "$2b$04$secret".to_string(),
            is_active: false,
            is_admin: false,
        };
        let json = serde_json::to_string(&UserResponse::from((model, None, None))).unwrap();
        assert!(!json.contains("secret"));
        assert!(!json.contains("hashed_password"));
    }
}
