use crate::models::User;
use chrono::{DateTime, Utc};
use mongodb::bson;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email)]
    pub email: String,
    #[serde(rename = "lastLoggedAt")]
    pub last_logged_at: Option<DateTime<Utc>>,
    /// Any additional fields are stored as submitted.
    #[serde(flatten)]
    pub extra: Document,
}

impl From<CreateUserRequest> for User {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            id: None,
            email: req.email,
            last_logged_at: req.last_logged_at.map(bson::DateTime::from_chrono),
            extra: req.extra,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLastLoginRequest {
    #[validate(email)]
    pub email: String,
    #[serde(rename = "lastLoggedAt")]
    pub last_logged_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    #[serde(rename = "lastLoggedAt", skip_serializing_if = "Option::is_none")]
    pub last_logged_at: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            email: user.email,
            last_logged_at: user.last_logged_at.map(|dt| dt.to_chrono().to_rfc3339()),
            extra: user.extra,
        }
    }
}
