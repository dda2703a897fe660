use mongodb::bson::{oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};

/// A user document as stored in `coffeeDB.user`.
///
/// `email` is the de-facto natural key for the last-login patch, but no
/// unique index exists; duplicate emails are an accepted state and the
/// patch affects the first matching document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    #[serde(rename = "lastLoggedAt", skip_serializing_if = "Option::is_none")]
    pub last_logged_at: Option<DateTime>,
    /// Arbitrary additional fields submitted at creation.
    #[serde(flatten)]
    pub extra: Document,
}
