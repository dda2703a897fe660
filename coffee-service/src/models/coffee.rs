use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A coffee document as stored in `coffeeDB.coffee`.
///
/// Every content field is optional: the PUT full replacement writes null
/// into any field the caller omitted, so stored documents can legitimately
/// carry null in all seven.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coffee {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub supplier: Option<String>,
    pub taste: Option<String>,
    pub category: Option<String>,
    pub details: Option<String>,
    pub photo: Option<String>,
}
