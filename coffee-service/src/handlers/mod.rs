pub mod coffee;
pub mod health;
pub mod user;

use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;

/// Path ids are opaque hex strings. A string that does not parse as an
/// ObjectId is rejected here, before any store round trip; a well-formed
/// id that matches nothing is not an error.
fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("invalid identifier '{}': {}", id, e))
    })
}
