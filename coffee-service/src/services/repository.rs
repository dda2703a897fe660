use crate::dtos::ReplaceCoffeeRequest;
use crate::models::{Coffee, User};
use crate::services::metrics::record_store_op;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::options::UpdateOptions;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use mongodb::{Collection, Database};
use service_core::error::AppError;

/// Typed handles on the two collections, plus the operation primitives the
/// router uses. One instance is shared by all in-flight requests; the
/// driver's internal pool handles concurrent use.
#[derive(Clone)]
pub struct CoffeeRepository {
    coffee_collection: Collection<Coffee>,
    user_collection: Collection<User>,
}

impl CoffeeRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            coffee_collection: db.collection("coffee"),
            user_collection: db.collection("user"),
        }
    }

    pub async fn list_coffee(&self) -> Result<Vec<Coffee>, AppError> {
        record_store_op("coffee", "find");
        let cursor = self.coffee_collection.find(None, None).await?;
        Ok(cursor.try_collect().await?)
    }

    /// `Ok(None)` when no document matches; absence is not an error.
    pub async fn find_coffee(&self, id: ObjectId) -> Result<Option<Coffee>, AppError> {
        record_store_op("coffee", "find_one");
        let coffee = self
            .coffee_collection
            .find_one(doc! { "_id": id }, None)
            .await?;
        Ok(coffee)
    }

    pub async fn insert_coffee(&self, coffee: Coffee) -> Result<InsertOneResult, AppError> {
        record_store_op("coffee", "insert_one");
        let result = self.coffee_collection.insert_one(coffee, None).await?;
        Ok(result)
    }

    /// Full replacement of the seven content fields, upserting when the id
    /// does not match. The `$set` document always contains all seven;
    /// fields absent from the request are written as null, never skipped.
    pub async fn replace_coffee_fields(
        &self,
        id: ObjectId,
        fields: &ReplaceCoffeeRequest,
    ) -> Result<UpdateResult, AppError> {
        record_store_op("coffee", "update_one");
        let update = doc! { "$set": replacement_document(fields) };
        let options = UpdateOptions::builder().upsert(true).build();
        let result = self
            .coffee_collection
            .update_one(doc! { "_id": id }, update, options)
            .await?;
        Ok(result)
    }

    pub async fn delete_coffee(&self, id: ObjectId) -> Result<DeleteResult, AppError> {
        record_store_op("coffee", "delete_one");
        let result = self
            .coffee_collection
            .delete_one(doc! { "_id": id }, None)
            .await?;
        Ok(result)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        record_store_op("user", "find");
        let cursor = self.user_collection.find(None, None).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn insert_user(&self, user: User) -> Result<InsertOneResult, AppError> {
        record_store_op("user", "insert_one");
        let result = self.user_collection.insert_one(user, None).await?;
        Ok(result)
    }

    /// Sets only `lastLoggedAt` on the first document matching `email`.
    /// No upsert: an unknown email yields a zero-count acknowledgment.
    /// Kept separate from the coffee replacement; the two updates have
    /// deliberately different semantics.
    pub async fn update_last_login(
        &self,
        email: &str,
        logged_at: DateTime,
    ) -> Result<UpdateResult, AppError> {
        record_store_op("user", "update_one");
        let result = self
            .user_collection
            .update_one(
                doc! { "email": email },
                doc! { "$set": { "lastLoggedAt": logged_at } },
                None,
            )
            .await?;
        Ok(result)
    }

    pub async fn delete_user(&self, id: ObjectId) -> Result<DeleteResult, AppError> {
        record_store_op("user", "delete_one");
        let result = self
            .user_collection
            .delete_one(doc! { "_id": id }, None)
            .await?;
        Ok(result)
    }
}

// None converts to Bson::Null, which is exactly the replacement semantics:
// an omitted field is wiped, not left untouched.
fn replacement_document(fields: &ReplaceCoffeeRequest) -> Document {
    doc! {
        "name": fields.name.clone(),
        "quantity": fields.quantity,
        "supplier": fields.supplier.clone(),
        "taste": fields.taste.clone(),
        "category": fields.category.clone(),
        "details": fields.details.clone(),
        "photo": fields.photo.clone(),
    }
}
