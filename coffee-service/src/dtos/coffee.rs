use crate::models::Coffee;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateCoffeeRequest {
    pub name: String,
    pub quantity: i64,
    pub supplier: String,
    pub taste: String,
    pub category: String,
    pub details: String,
    pub photo: String,
}

impl From<CreateCoffeeRequest> for Coffee {
    fn from(req: CreateCoffeeRequest) -> Self {
        Self {
            id: None,
            name: Some(req.name),
            quantity: Some(req.quantity),
            supplier: Some(req.supplier),
            taste: Some(req.taste),
            category: Some(req.category),
            details: Some(req.details),
            photo: Some(req.photo),
        }
    }
}

/// Body of the PUT full replacement. Every field is optional on the wire,
/// but the replacement writes all seven regardless; omitted fields are
/// stored as null, not left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct ReplaceCoffeeRequest {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub supplier: Option<String>,
    pub taste: Option<String>,
    pub category: Option<String>,
    pub details: Option<String>,
    pub photo: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CoffeeResponse {
    pub id: String,
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub supplier: Option<String>,
    pub taste: Option<String>,
    pub category: Option<String>,
    pub details: Option<String>,
    pub photo: Option<String>,
}

impl From<Coffee> for CoffeeResponse {
    fn from(coffee: Coffee) -> Self {
        Self {
            id: coffee.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: coffee.name,
            quantity: coffee.quantity,
            supplier: coffee.supplier,
            taste: coffee.taste,
            category: coffee.category,
            details: coffee.details,
            photo: coffee.photo,
        }
    }
}
