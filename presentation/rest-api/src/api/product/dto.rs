use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Owned category the product belongs to
    pub category_id: Uuid,
    /// Product name (cannot be empty)
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Units in stock (>= 0)
    pub quantity: i32,
    /// Unit price (>= 0)
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Owned category the product belongs to
    pub category_id: Uuid,
    /// Product name (cannot be empty)
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Units in stock (>= 0)
    pub quantity: i32,
    /// Unit price (>= 0)
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: String,
    pub category_id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub quantity: i32,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            category_id: product.category_id.to_string(),
            name: product.name,
            description: product.description,
            quantity: product.quantity,
            price: product.price,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
