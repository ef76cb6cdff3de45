use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;

use crate::money::decimal_to_price;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.category_id,
            self.name,
            self.description,
            self.quantity,
            decimal_to_price(&self.price),
            self.created_at,
            self.updated_at,
        )
    }
}
