use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::sale::model::Sale;
use business::domain::shared::value_objects::UserId;

use crate::money::decimal_to_price;

#[derive(Debug, FromRow)]
pub struct SaleEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub amount: i32,
    pub price: BigDecimal,
    pub sold_at: DateTime<Utc>,
}

impl SaleEntity {
    pub fn into_domain(self) -> Sale {
        Sale::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.product_id,
            self.name,
            self.description,
            self.amount,
            decimal_to_price(&self.price),
            self.sold_at,
        )
    }
}
