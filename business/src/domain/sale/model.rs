use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::SaleError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

/// A sold quantity of a product, frozen at the time of sale.
///
/// Name, description and price are copied from the product so the record
/// survives later edits or deletion of the product.
#[derive(Debug, Clone)]
pub struct Sale {
    pub id: Uuid,
    pub user_id: UserId,
    pub product_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub amount: i32,
    pub price: f64,
    pub sold_at: DateTime<Utc>,
}

impl Sale {
    pub fn of_product(product: &Product, seller: UserId, amount: i32) -> Result<Self, SaleError> {
        if amount <= 0 {
            return Err(SaleError::InvalidAmount);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id: seller,
            product_id: Some(product.id),
            name: product.name.clone(),
            description: product.description.clone(),
            amount,
            price: product.price,
            sold_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        product_id: Option<Uuid>,
        name: String,
        description: Option<String>,
        amount: i32,
        price: f64,
        sold_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            product_id,
            name,
            description,
            amount,
            price,
            sold_at,
        }
    }

    pub fn total(&self) -> f64 {
        f64::from(self.amount) * self.price
    }
}
