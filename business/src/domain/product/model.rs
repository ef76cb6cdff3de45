use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;

/// Largest price a `NUMERIC(12, 2)` column can hold.
pub const MAX_PRICE: f64 = 9_999_999_999.99;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Units in stock.
    pub quantity: i32,
    /// Unit price.
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a caller may set when creating or replacing a product.
pub struct ProductDetails {
    pub category_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub price: f64,
}

impl ProductDetails {
    fn validated(self) -> Result<Self, ProductError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if self.quantity < 0 {
            return Err(ProductError::NegativeQuantity);
        }
        if !self.price.is_finite() || self.price < 0.0 || self.price > MAX_PRICE {
            return Err(ProductError::InvalidPrice);
        }
        let price = (self.price * 100.0).round() / 100.0;

        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self {
            name: name.to_string(),
            description,
            price,
            ..self
        })
    }
}

impl Product {
    pub fn new(details: ProductDetails) -> Result<Self, ProductError> {
        let details = details.validated()?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            category_id: details.category_id,
            name: details.name,
            description: details.description,
            quantity: details.quantity,
            price: details.price,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        category_id: Uuid,
        name: String,
        description: Option<String>,
        quantity: i32,
        price: f64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            category_id,
            name,
            description,
            quantity,
            price,
            created_at,
            updated_at,
        }
    }

    /// Replaces every editable field, keeping identity and creation time.
    pub fn with_details(self, details: ProductDetails) -> Result<Self, ProductError> {
        let details = details.validated()?;

        Ok(Self {
            category_id: details.category_id,
            name: details.name,
            description: details.description,
            quantity: details.quantity,
            price: details.price,
            updated_at: Utc::now(),
            ..self
        })
    }

    pub fn has_stock(&self, amount: i32) -> bool {
        amount >= 0 && amount <= self.quantity
    }
}
