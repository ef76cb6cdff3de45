use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::category::model::Category;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct CategoryEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryEntity {
    pub fn into_domain(self) -> Category {
        Category::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.name,
            self.created_at,
            self.updated_at,
        )
    }
}
