use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CategoryError;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone)]
pub struct Category {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn clean_name(name: &str) -> Result<String, CategoryError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CategoryError::NameEmpty);
    }
    Ok(name.to_string())
}

impl Category {
    pub fn new(name: &str, user_id: UserId) -> Result<Self, CategoryError> {
        let name = clean_name(name)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            name,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        name: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            created_at,
            updated_at,
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    pub fn renamed(self, name: &str) -> Result<Self, CategoryError> {
        let name = clean_name(name)?;
        Ok(Self {
            name,
            updated_at: Utc::now(),
            ..self
        })
    }
}
