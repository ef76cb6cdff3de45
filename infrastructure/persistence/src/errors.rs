use business::domain::errors::RepositoryError;

/// Translates a driver error into the domain's repository error.
pub(crate) fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => RepositoryError::NotFound,
        _ => {
            tracing::error!(error = %error, "Database operation failed");
            RepositoryError::DatabaseError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_missing_row_to_not_found() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            RepositoryError::NotFound
        ));
    }

    #[test]
    fn should_map_pool_timeout_to_database_error() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            RepositoryError::DatabaseError
        ));
    }
}
