use argon2::Argon2;
use argon2::password_hash::{
    PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
};

use business::domain::user::errors::UserError;
use business::domain::user::services::PasswordHasher;

/// Argon2id hasher producing PHC strings (`$argon2id$v=19$...`).
/// The salt travels inside the hash, so nothing else is stored.
#[derive(Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, UserError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                tracing::error!("Password hashing failed: {e}");
                UserError::HashingFailed
            })
    }

    fn verify(&self, password: &str, password_hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(password_hash) else {
            tracing::warn!("Stored password hash is not a valid PHC string");
            return false;
        };
        self.argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_not_store_plaintext_when_hashing() {
        let hasher = Argon2PasswordHasher::new();

        let hash = hasher.hash("correct horse").unwrap();

        assert_ne!(hash, "correct horse");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn should_salt_each_hash_when_password_repeats() {
        let hasher = Argon2PasswordHasher::new();

        let first = hasher.hash("correct horse").unwrap();
        let second = hasher.hash("correct horse").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn should_verify_when_password_matches() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("correct horse").unwrap();

        assert!(hasher.verify("correct horse", &hash));
    }

    #[test]
    fn should_reject_when_password_differs() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("correct horse").unwrap();

        assert!(!hasher.verify("battery staple", &hash));
    }

    #[test]
    fn should_reject_when_hash_is_plaintext() {
        let hasher = Argon2PasswordHasher::new();

        assert!(!hasher.verify("correct horse", "correct horse"));
    }
}
