use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

/// A wrong password is `Mismatch`; every other failure is a backend error
/// and keeps its underlying message. Callers must treat both as failed
/// verification, never just the mismatch case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordError {
    #[error("password mismatch")]
    Mismatch,
    #[error("password hashing failed: {0}")]
    Hash(String),
}

pub fn hash(plain: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let digest = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash error");
            PasswordError::Hash(e.to_string())
        })?
        .to_string();
    Ok(digest)
}

pub fn verify(hashed: &str, candidate: &str) -> Result<(), PasswordError> {
    let parsed = PasswordHash::new(hashed).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        PasswordError::Hash(e.to_string())
    })?;
    match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
        Ok(()) => Ok(()),
        Err(argon2::password_hash::Error::Password) => Err(PasswordError::Mismatch),
        Err(e) => {
            error!(error = %e, "argon2 verify error");
            Err(PasswordError::Hash(e.to_string()))
        }
    }
}
