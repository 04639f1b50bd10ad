use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};

use crate::application::app_error::{AppError, AppResult};

/// Computes an argon2id hash with a fresh per-hash salt.
/// Runs on a blocking thread; hashing is deliberately expensive.
pub async fn hash_password(raw: String) -> AppResult<String> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut rand_core::OsRng);
        let hash = argon2()?
            .hash_password(raw.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        Ok(hash.to_string())
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?
}

/// Verifies a candidate password against a stored hash.
/// Returns false (not an error) on mismatch or an unparseable stored hash.
pub async fn verify_password(stored_hash: String, candidate: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || {
        let Ok(parsed) = PasswordHash::new(&stored_hash) else {
            return Ok(false);
        };
        match argon2()?.verify_password(candidate.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(_) => Ok(false),
        }
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?
}

fn argon2() -> AppResult<Argon2<'static>> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| AppError::Internal(e.to_string()))?,
    ))
}
