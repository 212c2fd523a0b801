use crate::error::Result;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

/// PHC-formatted argon2id hash, as stored in `"user".hashed_password`.
pub fn hash_password(plain: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hashed = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)?
        .to_string();
    Ok(hashed)
}

/// `Ok(false)` on mismatch; `Err` only when `hashed` is not a PHC string.
pub fn verify_password(plain: &str, hashed: &str) -> Result<bool> {
    let parsed = PasswordHash::new(hashed)?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}
