use bcrypt::{hash, verify, DEFAULT_COST};

use crate::errors::AppResult;

/// Hashes a plaintext password with bcrypt. The cost factor keeps hashing
/// deliberately slow; the salt is embedded in the output string.
pub fn hash_password(plain: &str) -> AppResult<String> {
    Ok(hash(plain, DEFAULT_COST)?)
}

/// Constant behavior on malformed hashes: any verification failure counts
/// as a mismatch.
pub fn verify_password(plain: &str, hashed: &str) -> bool {
    verify(plain, hashed).unwrap_or(false)
}
