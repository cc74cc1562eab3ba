//! Password hashing and verification utilities
//!
//! Uses Argon2id in raw mode. The salt fed to the KDF is the hex string that
//! is stored in front of the derived key, so verification only needs the
//! encoded secret itself.

use argon2::{Algorithm, Argon2, Params, Version};
use cred_core::EncodedSecret;
use rand::{rngs::OsRng, RngCore};

use crate::config::KdfConfig;
use crate::error::AppError;

/// Minimum salt length in bytes (also the Argon2 minimum)
pub const MIN_SALT_LEN: usize = 8;

/// Generate `len` random bytes from the OS CSPRNG, hex-encoded
pub fn generate_salt(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Compare two byte strings without short-circuiting on the first mismatch
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// Password service for dependency injection
///
/// Holds validated KDF parameters; cloning is cheap.
#[derive(Debug, Clone)]
pub struct PasswordService {
    params: Params,
    salt_len: usize,
    key_len: usize,
}

impl PasswordService {
    /// Create a password service from KDF settings
    ///
    /// # Errors
    /// Returns `AppError::Config` if the parameters are out of range
    pub fn new(config: &KdfConfig) -> Result<Self, AppError> {
        config.validate()?;

        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            Some(config.key_len),
        )
        .map_err(|e| AppError::Config(format!("Invalid KDF parameters: {e}")))?;

        Ok(Self {
            params,
            salt_len: config.salt_len,
            key_len: config.key_len,
        })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Derive the hex-encoded key for a password and hex salt
    ///
    /// # Errors
    /// Returns an error if key derivation fails
    pub fn derive_key(&self, password: &str, salt_hex: &str) -> Result<String, AppError> {
        let mut key = vec![0u8; self.key_len];
        self.argon2()
            .hash_password_into(password.as_bytes(), salt_hex.as_bytes(), &mut key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Key derivation failed: {e}")))?;
        Ok(hex::encode(key))
    }

    /// Hash a password with a fresh salt
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn hash(&self, password: &str) -> Result<EncodedSecret, AppError> {
        let salt = generate_salt(self.salt_len);
        let key = self.derive_key(password, &salt)?;
        Ok(EncodedSecret::compose(&salt, &key))
    }

    /// Verify a password against an encoded secret
    ///
    /// A secret that does not split into a usable salt and key never
    /// matches.
    ///
    /// # Errors
    /// Returns an error if key derivation fails
    pub fn verify(&self, password: &str, secret: &EncodedSecret) -> Result<bool, AppError> {
        let Some((salt, stored_key)) = secret.parts() else {
            return Ok(false);
        };
        if salt.len() < MIN_SALT_LEN {
            return Ok(false);
        }

        let key = self.derive_key(password, salt)?;
        Ok(constant_time_eq(key.as_bytes(), stored_key.as_bytes()))
    }

    /// Salt length in bytes
    pub fn salt_len(&self) -> usize {
        self.salt_len
    }

    /// Derived key length in bytes
    pub fn key_len(&self) -> usize {
        self.key_len
    }
}
