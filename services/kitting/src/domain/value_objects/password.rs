//! 密码值对象

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use kitting_errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// 哈希后的密码
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// 从明文密码创建哈希密码
    pub fn from_plain(password: &str) -> AppResult<Self> {
        if password.len() < 8 {
            return Err(AppError::validation(
                "Password must be at least 8 characters",
            ));
        }

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))?;

        Ok(Self(hash.to_string()))
    }

    /// 从已有的哈希值创建
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// 验证密码
    pub fn verify(&self, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(&self.0)
            .map_err(|e| AppError::internal(format!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hashed = HashedPassword::from_plain("contrasena-segura").unwrap();
        assert!(hashed.verify("contrasena-segura").unwrap());
        assert!(!hashed.verify("otra-cosa").unwrap());
    }

    #[test]
    fn test_rejects_short_password() {
        assert!(HashedPassword::from_plain("corta").is_err());
    }

    #[test]
    fn test_from_hash_preserves_value() {
        let hashed = HashedPassword::from_plain("contrasena-segura").unwrap();
        let restored = HashedPassword::from_hash(hashed.as_str());
        assert!(restored.verify("contrasena-segura").unwrap());
    }
}
