//! kitting-auth-core - 认证核心库
//!
//! JWT/Claims 核心逻辑

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use kitting_common::UserId;
use kitting_errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// 登录邮箱
    pub email: String,
    /// Expiration time
    pub exp: i64,
    /// Issued at
    pub iat: i64,
    /// JWT ID
    pub jti: String,
    /// Issuer
    #[serde(default)]
    pub iss: String,
}

impl Claims {
    pub fn new(user_id: &UserId, email: &str, expires_in_secs: i64, issuer: &str) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.0.to_string(),
            email: email.to_string(),
            exp: (now + Duration::seconds(expires_in_secs)).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::now_v7().to_string(),
            iss: issuer.to_string(),
        }
    }

    pub fn user_id(&self) -> AppResult<UserId> {
        Uuid::parse_str(&self.sub)
            .map(UserId::from_uuid)
            .map_err(|_| AppError::unauthorized("Invalid user ID in token"))
    }
}

/// Token 服务
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in: i64,
    issuer: String,
}

impl TokenService {
    pub fn new(secret: &str, expires_in: i64, issuer: impl Into<String>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expires_in,
            issuer: issuer.into(),
        }
    }

    /// 生成访问令牌
    pub fn generate_token(&self, user_id: &UserId, email: &str) -> AppResult<String> {
        let claims = Claims::new(user_id, email, self.expires_in, &self.issuer);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))
    }

    /// 验证令牌
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.validate_exp = true;
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::unauthorized(format!("Invalid token: {}", e)))?;

        Ok(token_data.claims)
    }

    pub fn expires_in(&self) -> i64 {
        self.expires_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", 3600, "kitting")
    }

    #[test]
    fn test_token_roundtrip() {
        let service = service();
        let user_id = UserId::new();

        let token = service
            .generate_token(&user_id, "operario@planta.co")
            .unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.email, "operario@planta.co");
        assert_eq!(claims.iss, "kitting");
    }

    #[test]
    fn test_rejects_tampered_token() {
        let service = service();
        let token = service
            .generate_token(&UserId::new(), "operario@planta.co")
            .unwrap();

        let mut tampered = token.clone();
        tampered.push('x');
        assert!(service.validate_token(&tampered).is_err());
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let token = service()
            .generate_token(&UserId::new(), "operario@planta.co")
            .unwrap();

        let other = TokenService::new("other-secret", 3600, "kitting");
        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_rejects_expired_token() {
        let service = TokenService::new("test-secret", -60, "kitting");
        let token = service
            .generate_token(&UserId::new(), "operario@planta.co")
            .unwrap();

        assert!(service.validate_token(&token).is_err());
    }
}
