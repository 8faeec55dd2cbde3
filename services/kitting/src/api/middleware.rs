//! 中间件

use axum::{
    extract::{FromRequestParts, Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use kitting_auth_core::Claims;
use tracing::{debug, warn};

use super::state::AppState;

/// 认证 Claims 提取器
///
/// 用于从请求中获取已验证的 Claims，应该在 auth_middleware 之后使用
pub struct AuthClaims(pub Claims);

impl<S> FromRequestParts<S> for AuthClaims
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthClaims)
            .ok_or((
                StatusCode::UNAUTHORIZED,
                "Missing claims in request extensions (auth_middleware may not have run)",
            ))
    }
}

/// JWT 认证中间件
///
/// 验证请求中的 JWT token 并将 claims 注入到请求扩展中。
/// 未认证的请求一律 401（浏览器端对应跳转到登录页）。
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    match auth_header {
        Some(header) if header.starts_with("Bearer ") => {
            let token = &header[7..];
            debug!("Validating JWT token");

            match state.tokens.validate_token(token) {
                Ok(claims) => {
                    let mut request = request;
                    request.extensions_mut().insert(claims);
                    Ok(next.run(request).await)
                }
                Err(e) => {
                    warn!(error = %e, "Token validation failed");
                    Err(StatusCode::UNAUTHORIZED)
                }
            }
        }
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}
