//! 认证路由处理

use axum::{Json, extract::State};
use kitting_errors::{AppError, AppResult};
use tracing::{info, warn};

use super::dto::{LoginRequest, LoginResponse, SuccessResponse, UserDto};
use super::middleware::AuthClaims;
use super::state::AppState;

/// 邮箱 + 密码登录，签发会话令牌
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::validation("Correo y contraseña son requeridos"));
    }

    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::unauthorized("Credenciales inválidas"))?;

    if !user.password_hash.verify(&req.password)? {
        warn!(email = %req.email, "Login failed: bad password");
        return Err(AppError::unauthorized("Credenciales inválidas"));
    }

    let access_token = state.tokens.generate_token(&user.id, &user.email)?;

    metrics::counter!("kitting_logins_total").increment(1);
    info!(user_id = %user.id, "User logged in");

    Ok(Json(LoginResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.tokens.expires_in(),
        user: UserDto {
            id: user.id.to_string(),
            email: user.email,
            display_name: user.display_name,
        },
    }))
}

/// 当前用户
pub async fn me(AuthClaims(claims): AuthClaims) -> AppResult<Json<UserDto>> {
    Ok(Json(UserDto {
        id: claims.sub.clone(),
        email: claims.email,
        display_name: None,
    }))
}

/// 登出：令牌无状态，客户端丢弃即可
pub async fn logout() -> Json<SuccessResponse> {
    Json(SuccessResponse::ok())
}
