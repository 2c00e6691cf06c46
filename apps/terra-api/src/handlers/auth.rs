//! 演示认证 handlers
//!
//! - POST /auth/login - 按邮箱登录，不校验口令
//! - POST /auth/register - 注册新用户

use crate::AppState;
use crate::utils::{
    FieldErrors, bad_request_error, conflict_error, invalid_payload, json_body, json_ok,
    normalize_optional, unauthorized_error, user_to_dto,
};
use api_contract::{LoginRequest, RegisterRequest, UserResponse};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::Response,
};
use terra_auth::AuthError;
use terra_storage::NewUser;

const INVALID_USER: &str = "Invalid user data";

/// 登录
///
/// 请求体无法解析时按未提供凭据处理。
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let req = payload.map(|Json(req)| req).unwrap_or_default();
    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();
    match state.auth.login(&email, &password).await {
        Ok(profile) => json_ok(UserResponse {
            user: user_to_dto(profile),
        }),
        Err(err) => auth_error(err),
    }
}

/// 注册
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Response {
    let req = match json_body(payload, INVALID_USER) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let mut errors = FieldErrors::default();
    let username = errors.required(req.username, "username");
    let email = errors.required(req.email, "email");
    let password = errors.required(req.password, "password");

    let (Some(username), Some(email), Some(password)) = (username, email, password) else {
        return invalid_payload(INVALID_USER, errors.into_details());
    };

    let user = NewUser {
        username,
        email,
        password,
        institution: normalize_optional(req.institution),
    };
    match state.auth.register(user).await {
        Ok(profile) => json_ok(UserResponse {
            user: user_to_dto(profile),
        }),
        Err(err) => auth_error(err),
    }
}

fn auth_error(err: AuthError) -> Response {
    match err {
        AuthError::MissingCredentials => bad_request_error("Email and password are required"),
        AuthError::InvalidCredentials => unauthorized_error("Invalid credentials"),
        AuthError::AlreadyExists(message) => conflict_error(message),
    }
}
