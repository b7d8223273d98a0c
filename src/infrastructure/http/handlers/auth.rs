//! Auth Handlers

use axum::{extract::State, http::HeaderMap, Json};
use http::header::AUTHORIZATION;
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{GetCurrentUser, LoginUser, RegisterUser, SessionClaims};
use crate::domain::user::Email;
use crate::infrastructure::http::dto::{LoginResponseDto, RegisterResponseDto};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// Register
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponseDto>, ApiError> {
    let cmd = RegisterUser {
        name: req.name,
        email: Email::parse(req.email)?,
        password: req.password,
    };

    let result = state.register_user_handler.handle(cmd).await?;

    Ok(Json(RegisterResponseDto {
        ok: true,
        user: result.user,
    }))
}

// ============================================================================
// Login
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponseDto>, ApiError> {
    let cmd = LoginUser {
        email: Email::parse(req.email)?,
        password: req.password,
    };

    let result = state.login_user_handler.handle(cmd).await?;

    Ok(Json(LoginResponseDto {
        ok: true,
        access_token: result.access_token,
        token_type: "bearer",
        user: result.user.into(),
    }))
}

// ============================================================================
// Me
// ============================================================================

/// 解析 `Authorization: Bearer <token>`，返回令牌声明
pub async fn me(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<SessionClaims>, ApiError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_string()))?;

    let claims = state.get_current_user_handler.handle(GetCurrentUser {
        token: token.to_string(),
    })?;

    Ok(Json(claims))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use std::sync::Arc;

    use crate::application::{procedures, PasswordHasherPort, TokenServicePort, TokenSubject};
    use crate::infrastructure::adapters::{Argon2PasswordHasher, FakeProcedureInvoker};
    use crate::infrastructure::http::test_support::{
        json_request, request, send, test_app, test_tokens,
    };

    #[tokio::test]
    async fn test_register_strips_password_hash() {
        let invoker = Arc::new(FakeProcedureInvoker::new());
        invoker.respond(
            procedures::USER_CREATE_BY_EMAIL,
            vec![json!({"UserId": 7, "Name": "Bryan", "Email": "b@x.com", "PasswordHash": "$argon2id$..."})],
        );

        let (status, body) = send(
            test_app(invoker.clone()),
            json_request(
                Method::POST,
                "/auth/register",
                &json!({"name": "Bryan", "email": "b@x.com", "password": "pw"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        assert_eq!(body["user"], json!({"UserId": 7, "Name": "Bryan", "Email": "b@x.com"}));
        assert_eq!(invoker.calls()[0].name, procedures::USER_CREATE_BY_EMAIL);
    }

    #[tokio::test]
    async fn test_register_rejects_malformed_email() {
        let invoker = Arc::new(FakeProcedureInvoker::new());

        let (status, body) = send(
            test_app(invoker.clone()),
            json_request(
                Method::POST,
                "/auth/register",
                &json!({"name": "Bryan", "email": "not-an-email", "password": "pw"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().starts_with("email"));
        assert!(invoker.calls().is_empty());
    }

    #[tokio::test]
    async fn test_register_empty_result_is_bad_request() {
        let (status, body) = send(
            test_app(Arc::new(FakeProcedureInvoker::new())),
            json_request(
                Method::POST,
                "/auth/register",
                &json!({"name": "Bryan", "email": "b@x.com", "password": "pw"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"detail": "Registration failed"}));
    }

    #[tokio::test]
    async fn test_login_issues_token_with_default_role() {
        let hash = Argon2PasswordHasher::new().hash("secret").unwrap();
        let invoker = Arc::new(FakeProcedureInvoker::new());
        invoker.respond(
            procedures::USER_GET_BY_EMAIL,
            vec![json!({"UserId": 7, "Name": "Bryan", "Email": "b@x.com", "PasswordHash": hash})],
        );

        let (status, body) = send(
            test_app(invoker),
            json_request(
                Method::POST,
                "/auth/login",
                &json!({"email": "b@x.com", "password": "secret"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["token_type"], "bearer");
        assert_eq!(
            body["user"],
            json!({"UserId": 7, "Name": "Bryan", "Email": "b@x.com", "Role": "User"})
        );

        let claims = test_tokens()
            .decode(body["access_token"].as_str().unwrap())
            .unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.role, "User");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let hash = Argon2PasswordHasher::new().hash("secret").unwrap();
        let invoker = Arc::new(FakeProcedureInvoker::new());
        invoker.respond(
            procedures::USER_GET_BY_EMAIL,
            vec![json!({"UserId": 7, "Name": "Bryan", "Email": "b@x.com", "PasswordHash": hash})],
        );

        let (status, body) = send(
            test_app(invoker),
            json_request(
                Method::POST,
                "/auth/login",
                &json!({"email": "b@x.com", "password": "guess"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"detail": "Invalid credentials"}));
    }

    #[tokio::test]
    async fn test_login_rejects_malformed_email_before_lookup() {
        let invoker = Arc::new(FakeProcedureInvoker::new());

        let (status, body) = send(
            test_app(invoker.clone()),
            json_request(
                Method::POST,
                "/auth/login",
                &json!({"email": "b@x", "password": "secret"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().starts_with("email"));
        assert!(invoker.calls().is_empty());
    }

    #[tokio::test]
    async fn test_me_requires_bearer_token() {
        let app = test_app(Arc::new(FakeProcedureInvoker::new()));

        let (status, _) = send(app.clone(), request(Method::GET, "/auth/me")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let token = test_tokens()
            .issue(
                &TokenSubject {
                    user_id: "7".to_string(),
                    email: "b@x.com".to_string(),
                    name: "Bryan".to_string(),
                    role: "Admin".to_string(),
                },
                None,
                None,
            )
            .unwrap();

        let mut req = request(Method::GET, "/auth/me");
        req.headers_mut()
            .insert("authorization", format!("Bearer {token}").parse().unwrap());
        let (status, body) = send(app.clone(), req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sub"], "7");
        assert_eq!(body["role"], "Admin");

        let mut req = request(Method::GET, "/auth/me");
        req.headers_mut()
            .insert("authorization", "Bearer garbage".parse().unwrap());
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"detail": "Invalid token"}));
    }
}
