//! Auth Command Handlers

use serde_json::Value;
use std::sync::Arc;

use crate::application::commands::{LoginUser, RegisterUser};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    PasswordHasherPort, ProcParam, ProcedureInvokerPort, Row, TokenServicePort, TokenSubject,
};
use crate::application::procedures;
use crate::application::rows::{first_row, strip_column, RowExt};
use crate::domain::user::UserRole;

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const PASSWORD_HASH_COLUMN: &str = "PasswordHash";

// ============================================================================
// RegisterUser
// ============================================================================

/// 注册响应：存储过程返回的用户行（已去除密码哈希）
#[derive(Debug, Clone)]
pub struct RegisterUserResponse {
    pub user: Row,
}

/// RegisterUser Handler
pub struct RegisterUserHandler {
    invoker: Arc<dyn ProcedureInvokerPort>,
    hasher: Arc<dyn PasswordHasherPort>,
}

impl RegisterUserHandler {
    pub fn new(invoker: Arc<dyn ProcedureInvokerPort>, hasher: Arc<dyn PasswordHasherPort>) -> Self {
        Self { invoker, hasher }
    }

    pub async fn handle(&self, command: RegisterUser) -> Result<RegisterUserResponse, ApplicationError> {
        let hasher = self.hasher.clone();
        let password = command.password;
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| ApplicationError::internal(e.to_string()))??;

        let rows = self
            .invoker
            .exec(
                procedures::USER_CREATE_BY_EMAIL,
                vec![
                    ProcParam::from(command.name),
                    ProcParam::from(command.email.as_str()),
                    ProcParam::from(password_hash),
                ],
            )
            .await?;

        let user = first_row(rows).ok_or_else(|| ApplicationError::bad_request("Registration failed"))?;

        tracing::info!(email = %command.email, "User registered");

        Ok(RegisterUserResponse {
            user: strip_column(user, PASSWORD_HASH_COLUMN),
        })
    }
}

// ============================================================================
// LoginUser
// ============================================================================

/// 登录后返回给客户端的用户信息
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Value,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// 登录响应
#[derive(Debug, Clone)]
pub struct LoginUserResponse {
    pub access_token: String,
    pub user: AuthenticatedUser,
}

/// LoginUser Handler
pub struct LoginUserHandler {
    invoker: Arc<dyn ProcedureInvokerPort>,
    hasher: Arc<dyn PasswordHasherPort>,
    tokens: Arc<dyn TokenServicePort>,
}

impl LoginUserHandler {
    pub fn new(
        invoker: Arc<dyn ProcedureInvokerPort>,
        hasher: Arc<dyn PasswordHasherPort>,
        tokens: Arc<dyn TokenServicePort>,
    ) -> Self {
        Self {
            invoker,
            hasher,
            tokens,
        }
    }

    pub async fn handle(&self, command: LoginUser) -> Result<LoginUserResponse, ApplicationError> {
        let rows = self
            .invoker
            .exec(
                procedures::USER_GET_BY_EMAIL,
                vec![ProcParam::from(command.email.as_str())],
            )
            .await?;

        let user = first_row(rows).ok_or_else(|| {
            tracing::info!(email = %command.email, "Login rejected: unknown email");
            ApplicationError::unauthorized(INVALID_CREDENTIALS)
        })?;

        let password_hash = user
            .str_field(&[PASSWORD_HASH_COLUMN])
            .map(str::to_string)
            .ok_or_else(|| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;

        let hasher = self.hasher.clone();
        let password = command.password;
        let verified = tokio::task::spawn_blocking(move || hasher.verify(&password, &password_hash))
            .await
            .map_err(|e| ApplicationError::internal(e.to_string()))?;

        if !verified {
            tracing::info!(email = %command.email, "Login rejected: password mismatch");
            return Err(ApplicationError::unauthorized(INVALID_CREDENTIALS));
        }

        let user_id = user
            .lookup(&["UserId"])
            .cloned()
            .ok_or_else(|| ApplicationError::internal("Procedure row is missing column UserId"))?;
        let role = UserRole::from_column(user.str_field(&["Role"]));
        let authenticated = AuthenticatedUser {
            name: user.string_or(&["Name"], ""),
            email: user.string_or(&["Email"], command.email.as_str()),
            role,
            user_id,
        };

        let subject = TokenSubject {
            user_id: user.string_or(&["UserId"], ""),
            email: authenticated.email.clone(),
            name: authenticated.name.clone(),
            role: authenticated.role.as_str().to_string(),
        };
        let access_token = self.tokens.issue(&subject, None, None)?;

        tracing::info!(user_id = %subject.user_id, role = %subject.role, "User logged in");

        Ok(LoginUserResponse {
            access_token,
            user: authenticated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::SecurityError;
    use crate::domain::user::Email;
    use crate::infrastructure::adapters::FakeProcedureInvoker;
    use serde_json::{json, Map};

    /// 明文比对的哈希器，只用于测试
    struct PlainHasher;

    impl PasswordHasherPort for PlainHasher {
        fn hash(&self, password: &str) -> Result<String, SecurityError> {
            Ok(format!("plain:{password}"))
        }

        fn verify(&self, password: &str, password_hash: &str) -> bool {
            password_hash == format!("plain:{password}")
        }
    }

    struct StaticTokens;

    impl TokenServicePort for StaticTokens {
        fn issue(
            &self,
            subject: &TokenSubject,
            _expires_minutes: Option<i64>,
            _extra: Option<Map<String, Value>>,
        ) -> Result<String, SecurityError> {
            Ok(format!("token-for-{}", subject.user_id))
        }

        fn decode(&self, _token: &str) -> Result<crate::application::ports::SessionClaims, SecurityError> {
            Err(SecurityError::InvalidToken)
        }
    }

    fn login_handler(invoker: Arc<FakeProcedureInvoker>) -> LoginUserHandler {
        LoginUserHandler::new(invoker, Arc::new(PlainHasher), Arc::new(StaticTokens))
    }

    #[tokio::test]
    async fn test_register_passes_hash_and_strips_it_from_response() {
        let invoker = Arc::new(FakeProcedureInvoker::new());
        invoker.respond(
            procedures::USER_CREATE_BY_EMAIL,
            vec![json!({"UserId": 1, "Name": "Ryan", "Email": "ryan@example.com", "PasswordHash": "plain:pw"})],
        );
        let handler = RegisterUserHandler::new(invoker.clone(), Arc::new(PlainHasher));

        let response = handler
            .handle(RegisterUser {
                name: "Ryan".to_string(),
                email: Email::parse("ryan@example.com").unwrap(),
                password: "pw".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.user.get("UserId"), Some(&json!(1)));
        assert!(!response.user.contains_key("PasswordHash"));

        let calls = invoker.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].params,
            vec![
                ProcParam::Text("Ryan".to_string()),
                ProcParam::Text("ryan@example.com".to_string()),
                ProcParam::Text("plain:pw".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_register_without_row_is_bad_request() {
        let invoker = Arc::new(FakeProcedureInvoker::new());
        let handler = RegisterUserHandler::new(invoker, Arc::new(PlainHasher));

        let err = handler
            .handle(RegisterUser {
                name: "Ryan".to_string(),
                email: Email::parse("ryan@example.com").unwrap(),
                password: "pw".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::BadRequest(ref m) if m == "Registration failed"));
    }

    #[tokio::test]
    async fn test_login_defaults_role_and_issues_token() {
        let invoker = Arc::new(FakeProcedureInvoker::new());
        invoker.respond(
            procedures::USER_GET_BY_EMAIL,
            vec![json!({"UserId": 7, "Name": "Bryan", "Email": "b@x.com", "PasswordHash": "plain:pw"})],
        );

        let response = login_handler(invoker)
            .handle(LoginUser {
                email: Email::parse("b@x.com").unwrap(),
                password: "pw".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.access_token, "token-for-7");
        assert_eq!(response.user.user_id, json!(7));
        assert_eq!(response.user.role.as_str(), "User");
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password_and_unknown_user() {
        let invoker = Arc::new(FakeProcedureInvoker::new());
        invoker.respond(
            procedures::USER_GET_BY_EMAIL,
            vec![json!({"UserId": 99, "Name": "N", "Email": "n@x.com", "PasswordHash": "plain:right"})],
        );
        let err = login_handler(invoker)
            .handle(LoginUser {
                email: Email::parse("n@x.com").unwrap(),
                password: "nope".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(ref m) if m == INVALID_CREDENTIALS));

        let err = login_handler(Arc::new(FakeProcedureInvoker::new()))
            .handle(LoginUser {
                email: Email::parse("ghost@x.com").unwrap(),
                password: "pw".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }
}
