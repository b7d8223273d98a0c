//! Auth Commands

use crate::domain::user::Email;

/// 注册用户命令
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub name: String,
    pub email: Email,
    pub password: String,
}

/// 登录命令（签发令牌）
#[derive(Debug, Clone)]
pub struct LoginUser {
    pub email: Email,
    pub password: String,
}
