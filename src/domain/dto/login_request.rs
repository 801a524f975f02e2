//! 로그인 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 로그인 폼 입력
///
/// `validate()`가 이메일 형식과 비밀번호 최소 길이(6자)를 검사합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}
