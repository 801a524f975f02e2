//! 사용자 도메인 모델

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 로그인한 사용자
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// 이메일 로컬 파트를 표시 이름 기본값으로 쓰는 생성자
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        let email = email.into();
        let display_name = email.split('@').next().map(str::to_string);
        Self {
            id: id.into(),
            email,
            display_name,
            created_at: Utc::now(),
        }
    }
}
