//! 인증 세션 모델

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// 로그인 성공으로 발급되는 세션
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
    pub issued_at: DateTime<Utc>,
}

impl Session {
    /// 사용자에 대한 새 세션을 발급합니다
    pub fn issue(user: User) -> Self {
        Self {
            token: Uuid::new_v4().to_string(),
            user,
            issued_at: Utc::now(),
        }
    }
}
