//! # 인증 서비스
//!
//! 로그인/로그아웃 흐름과 세션 영속화를 담당합니다. 자격 증명 검증은
//! `validator` 파생 규칙으로 수행하고, 발급된 세션은 키-값 저장소에
//! 보관하며, 주요 전환은 분석 이벤트로 기록합니다.
//!
//! 실제 인증 서버 연동 전 단계의 모의 인증입니다. 형식 검증을
//! 통과한 자격 증명은 수락되고 로컬 세션이 발급됩니다.

use std::sync::Arc;

use log::info;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::analytics::{AnalyticsEvent, AnalyticsService};
use crate::config::constants::{analytics, storage_keys};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::LoginRequest;
use crate::domain::models::{Session, User};
use crate::storage::{PreferencesStore, PreferencesStoreExt};

/// 인증 서비스
pub struct AuthService {
    preferences: Arc<dyn PreferencesStore>,
    analytics: Arc<dyn AnalyticsService>,
}

impl AuthService {
    pub fn new(
        preferences: Arc<dyn PreferencesStore>,
        analytics: Arc<dyn AnalyticsService>,
    ) -> Self {
        Self {
            preferences,
            analytics,
        }
    }

    /// 자격 증명을 검증하고 세션을 발급합니다
    ///
    /// 흐름: 입력 검증 → 세션 발급 → 저장소 영속화 → 분석 이벤트.
    /// 검증 실패는 [`AppError::ValidationError`]로 보고됩니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<Session> {
        request
            .validate()
            .map_err(|errors| AppError::ValidationError(flatten_messages(&errors)))?;

        let user = User::new(Uuid::new_v4().to_string(), request.email);
        let session = Session::issue(user);

        self.preferences
            .set_bool(storage_keys::IS_LOGGED_IN, true)?;
        self.preferences
            .set_string(storage_keys::AUTH_TOKEN, &session.token)?;
        self.preferences
            .set_object(storage_keys::CURRENT_USER, &session.user)?;

        self.analytics.set_user_id(Some(session.user.id.clone()));
        self.analytics.log_event(
            AnalyticsEvent::new(analytics::events::USER_LOGIN)
                .with_parameter(analytics::parameters::USER_ID, session.user.id.clone()),
        );
        info!("User logged in: {}", session.user.email);

        Ok(session)
    }

    /// 세션을 종료하고 저장된 인증 상태를 제거합니다
    pub async fn logout(&self) -> AppResult<()> {
        self.preferences.remove(storage_keys::IS_LOGGED_IN)?;
        self.preferences.remove(storage_keys::AUTH_TOKEN)?;
        self.preferences.remove(storage_keys::CURRENT_USER)?;

        self.analytics
            .log_event(AnalyticsEvent::new(analytics::events::USER_LOGOUT));
        self.analytics.reset();
        info!("User logged out");

        Ok(())
    }

    /// 저장소에 기록된 로그인 상태를 조회합니다
    pub fn is_logged_in(&self) -> bool {
        self.preferences
            .get_bool(storage_keys::IS_LOGGED_IN)
            .unwrap_or(false)
    }

    /// 저장소에 기록된 현재 사용자를 조회합니다
    pub fn current_user(&self) -> Option<User> {
        self.preferences.get_object(storage_keys::CURRENT_USER)
    }
}

/// 필드별 검증 실패 메시지를 한 문자열로 합칩니다
fn flatten_messages(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .filter_map(|error| error.message.as_ref().map(|message| message.to_string()))
        .collect();
    messages.sort();
    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::ConsoleAnalyticsProvider;
    use crate::storage::InMemoryPreferences;

    fn service() -> AuthService {
        AuthService::new(
            Arc::new(InMemoryPreferences::new()),
            Arc::new(ConsoleAnalyticsProvider::new()),
        )
    }

    #[tokio::test]
    async fn test_login_issues_session_and_persists_state() {
        let auth = service();
        let session = auth
            .login(LoginRequest::new("tester@example.com", "secret123"))
            .await
            .unwrap();

        assert!(!session.token.is_empty());
        assert_eq!(session.user.email, "tester@example.com");
        assert!(auth.is_logged_in());
        assert_eq!(
            auth.current_user().map(|user| user.email),
            Some("tester@example.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_login_rejects_malformed_email() {
        let auth = service();
        let result = auth
            .login(LoginRequest::new("not-an-email", "secret123"))
            .await;

        match result {
            Err(AppError::ValidationError(message)) => {
                assert!(message.contains("Invalid email format"));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
        assert!(!auth.is_logged_in());
    }

    #[tokio::test]
    async fn test_login_rejects_short_password() {
        let auth = service();
        let result = auth
            .login(LoginRequest::new("tester@example.com", "12345"))
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_logout_clears_persisted_state() {
        let auth = service();
        auth.login(LoginRequest::new("tester@example.com", "secret123"))
            .await
            .unwrap();

        auth.logout().await.unwrap();

        assert!(!auth.is_logged_in());
        assert!(auth.current_user().is_none());
    }
}
