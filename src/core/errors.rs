//! # Application Error Handling System
//!
//! 클라이언트 애플리케이션 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! `thiserror`를 사용하여 각 계층(스토리지, 인증, 비즈니스 로직)의 실패를
//! 하나의 타입으로 수렴시키고, 네트워킹 계층의 닫힌 에러 집합
//! ([`NetworkError`])을 손실 없이 래핑합니다.
//!
//! ## 설계 철학
//!
//! ### 1. 계층화된 에러 분류
//! - **도메인별 분류**: 네트워크, 스토리지, 인증, 검증 에러를 구분
//! - **컨텍스트 보존**: 원본 에러 메시지를 손실 없이 전달
//! - **사용자 표시 가능**: 모든 변형이 사람이 읽을 수 있는 메시지를 내장
//!
//! ### 2. 전파 정책
//!
//! 네트워킹 서비스는 [`NetworkError`]를 그대로 반환하고 자체적으로
//! 로깅이나 복구를 수행하지 않습니다. 리포지토리와 서비스 계층이
//! `AppError`로 변환하여 표시/로깅/재시도 여부를 결정합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use app_template_core::core::errors::{AppError, AppResult};
//!
//! async fn fetch_articles(repo: &dyn ArticlesRepository) -> AppResult<Vec<Article>> {
//!     let articles = repo.fetch_articles().await?; // NetworkError → AppError 자동 변환
//!     Ok(articles)
//! }
//! ```

use thiserror::Error;

use crate::networking::types::NetworkError;

/// 애플리케이션 전역 에러 타입
///
/// 클라이언트 코어에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 컨테이너 에러([`ContainerError`](crate::core::container::ContainerError))는
/// 설정 결함으로 취급되어 여기 포함되지 않습니다. 설정 결함은 런타임 값이
/// 아니라 부팅 시점의 진단 대상이기 때문입니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 네트워킹 계층 에러
    ///
    /// 닫힌 [`NetworkError`] 집합을 그대로 래핑합니다.
    /// 상태 코드나 타임아웃 등 원본 분류가 보존됩니다.
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// 로컬 키-값 저장소 에러
    ///
    /// 환경설정 파일 읽기/쓰기 실패, 직렬화 실패 등을 나타냅니다.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 입력값 검증 에러
    ///
    /// 로그인 폼 등 사용자 입력이 형식 요구사항을 만족하지 않을 때 발생합니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 인증 실패 에러
    ///
    /// 잘못된 자격 증명, 만료된 세션 등을 나타냅니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 리소스 찾을 수 없음 에러
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 에러
    ///
    /// 예상하지 못한 실패나 부팅 구성 오류를 나타냅니다.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// 편의성을 위한 Result 타입 별칭
///
/// ```rust,ignore
/// // Before: Result<Session, AppError>
/// // After: AppResult<Session>
/// async fn login(request: LoginRequest) -> AppResult<Session> { /* ... */ }
/// ```
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// `std::io::Error`, `serde_json::Error` 등 다양한 외부 에러 타입에
/// 컨텍스트 문자열을 붙여 변환합니다.
///
/// ```rust,ignore
/// let raw = std::fs::read_to_string(&path)
///     .storage_context("Failed to read preferences file")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 내부 에러로 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 컨텍스트 정보와 함께 스토리지 에러로 변환합니다.
    fn storage_context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn storage_context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::StorageError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_conversion_preserves_kind() {
        let result: AppResult<()> = Err(NetworkError::InvalidResponse.into());

        match result {
            Err(AppError::Network(NetworkError::InvalidResponse)) => {}
            other => panic!("Expected Network(InvalidResponse), got {:?}", other),
        }
    }

    #[test]
    fn test_error_display_is_human_readable() {
        let error = AppError::ValidationError("Email is required".to_string());
        assert_eq!(error.to_string(), "Validation error: Email is required");
    }

    #[test]
    fn test_context_trait_wraps_message() {
        let result: Result<(), &str> = Err("disk full");
        let app_result = result.storage_context("Failed to persist preferences");

        match app_result {
            Err(AppError::StorageError(msg)) => {
                assert!(msg.contains("Failed to persist preferences"));
                assert!(msg.contains("disk full"));
            }
            other => panic!("Expected StorageError, got {:?}", other),
        }
    }
}
