//! # Application Configuration Module
//!
//! 실행 환경 프로파일과 API/저장소 설정을 관리하는 모듈입니다.
//! 환경 변수 기반으로 설정값을 읽으며, 명시적 재정의가 프로파일
//! 기본값보다 항상 우선합니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 실행 프로파일 (dev | staging | prod, 기본값: dev)
//! export PROFILE="dev"
//!
//! # API 베이스 URL 재정의 (선택)
//! export API_BASE_URL="https://api.example.com"
//!
//! # 요청 제한 시간 재정의 (초, 선택)
//! export API_TIMEOUT_SECS="30"
//!
//! # 환경설정 파일 경로 (선택)
//! export APP_PREFERENCES_PATH="./preferences.json"
//! ```

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use once_cell::sync::Lazy;

use super::constants;

/// 실행 환경 프로파일
///
/// `PROFILE` 환경 변수로 결정되며, 환경별로 다른 API 베이스 URL을
/// 제공합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    /// 현재 실행 환경을 반환합니다
    ///
    /// `PROFILE` 환경 변수를 읽으며, 설정되지 않았거나 알 수 없는 값인
    /// 경우 개발 환경으로 간주합니다.
    pub fn current() -> Self {
        match env::var("PROFILE").as_deref() {
            Ok("prod") | Ok("production") => Environment::Production,
            Ok("staging") => Environment::Staging,
            _ => Environment::Development,
        }
    }

    /// 환경별 기본 API 베이스 URL을 반환합니다
    pub fn default_api_base_url(&self) -> &'static str {
        match self {
            Environment::Development => "https://newsapp-spring-webservice.onrender.com",
            Environment::Staging => "https://newsapp-spring-webservice.onrender.com",
            Environment::Production => "https://newsapp-spring-webservice.onrender.com",
        }
    }
}

/// JSON 요청에 사용하는 기본 헤더 집합
///
/// 모든 API 엔드포인트의 기본값으로 복사되어 사용됩니다.
pub static DEFAULT_JSON_HEADERS: Lazy<Vec<(String, String)>> = Lazy::new(|| {
    vec![(
        constants::api::headers::CONTENT_TYPE.to_string(),
        constants::api::content_types::JSON.to_string(),
    )]
});

/// API 설정
///
/// 베이스 URL과 요청 제한 시간을 관리합니다. 환경 변수가 설정된 경우
/// 프로파일 기본값보다 우선합니다.
pub struct ApiConfig;

impl ApiConfig {
    /// API 베이스 URL을 반환합니다
    ///
    /// `API_BASE_URL` 환경 변수가 설정된 경우 해당 값을,
    /// 아니면 현재 프로파일의 기본 URL을 반환합니다.
    pub fn base_url() -> String {
        env::var("API_BASE_URL")
            .unwrap_or_else(|_| Environment::current().default_api_base_url().to_string())
    }

    /// 요청 기본 제한 시간을 반환합니다
    ///
    /// `API_TIMEOUT_SECS` 환경 변수로 재정의할 수 있으며,
    /// 기본값은 30초입니다.
    pub fn timeout() -> Duration {
        let secs = env::var("API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(constants::api::TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

/// 로컬 저장소 설정
pub struct StorageConfig;

impl StorageConfig {
    /// 환경설정 파일 경로를 반환합니다
    ///
    /// `APP_PREFERENCES_PATH` 환경 변수로 재정의할 수 있으며,
    /// 기본값은 현재 디렉토리의 `preferences.json`입니다.
    pub fn preferences_path() -> PathBuf {
        env::var("APP_PREFERENCES_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("preferences.json"))
    }
}
