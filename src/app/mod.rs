//! # Application Context
//!
//! 애플리케이션의 조립 지점입니다. [`AppContext`]가 컨테이너를
//! 명시적으로 소유하며, 부팅은 두 단계로 진행됩니다:
//!
//! 1. **등록 단계** - 모든 서비스/리포지토리 팩토리를 의존성 선언과
//!    함께 등록합니다. 이 단계에서는 아무것도 생성되지 않습니다.
//! 2. **검증 단계** - [`Container::validate`]가 선언된 그래프 전체를
//!    검사하고, 결함이 있으면 전부 수집하여 부팅을 중단합니다.
//!
//! 비즈니스 로직은 검증을 통과한 뒤에만 실행되므로, 구성 결함이
//! 특정 화면에 진입해서야 발견되는 상황을 방지합니다.
//!
//! ## 등록 구성
//!
//! | 컴포넌트 | 스코프 | 의존성 |
//! |----------|--------|--------|
//! | `dyn NetworkService` | Singleton | - |
//! | `dyn PreferencesStore` | Singleton | - |
//! | `dyn AnalyticsService` | Singleton | - |
//! | `dyn ArticlesRepository` | Singleton | NetworkService |
//! | `AuthService` | Transient | PreferencesStore, AnalyticsService |

use std::path::Path;
use std::sync::Arc;

use log::info;

use crate::analytics::{AnalyticsService, ConsoleAnalyticsProvider};
use crate::config::{ApiConfig, StorageConfig};
use crate::core::container::{ComponentScope, Container, DependencyKey};
use crate::core::errors::{AppError, AppResult};
use crate::networking::{HttpNetworkService, NetworkService};
use crate::repositories::{ApiArticlesRepository, ArticlesRepository};
use crate::services::AuthService;
use crate::storage::{JsonFilePreferences, PreferencesStore};
use crate::utils::display_terminal::{
    print_final_summary, print_step_complete, print_step_start, print_sub_task,
    print_validation_report,
};

/// 애플리케이션 컨텍스트
///
/// 컨테이너를 소유하는 값 타입입니다. 전역 상태가 아니므로 테스트마다
/// 독립된 컨텍스트를 만들 수 있습니다.
pub struct AppContext {
    pub container: Container,
}

impl AppContext {
    /// 기본 설정으로 컨텍스트를 부팅합니다
    ///
    /// API 베이스 URL과 환경설정 파일 경로는
    /// [`ApiConfig`]/[`StorageConfig`]에서 읽습니다.
    pub fn bootstrap() -> AppResult<Self> {
        Self::bootstrap_with(ApiConfig::base_url(), StorageConfig::preferences_path())
    }

    /// 베이스 URL과 저장소 경로를 지정하여 부팅합니다 (테스트, 스테이징)
    pub fn bootstrap_with(
        api_base_url: impl Into<String>,
        preferences_path: impl AsRef<Path>,
    ) -> AppResult<Self> {
        let api_base_url = api_base_url.into();
        let container = Container::new();

        print_step_start(1, "Registering core services");
        register_core_services(&container, preferences_path.as_ref())?;
        print_step_complete(1, "Core services registered", 3);

        print_step_start(2, "Registering repositories and services");
        register_repositories(&container, api_base_url);
        register_services(&container);
        print_step_complete(2, "Repositories and services registered", 2);

        print_step_start(3, "Validating dependency graph");
        if let Err(report) = container.validate() {
            print_validation_report(&report);
            return Err(AppError::InternalError(report.to_string()));
        }
        print_step_complete(3, "Dependency graph validated", container.registration_count());

        print_final_summary(container.registration_count());
        info!("App context initialized");

        Ok(Self { container })
    }
}

/// 외부 세계와 맞닿는 코어 서비스들을 등록합니다
fn register_core_services(container: &Container, preferences_path: &Path) -> AppResult<()> {
    let network: Arc<dyn NetworkService> = Arc::new(HttpNetworkService::new());
    container.register_instance::<dyn NetworkService>(network);
    print_sub_task("NetworkService", "OK");

    let preferences: Arc<dyn PreferencesStore> =
        Arc::new(JsonFilePreferences::new(preferences_path)?);
    container.register_instance::<dyn PreferencesStore>(preferences);
    print_sub_task("PreferencesStore", "OK");

    let analytics: Arc<dyn AnalyticsService> = Arc::new(ConsoleAnalyticsProvider::new());
    container.register_instance::<dyn AnalyticsService>(analytics);
    print_sub_task("AnalyticsService", "OK");

    Ok(())
}

/// 데이터 접근 계층을 등록합니다
fn register_repositories(container: &Container, api_base_url: String) {
    container.register_with_dependencies::<dyn ArticlesRepository, _>(
        ComponentScope::Singleton,
        vec![DependencyKey::of::<dyn NetworkService>()],
        move |c| {
            Arc::new(ApiArticlesRepository::with_base_url(
                c.resolve::<dyn NetworkService>(),
                api_base_url.clone(),
            ))
        },
    );
    print_sub_task("ArticlesRepository", "OK");
}

/// 비즈니스 로직 계층을 등록합니다
fn register_services(container: &Container) {
    container.register_with_dependencies::<AuthService, _>(
        ComponentScope::Transient,
        vec![
            DependencyKey::of::<dyn PreferencesStore>(),
            DependencyKey::of::<dyn AnalyticsService>(),
        ],
        |c| {
            Arc::new(AuthService::new(
                c.resolve::<dyn PreferencesStore>(),
                c.resolve::<dyn AnalyticsService>(),
            ))
        },
    );
    print_sub_task("AuthService", "OK");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::LoginRequest;

    fn bootstrap_test_context(api_base_url: &str) -> (tempfile::TempDir, AppContext) {
        let dir = tempfile::tempdir().unwrap();
        let context =
            AppContext::bootstrap_with(api_base_url, dir.path().join("preferences.json")).unwrap();
        (dir, context)
    }

    #[tokio::test]
    async fn test_bootstrap_wires_articles_repository_end_to_end() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/articles")
            .with_status(200)
            .with_header("Content-Type", "application/json")
            .with_body(r#"[{"id":1,"title":"T","content":"C","date":null}]"#)
            .create_async()
            .await;

        let (_dir, context) = bootstrap_test_context(&server.url());
        let repository = context.container.resolve::<dyn ArticlesRepository>();

        let articles = repository.fetch_articles().await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "T");
    }

    #[tokio::test]
    async fn test_scopes_match_registration() {
        let (_dir, context) = bootstrap_test_context("http://localhost:1");

        // 리포지토리는 싱글톤, 인증 서비스는 트랜지언트
        let repo_a = context.container.resolve::<dyn ArticlesRepository>();
        let repo_b = context.container.resolve::<dyn ArticlesRepository>();
        assert!(Arc::ptr_eq(&repo_a, &repo_b));

        let auth_a = context.container.resolve::<AuthService>();
        let auth_b = context.container.resolve::<AuthService>();
        assert!(!Arc::ptr_eq(&auth_a, &auth_b));
    }

    #[tokio::test]
    async fn test_login_flow_through_context() {
        let (_dir, context) = bootstrap_test_context("http://localhost:1");
        let auth = context.container.resolve::<AuthService>();

        auth.login(LoginRequest::new("tester@example.com", "secret123"))
            .await
            .unwrap();
        assert!(auth.is_logged_in());

        // 트랜지언트 인스턴스끼리도 공유 저장소를 통해 상태를 본다
        let another = context.container.resolve::<AuthService>();
        assert!(another.is_logged_in());

        auth.logout().await.unwrap();
        assert!(!another.is_logged_in());
    }

    #[test]
    fn test_bootstrap_fails_when_preferences_file_is_corrupted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not json {").unwrap();

        let result = AppContext::bootstrap_with("http://localhost:1", &path);
        assert!(matches!(result, Err(AppError::StorageError(_))));
    }
}
