//! 클라이언트 코어 데모 실행 파일
//!
//! 앱 컨텍스트를 부팅하고 로그인 → 기사 조회 → 로그아웃 흐름을
//! 시연합니다. 모바일 셸 없이 코어 계층의 동작을 터미널에서 확인하는
//! 용도입니다.

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use app_template_core::app::AppContext;
use app_template_core::config::constants::error_messages;
use app_template_core::core::errors::AppError;
use app_template_core::domain::dto::LoginRequest;
use app_template_core::networking::NetworkError;
use app_template_core::repositories::ArticlesRepository;
use app_template_core::services::AuthService;
use app_template_core::utils::display_terminal::print_boxed_title;
use app_template_core::utils::string_utils::truncate_with_ellipsis;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    print_boxed_title("APP TEMPLATE CORE");

    let context = match AppContext::bootstrap() {
        Ok(context) => context,
        Err(e) => {
            error!("Bootstrap failed: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    run_demo_flow(&context).await;

    Ok(())
}

/// 로그인 → 기사 조회 → 로그아웃 데모 흐름
async fn run_demo_flow(context: &AppContext) {
    let auth = context.container.resolve::<AuthService>();

    match auth
        .login(LoginRequest::new("demo@example.com", "demo-password"))
        .await
    {
        Ok(session) => info!("Session issued for {}", session.user.email),
        Err(e) => {
            error!("Login failed: {}", user_facing_message(&e));
            return;
        }
    }

    let repository = context.container.resolve::<dyn ArticlesRepository>();
    match repository.fetch_articles().await {
        Ok(articles) => {
            info!("Fetched {} articles", articles.len());
            for article in &articles {
                println!(
                    "   [{}] {} - {}",
                    article.id,
                    article.title,
                    truncate_with_ellipsis(&article.content, 60)
                );
            }
        }
        Err(e) => error!("Fetching articles failed: {}", user_facing_message(&e)),
    }

    if let Err(e) = auth.logout().await {
        error!("Logout failed: {}", user_facing_message(&e));
    }
}

/// 에러를 사용자 표시용 메시지로 변환합니다
fn user_facing_message(error: &AppError) -> String {
    match error {
        AppError::Network(NetworkError::NoInternet | NetworkError::Timeout) => {
            error_messages::NETWORK.to_string()
        }
        AppError::Network(NetworkError::ServerError { .. } | NetworkError::InvalidResponse) => {
            error_messages::SERVER.to_string()
        }
        AppError::AuthenticationError(_) => error_messages::INVALID_CREDENTIALS.to_string(),
        AppError::ValidationError(message) => message.clone(),
        _ => error_messages::UNKNOWN.to_string(),
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// `PROFILE=prod` → `.env.prod`, `PROFILE=dev` → `.env.dev`,
/// 그 외에는 기본 `.env` 파일을 시도합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            dotenv::from_filename(".env.prod").ok();
        }
        "dev" => {
            dotenv::from_filename(".env.dev").ok();
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG` 환경변수를 따르며 기본값은 info 레벨입니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}
