//! # 기사 리포지토리
//!
//! 기사 목록 조회를 담당하는 리포지토리입니다. 네트워킹 서비스
//! 추상화 위에서 동작하므로 전송 계층을 교체해도 호출부는 변하지
//! 않습니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ApiConfig;
use crate::core::errors::AppResult;
use crate::domain::models::Article;
use crate::networking::{ApiEndpoint, NetworkService, NetworkServiceExt};

/// 기사 목록 엔드포인트
struct ArticlesEndpoint {
    base_url: String,
}

impl ApiEndpoint for ArticlesEndpoint {
    fn base_url(&self) -> String {
        self.base_url.clone()
    }

    fn path(&self) -> String {
        "/api/articles".to_string()
    }
}

/// 기사 조회 추상화
#[async_trait]
pub trait ArticlesRepository: Send + Sync {
    /// 전체 기사 목록을 조회합니다
    async fn fetch_articles(&self) -> AppResult<Vec<Article>>;
}

/// 원격 API 기반 구현체
pub struct ApiArticlesRepository {
    network: Arc<dyn NetworkService>,
    base_url: String,
}

impl ApiArticlesRepository {
    /// 설정된 기본 베이스 URL을 사용하는 생성자
    pub fn new(network: Arc<dyn NetworkService>) -> Self {
        Self::with_base_url(network, ApiConfig::base_url())
    }

    /// 베이스 URL을 직접 지정하는 생성자 (테스트, 스테이징)
    pub fn with_base_url(network: Arc<dyn NetworkService>, base_url: impl Into<String>) -> Self {
        Self {
            network,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ArticlesRepository for ApiArticlesRepository {
    async fn fetch_articles(&self) -> AppResult<Vec<Article>> {
        let endpoint = ArticlesEndpoint {
            base_url: self.base_url.clone(),
        };
        let request = endpoint.to_request();
        let articles = self.network.request_json::<Vec<Article>>(&request).await?;
        Ok(articles)
    }
}
