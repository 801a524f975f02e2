//! # API 엔드포인트 기술 trait
//!
//! 개별 API 호출을 선언적으로 기술하기 위한 trait입니다.
//! 엔드포인트 타입은 경로와 메서드만 선언하고, 베이스 URL·기본 헤더·
//! 쿼리 조립은 기본 구현이 담당합니다.

use crate::config::{ApiConfig, DEFAULT_JSON_HEADERS};
use crate::networking::types::{HttpMethod, NetworkRequest};

/// API 엔드포인트 하나를 기술하는 trait
///
/// 구현 타입은 최소한 [`path`](ApiEndpoint::path)만 제공하면 되며,
/// 나머지는 기본 구현을 따릅니다:
///
/// - 베이스 URL: [`ApiConfig::base_url`]
/// - 메서드: GET
/// - 헤더: `Content-Type: application/json`
/// - 쿼리: 없음
///
/// ## 사용 예제
///
/// ```rust,ignore
/// struct ArticlesEndpoint;
///
/// impl ApiEndpoint for ArticlesEndpoint {
///     fn path(&self) -> String {
///         "/api/articles".to_string()
///     }
/// }
///
/// let request = ArticlesEndpoint.to_request();
/// ```
pub trait ApiEndpoint {
    /// API 베이스 URL
    fn base_url(&self) -> String {
        ApiConfig::base_url()
    }

    /// 베이스 URL 뒤에 붙는 경로 (`/`로 시작)
    fn path(&self) -> String;

    /// HTTP 메서드
    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    /// 요청 헤더
    fn headers(&self) -> Vec<(String, String)> {
        DEFAULT_JSON_HEADERS.clone()
    }

    /// 쿼리 파라미터
    fn query(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// 완전한 URL 문자열을 조립합니다
    ///
    /// 쿼리 파라미터가 하나 이상 있는 경우에만 `?key=value` 형태로
    /// 덧붙이며, 키와 값은 퍼센트 인코딩됩니다.
    fn url(&self) -> String {
        let base = format!("{}{}", self.base_url(), self.path());
        let query = self.query();
        if query.is_empty() {
            return base;
        }

        let encoded: Vec<String> = query
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect();
        format!("{}?{}", base, encoded.join("&"))
    }

    /// 네트워킹 서비스에 전달할 요청 기술자를 생성합니다
    fn to_request(&self) -> NetworkRequest {
        NetworkRequest::new(self.url(), self.method())
            .with_headers(self.headers())
            .with_timeout(ApiConfig::timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PlainEndpoint;

    impl ApiEndpoint for PlainEndpoint {
        fn base_url(&self) -> String {
            "https://api.example.com".to_string()
        }

        fn path(&self) -> String {
            "/api/articles".to_string()
        }
    }

    struct SearchEndpoint;

    impl ApiEndpoint for SearchEndpoint {
        fn base_url(&self) -> String {
            "https://api.example.com".to_string()
        }

        fn path(&self) -> String {
            "/api/search".to_string()
        }

        fn query(&self) -> Vec<(String, String)> {
            vec![
                ("q".to_string(), "rust di".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        }
    }

    #[test]
    fn test_url_without_query_has_no_question_mark() {
        assert_eq!(PlainEndpoint.url(), "https://api.example.com/api/articles");
    }

    #[test]
    fn test_url_with_query_is_percent_encoded() {
        assert_eq!(
            SearchEndpoint.url(),
            "https://api.example.com/api/search?q=rust%20di&page=2"
        );
    }

    #[test]
    fn test_default_request_carries_json_content_type() {
        let request = PlainEndpoint.to_request();

        assert_eq!(request.method, HttpMethod::Get);
        assert!(request
            .headers
            .iter()
            .any(|(k, v)| k == "Content-Type" && v == "application/json"));
    }
}
