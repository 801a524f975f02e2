//! # 네트워킹 공통 타입 정의
//!
//! 네트워킹 계층에서 사용하는 요청 기술자(request descriptor)와
//! 닫힌 에러 집합을 정의합니다. 요청 하나를 값으로 기술하고,
//! 가능한 실패를 고정된 열거형으로 분류합니다.
//!
//! ## 설계 원칙
//!
//! - **불변 기술자**: [`NetworkRequest`]는 호출마다 한 번 생성되는 불변 값이며
//!   공유 가변 상태를 갖지 않습니다
//! - **닫힌 에러 집합**: 네트워킹 계층의 모든 실패는 [`NetworkError`]의
//!   변형 중 하나로 매핑됩니다. 각 에러는 해당 호출에 대해 종결적이며
//!   이 계층에서 자동 재시도는 없습니다
//! - **표시 가능한 메시지**: 모든 에러 변형이 사용자에게 보여줄 수 있는
//!   메시지를 내장합니다

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::config::constants;

/// 네트워킹 계층의 닫힌 에러 집합
///
/// | 변형 | 발생 시점 |
/// |------|-----------|
/// | `InvalidUrl` | 엔드포인트 문자열이 URL로 파싱되지 않음 (I/O 이전) |
/// | `InvalidResponse` | 상태 코드가 200–299 범위 밖 |
/// | `NoData` | 응답 본문이 기대되는 상황에서 비어 있음 |
/// | `DecodingError` | 2xx 응답 본문이 대상 타입으로 역직렬화되지 않음 |
/// | `ServerError` | 서버가 구조화된 에러를 반환 (상위 계층 분류용) |
/// | `Unauthorized` | 인증 만료/권한 없음 (상위 계층 분류용) |
/// | `NoInternet` | 연결 자체가 수립되지 않음 |
/// | `Timeout` | 요청 제한 시간 초과 |
/// | `Unknown` | 그 외 전송 계층 실패 (원인 메시지 래핑) |
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// 엔드포인트 문자열이 유효한 URL이 아닌 경우.
    /// 네트워크 I/O를 시도하기 전에 반환됩니다.
    #[error("Invalid URL")]
    InvalidUrl,

    /// 전송 계층이 2xx 범위 밖의 상태 코드를 반환한 경우.
    /// 본문이 디코딩 가능하더라도 검증이 디코딩보다 우선합니다.
    #[error("Invalid server response")]
    InvalidResponse,

    /// 데이터가 수신되지 않은 경우
    #[error("No data received")]
    NoData,

    /// 성공 응답의 본문을 대상 타입으로 디코딩하지 못한 경우
    #[error("Error decoding data")]
    DecodingError,

    /// 서버가 의미 있는 에러 코드와 메시지를 반환한 경우
    #[error("{message}")]
    ServerError { code: u16, message: String },

    /// 인증되지 않은 접근
    #[error("Unauthorized access")]
    Unauthorized,

    /// 인터넷 연결 없음 (연결 수립 실패)
    #[error("No internet connection")]
    NoInternet,

    /// 요청 제한 시간 초과
    #[error("Request timed out")]
    Timeout,

    /// 그 외 전송 계층 실패. 근본 원인 메시지를 래핑합니다.
    #[error("{0}")]
    Unknown(String),
}

/// HTTP 메서드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// 와이어 표현 문자열을 반환합니다
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Patch => reqwest::Method::PATCH,
        }
    }
}

/// HTTP 호출 하나를 기술하는 불변 요청 기술자
///
/// 엔드포인트, 메서드, 헤더, 쿼리 파라미터, 본문 바이트, 타임아웃을
/// 담습니다. 본문은 생성 시점에 JSON으로 직렬화되어 바이트로 고정됩니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use app_template_core::networking::types::{HttpMethod, NetworkRequest};
///
/// let request = NetworkRequest::new("https://api.example.com/api/articles", HttpMethod::Get)
///     .with_query(vec![("page".to_string(), "1".to_string())]);
/// ```
#[derive(Debug, Clone)]
pub struct NetworkRequest {
    /// 요청 대상 엔드포인트 (완전한 URL 문자열)
    pub endpoint: String,
    /// HTTP 메서드
    pub method: HttpMethod,
    /// 추가 헤더 (키, 값) 쌍
    pub headers: Vec<(String, String)>,
    /// 쿼리 파라미터 (키, 값) 쌍. 비어 있으면 URL에 덧붙이지 않습니다.
    pub query_items: Vec<(String, String)>,
    /// 직렬화된 요청 본문
    pub body: Option<Vec<u8>>,
    /// 요청 제한 시간
    pub timeout: Duration,
}

impl NetworkRequest {
    /// 기본값으로 요청 기술자를 생성합니다
    ///
    /// 헤더/쿼리/본문 없이, 기본 제한 시간
    /// ([`constants::api::TIMEOUT_SECS`])으로 초기화됩니다.
    pub fn new(endpoint: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            headers: Vec::new(),
            query_items: Vec::new(),
            body: None,
            timeout: Duration::from_secs(constants::api::TIMEOUT_SECS),
        }
    }

    /// 헤더를 설정합니다
    pub fn with_headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = headers;
        self
    }

    /// 쿼리 파라미터를 설정합니다
    pub fn with_query(mut self, query_items: Vec<(String, String)>) -> Self {
        self.query_items = query_items;
        self
    }

    /// 본문을 JSON으로 직렬화하여 설정합니다
    ///
    /// 직렬화에 실패하면 `NetworkError::Unknown`을 반환합니다.
    /// `Content-Type: application/json` 헤더가 없으면 함께 추가됩니다.
    pub fn with_json_body<T: Serialize>(mut self, body: &T) -> Result<Self, NetworkError> {
        let bytes = serde_json::to_vec(body).map_err(|e| NetworkError::Unknown(e.to_string()))?;
        self.body = Some(bytes);

        let has_content_type = self
            .headers
            .iter()
            .any(|(key, _)| key.eq_ignore_ascii_case(constants::api::headers::CONTENT_TYPE));
        if !has_content_type {
            self.headers.push((
                constants::api::headers::CONTENT_TYPE.to_string(),
                constants::api::content_types::JSON.to_string(),
            ));
        }
        Ok(self)
    }

    /// 원시 바이트 본문을 설정합니다
    ///
    /// 본문을 그대로 전송하며 Content-Type 헤더는 건드리지 않습니다.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// 요청 제한 시간을 재정의합니다
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Payload {
        name: String,
    }

    #[test]
    fn test_new_request_uses_default_timeout() {
        let request = NetworkRequest::new("https://example.com", HttpMethod::Get);

        assert_eq!(request.timeout, Duration::from_secs(30));
        assert!(request.body.is_none());
        assert!(request.query_items.is_empty());
    }

    #[test]
    fn test_json_body_sets_content_type_header() {
        let payload = Payload {
            name: "test".to_string(),
        };
        let request = NetworkRequest::new("https://example.com", HttpMethod::Post)
            .with_json_body(&payload)
            .unwrap();

        assert_eq!(request.body.as_deref(), Some(br#"{"name":"test"}"# as &[u8]));
        assert!(request
            .headers
            .iter()
            .any(|(k, v)| k == "Content-Type" && v == "application/json"));
    }

    #[test]
    fn test_json_body_keeps_existing_content_type() {
        let payload = Payload {
            name: "test".to_string(),
        };
        let request = NetworkRequest::new("https://example.com", HttpMethod::Post)
            .with_headers(vec![(
                "content-type".to_string(),
                "application/vnd.custom+json".to_string(),
            )])
            .with_json_body(&payload)
            .unwrap();

        let content_types: Vec<_> = request
            .headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case("content-type"))
            .collect();
        assert_eq!(content_types.len(), 1);
    }

    #[test]
    fn test_error_messages_are_displayable() {
        assert_eq!(NetworkError::InvalidUrl.to_string(), "Invalid URL");
        assert_eq!(
            NetworkError::InvalidResponse.to_string(),
            "Invalid server response"
        );
        assert_eq!(NetworkError::Timeout.to_string(), "Request timed out");
        assert_eq!(
            NetworkError::ServerError {
                code: 500,
                message: "upstream exploded".to_string()
            }
            .to_string(),
            "upstream exploded"
        );
    }

    #[test]
    fn test_method_wire_representation() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(reqwest::Method::from(HttpMethod::Patch), reqwest::Method::PATCH);
    }
}
