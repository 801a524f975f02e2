//! # 제네릭 네트워킹 서비스 구현
//!
//! 선언적 요청 기술자([`NetworkRequest`])를 실제 HTTP 교환으로 변환하는
//! 네트워킹 서비스입니다. 타입 디코딩 요청, 원시 요청, 업로드,
//! 다운로드 연산을 제공하며, 모든 실패를 닫힌 [`NetworkError`]
//! 집합으로 매핑합니다.
//!
//! ## 처리 순서
//!
//! ```text
//! 1. URL 조립        엔드포인트 파싱 실패 → InvalidUrl (I/O 이전)
//!    ├─ 쿼리 파라미터가 있으면 퍼센트 인코딩하여 덧붙임
//! 2. 요청 전송        연결 실패 → NoInternet, 시간 초과 → Timeout,
//!    │               그 외 전송 실패 → Unknown
//! 3. 상태 검증        2xx 범위 밖 → InvalidResponse
//!    │               (본문이 디코딩 가능하더라도 검증이 우선)
//! 4. 본문 수신/디코딩  역직렬화 실패 → DecodingError
//! ```
//!
//! ## 동시성 모델
//!
//! 공유된 `reqwest::Client` 하나가 모든 요청을 비동기로 처리합니다.
//! 각 호출은 자체 완결적이며(전송 → 상태 대기 → 디코딩 → 전달),
//! 호출 간 순서 보장·중복 제거·캐싱·재시도는 없습니다. 결과는 호출자의
//! `await` 지점에서 tokio 실행기 위로 전달됩니다. 반환된 future를
//! 드롭하면 진행 중인 전송 호출도 함께 중단됩니다.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::constants;
use crate::networking::types::{HttpMethod, NetworkRequest, NetworkError};

/// 네트워킹 서비스 추상화
///
/// 의존성 컨테이너에는 `Arc<dyn NetworkService>`로 등록되며,
/// 리포지토리들이 이 추상화에만 의존합니다.
///
/// 이 계층은 자체적으로 로깅이나 복구를 수행하지 않습니다.
/// 실패는 타입화된 결과로 호출자에게 그대로 전달됩니다.
#[async_trait]
pub trait NetworkService: Send + Sync {
    /// 요청을 실행하고 원시 응답 본문을 반환합니다
    ///
    /// 상태 코드 검증까지만 수행하며 본문은 디코딩하지 않습니다.
    async fn request(&self, request: &NetworkRequest) -> Result<Vec<u8>, NetworkError>;

    /// 바이트를 `application/octet-stream` 본문으로 POST 업로드합니다
    ///
    /// `field_name`은 호출 측 API 호환성을 위해 유지되는 식별자이며
    /// 본문 구성에는 사용되지 않습니다.
    async fn upload(
        &self,
        data: Vec<u8>,
        endpoint: &str,
        field_name: &str,
    ) -> Result<Vec<u8>, NetworkError>;

    /// 완성된 URL로 GET 요청을 보내 본문을 내려받습니다
    async fn download(&self, url: &str) -> Result<Vec<u8>, NetworkError>;
}

/// 타입 디코딩 확장
///
/// [`NetworkService`]는 trait object로 쓰일 수 있도록 제네릭 메서드를
/// 갖지 않습니다. JSON 디코딩은 이 확장 trait이 원시 요청 위에
/// 기본 구현으로 제공합니다.
#[async_trait]
pub trait NetworkServiceExt: NetworkService {
    /// 요청을 실행하고 JSON 본문을 `T`로 디코딩합니다
    ///
    /// 상태 검증이 디코딩보다 항상 우선합니다. 2xx가 아닌 응답은
    /// 본문과 무관하게 `InvalidResponse`로 끝납니다.
    async fn request_json<T>(&self, request: &NetworkRequest) -> Result<T, NetworkError>
    where
        T: DeserializeOwned + Send,
    {
        let bytes = self.request(request).await?;
        serde_json::from_slice(&bytes).map_err(|_| NetworkError::DecodingError)
    }
}

impl<S: NetworkService + ?Sized> NetworkServiceExt for S {}

/// `reqwest` 기반 네트워킹 서비스 구현체
///
/// 연결 풀을 내장한 `reqwest::Client` 하나를 공유하여 모든 요청을
/// 처리합니다. 인스턴스는 애플리케이션 부팅 시 한 번 생성되어
/// 컨테이너에 싱글톤으로 등록됩니다.
pub struct HttpNetworkService {
    client: reqwest::Client,
}

impl HttpNetworkService {
    /// 기본 클라이언트로 서비스를 생성합니다
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// 기술자로부터 최종 URL을 조립합니다
    ///
    /// 엔드포인트가 URL로 파싱되지 않으면 네트워크 I/O 없이
    /// `InvalidUrl`을 반환합니다. 쿼리 파라미터는 URL이 분해 가능하고
    /// 파라미터가 하나 이상 있을 때에만 덧붙입니다.
    fn build_url(request: &NetworkRequest) -> Result<reqwest::Url, NetworkError> {
        let mut url =
            reqwest::Url::parse(&request.endpoint).map_err(|_| NetworkError::InvalidUrl)?;

        if !request.query_items.is_empty() {
            url.query_pairs_mut().extend_pairs(
                request
                    .query_items
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str())),
            );
        }
        Ok(url)
    }

    /// 전송 계층 에러를 닫힌 에러 집합으로 매핑합니다
    fn map_transport_error(error: reqwest::Error) -> NetworkError {
        if error.is_timeout() {
            NetworkError::Timeout
        } else if error.is_connect() {
            NetworkError::NoInternet
        } else {
            NetworkError::Unknown(error.to_string())
        }
    }

    /// 업로드 호출의 요청 기술자를 구성합니다
    ///
    /// POST + `application/octet-stream` 본문이며, 기본 제한 시간을
    /// 포함해 다른 연산과 동일한 전송/검증 경로를 탑니다.
    fn upload_request(endpoint: &str, data: Vec<u8>) -> NetworkRequest {
        NetworkRequest::new(endpoint, HttpMethod::Post)
            .with_headers(vec![(
                constants::api::headers::CONTENT_TYPE.to_string(),
                constants::api::content_types::OCTET_STREAM.to_string(),
            )])
            .with_body(data)
    }

    /// 상태 코드를 검증하고 본문 바이트를 수신합니다
    async fn validate_and_read(response: reqwest::Response) -> Result<Vec<u8>, NetworkError> {
        if !response.status().is_success() {
            return Err(NetworkError::InvalidResponse);
        }

        let bytes = response.bytes().await.map_err(Self::map_transport_error)?;
        Ok(bytes.to_vec())
    }
}

impl Default for HttpNetworkService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NetworkService for HttpNetworkService {
    async fn request(&self, request: &NetworkRequest) -> Result<Vec<u8>, NetworkError> {
        let url = Self::build_url(request)?;

        let mut builder = self
            .client
            .request(request.method.into(), url)
            .timeout(request.timeout);

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(Self::map_transport_error)?;
        Self::validate_and_read(response).await
    }

    async fn upload(
        &self,
        data: Vec<u8>,
        endpoint: &str,
        _field_name: &str,
    ) -> Result<Vec<u8>, NetworkError> {
        let request = Self::upload_request(endpoint, data);
        self.request(&request).await
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, NetworkError> {
        let request = NetworkRequest::new(url, HttpMethod::Get);
        self.request(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct ArticlePayload {
        id: i64,
        title: String,
        content: String,
        date: Option<String>,
    }

    #[test]
    fn test_empty_endpoint_fails_before_io() {
        let request = NetworkRequest::new("", HttpMethod::Get);
        let result = HttpNetworkService::build_url(&request);

        assert_eq!(result.unwrap_err(), NetworkError::InvalidUrl);
    }

    #[test]
    fn test_query_items_are_appended_and_encoded() {
        let request = NetworkRequest::new("https://example.com/api/search", HttpMethod::Get)
            .with_query(vec![("q".to_string(), "rust di".to_string())]);
        let url = HttpNetworkService::build_url(&request).unwrap();

        assert_eq!(url.as_str(), "https://example.com/api/search?q=rust+di");
    }

    #[test]
    fn test_url_without_query_stays_untouched() {
        let request = NetworkRequest::new("https://example.com/api/articles", HttpMethod::Get);
        let url = HttpNetworkService::build_url(&request).unwrap();

        assert_eq!(url.as_str(), "https://example.com/api/articles");
    }

    #[tokio::test]
    async fn test_invalid_url_returned_from_request() {
        let service = HttpNetworkService::new();
        let request = NetworkRequest::new("not a url", HttpMethod::Get);

        let result = service.request(&request).await;
        assert_eq!(result.unwrap_err(), NetworkError::InvalidUrl);
    }

    #[tokio::test]
    async fn test_status_404_maps_to_invalid_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/articles")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"not found"}"#)
            .create_async()
            .await;

        let service = HttpNetworkService::new();
        let request = NetworkRequest::new(
            format!("{}/api/articles", server.url()),
            HttpMethod::Get,
        );

        let result = service.request(&request).await;
        assert_eq!(result.unwrap_err(), NetworkError::InvalidResponse);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_mismatched_body_maps_to_decoding_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/articles")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"unexpected":"shape"}"#)
            .create_async()
            .await;

        let service = HttpNetworkService::new();
        let request = NetworkRequest::new(
            format!("{}/api/articles", server.url()),
            HttpMethod::Get,
        );

        let result: Result<Vec<ArticlePayload>, _> = service.request_json(&request).await;
        assert_eq!(result.unwrap_err(), NetworkError::DecodingError);
    }

    #[tokio::test]
    async fn test_articles_end_to_end_decoding() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/articles")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":1,"title":"T","content":"C","date":null}]"#)
            .create_async()
            .await;

        let service = HttpNetworkService::new();
        let request = NetworkRequest::new(
            format!("{}/api/articles", server.url()),
            HttpMethod::Get,
        );

        let articles: Vec<ArticlePayload> = service.request_json(&request).await.unwrap();
        assert_eq!(
            articles,
            vec![ArticlePayload {
                id: 1,
                title: "T".to_string(),
                content: "C".to_string(),
                date: None,
            }]
        );
    }

    #[tokio::test]
    async fn test_upload_sends_octet_stream_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/upload")
            .match_header("content-type", "application/octet-stream")
            .match_body("raw-bytes")
            .with_status(201)
            .with_body("ok")
            .create_async()
            .await;

        let service = HttpNetworkService::new();
        let result = service
            .upload(
                b"raw-bytes".to_vec(),
                &format!("{}/upload", server.url()),
                "file",
            )
            .await
            .unwrap();

        assert_eq!(result, b"ok");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_download_returns_raw_bytes() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/files/logo.bin")
            .with_status(200)
            .with_body(&[0u8, 1, 2, 3][..])
            .create_async()
            .await;

        let service = HttpNetworkService::new();
        let bytes = service
            .download(&format!("{}/files/logo.bin", server.url()))
            .await
            .unwrap();

        assert_eq!(bytes, vec![0u8, 1, 2, 3]);
    }

    #[test]
    fn test_upload_descriptor_shares_default_timeout() {
        use std::time::Duration;

        let request = HttpNetworkService::upload_request("https://example.com/upload", b"x".to_vec());

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.timeout, Duration::from_secs(30));
        assert_eq!(request.body.as_deref(), Some(&b"x"[..]));
        assert!(request
            .headers
            .iter()
            .any(|(k, v)| k == "Content-Type" && v == "application/octet-stream"));
    }

    #[tokio::test]
    async fn test_upload_rejects_malformed_endpoint() {
        let service = HttpNetworkService::new();
        let result = service.upload(vec![1, 2, 3], "", "file").await;

        assert_eq!(result.unwrap_err(), NetworkError::InvalidUrl);
    }
}
