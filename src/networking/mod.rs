//! # Networking Module
//!
//! 선언적 요청 기술자를 HTTP 교환으로 변환하는 네트워킹 계층입니다.
//!
//! ## 모듈 구성
//!
//! - [`types`] - 요청 기술자([`NetworkRequest`])와 닫힌 에러 집합([`NetworkError`])
//! - [`endpoint`] - API 엔드포인트 선언 trait ([`ApiEndpoint`])
//! - [`service`] - 서비스 추상화와 `reqwest` 기반 구현체
//!
//! ## 에러 매핑 규약
//!
//! | 상황 | 에러 |
//! |------|------|
//! | 엔드포인트가 URL로 파싱 안 됨 | `InvalidUrl` (I/O 이전) |
//! | 상태 코드 2xx 범위 밖 | `InvalidResponse` |
//! | 2xx 본문 디코딩 실패 | `DecodingError` |
//! | 연결 실패 | `NoInternet` |
//! | 제한 시간 초과 | `Timeout` |
//! | 그 외 전송 실패 | `Unknown(원인)` |

pub mod endpoint;
pub mod service;
pub mod types;

pub use endpoint::ApiEndpoint;
pub use service::{HttpNetworkService, NetworkService, NetworkServiceExt};
pub use types::{HttpMethod, NetworkError, NetworkRequest};
