//! # App Template Core
//!
//! 모바일 클라이언트 애플리케이션의 코어 계층 템플릿입니다.
//! 타입 키 기반 의존성 주입 컨테이너와 선언적 네트워킹 서비스를
//! 중심으로, 인증/기사 조회/로컬 저장소/분석 이벤트를 포함한
//! 클라이언트 코어를 제공합니다.
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                AppContext                   │  부팅: 등록 → 검증
//! │            (owns Container)                 │
//! └──────────────────┬──────────────────────────┘
//!                    │ resolve
//! ┌──────────────────▼──────────────────────────┐
//! │   Services        (AuthService)             │  비즈니스 로직
//! ├─────────────────────────────────────────────┤
//! │   Repositories    (ArticlesRepository)      │  데이터 접근
//! ├─────────────────────────────────────────────┤
//! │   Networking      (NetworkService)          │  HTTP 교환
//! │   Storage         (PreferencesStore)        │  키-값 영속화
//! │   Analytics       (AnalyticsService)        │  이벤트 기록
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 설계 원칙
//!
//! ### 1. 명시적 조립
//!
//! 전역 싱글톤 대신 [`app::AppContext`]가 컨테이너를 소유합니다.
//! 모든 등록은 부팅 시 한 곳에서 이루어지고,
//! [`core::container::Container::validate`]가 비즈니스 로직 실행 전에
//! 그래프 결함을 전부 보고합니다.
//!
//! ### 2. 추상화에 의존
//!
//! 상위 계층은 항상 trait(`dyn NetworkService`, `dyn PreferencesStore`)에
//! 의존합니다. 테스트에서는 mock 서버와 인메모리 구현으로 교체됩니다.
//!
//! ### 3. 닫힌 에러 집합
//!
//! 네트워킹 실패는 [`networking::NetworkError`]의 고정된 변형으로
//! 분류되고, 상위 계층의 [`core::errors::AppError`]가 손실 없이
//! 래핑합니다.

pub mod analytics;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod networking;
pub mod repositories;
pub mod services;
pub mod storage;
pub mod utils;
