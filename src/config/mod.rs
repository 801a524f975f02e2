//! # Configuration Module
//!
//! 클라이언트 코어의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리하며,
//! 개발/스테이징/프로덕션 프로파일을 구분합니다.
//!
//! ## 모듈 구성
//!
//! - [`app_config`] - 실행 환경, API, 저장소 관련 설정
//! - [`constants`] - API 헤더, 저장소 키, 분석 이벤트 등 전역 상수
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리
//!
//! `PROFILE` 환경 변수에 따라 개발/스테이징/프로덕션 설정을 구분합니다.
//! `.env.dev` / `.env.prod` 파일은 애플리케이션 진입점에서 로드됩니다.
//!
//! ### 2. 재정의 우선
//!
//! 명시적 환경 변수(`API_BASE_URL` 등)가 프로파일 기본값보다 항상
//! 우선합니다. 테스트와 로컬 개발에서 설정을 바꾸기 쉽게 하기 위함입니다.

pub mod app_config;
pub mod constants;

pub use app_config::{ApiConfig, Environment, StorageConfig, DEFAULT_JSON_HEADERS};
