//! # Domain Module
//!
//! 애플리케이션의 핵심 도메인 타입들입니다.
//!
//! - [`models`] - 기사, 사용자, 세션 등 도메인 모델
//! - [`dto`] - 입력 검증이 붙은 요청 DTO

pub mod dto;
pub mod models;
