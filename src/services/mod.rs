//! # Services Module
//!
//! 비즈니스 로직 계층입니다. 서비스는 리포지토리/저장소/분석
//! 추상화를 조합하여 애플리케이션 흐름을 구현합니다.

pub mod auth;

pub use auth::AuthService;
