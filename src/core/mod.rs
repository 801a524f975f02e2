//! # Core Module
//!
//! 애플리케이션 코어 인프라를 담당하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`container`] - 타입 키 기반 의존성 주입 컨테이너
//! - [`errors`] - 애플리케이션 전역 에러 타입과 변환 유틸리티

pub mod container;
pub mod errors;

pub use container::{ComponentScope, Container, ContainerError, DependencyKey, ValidationReport};
pub use errors::{AppError, AppResult, ErrorContext};
