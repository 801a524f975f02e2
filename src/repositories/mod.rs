//! # Repositories Module
//!
//! 데이터 접근 계층입니다. 각 리포지토리는 trait 추상화와 원격 API
//! 구현체 쌍으로 구성되며, 상위 계층은 항상 trait에만 의존합니다.

pub mod articles;

pub use articles::{ApiArticlesRepository, ArticlesRepository};
