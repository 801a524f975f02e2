//! 기사 리포지토리 모듈

pub mod articles_repo;

pub use articles_repo::{ApiArticlesRepository, ArticlesRepository};
