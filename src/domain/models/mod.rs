//! 도메인 모델 정의

pub mod article;
pub mod session;
pub mod user;

pub use article::Article;
pub use session::Session;
pub use user::User;
