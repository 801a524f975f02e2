//! 요청/응답 DTO 정의

pub mod login_request;

pub use login_request::LoginRequest;
