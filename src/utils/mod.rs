//! # Utilities Module
//!
//! 부팅 출력과 문자열 처리 등 공통 유틸리티 모음입니다.

pub mod display_terminal;
pub mod string_utils;
