//! 기사 도메인 모델

use serde::{Deserialize, Serialize};

use crate::utils::string_utils::deserialize_optional_string;

/// 뉴스 기사
///
/// 서버 응답의 `date`는 누락되거나 빈 문자열일 수 있으므로
/// `Option`으로 정규화합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub date: Option<String>,
}
