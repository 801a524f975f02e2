//! # Storage Module
//!
//! 로컬 키-값 저장소 계층입니다.
//!
//! - [`preferences`] - 저장소 추상화와 JSON 파일/인메모리 구현

pub mod preferences;

pub use preferences::{
    InMemoryPreferences, JsonFilePreferences, PreferencesStore, PreferencesStoreExt,
};
