//! # Key-Value Preferences Store
//!
//! 로그인 상태, 인증 토큰 등 소량의 앱 상태를 보관하는 로컬 키-값
//! 저장소입니다. 추상화([`PreferencesStore`])와 JSON 파일 기반
//! 구현([`JsonFilePreferences`])으로 분리하여, 서비스 계층은 저장
//! 매체를 모르는 채로 동작합니다.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::core::errors::{AppResult, ErrorContext};

/// 키-값 저장소 추상화
///
/// 값은 `serde_json::Value`로 주고받습니다. 타입이 있는 객체 저장은
/// [`PreferencesStoreExt`]의 제네릭 메서드를 사용합니다.
pub trait PreferencesStore: Send + Sync {
    /// 키에 해당하는 값을 조회합니다. 없으면 `None`
    fn get(&self, key: &str) -> Option<Value>;

    /// 값을 저장합니다. 기존 값은 교체됩니다
    fn set(&self, key: &str, value: Value) -> AppResult<()>;

    /// 키와 값을 제거합니다. 없는 키 제거는 no-op
    fn remove(&self, key: &str) -> AppResult<()>;

    /// 저장된 모든 키-값을 제거합니다
    fn clear_all(&self) -> AppResult<()>;

    /// 키 존재 여부를 확인합니다
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// 문자열 값을 조회합니다. 타입이 다르면 `None`
    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key)
            .and_then(|value| value.as_str().map(str::to_string))
    }

    /// 불리언 값을 조회합니다. 타입이 다르면 `None`
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|value| value.as_bool())
    }

    /// 정수 값을 조회합니다. 타입이 다르면 `None`
    fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|value| value.as_i64())
    }

    /// 실수 값을 조회합니다. 타입이 다르면 `None`
    fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(|value| value.as_f64())
    }

    /// 문자열 값을 저장합니다
    fn set_string(&self, key: &str, value: &str) -> AppResult<()> {
        self.set(key, Value::String(value.to_string()))
    }

    /// 불리언 값을 저장합니다
    fn set_bool(&self, key: &str, value: bool) -> AppResult<()> {
        self.set(key, Value::Bool(value))
    }

    /// 정수 값을 저장합니다
    fn set_i64(&self, key: &str, value: i64) -> AppResult<()> {
        self.set(key, Value::from(value))
    }

    /// 실수 값을 저장합니다
    fn set_f64(&self, key: &str, value: f64) -> AppResult<()> {
        self.set(key, Value::from(value))
    }
}

/// 타입이 있는 객체 저장을 위한 확장 trait
///
/// trait 객체 호환성을 위해 제네릭 메서드는 [`PreferencesStore`]에서
/// 분리되어 있습니다. `Arc<dyn PreferencesStore>`에서 그대로 호출할
/// 수 있습니다.
pub trait PreferencesStoreExt: PreferencesStore {
    /// 직렬화 가능한 객체를 저장합니다
    fn set_object<T: Serialize>(&self, key: &str, object: &T) -> AppResult<()> {
        let value =
            serde_json::to_value(object).storage_context("Failed to serialize preference value")?;
        self.set(key, value)
    }

    /// 저장된 객체를 역직렬화하여 조회합니다
    ///
    /// 키가 없거나 저장된 값이 `T`로 역직렬화되지 않으면 `None`
    fn get_object<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        serde_json::from_value(value).ok()
    }
}

impl<S: PreferencesStore + ?Sized> PreferencesStoreExt for S {}

/// JSON 파일 기반 키-값 저장소
///
/// 전체 맵을 메모리에 유지하고, 변경이 있을 때마다 파일 전체를 다시
/// 씁니다. 보관 대상이 로그인 플래그와 토큰 수준의 소량 데이터이므로
/// 전체 재기록이 단순하고 충분합니다.
pub struct JsonFilePreferences {
    path: PathBuf,
    values: RwLock<HashMap<String, Value>>,
}

impl JsonFilePreferences {
    /// 지정한 경로의 파일을 열거나 새로 만듭니다
    ///
    /// 파일이 존재하면 내용을 읽어 초기 상태로 사용하고, 없으면
    /// 빈 맵으로 시작합니다. 손상된 파일 내용은 읽기 에러로
    /// 보고합니다.
    pub fn new(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        let values = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .storage_context("Failed to read preferences file")?;
            serde_json::from_str(&raw).storage_context("Failed to parse preferences file")?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    /// 현재 맵 전체를 파일에 기록합니다
    fn persist(&self, values: &HashMap<String, Value>) -> AppResult<()> {
        let serialized = serde_json::to_string_pretty(values)
            .storage_context("Failed to serialize preferences")?;
        std::fs::write(&self.path, serialized)
            .storage_context("Failed to write preferences file")?;
        Ok(())
    }
}

impl PreferencesStore for JsonFilePreferences {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) -> AppResult<()> {
        let mut values = self.values.write().unwrap();
        values.insert(key.to_string(), value);
        self.persist(&values)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut values = self.values.write().unwrap();
        if values.remove(key).is_none() {
            return Ok(());
        }
        self.persist(&values)
    }

    fn clear_all(&self) -> AppResult<()> {
        let mut values = self.values.write().unwrap();
        values.clear();
        self.persist(&values)
    }
}

/// 테스트용 인메모리 저장소
///
/// 파일 I/O 없이 [`PreferencesStore`] 계약만 구현합니다.
#[derive(Default)]
pub struct InMemoryPreferences {
    values: RwLock<HashMap<String, Value>>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferencesStore for InMemoryPreferences {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) -> AppResult<()> {
        self.values.write().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.values.write().unwrap().remove(key);
        Ok(())
    }

    fn clear_all(&self) -> AppResult<()> {
        self.values.write().unwrap().clear();
        Ok(())
    }
}
