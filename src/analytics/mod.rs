//! # Analytics Module
//!
//! 사용자 행동 이벤트를 기록하는 분석 파사드입니다. 서비스 계층은
//! [`AnalyticsService`] 추상화에만 의존하며, 어떤 백엔드로 전송되는지는
//! 부팅 시 등록되는 구현체가 결정합니다. 기본 구현은 `log` 파사드로
//! 구조화된 한 줄을 남기는 [`ConsoleAnalyticsProvider`]입니다.

use std::collections::HashMap;
use std::sync::RwLock;

use log::info;
use serde_json::Value;

/// 분석 이벤트: 이름 + 선택적 파라미터
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsEvent {
    pub name: String,
    pub parameters: HashMap<String, Value>,
}

impl AnalyticsEvent {
    /// 파라미터 없는 이벤트를 생성합니다
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: HashMap::new(),
        }
    }

    /// 파라미터를 추가합니다 (빌더 스타일)
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }
}

/// 분석 서비스 추상화
pub trait AnalyticsService: Send + Sync {
    /// 이벤트 하나를 기록합니다
    fn log_event(&self, event: AnalyticsEvent);

    /// 이후 이벤트에 연결될 사용자 식별자를 설정합니다
    fn set_user_id(&self, user_id: Option<String>);

    /// 사용자 식별자와 누적 상태를 초기화합니다 (로그아웃 시)
    fn reset(&self);
}

/// 콘솔(log 파사드) 기반 분석 구현체
///
/// 이벤트를 `analytics` 타깃의 info 로그로 남깁니다. 외부 수집
/// 백엔드 없이도 개발 중 이벤트 흐름을 확인할 수 있습니다.
#[derive(Default)]
pub struct ConsoleAnalyticsProvider {
    user_id: RwLock<Option<String>>,
}

impl ConsoleAnalyticsProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnalyticsService for ConsoleAnalyticsProvider {
    fn log_event(&self, event: AnalyticsEvent) {
        let user = self
            .user_id
            .read()
            .unwrap()
            .clone()
            .unwrap_or_else(|| "anonymous".to_string());
        let parameters =
            serde_json::to_string(&event.parameters).unwrap_or_else(|_| "{}".to_string());
        info!(target: "analytics", "event={} user={} parameters={}", event.name, user, parameters);
    }

    fn set_user_id(&self, user_id: Option<String>) {
        *self.user_id.write().unwrap() = user_id;
    }

    fn reset(&self) {
        *self.user_id.write().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// 기록된 이벤트를 수집하는 테스트 더블
    #[derive(Default)]
    pub struct RecordingAnalytics {
        pub events: Mutex<Vec<AnalyticsEvent>>,
    }

    impl AnalyticsService for RecordingAnalytics {
        fn log_event(&self, event: AnalyticsEvent) {
            self.events.lock().unwrap().push(event);
        }

        fn set_user_id(&self, _user_id: Option<String>) {}

        fn reset(&self) {}
    }

    #[test]
    fn test_event_builder_accumulates_parameters() {
        let event = AnalyticsEvent::new("user_login")
            .with_parameter("user_id", "42")
            .with_parameter("attempt", 1);

        assert_eq!(event.name, "user_login");
        assert_eq!(event.parameters.len(), 2);
        assert_eq!(event.parameters["user_id"], Value::from("42"));
    }

    #[test]
    fn test_recording_double_captures_events() {
        let analytics = RecordingAnalytics::default();
        analytics.log_event(AnalyticsEvent::new("user_logout"));

        let events = analytics.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "user_logout");
    }

    #[test]
    fn test_console_provider_tracks_user_id() {
        let provider = ConsoleAnalyticsProvider::new();
        provider.set_user_id(Some("user-1".to_string()));
        provider.log_event(AnalyticsEvent::new("error_occurred"));
        provider.reset();

        assert!(provider.user_id.read().unwrap().is_none());
    }
}
