//! # 애플리케이션 상수 정의
//!
//! API 호출, 저장소 키, 분석 이벤트 등 애플리케이션 전역에서 사용하는
//! 상수들을 중앙집중식으로 관리합니다. 값이 여러 모듈에 흩어져
//! 문자열 오타로 이어지는 것을 방지합니다.

/// API 관련 상수
pub mod api {
    /// 요청 기본 제한 시간 (초)
    pub const TIMEOUT_SECS: u64 = 30;

    /// 표준 HTTP 헤더 이름
    pub mod headers {
        pub const AUTHORIZATION: &str = "Authorization";
        pub const CONTENT_TYPE: &str = "Content-Type";
        pub const ACCEPT: &str = "Accept";
    }

    /// Content-Type 값
    pub mod content_types {
        pub const JSON: &str = "application/json";
        pub const OCTET_STREAM: &str = "application/octet-stream";
        pub const URL_ENCODED: &str = "application/x-www-form-urlencoded";
    }
}

/// 로컬 키-값 저장소 키
pub mod storage_keys {
    pub const IS_LOGGED_IN: &str = "isLoggedIn";
    pub const AUTH_TOKEN: &str = "authToken";
    pub const CURRENT_USER: &str = "currentUser";
    pub const LAST_SYNC: &str = "lastSync";
    pub const USER_PREFERENCES: &str = "userPreferences";
}

/// 분석 이벤트 이름과 파라미터 키
pub mod analytics {
    pub mod events {
        pub const USER_LOGIN: &str = "user_login";
        pub const USER_LOGOUT: &str = "user_logout";
        pub const ERROR_OCCURRED: &str = "error_occurred";
    }

    pub mod parameters {
        pub const USER_ID: &str = "user_id";
        pub const ERROR_MESSAGE: &str = "error_message";
    }
}

/// 사용자 표시용 에러 메시지
pub mod error_messages {
    pub const NETWORK: &str =
        "Unable to connect to the server. Please check your internet connection.";
    pub const SERVER: &str = "Something went wrong on our end. Please try again later.";
    pub const INVALID_CREDENTIALS: &str = "Invalid email or password.";
    pub const UNKNOWN: &str = "An unexpected error occurred. Please try again.";
}
