//! Logging - tracing subscriber 초기화
//!
//! `RUST_LOG`가 설정되어 있으면 우선 적용하고, 없으면 `default_level`을 사용합니다.

use crate::{Error, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 전역 tracing subscriber 설치
///
/// 이미 설치되어 있으면 `Error::Internal`을 반환합니다.
pub fn init_logging(default_level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .map_err(|e| Error::Internal(format!("Failed to initialize logging: {}", e)))
}

/// debug 플래그에 따른 기본 레벨
pub fn default_level(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(true), "debug");
        assert_eq!(default_level(false), "info");
    }

    #[test]
    fn test_init_twice_is_an_error_not_a_panic() {
        // 첫 호출의 성공 여부는 테스트 실행 순서에 따라 다름
        let _ = init_logging("warn");
        let second = init_logging("warn");
        assert!(matches!(second, Err(Error::Internal(_))));
    }
}
