//! # Strategy Registry
//!
//! 이름으로 선택되는 실행 전략 (라우팅, 재시도 정책 등)

mod registry;

pub use registry::{StrategyRegistry, STRATEGY_REGISTRY_NAME};

/// 전략 인터페이스
pub trait Strategy: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }
}
