//! # Tool System
//!
//! Agent가 호출하는 도구 인터페이스와 레지스트리
//!
//! - `Tool`: 도구 trait (비동기 실행)
//! - `ToolRegistry`: `UniversalRegistry<dyn Tool>` 위의 도구 레지스트리
//! - `builtin`: 기본 제공 도구 (echo, current_time)

pub mod builtin;
mod registry;

pub use registry::{ToolRegistry, TOOL_REGISTRY_NAME};

use async_trait::async_trait;
use keystone_foundation::{Result, UserExecutionContext};
use serde_json::Value;

/// 기본 도구 카테고리
pub const DEFAULT_TOOL_CATEGORY: &str = "general";

/// 도구 인터페이스
#[async_trait]
pub trait Tool: Send + Sync {
    /// 도구 이름 (고유 식별자)
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn category(&self) -> &str {
        DEFAULT_TOOL_CATEGORY
    }

    /// 실행 가능 여부
    ///
    /// 스키마만 있고 실행 로직이 없는 객체는 `false`를 반환해야 하며,
    /// 레지스트리 등록 시 거부됩니다.
    fn is_executable(&self) -> bool {
        true
    }

    /// 도구 실행
    async fn execute(&self, input: Value, context: &UserExecutionContext) -> Result<Value>;
}
