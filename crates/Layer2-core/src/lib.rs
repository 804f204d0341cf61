//! keystone-core: Registry Runtime for Keystone
//!
//! Layer2 - 이름 기반 컴포넌트 해석 레이어
//!
//! # 주요 모듈
//!
//! - `registry`: Universal Registry (싱글톤/factory, 검증, 태그, 메트릭, freeze)
//! - `agent`: Agent Registry + Tool Dispatcher + WebSocket 연결
//! - `tool`: Tool trait, Tool Registry, Builtin 도구
//! - `service`: Service Registry (URL 검증)
//! - `strategy`: Strategy Registry
//!
//! # 사용 예시
//!
//! ```ignore
//! use keystone_core::{global_directory, EntryMetadata, UserExecutionContext};
//!
//! let directory = global_directory();
//!
//! // 시작 시 등록
//! directory.agents().register_agent(Arc::new(TriageAgent), EntryMetadata::new())?;
//! directory.tools().register_tool(Arc::new(SearchTool), EntryMetadata::new().with_tag("web"))?;
//!
//! // 등록이 끝나면 동결
//! directory.freeze_all();
//!
//! // 요청 처리
//! let ctx = UserExecutionContext::new("user-1");
//! let agent = directory.agents().get("triage", Some(&ctx))?;
//! ```

pub mod agent;
pub mod registry;
pub mod service;
pub mod strategy;
pub mod tool;

// Re-exports: Registry
pub use registry::{
    global_directory, init_global_directory, Candidate, EntryInfo, EntryKind, EntryMetadata,
    Factory, GenericRegistry, HealthReport, HealthStatus, MetricCounters, RegistryDirectory,
    RegistryEvent, RegistryHandle, RegistryMetrics, RegistryType, UniversalRegistry,
};

// Re-exports: Specialized registries
pub use agent::{Agent, AgentRegistry, ToolDispatcher, WebSocketBridge, BASE_AGENT_CAPABILITY};
pub use service::{ServiceRecord, ServiceRegistry};
pub use strategy::{Strategy, StrategyRegistry};
pub use tool::{Tool, ToolRegistry};

// Re-exports: Layer1
pub use keystone_foundation::{Error, RegistryConfig, RegistrySettings, Result, UserExecutionContext};

/// 버전 정보
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_registry_exports() {
        let directory = RegistryDirectory::new();
        let handle = directory.get_global_registry("strategy").unwrap();
        assert_eq!(handle.name(), "StrategyRegistry");
        assert_eq!(handle.validate_health().status, HealthStatus::Warning);
    }
}
