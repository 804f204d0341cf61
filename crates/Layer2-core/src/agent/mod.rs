//! # Agent Registry
//!
//! Agent 등록/조회와 도구 디스패처 연결
//!
//! - `Agent`: agent trait
//! - `AgentRegistry`: base capability 검증이 붙은 `UniversalRegistry<dyn Agent>`
//! - `ToolDispatcher`: agent가 도구를 호출하는 진입점 (WebSocket 알림 선택적)
//! - `WebSocketBridge`: 실시간 알림 전송 인터페이스

mod bridge;
mod dispatcher;
mod registry;

pub use bridge::WebSocketBridge;
pub use dispatcher::ToolDispatcher;
pub use registry::{AgentRegistry, AGENT_REGISTRY_NAME};

use async_trait::async_trait;
use keystone_foundation::{Result, UserExecutionContext};
use serde_json::Value;

/// 모든 agent가 기본으로 제공해야 하는 capability
pub const BASE_AGENT_CAPABILITY: &str = "base_agent";

/// Agent 인터페이스
#[async_trait]
pub trait Agent: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// 구현하는 base capability (`None`이면 base agent가 아님)
    fn capability(&self) -> Option<&str> {
        Some(BASE_AGENT_CAPABILITY)
    }

    /// 테스트 대역 여부 - 검증을 항상 통과
    fn is_test_double(&self) -> bool {
        false
    }

    async fn run(&self, context: &UserExecutionContext, input: Value) -> Result<Value>;
}
