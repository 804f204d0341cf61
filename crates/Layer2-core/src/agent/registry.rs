//! Agent Registry - agent 등록과 도구 디스패처/WebSocket 연결

use super::{Agent, ToolDispatcher, WebSocketBridge, BASE_AGENT_CAPABILITY};
use crate::registry::{EntryMetadata, UniversalRegistry};
use keystone_foundation::{Error, RegistryConfig, Result};
use parking_lot::RwLock;
use std::ops::Deref;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const AGENT_REGISTRY_NAME: &str = "AgentRegistry";

/// Agent 레지스트리
///
/// 등록되는 agent는 기대하는 base capability를 제공하거나 테스트 대역이어야 합니다.
/// factory 등록은 생성 결과가 이미 `dyn Agent`이므로 통과합니다.
pub struct AgentRegistry {
    inner: UniversalRegistry<dyn Agent>,
    base_capability: Option<String>,
    websocket: RwLock<Option<Arc<dyn WebSocketBridge>>>,
    dispatcher: RwLock<Option<Arc<ToolDispatcher>>>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self::build(AGENT_REGISTRY_NAME.to_string(), config, Some(BASE_AGENT_CAPABILITY))
    }

    /// 이름을 지정하여 생성 (scoped registry 용)
    pub fn with_name(name: impl Into<String>, config: RegistryConfig) -> Self {
        Self::build(name.into(), config, Some(BASE_AGENT_CAPABILITY))
    }

    /// base capability 지정 - `None`이면 검증이 모든 agent를 허용
    pub fn with_base_capability(base: Option<&str>) -> Self {
        Self::build(AGENT_REGISTRY_NAME.to_string(), RegistryConfig::default(), base)
    }

    fn build(name: String, config: RegistryConfig, base: Option<&str>) -> Self {
        let inner: UniversalRegistry<dyn Agent> = UniversalRegistry::with_config(name, config);
        let expected = base.map(str::to_string);

        if expected.is_none() {
            warn!(
                "[{}] Base agent capability unavailable, agent validation is permissive",
                inner.name()
            );
        }

        let required = expected.clone();
        inner.add_validation_handler(move |_key, candidate| {
            let Some(agent) = candidate.instance() else {
                return Ok(true);
            };
            if agent.is_test_double() {
                return Ok(true);
            }
            Ok(match &required {
                Some(base) => agent.capability() == Some(base.as_str()),
                None => true,
            })
        });

        Self {
            inner,
            base_capability: expected,
            websocket: RwLock::new(None),
            dispatcher: RwLock::new(None),
        }
    }

    pub fn base_capability(&self) -> Option<&str> {
        self.base_capability.as_deref()
    }

    /// `agent.name()`으로 등록 (설명은 메타데이터에 없을 때만 채움)
    pub fn register_agent(&self, agent: Arc<dyn Agent>, mut metadata: EntryMetadata) -> Result<()> {
        if metadata.description().is_none() {
            metadata.insert("description", agent.description());
        }
        let name = agent.name().to_string();
        self.inner.register(name, agent, metadata)
    }

    pub fn list_agents(&self) -> Vec<String> {
        self.inner.list_keys()
    }

    // ========================================================================
    // WebSocket
    // ========================================================================

    /// WebSocket manager 설정 - 이미 만들어진 디스패처도 즉시 강화
    pub fn set_websocket_manager(&self, manager: Option<Arc<dyn WebSocketBridge>>) {
        let dispatcher = self.dispatcher.read();
        *self.websocket.write() = manager.clone();

        match (manager, dispatcher.as_ref()) {
            (Some(bridge), Some(dispatcher)) => {
                dispatcher.enhance(bridge);
                info!("[{}] WebSocket manager set, dispatcher enhanced", self.name());
            }
            (Some(_), None) => info!("[{}] WebSocket manager set", self.name()),
            (None, _) => debug!("[{}] WebSocket manager cleared", self.name()),
        }
    }

    /// WebSocket bridge 설정 (`None`은 거부)
    pub fn set_websocket_bridge(&self, bridge: Option<Arc<dyn WebSocketBridge>>) -> Result<()> {
        let bridge = bridge.ok_or(Error::MissingWebSocketBridge)?;
        self.set_websocket_manager(Some(bridge));
        Ok(())
    }

    pub fn websocket_manager(&self) -> Option<Arc<dyn WebSocketBridge>> {
        self.websocket.read().clone()
    }

    // ========================================================================
    // Tool Dispatcher
    // ========================================================================

    /// 디스패처 조회 - 처음 접근 시 placeholder 생성
    pub fn tool_dispatcher(&self) -> Arc<ToolDispatcher> {
        if let Some(dispatcher) = self.dispatcher.read().as_ref() {
            return Arc::clone(dispatcher);
        }

        let mut slot = self.dispatcher.write();
        if let Some(dispatcher) = slot.as_ref() {
            return Arc::clone(dispatcher);
        }

        let dispatcher = Arc::new(ToolDispatcher::placeholder());
        if let Some(bridge) = self.websocket_manager() {
            dispatcher.enhance(bridge);
        }
        debug!("[{}] Created placeholder tool dispatcher", self.name());
        *slot = Some(Arc::clone(&dispatcher));
        dispatcher
    }

    /// 디스패처 설치 (WebSocket manager가 있으면 강화)
    pub fn set_tool_dispatcher(&self, dispatcher: Arc<ToolDispatcher>) {
        let mut slot = self.dispatcher.write();
        if let Some(bridge) = self.websocket_manager() {
            dispatcher.enhance(bridge);
        }
        *slot = Some(dispatcher);
    }

    pub fn has_tool_dispatcher(&self) -> bool {
        self.dispatcher.read().is_some()
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for AgentRegistry {
    type Target = UniversalRegistry<dyn Agent>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl std::fmt::Debug for AgentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentRegistry")
            .field("registry", &self.inner)
            .field("base_capability", &self.base_capability)
            .field("websocket", &self.websocket.read().is_some())
            .field("dispatcher", &self.has_tool_dispatcher())
            .finish()
    }
}
