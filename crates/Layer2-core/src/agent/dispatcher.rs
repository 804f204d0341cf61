//! Tool Dispatcher - agent의 도구 호출 진입점

use super::WebSocketBridge;
use crate::tool::ToolRegistry;
use keystone_foundation::{Error, Result, UserExecutionContext};
use parking_lot::RwLock;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 도구 디스패처
///
/// placeholder는 도구 레지스트리 없이 만들어지며 모든 호출에 `ToolNotFound`를 반환합니다.
/// `enhance` 이후에는 실행 전후로 WebSocket 알림을 보냅니다.
pub struct ToolDispatcher {
    tools: Option<Arc<ToolRegistry>>,
    bridge: RwLock<Option<Arc<dyn WebSocketBridge>>>,
}

impl ToolDispatcher {
    /// 도구 레지스트리 없는 placeholder
    pub fn placeholder() -> Self {
        Self {
            tools: None,
            bridge: RwLock::new(None),
        }
    }

    pub fn new(tools: Arc<ToolRegistry>) -> Self {
        Self {
            tools: Some(tools),
            bridge: RwLock::new(None),
        }
    }

    /// WebSocket 알림 활성화
    pub fn enhance(&self, bridge: Arc<dyn WebSocketBridge>) {
        *self.bridge.write() = Some(bridge);
        info!("[ToolDispatcher] WebSocket notifications enabled");
    }

    pub fn is_websocket_enabled(&self) -> bool {
        self.bridge.read().is_some()
    }

    pub fn is_placeholder(&self) -> bool {
        self.tools.is_none()
    }

    pub fn tools(&self) -> Option<&Arc<ToolRegistry>> {
        self.tools.as_ref()
    }

    /// 도구 실행
    pub async fn dispatch(
        &self,
        tool_name: &str,
        input: Value,
        context: &UserExecutionContext,
    ) -> Result<Value> {
        let tool = match &self.tools {
            Some(registry) => registry.get(tool_name, Some(context))?,
            None => None,
        };
        let Some(tool) = tool else {
            return Err(Error::ToolNotFound(tool_name.to_string()));
        };

        debug!("[ToolDispatcher] Executing '{}' for {}", tool_name, context.user_id);
        self.notify("tool_executing", event_payload(tool_name, context))
            .await;

        match tool.execute(input, context).await {
            Ok(output) => {
                let mut payload = event_payload(tool_name, context);
                payload["result"] = output.clone();
                self.notify("tool_completed", payload).await;
                Ok(output)
            }
            Err(e) => {
                let message = e.to_string();
                let mut payload = event_payload(tool_name, context);
                payload["error"] = Value::String(message.clone());
                self.notify("tool_failed", payload).await;
                Err(Error::tool_execution(tool_name, message))
            }
        }
    }

    async fn notify(&self, event: &str, payload: Value) {
        let bridge = self.bridge.read().clone();
        if let Some(bridge) = bridge {
            if let Err(e) = bridge.notify(event, payload).await {
                warn!("[ToolDispatcher] Failed to send '{}': {}", event, e);
            }
        }
    }
}

impl std::fmt::Debug for ToolDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDispatcher")
            .field("placeholder", &self.is_placeholder())
            .field("websocket", &self.is_websocket_enabled())
            .finish()
    }
}

fn event_payload(tool_name: &str, context: &UserExecutionContext) -> Value {
    json!({
        "tool": tool_name,
        "userId": context.user_id,
        "threadId": context.thread_id,
        "runId": context.run_id,
        "requestId": context.request_id,
    })
}
