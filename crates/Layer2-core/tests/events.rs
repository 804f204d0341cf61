//! 이벤트 구독 및 agent/tool 연동 테스트

use async_trait::async_trait;
use keystone_core::{
    Agent, AgentRegistry, EntryKind, EntryMetadata, RegistryDirectory, RegistryEvent, Result,
    ToolDispatcher, ToolRegistry, UserExecutionContext, WebSocketBridge,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;

#[tokio::test]
async fn test_subscriber_sees_lifecycle() {
    let directory = RegistryDirectory::new();
    let tools = directory.tools();
    let mut rx = tools.subscribe();

    tools
        .register_tool(Arc::new(keystone_core::tool::builtin::EchoTool), EntryMetadata::new())
        .unwrap();
    tools.clear().unwrap();
    directory.freeze_all();

    let registered = rx.recv().await.unwrap();
    assert!(matches!(
        registered,
        RegistryEvent::Registered { ref key, kind: EntryKind::Singleton, replaced: false, .. } if key == "echo"
    ));
    assert!(matches!(
        rx.recv().await.unwrap(),
        RegistryEvent::Cleared { removed: 1, .. }
    ));
    let frozen = rx.recv().await.unwrap();
    assert_eq!(frozen, RegistryEvent::Frozen { registry: "ToolRegistry".to_string() });
}

struct EchoAgent;

#[async_trait]
impl Agent for EchoAgent {
    fn name(&self) -> &str {
        "echo_agent"
    }

    fn description(&self) -> &str {
        "Forwards input to the echo tool"
    }

    async fn run(&self, _context: &UserExecutionContext, input: Value) -> Result<Value> {
        Ok(json!({ "agent": self.name(), "input": input }))
    }
}

#[derive(Default)]
struct CollectingBridge {
    sent: Mutex<Vec<(String, Value)>>,
}

#[async_trait]
impl WebSocketBridge for CollectingBridge {
    async fn notify(&self, event: &str, payload: Value) -> Result<()> {
        self.sent.lock().push((event.to_string(), payload));
        Ok(())
    }
}

#[tokio::test]
async fn test_agent_dispatches_tool_with_notifications() {
    let agents = AgentRegistry::new();
    agents
        .register_agent(Arc::new(EchoAgent), EntryMetadata::new().with_tag("demo"))
        .unwrap();

    let bridge = Arc::new(CollectingBridge::default());
    agents.set_websocket_bridge(Some(bridge.clone())).unwrap();
    agents.set_tool_dispatcher(Arc::new(ToolDispatcher::new(Arc::new(
        ToolRegistry::with_builtins(),
    ))));
    agents.freeze();

    let ctx = UserExecutionContext::new("user-7").with_thread_id("thread-1");
    let agent = agents.get("echo_agent", Some(&ctx)).unwrap().unwrap();
    let reply = agent.run(&ctx, json!("ping")).await.unwrap();
    assert_eq!(reply["agent"], "echo_agent");

    let output = agents
        .tool_dispatcher()
        .dispatch("echo", reply.clone(), &ctx)
        .await
        .unwrap();
    assert_eq!(output, reply);

    let sent = bridge.sent.lock();
    let events: Vec<&str> = sent.iter().map(|(e, _)| e.as_str()).collect();
    assert_eq!(events, vec!["tool_executing", "tool_completed"]);
    assert_eq!(sent[0].1["userId"], "user-7");
    assert_eq!(sent[0].1["threadId"], "thread-1");
}
