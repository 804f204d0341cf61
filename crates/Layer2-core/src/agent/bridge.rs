//! WebSocket Bridge - 실시간 알림 전송

use async_trait::async_trait;
use keystone_foundation::Result;
use serde_json::Value;

/// 실시간 이벤트 전송 인터페이스
///
/// 전송 실패는 호출자에게 전파되지 않고 로그로만 남습니다.
#[async_trait]
pub trait WebSocketBridge: Send + Sync {
    /// 이벤트 전송 (`tool_executing`, `tool_completed`, `tool_failed` 등)
    async fn notify(&self, event: &str, payload: Value) -> Result<()>;
}
