//! Current Time Tool - 현재 UTC 시각

use crate::tool::Tool;
use async_trait::async_trait;
use chrono::Utc;
use keystone_foundation::{Result, UserExecutionContext};
use serde_json::{json, Value};

#[derive(Debug, Default, Clone, Copy)]
pub struct CurrentTimeTool;

#[async_trait]
impl Tool for CurrentTimeTool {
    fn name(&self) -> &str {
        "current_time"
    }

    fn description(&self) -> &str {
        "Returns the current time in RFC 3339 (UTC)"
    }

    fn category(&self) -> &str {
        "utility"
    }

    async fn execute(&self, _input: Value, _context: &UserExecutionContext) -> Result<Value> {
        let now = Utc::now();
        Ok(json!({
            "now": now.to_rfc3339(),
            "timestamp": now.timestamp(),
            "timezone": "UTC",
        }))
    }
}
