//! Echo Tool - 입력을 그대로 반환

use crate::tool::Tool;
use async_trait::async_trait;
use keystone_foundation::{Result, UserExecutionContext};
use serde_json::Value;

#[derive(Debug, Default, Clone, Copy)]
pub struct EchoTool;

#[async_trait]
impl Tool for EchoTool {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Returns its input unchanged"
    }

    fn category(&self) -> &str {
        "utility"
    }

    async fn execute(&self, input: Value, _context: &UserExecutionContext) -> Result<Value> {
        Ok(input)
    }
}
