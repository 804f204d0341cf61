//! Builtin Tools - 기본 제공 도구

mod echo;
mod time;

pub use echo::EchoTool;
pub use time::CurrentTimeTool;

use super::Tool;
use std::sync::Arc;

/// builtin 도구 태그
pub const BUILTIN_TAG: &str = "builtin";

/// 모든 builtin 도구
pub fn all_tools() -> Vec<Arc<dyn Tool>> {
    vec![Arc::new(EchoTool), Arc::new(CurrentTimeTool)]
}
