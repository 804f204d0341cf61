//! Tool Registry - 도구 등록 및 관리
//!
//! ```ignore
//! let registry = ToolRegistry::with_builtins();
//! registry.register_tool(Arc::new(MyTool), EntryMetadata::new().with_tag("custom"))?;
//!
//! if let Some(tool) = registry.get("echo", None)? {
//!     let output = tool.execute(input, &context).await?;
//! }
//! ```

use super::builtin::{self, BUILTIN_TAG};
use super::Tool;
use crate::registry::{EntryMetadata, UniversalRegistry};
use keystone_foundation::{RegistryConfig, Result};
use std::ops::Deref;
use std::sync::Arc;
use tracing::{debug, warn};

pub const TOOL_REGISTRY_NAME: &str = "ToolRegistry";

/// 도구 레지스트리
///
/// 스키마만 있는 (실행 불가) 도구 객체는 등록 시점에 거부됩니다.
pub struct ToolRegistry {
    inner: UniversalRegistry<dyn Tool>,
}

impl ToolRegistry {
    /// 빈 레지스트리 생성
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self::with_name(TOOL_REGISTRY_NAME, config)
    }

    /// 이름을 지정하여 생성 (scoped registry 용)
    pub fn with_name(name: impl Into<String>, config: RegistryConfig) -> Self {
        let inner: UniversalRegistry<dyn Tool> = UniversalRegistry::with_config(name, config);
        inner.add_validation_handler(|_key, candidate| {
            Ok(candidate.instance().map_or(true, |tool| tool.is_executable()))
        });
        Self { inner }
    }

    /// Builtin 도구들을 포함한 레지스트리 생성
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        for tool in builtin::all_tools() {
            let name = tool.name().to_string();
            if let Err(e) = registry.register_tool(tool, EntryMetadata::new().with_tag(BUILTIN_TAG)) {
                warn!("[{}] Failed to register builtin '{}': {}", registry.name(), name, e);
            }
        }
        debug!("[{}] Loaded {} builtin tools", registry.name(), registry.len());
        registry
    }

    /// 도구 이름으로 등록 (설명/카테고리는 메타데이터에 없을 때만 채움)
    pub fn register_tool(&self, tool: Arc<dyn Tool>, mut metadata: EntryMetadata) -> Result<()> {
        if metadata.description().is_none() {
            metadata.insert("description", tool.description());
        }
        if metadata.get("category").is_none() {
            metadata.insert("category", tool.category());
        }
        let name = tool.name().to_string();
        self.inner.register(name, tool, metadata)
    }

    pub fn list_tools(&self) -> Vec<String> {
        self.inner.list_keys()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for ToolRegistry {
    type Target = UniversalRegistry<dyn Tool>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.inner, f)
    }
}
