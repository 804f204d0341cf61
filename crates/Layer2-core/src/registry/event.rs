//! Registry Event - 변경 알림
//!
//! 모든 이벤트는 변경이 반영된 뒤에 발행됩니다.

use super::entry::EntryKind;
use serde::{Deserialize, Serialize};

/// 레지스트리 변경 이벤트
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// 항목 등록됨 (`replaced`면 기존 항목을 덮어씀)
    Registered {
        registry: String,
        key: String,
        kind: EntryKind,
        tags: Vec<String>,
        replaced: bool,
    },

    /// 항목 제거됨
    Removed { registry: String, key: String },

    /// 전체 초기화
    Cleared { registry: String, removed: usize },

    /// 동결됨
    Frozen { registry: String },
}

impl RegistryEvent {
    /// 이벤트를 발행한 레지스트리 이름
    pub fn registry(&self) -> &str {
        match self {
            Self::Registered { registry, .. }
            | Self::Removed { registry, .. }
            | Self::Cleared { registry, .. }
            | Self::Frozen { registry } => registry,
        }
    }

    /// 대상 키 (단일 항목 이벤트만)
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Registered { key, .. } | Self::Removed { key, .. } => Some(key),
            Self::Cleared { .. } | Self::Frozen { .. } => None,
        }
    }
}
