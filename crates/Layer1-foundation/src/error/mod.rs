//! Error types for Keystone
//!
//! 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Keystone 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 레지스트리 관련
    // ========================================================================
    #[error("{registry} is frozen")]
    Frozen { registry: String },

    #[error("{key} already registered in {registry}")]
    DuplicateKey { key: String, registry: String },

    #[error("Validation failed for {key}")]
    ValidationFailed { key: String },

    #[error("No factory for {key} in {registry}")]
    FactoryNotFound { key: String, registry: String },

    #[error("Unknown registry type: {0}")]
    UnknownRegistryType(String),

    /// Factory가 반환한 에러 (메시지/source 그대로 전달)
    #[error(transparent)]
    Factory(anyhow::Error),

    // ========================================================================
    // Agent 연동 관련
    // ========================================================================
    #[error("WebSocket bridge cannot be None")]
    MissingWebSocketBridge,

    // ========================================================================
    // Tool 관련
    // ========================================================================
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Tool execution failed: {tool} - {message}")]
    ToolExecution { tool: String, message: String },

    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 일반
    // ========================================================================
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // ========================================================================
    // 기타
    // ========================================================================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// 레지스트리 계약 위반 에러인지 확인 (factory/비즈니스 로직 에러와 구분)
    pub fn is_registry_error(&self) -> bool {
        matches!(
            self,
            Error::Frozen { .. }
                | Error::DuplicateKey { .. }
                | Error::ValidationFailed { .. }
                | Error::FactoryNotFound { .. }
                | Error::UnknownRegistryType(_)
        )
    }

    /// 사용자에게 보여줄 수 있는 에러인지 확인
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::DuplicateKey { .. }
                | Error::ValidationFailed { .. }
                | Error::NotFound(_)
                | Error::InvalidInput(_)
                | Error::ToolNotFound(_)
        )
    }

    /// Frozen 에러 생성 헬퍼
    pub fn frozen(registry: impl Into<String>) -> Self {
        Error::Frozen {
            registry: registry.into(),
        }
    }

    /// 중복 키 에러 생성 헬퍼
    pub fn duplicate_key(key: impl Into<String>, registry: impl Into<String>) -> Self {
        Error::DuplicateKey {
            key: key.into(),
            registry: registry.into(),
        }
    }

    /// 검증 실패 에러 생성 헬퍼
    pub fn validation_failed(key: impl Into<String>) -> Self {
        Error::ValidationFailed { key: key.into() }
    }

    /// Factory 미등록 에러 생성 헬퍼
    pub fn factory_not_found(key: impl Into<String>, registry: impl Into<String>) -> Self {
        Error::FactoryNotFound {
            key: key.into(),
            registry: registry.into(),
        }
    }

    /// Tool 실행 에러 생성 헬퍼
    pub fn tool_execution(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Error::ToolExecution {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Factory 에러라면 원본 anyhow 에러 참조
    pub fn as_factory_error(&self) -> Option<&anyhow::Error> {
        match self {
            Error::Factory(inner) => Some(inner),
            _ => None,
        }
    }
}

// ============================================================================
// From 구현 (추가 변환)
// ============================================================================

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Internal(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Internal(s.to_string())
    }
}
