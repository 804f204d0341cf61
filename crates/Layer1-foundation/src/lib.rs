//! # keystone-foundation
//!
//! Foundation layer for Keystone:
//! - Error: 중앙 에러 타입 (레지스트리 계약 위반 + 일반 에러)
//! - Config: 레지스트리 정책 설정 (RegistryConfig, RegistrySettings)
//! - Core: 요청 단위 실행 컨텍스트 (UserExecutionContext)
//! - Logging: tracing subscriber 초기화

pub mod config;
pub mod core;
pub mod error;
pub mod logging;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{RegistryConfig, RegistrySettings, REGISTRY_CONFIG_FILE};

// ============================================================================
// Core (핵심 타입)
// ============================================================================
pub use crate::core::UserExecutionContext;

// ============================================================================
// Logging
// ============================================================================
pub use logging::init_logging;
