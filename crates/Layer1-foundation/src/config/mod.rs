//! Config - 통합 설정 관리
//!
//! - `registry.rs` - 레지스트리 정책 및 타입별 설정

mod registry;

pub use registry::{RegistryConfig, RegistrySettings, REGISTRY_CONFIG_FILE};
