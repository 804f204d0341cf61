//! # Service Registry
//!
//! 프로세스 내부에서 참조하는 외부 서비스 endpoint 목록

mod registry;

pub use registry::{ServiceRecord, ServiceRegistry, SERVICE_REGISTRY_NAME};
