//! Core Module - 핵심 타입
//!
//! - `context.rs`: 요청 단위 사용자 실행 컨텍스트 (UserExecutionContext)

pub mod context;

pub use context::UserExecutionContext;
