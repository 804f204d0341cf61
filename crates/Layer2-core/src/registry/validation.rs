//! Validation Chain - 등록 시점 검증
//!
//! 검증 핸들러는 외부에서 주입되는 플러그인으로 취급합니다.
//! `Ok(false)`, `Err(_)`, panic 모두 동일한 `ValidationFailed` 에러로 변환되며,
//! 원본 에러는 로그로만 남습니다.

use keystone_foundation::{Error, Result};
use parking_lot::RwLock;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::warn;

// ============================================================================
// Candidate - 검증 대상
// ============================================================================

/// 등록하려는 후보
pub enum Candidate<'a, T: ?Sized> {
    /// 싱글톤 값
    Instance(&'a T),

    /// factory 등록 (생성 결과 타입은 이미 `T`로 보장됨)
    Factory,
}

impl<'a, T: ?Sized> Candidate<'a, T> {
    pub fn instance(&self) -> Option<&'a T> {
        match self {
            Self::Instance(value) => Some(value),
            Self::Factory => None,
        }
    }

    pub fn is_factory(&self) -> bool {
        matches!(self, Self::Factory)
    }
}

impl<T: ?Sized> Clone for Candidate<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Candidate<'_, T> {}

/// 검증 핸들러 - `Ok(true)`일 때만 통과
pub type ValidationHandler<T> =
    Arc<dyn Fn(&str, Candidate<'_, T>) -> anyhow::Result<bool> + Send + Sync>;

// ============================================================================
// ValidationChain
// ============================================================================

/// 순서가 있는 검증 핸들러 목록 (추가만 가능)
pub struct ValidationChain<T: ?Sized> {
    handlers: RwLock<Vec<ValidationHandler<T>>>,
}

impl<T: ?Sized> ValidationChain<T> {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
        }
    }

    /// 핸들러 추가
    pub fn push(&self, handler: ValidationHandler<T>) {
        self.handlers.write().push(handler);
    }

    pub fn len(&self) -> usize {
        self.handlers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }

    /// 등록 순서대로 검증, 첫 실패에서 중단
    ///
    /// 핸들러는 내부 lock을 놓은 상태에서 실행되므로 레지스트리를 다시 호출해도 됩니다.
    pub fn validate(&self, registry: &str, key: &str, candidate: Candidate<'_, T>) -> Result<()> {
        let handlers: Vec<ValidationHandler<T>> = self.handlers.read().clone();

        for (index, handler) in handlers.iter().enumerate() {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| handler(key, candidate)));
            match outcome {
                Ok(Ok(true)) => continue,
                Ok(Ok(false)) => {
                    warn!("[{}] Validation handler #{} rejected '{}'", registry, index, key);
                }
                Ok(Err(e)) => {
                    warn!(
                        "[{}] Validation handler #{} failed for '{}': {:#}",
                        registry, index, key, e
                    );
                }
                Err(payload) => {
                    warn!(
                        "[{}] Validation handler #{} panicked for '{}': {}",
                        registry,
                        index,
                        key,
                        panic_message(payload.as_ref())
                    );
                }
            }
            return Err(Error::validation_failed(key));
        }

        Ok(())
    }
}

impl<T: ?Sized> Default for ValidationChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
