//! User Execution Context - 요청 단위 사용자 식별 정보
//!
//! Factory가 요청별 격리 인스턴스를 만들 때 전달받는 컨텍스트입니다.
//! 레지스트리는 이 값을 해석하지 않고 factory에 그대로 넘깁니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

/// 요청 단위 사용자 실행 컨텍스트
///
/// 하나의 컨텍스트는 하나의 호출 범위에서만 사용해야 합니다.
/// 레지스트리는 방어적 복사를 하지 않으므로, 동시 호출 간에 같은 인스턴스를
/// 공유하면 factory 간 격리가 깨질 수 있습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserExecutionContext {
    /// 사용자 ID
    pub user_id: String,

    /// 대화 스레드 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,

    /// 실행 ID
    pub run_id: String,

    /// 요청 ID
    pub request_id: String,

    /// 생성 시간
    pub created_at: DateTime<Utc>,

    /// 추가 속성
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

impl UserExecutionContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            thread_id: None,
            run_id: Uuid::new_v4().to_string(),
            request_id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            metadata: HashMap::new(),
        }
    }

    pub fn with_thread_id(mut self, thread_id: impl Into<String>) -> Self {
        self.thread_id = Some(thread_id.into());
        self
    }

    pub fn with_run_id(mut self, run_id: impl Into<String>) -> Self {
        self.run_id = run_id.into();
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// 같은 사용자/스레드에 대한 새 요청 컨텍스트
    pub fn child(&self) -> Self {
        Self {
            user_id: self.user_id.clone(),
            thread_id: self.thread_id.clone(),
            run_id: self.run_id.clone(),
            request_id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            metadata: self.metadata.clone(),
        }
    }

    /// 스코프 식별자 (`user_id[:thread_id]`)
    pub fn scope_id(&self) -> String {
        match &self.thread_id {
            Some(thread) => format!("{}:{}", self.user_id, thread),
            None => self.user_id.clone(),
        }
    }
}
