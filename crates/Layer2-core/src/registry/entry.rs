//! Registry Entry - 레지스트리 항목 정의

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// 컨텍스트를 받아 격리된 인스턴스를 만드는 factory
///
/// 호출마다 새 인스턴스를 만들어야 하며, 레지스트리는 결과를 캐시하지 않습니다.
pub type Factory<T, C> = Arc<dyn Fn(&C) -> anyhow::Result<Arc<T>> + Send + Sync>;

/// 메타데이터에서 태그를 읽는 필드 이름
pub const TAGS_FIELD: &str = "tags";

// ============================================================================
// EntryKind - 항목 종류
// ============================================================================

/// 레지스트리 항목 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// 공유 인스턴스
    Singleton,

    /// 요청별 인스턴스 생성
    Factory,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Singleton => write!(f, "singleton"),
            Self::Factory => write!(f, "factory"),
        }
    }
}

// ============================================================================
// EntryMetadata - 항목 메타데이터
// ============================================================================

/// 레지스트리 항목의 메타데이터 (자유 형식 map)
///
/// 등록 시 값으로 이동되므로 호출자가 가진 원본과 공유되지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryMetadata(Map<String, Value>);

impl EntryMetadata {
    /// 빈 메타데이터 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 속성 추가
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// 설명 설정
    pub fn with_description(self, description: impl Into<String>) -> Self {
        self.with("description", description.into())
    }

    /// 우선순위 설정
    pub fn with_priority(self, priority: i64) -> Self {
        self.with("priority", priority)
    }

    /// 태그 추가
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = Value::String(tag.into());
        match self.0.get_mut(TAGS_FIELD) {
            Some(Value::Array(items)) => {
                if !items.contains(&tag) {
                    items.push(tag);
                }
            }
            Some(existing @ Value::String(_)) => {
                let previous = existing.take();
                *existing = if previous == tag {
                    Value::Array(vec![previous])
                } else {
                    Value::Array(vec![previous, tag])
                };
            }
            _ => {
                self.0.insert(TAGS_FIELD.to_string(), Value::Array(vec![tag]));
            }
        }
        self
    }

    /// 여러 태그 추가
    pub fn with_tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        tags.into_iter().fold(self, |meta, tag| meta.with_tag(tag))
    }

    /// 속성 삽입
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// 속성 조회
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// 설명
    pub fn description(&self) -> Option<&str> {
        self.0.get("description").and_then(Value::as_str)
    }

    /// 우선순위
    pub fn priority(&self) -> Option<i64> {
        self.0.get("priority").and_then(Value::as_i64)
    }

    /// `tags` 필드에서 태그 집합 추출 (문자열 배열 또는 단일 문자열)
    pub fn tags(&self) -> BTreeSet<String> {
        match self.0.get(TAGS_FIELD) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            Some(Value::String(tag)) => BTreeSet::from([tag.clone()]),
            _ => BTreeSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for EntryMetadata {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

// ============================================================================
// RegistryEntry - 레지스트리 항목
// ============================================================================

/// 레지스트리 항목 - 값/factory와 메타데이터, 접근 기록을 함께 보관
///
/// 식별 정보는 생성 후 바뀌지 않고, 접근 카운터만 내부 가변성으로 갱신됩니다.
pub struct RegistryEntry<T: ?Sized, C> {
    key: String,
    value: Option<Arc<T>>,
    factory: Option<Factory<T, C>>,
    metadata: EntryMetadata,
    tags: BTreeSet<String>,
    registered_at: DateTime<Utc>,
    access_count: AtomicU64,
    last_accessed: Mutex<Option<DateTime<Utc>>>,
}

impl<T: ?Sized, C> RegistryEntry<T, C> {
    fn new(
        key: String,
        value: Option<Arc<T>>,
        factory: Option<Factory<T, C>>,
        metadata: EntryMetadata,
    ) -> Self {
        let tags = metadata.tags();
        Self {
            key,
            value,
            factory,
            metadata,
            tags,
            registered_at: Utc::now(),
            access_count: AtomicU64::new(0),
            last_accessed: Mutex::new(None),
        }
    }

    /// 싱글톤 항목 생성
    pub fn singleton(key: impl Into<String>, value: Arc<T>, metadata: EntryMetadata) -> Self {
        Self::new(key.into(), Some(value), None, metadata)
    }

    /// factory 항목 생성
    pub fn with_factory(
        key: impl Into<String>,
        factory: Factory<T, C>,
        metadata: EntryMetadata,
    ) -> Self {
        Self::new(key.into(), None, Some(factory), metadata)
    }

    /// 접근 기록
    pub fn mark_accessed(&self) {
        self.access_count.fetch_add(1, Ordering::Relaxed);
        *self.last_accessed.lock() = Some(Utc::now());
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> Option<&Arc<T>> {
        self.value.as_ref()
    }

    pub fn factory(&self) -> Option<&Factory<T, C>> {
        self.factory.as_ref()
    }

    pub fn has_factory(&self) -> bool {
        self.factory.is_some()
    }

    pub fn metadata(&self) -> &EntryMetadata {
        &self.metadata
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// 값이 있으면 singleton, 없으면 factory
    pub fn kind(&self) -> EntryKind {
        if self.value.is_some() {
            EntryKind::Singleton
        } else {
            EntryKind::Factory
        }
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    pub fn access_count(&self) -> u64 {
        self.access_count.load(Ordering::Relaxed)
    }

    pub fn last_accessed(&self) -> Option<DateTime<Utc>> {
        *self.last_accessed.lock()
    }

    /// 직렬화 가능한 스냅샷
    pub fn info(&self) -> EntryInfo {
        EntryInfo {
            key: self.key.clone(),
            kind: self.kind(),
            tags: self.tags.iter().cloned().collect(),
            metadata: self.metadata.clone(),
            registered_at: self.registered_at,
            access_count: self.access_count(),
            last_accessed: self.last_accessed(),
        }
    }
}

impl<T: ?Sized, C> std::fmt::Debug for RegistryEntry<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("key", &self.key)
            .field("kind", &self.kind())
            .field("has_factory", &self.has_factory())
            .field("tags", &self.tags)
            .field("access_count", &self.access_count())
            .finish()
    }
}

/// 항목 스냅샷
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryInfo {
    pub key: String,
    pub kind: EntryKind,
    pub tags: Vec<String>,
    pub metadata: EntryMetadata,
    pub registered_at: DateTime<Utc>,
    pub access_count: u64,
    pub last_accessed: Option<DateTime<Utc>>,
}
