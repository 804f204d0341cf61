//! Universal Registry - 이름 → 싱글톤/factory 해석기
//!
//! 항목, 태그 색인, 동결 상태는 하나의 `RwLock` 아래에 있고,
//! 카운터는 atomic으로 lock 밖에서 갱신됩니다.
//! 검증 핸들러와 factory는 항상 lock을 잡지 않은 상태에서 호출됩니다.

use super::entry::{EntryInfo, EntryKind, EntryMetadata, Factory, RegistryEntry};
use super::event::RegistryEvent;
use super::index::CategoryIndex;
use super::metrics::{AccessRecord, HealthReport, MetricsAccumulator, RegistryMetrics};
use super::validation::{Candidate, ValidationChain};
use chrono::{DateTime, Utc};
use keystone_foundation::{Error, RegistryConfig, Result, UserExecutionContext};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

struct RegistryState<T: ?Sized, C> {
    entries: HashMap<String, Arc<RegistryEntry<T, C>>>,
    index: CategoryIndex,
    frozen: bool,
    frozen_at: Option<DateTime<Utc>>,
}

/// 범용 레지스트리
///
/// `T`는 보관할 값 타입 (`dyn Trait` 가능), `C`는 factory에 전달되는 실행 컨텍스트입니다.
///
/// ```ignore
/// let registry: UniversalRegistry<dyn Tool> = UniversalRegistry::new("ToolRegistry");
/// registry.register("echo", Arc::new(EchoTool), EntryMetadata::new().with_tag("builtin"))?;
/// registry.freeze();
/// ```
pub struct UniversalRegistry<T: ?Sized, C = UserExecutionContext> {
    name: String,
    config: RegistryConfig,
    state: RwLock<RegistryState<T, C>>,
    validators: ValidationChain<T>,
    metrics: MetricsAccumulator,
    events: broadcast::Sender<RegistryEvent>,
    created_at: DateTime<Utc>,
}

impl<T: ?Sized, C> UniversalRegistry<T, C> {
    /// 기본 설정으로 생성
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, RegistryConfig::default())
    }

    /// 설정을 지정하여 생성
    pub fn with_config(name: impl Into<String>, config: RegistryConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));
        Self {
            name: name.into(),
            config,
            state: RwLock::new(RegistryState {
                entries: HashMap::new(),
                index: CategoryIndex::new(),
                frozen: false,
                frozen_at: None,
            }),
            validators: ValidationChain::new(),
            metrics: MetricsAccumulator::new(),
            events,
            created_at: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// 변경 이벤트 구독
    pub fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.events.subscribe()
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// 싱글톤 등록
    pub fn register(
        &self,
        key: impl Into<String>,
        value: Arc<T>,
        metadata: EntryMetadata,
    ) -> Result<()> {
        let key = key.into();
        self.precheck(&key, EntryKind::Singleton)?;
        self.run_validation(&key, Candidate::Instance(value.as_ref()))?;
        self.commit(RegistryEntry::singleton(key, value, metadata))
    }

    /// 메타데이터 없이 싱글톤 등록
    pub fn register_simple(&self, key: impl Into<String>, value: Arc<T>) -> Result<()> {
        self.register(key, value, EntryMetadata::new())
    }

    /// factory 등록
    ///
    /// override가 꺼져 있어도 싱글톤만 있는 키는 factory로 교체할 수 있습니다.
    pub fn register_factory<F>(
        &self,
        key: impl Into<String>,
        factory: F,
        metadata: EntryMetadata,
    ) -> Result<()>
    where
        F: Fn(&C) -> anyhow::Result<Arc<T>> + Send + Sync + 'static,
    {
        let key = key.into();
        self.precheck(&key, EntryKind::Factory)?;
        self.run_validation(&key, Candidate::Factory)?;
        let factory: Factory<T, C> = Arc::new(factory);
        self.commit(RegistryEntry::with_factory(key, factory, metadata))
    }

    /// 검증 핸들러 추가 (제거 불가)
    pub fn add_validation_handler<F>(&self, handler: F)
    where
        F: Fn(&str, Candidate<'_, T>) -> anyhow::Result<bool> + Send + Sync + 'static,
    {
        self.validators.push(Arc::new(handler));
        debug!(
            "[{}] Added validation handler (total: {})",
            self.name,
            self.validators.len()
        );
    }

    pub fn validation_handler_count(&self) -> usize {
        self.validators.len()
    }

    fn is_duplicate(&self, state: &RegistryState<T, C>, key: &str, kind: EntryKind) -> bool {
        if self.config.allow_override {
            return false;
        }
        match kind {
            EntryKind::Singleton => state.entries.contains_key(key),
            EntryKind::Factory => state.entries.get(key).is_some_and(|e| e.has_factory()),
        }
    }

    /// 검증 전 빠른 거부 (commit 시 lock 안에서 다시 확인)
    fn precheck(&self, key: &str, kind: EntryKind) -> Result<()> {
        let state = self.state.read();
        if state.frozen {
            return Err(Error::frozen(&self.name));
        }
        if self.is_duplicate(&state, key, kind) {
            self.metrics.record_duplicate();
            return Err(Error::duplicate_key(key, &self.name));
        }
        Ok(())
    }

    fn run_validation(&self, key: &str, candidate: Candidate<'_, T>) -> Result<()> {
        self.validators
            .validate(&self.name, key, candidate)
            .map_err(|e| {
                self.metrics.record_validation_failure();
                e
            })
    }

    fn commit(&self, entry: RegistryEntry<T, C>) -> Result<()> {
        let key = entry.key().to_string();
        let kind = entry.kind();
        let tags: Vec<String> = entry.tags().iter().cloned().collect();

        let replaced = {
            let mut state = self.state.write();
            if state.frozen {
                return Err(Error::frozen(&self.name));
            }
            if self.is_duplicate(&state, &key, kind) {
                self.metrics.record_duplicate();
                return Err(Error::duplicate_key(&key, &self.name));
            }

            let previous = state.entries.insert(key.clone(), Arc::new(entry));
            if let Some(previous) = &previous {
                state.index.remove(&key, previous.tags());
            }
            state.index.insert(&key, &tags);
            previous.is_some()
        };

        self.metrics.record_success();
        if replaced {
            info!("[{}] Replaced '{}' ({})", self.name, key, kind);
        } else {
            debug!("[{}] Registered '{}' ({})", self.name, key, kind);
        }

        self.emit(RegistryEvent::Registered {
            registry: self.name.clone(),
            key,
            kind,
            tags,
            replaced,
        });
        Ok(())
    }

    // ========================================================================
    // Retrieval
    // ========================================================================

    fn lookup(&self, key: &str) -> Option<Arc<RegistryEntry<T, C>>> {
        self.state.read().entries.get(key).cloned()
    }

    /// 값 조회
    ///
    /// 싱글톤 값이 있으면 컨텍스트와 관계없이 그 값을 돌려줍니다.
    /// factory만 있는 항목은 컨텍스트가 주어졌을 때만 새 인스턴스를 만듭니다.
    pub fn get(&self, key: &str, context: Option<&C>) -> Result<Option<Arc<T>>> {
        let Some(entry) = self.lookup(key) else {
            return Ok(None);
        };

        if self.config.enable_metrics {
            entry.mark_accessed();
            self.metrics.record_retrieval();
        }

        if let Some(value) = entry.value() {
            return Ok(Some(Arc::clone(value)));
        }

        match (entry.factory(), context) {
            (Some(factory), Some(context)) => {
                if self.config.enable_metrics {
                    self.metrics.record_factory_creation();
                }
                factory(context).map(Some).map_err(Error::Factory)
            }
            _ => {
                debug!(
                    "[{}] '{}' requires a context to create an instance",
                    self.name, key
                );
                Ok(None)
            }
        }
    }

    /// factory로 새 인스턴스 생성 (싱글톤 값이 있어도 factory 호출)
    pub fn create_instance(&self, key: &str, context: &C) -> Result<Arc<T>> {
        let (entry, factory) = self
            .lookup(key)
            .and_then(|entry| entry.factory().cloned().map(|factory| (entry, factory)))
            .ok_or_else(|| Error::factory_not_found(key, &self.name))?;

        if self.config.enable_metrics {
            entry.mark_accessed();
            self.metrics.record_factory_creation();
        }

        factory(context).map_err(Error::Factory)
    }

    pub fn has(&self, key: &str) -> bool {
        self.state.read().entries.contains_key(key)
    }

    /// 정렬된 키 목록
    pub fn list_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.state.read().entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// 태그에 속한 키
    pub fn list_by_tag(&self, tag: &str) -> BTreeSet<String> {
        self.state.read().index.keys_for(tag)
    }

    /// 사용 중인 태그 목록
    pub fn tags(&self) -> Vec<String> {
        self.state.read().index.tags()
    }

    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().entries.is_empty()
    }

    /// 항목 스냅샷
    pub fn entry_info(&self, key: &str) -> Option<EntryInfo> {
        self.lookup(key).map(|entry| entry.info())
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// 항목 제거 - 없으면 `Ok(false)`
    pub fn remove(&self, key: &str) -> Result<bool> {
        let removed = {
            let mut state = self.state.write();
            if state.frozen {
                return Err(Error::frozen(&self.name));
            }
            match state.entries.remove(key) {
                Some(entry) => {
                    state.index.remove(key, entry.tags());
                    true
                }
                None => false,
            }
        };

        if removed {
            debug!("[{}] Removed '{}'", self.name, key);
            self.emit(RegistryEvent::Removed {
                registry: self.name.clone(),
                key: key.to_string(),
            });
        }
        Ok(removed)
    }

    /// 모든 항목 제거
    pub fn clear(&self) -> Result<()> {
        let removed = {
            let mut state = self.state.write();
            if state.frozen {
                return Err(Error::frozen(&self.name));
            }
            let removed = state.entries.len();
            state.entries.clear();
            state.index.clear();
            removed
        };

        info!("[{}] Cleared {} items", self.name, removed);
        self.emit(RegistryEvent::Cleared {
            registry: self.name.clone(),
            removed,
        });
        Ok(())
    }

    /// 설정 기반 등록 (동적 타입 해석은 지원하지 않음)
    pub fn load_from_config(&self, config: &Value) -> Result<()> {
        if self.is_frozen() {
            return Err(Error::frozen(&self.name));
        }

        let Some(items) = config.as_object() else {
            warn!("[{}] Registry config must be a JSON object", self.name);
            return Ok(());
        };

        for (key, entry) in items {
            let target = entry
                .get("factory")
                .or_else(|| entry.get("class"))
                .and_then(Value::as_str);
            match target {
                Some(target) => warn!(
                    "[{}] Dynamic loading not implemented, skipping '{}' ({})",
                    self.name, key, target
                ),
                None => warn!("[{}] Invalid config entry '{}'", self.name, key),
            }
        }
        Ok(())
    }

    // ========================================================================
    // Freeze
    // ========================================================================

    /// 동결 - 이후 모든 변경 거부 (반복 호출 무해)
    pub fn freeze(&self) {
        let frozen_with = {
            let mut state = self.state.write();
            if state.frozen {
                None
            } else {
                state.frozen = true;
                state.frozen_at = Some(Utc::now());
                Some(state.entries.len())
            }
        };

        match frozen_with {
            Some(items) => {
                info!("[{}] Frozen with {} items", self.name, items);
                self.emit(RegistryEvent::Frozen {
                    registry: self.name.clone(),
                });
            }
            None => debug!("[{}] Already frozen", self.name),
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.state.read().frozen
    }

    pub fn frozen_at(&self) -> Option<DateTime<Utc>> {
        self.state.read().frozen_at
    }

    // ========================================================================
    // Metrics & Health
    // ========================================================================

    fn collect_metrics(&self) -> (RegistryMetrics, usize) {
        let (records, total_items, category_distribution, frozen, frozen_at) = {
            let state = self.state.read();
            let records: Vec<AccessRecord> = state
                .entries
                .values()
                .map(|entry| AccessRecord {
                    key: entry.key().to_string(),
                    access_count: entry.access_count(),
                    last_accessed: entry.last_accessed(),
                })
                .collect();
            (
                records,
                state.entries.len(),
                state.index.distribution(),
                state.frozen,
                state.frozen_at,
            )
        };

        let unused = records.iter().filter(|r| r.access_count == 0).count();
        let counters = self.metrics.snapshot();
        let uptime = (Utc::now() - self.created_at).num_seconds().max(0) as u64;

        let metrics = RegistryMetrics {
            registry_name: self.name.clone(),
            total_items,
            frozen,
            frozen_at,
            uptime_seconds: uptime,
            metrics: counters,
            category_distribution,
            most_accessed: AccessRecord::top(records, self.config.most_accessed_limit),
            success_rate: counters.success_rate(),
        };
        (metrics, unused)
    }

    /// 메트릭 스냅샷
    pub fn get_metrics(&self) -> RegistryMetrics {
        self.collect_metrics().0
    }

    /// 상태 점검
    pub fn validate_health(&self) -> HealthReport {
        let (metrics, unused) = self.collect_metrics();
        HealthReport::assess(metrics, unused, &self.config)
    }

    fn emit(&self, event: RegistryEvent) {
        // 구독자가 없으면 무시
        let _ = self.events.send(event);
    }
}

impl<T: ?Sized, C> std::fmt::Debug for UniversalRegistry<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("UniversalRegistry")
            .field("name", &self.name)
            .field("items", &state.entries.len())
            .field("frozen", &state.frozen)
            .field("validators", &self.validators.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::metrics::HealthStatus;
    use serde_json::json;

    type TestRegistry = UniversalRegistry<str, UserExecutionContext>;

    fn value(s: &str) -> Arc<str> {
        Arc::from(s)
    }

    #[test]
    fn test_register_and_get() {
        let registry = TestRegistry::new("TestRegistry");
        registry.register_simple("a", value("alpha")).unwrap();

        let found = registry.get("a", None).unwrap().unwrap();
        assert_eq!(&*found, "alpha");
        assert!(registry.has("a"));
        assert_eq!(registry.len(), 1);
        assert!(registry.get("missing", None).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_rejected_and_counted() {
        let registry = TestRegistry::new("TestRegistry");
        registry.register_simple("a", value("1")).unwrap();

        let err = registry.register_simple("a", value("2")).unwrap_err();
        assert!(err.to_string().contains("a already registered in TestRegistry"));
        assert_eq!(&*registry.get("a", None).unwrap().unwrap(), "1");

        let counters = registry.get_metrics().metrics;
        assert_eq!(counters.total_registrations, 2);
        assert_eq!(counters.successful_registrations, 1);
        assert_eq!(counters.failed_registrations, 1);
    }

    #[test]
    fn test_override_replaces_and_reindexes() {
        let registry = TestRegistry::with_config(
            "TestRegistry",
            RegistryConfig::new().allow_override(true),
        );
        registry
            .register("a", value("1"), EntryMetadata::new().with_tag("old"))
            .unwrap();
        registry
            .register("a", value("2"), EntryMetadata::new().with_tag("new"))
            .unwrap();

        assert_eq!(&*registry.get("a", None).unwrap().unwrap(), "2");
        assert!(registry.list_by_tag("old").is_empty());
        assert_eq!(registry.list_by_tag("new"), BTreeSet::from(["a".to_string()]));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_factory_requires_context() {
        let registry = TestRegistry::new("TestRegistry");
        registry
            .register_factory(
                "f",
                |ctx: &UserExecutionContext| Ok(Arc::from(ctx.user_id.as_str())),
                EntryMetadata::new(),
            )
            .unwrap();

        assert!(registry.get("f", None).unwrap().is_none());

        let ctx = UserExecutionContext::new("user-1");
        let first = registry.get("f", Some(&ctx)).unwrap().unwrap();
        let second = registry.get("f", Some(&ctx)).unwrap().unwrap();
        assert_eq!(&*first, "user-1");
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(registry.get_metrics().metrics.factory_creations, 2);
    }

    #[test]
    fn test_singleton_takes_precedence_over_factory_in_get() {
        let registry = TestRegistry::new("TestRegistry");
        registry.register_simple("k", value("shared")).unwrap();
        registry
            .register_factory("k", |_: &UserExecutionContext| Ok(Arc::from("fresh")), EntryMetadata::new())
            .unwrap();

        // factory 등록이 싱글톤 항목을 대체함
        let ctx = UserExecutionContext::new("u");
        assert_eq!(&*registry.get("k", Some(&ctx)).unwrap().unwrap(), "fresh");

        let dup = registry.register_factory(
            "k",
            |_: &UserExecutionContext| Ok(Arc::from("again")),
            EntryMetadata::new(),
        );
        assert!(matches!(dup, Err(Error::DuplicateKey { .. })));
    }

    #[test]
    fn test_create_instance() {
        let registry = TestRegistry::new("TestRegistry");
        registry.register_simple("plain", value("v")).unwrap();
        registry
            .register_factory("f", |_: &UserExecutionContext| Ok(Arc::from("made")), EntryMetadata::new())
            .unwrap();

        let ctx = UserExecutionContext::new("u");
        assert_eq!(&*registry.create_instance("f", &ctx).unwrap(), "made");

        let err = registry.create_instance("plain", &ctx).unwrap_err();
        assert!(matches!(err, Error::FactoryNotFound { .. }));
        let err = registry.create_instance("missing", &ctx).unwrap_err();
        assert_eq!(err.to_string(), "No factory for missing in TestRegistry");

        let info = registry.entry_info("f").unwrap();
        assert_eq!(info.access_count, 1);
        assert_eq!(registry.get_metrics().metrics.total_retrievals, 0);
    }

    #[test]
    fn test_factory_error_passes_through() {
        #[derive(Debug)]
        struct QuotaExceeded;
        impl std::fmt::Display for QuotaExceeded {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "quota exceeded")
            }
        }
        impl std::error::Error for QuotaExceeded {}

        let registry = TestRegistry::new("TestRegistry");
        registry
            .register_factory(
                "f",
                |_: &UserExecutionContext| Err(anyhow::Error::new(QuotaExceeded)),
                EntryMetadata::new(),
            )
            .unwrap();

        let err = registry
            .get("f", Some(&UserExecutionContext::new("u")))
            .unwrap_err();
        assert_eq!(err.to_string(), "quota exceeded");
        assert!(!err.is_registry_error());
        assert!(err.as_factory_error().unwrap().is::<QuotaExceeded>());
    }

    #[test]
    fn test_validation_failure_counts() {
        let registry = TestRegistry::new("TestRegistry");
        registry.add_validation_handler(|_key, candidate| {
            Ok(candidate.instance().map_or(true, |v| !v.is_empty()))
        });
        assert_eq!(registry.validation_handler_count(), 1);

        let err = registry.register_simple("blank", value("")).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed for blank");
        assert!(!registry.has("blank"));

        let counters = registry.get_metrics().metrics;
        assert_eq!(counters.total_registrations, 1);
        assert_eq!(counters.failed_registrations, 1);
        assert_eq!(counters.validation_failures, 1);
    }

    #[test]
    fn test_validator_may_reenter_registry() {
        let registry = Arc::new(TestRegistry::new("TestRegistry"));
        let inner = Arc::downgrade(&registry);
        registry.add_validation_handler(move |key, _| {
            let registry = inner.upgrade().ok_or_else(|| anyhow::anyhow!("dropped"))?;
            Ok(!registry.has(&format!("{}_blocked", key)))
        });

        registry.register_simple("x_blocked", value("1")).unwrap();
        assert!(registry.register_simple("x", value("2")).is_err());
        assert!(registry.register_simple("y", value("3")).is_ok());
    }

    #[test]
    fn test_freeze_blocks_mutation_without_metrics() {
        let registry = TestRegistry::new("TestRegistry");
        registry.register_simple("a", value("1")).unwrap();
        registry.freeze();
        let first_frozen_at = registry.frozen_at();
        registry.freeze();

        assert!(registry.is_frozen());
        assert_eq!(registry.frozen_at(), first_frozen_at);

        let err = registry.register_simple("b", value("2")).unwrap_err();
        assert_eq!(err.to_string(), "TestRegistry is frozen");
        assert!(registry.remove("a").is_err());
        assert!(registry.clear().is_err());
        assert!(registry.load_from_config(&json!({})).is_err());

        assert_eq!(registry.get_metrics().metrics.total_registrations, 1);
        assert_eq!(&*registry.get("a", None).unwrap().unwrap(), "1");
    }

    #[test]
    fn test_remove_and_clear_keep_index_consistent() {
        let registry = TestRegistry::new("TestRegistry");
        registry
            .register("a", value("1"), EntryMetadata::new().with_tags(["x", "y"]))
            .unwrap();
        registry
            .register("b", value("2"), EntryMetadata::new().with_tag("x"))
            .unwrap();

        assert!(registry.remove("a").unwrap());
        assert!(!registry.remove("a").unwrap());
        assert_eq!(registry.tags(), vec!["x".to_string()]);

        registry.clear().unwrap();
        assert!(registry.is_empty());
        assert!(registry.tags().is_empty());
        assert!(registry.get_metrics().category_distribution.is_empty());
    }

    #[test]
    fn test_metrics_disabled_skips_access_tracking() {
        let registry = TestRegistry::with_config(
            "TestRegistry",
            RegistryConfig::new().enable_metrics(false),
        );
        registry.register_simple("a", value("1")).unwrap();
        registry.get("a", None).unwrap();

        assert_eq!(registry.entry_info("a").unwrap().access_count, 0);
        assert_eq!(registry.get_metrics().metrics.total_retrievals, 0);
    }

    #[test]
    fn test_most_accessed_and_health() {
        let registry = TestRegistry::new("TestRegistry");
        assert_eq!(registry.validate_health().status, HealthStatus::Warning);

        registry.register_simple("a", value("1")).unwrap();
        registry.register_simple("b", value("2")).unwrap();
        registry.get("b", None).unwrap();
        registry.get("b", None).unwrap();
        registry.get("a", None).unwrap();

        let metrics = registry.get_metrics();
        assert_eq!(metrics.most_accessed[0].key, "b");
        assert_eq!(metrics.most_accessed[0].access_count, 2);
        assert_eq!(metrics.success_rate, 1.0);

        let report = registry.validate_health();
        assert_eq!(report.status, HealthStatus::Healthy);
    }

    #[test]
    fn test_load_from_config_registers_nothing() {
        let registry = TestRegistry::new("TestRegistry");
        registry
            .load_from_config(&json!({
                "planner": {"factory": "agents.planner:create"},
                "broken": 42
            }))
            .unwrap();
        registry.load_from_config(&json!(["not", "an", "object"])).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_events_are_broadcast() {
        let registry = TestRegistry::new("TestRegistry");
        let mut rx = registry.subscribe();

        registry
            .register("a", value("1"), EntryMetadata::new().with_tag("t"))
            .unwrap();
        registry.remove("a").unwrap();
        registry.freeze();

        match rx.try_recv().unwrap() {
            RegistryEvent::Registered { key, kind, tags, replaced, .. } => {
                assert_eq!(key, "a");
                assert_eq!(kind, EntryKind::Singleton);
                assert_eq!(tags, vec!["t".to_string()]);
                assert!(!replaced);
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(rx.try_recv().unwrap().key(), Some("a"));
        assert!(matches!(rx.try_recv().unwrap(), RegistryEvent::Frozen { .. }));
    }
}
