//! # Universal Registry
//!
//! 이름으로 agent, tool, service, strategy를 해석하는 단일 진입점
//!
//! ## 개요
//!
//! 각 항목은 공유 싱글톤 값이거나, 요청별 실행 컨텍스트를 받아 격리된 인스턴스를
//! 만드는 factory입니다. 등록 시점 검증, 태그 분류, 메트릭/상태 점검,
//! 단방향 동결(freeze)을 지원합니다.
//!
//! ## 아키텍처
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                 UniversalRegistry<T, C>                    │
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │ RwLock<RegistryState>                               │  │
//! │  │  ├── entries: HashMap<String, Arc<RegistryEntry>>   │  │
//! │  │  ├── index: CategoryIndex (tag → keys)              │  │
//! │  │  └── frozen / frozen_at                             │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! │  ValidationChain   MetricsAccumulator   broadcast::Sender │
//! └───────────────────────────────────────────────────────────┘
//!            ▲ Deref
//!   AgentRegistry / ToolRegistry / ServiceRegistry / StrategyRegistry
//!            ▲ OnceLock
//!   RegistryDirectory (전역 싱글톤 + scoped registry 생성)
//! ```
//!
//! ## 사용 예시
//!
//! ```ignore
//! use keystone_core::registry::{EntryMetadata, UniversalRegistry};
//!
//! let registry: UniversalRegistry<dyn Agent> = UniversalRegistry::new("AgentRegistry");
//!
//! // 싱글톤
//! registry.register("triage", Arc::new(TriageAgent), EntryMetadata::new().with_tag("core"))?;
//!
//! // 사용자별 인스턴스
//! registry.register_factory("planner", |ctx: &UserExecutionContext| {
//!     Ok(Arc::new(PlannerAgent::for_user(&ctx.user_id)) as Arc<dyn Agent>)
//! }, EntryMetadata::new())?;
//!
//! registry.freeze();
//! let planner = registry.get("planner", Some(&ctx))?;
//! ```

mod directory;
mod entry;
mod event;
mod index;
mod metrics;
mod universal;
mod validation;

pub use directory::{
    global_directory, init_global_directory, GenericRegistry, RegistryDirectory, RegistryHandle,
    RegistryType,
};
pub use entry::{EntryInfo, EntryKind, EntryMetadata, Factory, RegistryEntry, TAGS_FIELD};
pub use event::RegistryEvent;
pub use index::CategoryIndex;
pub use metrics::{
    AccessRecord, HealthReport, HealthStatus, MetricCounters, MetricsAccumulator, RegistryMetrics,
};
pub use universal::UniversalRegistry;
pub use validation::{Candidate, ValidationChain, ValidationHandler};
