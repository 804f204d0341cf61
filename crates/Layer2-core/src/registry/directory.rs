//! Registry Directory - 타입별 전역 레지스트리와 scoped registry 생성
//!
//! 전역 레지스트리는 타입당 하나만 만들어지며 (`OnceLock`), scoped registry는
//! 매번 새로 만들어 호출자가 소유합니다.

use super::metrics::{HealthReport, RegistryMetrics};
use super::universal::UniversalRegistry;
use crate::agent::AgentRegistry;
use crate::service::ServiceRegistry;
use crate::strategy::StrategyRegistry;
use crate::tool::ToolRegistry;
use keystone_foundation::{Error, RegistrySettings, Result};
use std::any::Any;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

/// 타입이 정해지지 않은 scoped registry
pub type GenericRegistry = UniversalRegistry<dyn Any + Send + Sync>;

// ============================================================================
// RegistryType
// ============================================================================

/// 전역 레지스트리 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryType {
    Agent,
    Tool,
    Service,
    Strategy,
}

impl RegistryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agent => "agent",
            Self::Tool => "tool",
            Self::Service => "service",
            Self::Strategy => "strategy",
        }
    }

    pub fn all() -> [RegistryType; 4] {
        [Self::Agent, Self::Tool, Self::Service, Self::Strategy]
    }
}

impl FromStr for RegistryType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "agent" => Ok(Self::Agent),
            "tool" => Ok(Self::Tool),
            "service" => Ok(Self::Service),
            "strategy" => Ok(Self::Strategy),
            _ => Err(Error::UnknownRegistryType(s.to_string())),
        }
    }
}

impl std::fmt::Display for RegistryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RegistryHandle
// ============================================================================

/// 종류별 레지스트리에 대한 공유 핸들
#[derive(Clone)]
pub enum RegistryHandle {
    Agent(Arc<AgentRegistry>),
    Tool(Arc<ToolRegistry>),
    Service(Arc<ServiceRegistry>),
    Strategy(Arc<StrategyRegistry>),
    Generic(Arc<GenericRegistry>),
}

macro_rules! forward {
    ($handle:expr, $registry:ident => $body:expr) => {
        match $handle {
            RegistryHandle::Agent($registry) => $body,
            RegistryHandle::Tool($registry) => $body,
            RegistryHandle::Service($registry) => $body,
            RegistryHandle::Strategy($registry) => $body,
            RegistryHandle::Generic($registry) => $body,
        }
    };
}

impl RegistryHandle {
    pub fn name(&self) -> &str {
        forward!(self, r => r.name())
    }

    pub fn len(&self) -> usize {
        forward!(self, r => r.len())
    }

    pub fn is_empty(&self) -> bool {
        forward!(self, r => r.is_empty())
    }

    pub fn is_frozen(&self) -> bool {
        forward!(self, r => r.is_frozen())
    }

    pub fn freeze(&self) {
        forward!(self, r => r.freeze())
    }

    pub fn list_keys(&self) -> Vec<String> {
        forward!(self, r => r.list_keys())
    }

    pub fn get_metrics(&self) -> RegistryMetrics {
        forward!(self, r => r.get_metrics())
    }

    pub fn validate_health(&self) -> HealthReport {
        forward!(self, r => r.validate_health())
    }

    /// 전역 레지스트리 종류 (generic이면 `None`)
    pub fn registry_type(&self) -> Option<RegistryType> {
        match self {
            Self::Agent(_) => Some(RegistryType::Agent),
            Self::Tool(_) => Some(RegistryType::Tool),
            Self::Service(_) => Some(RegistryType::Service),
            Self::Strategy(_) => Some(RegistryType::Strategy),
            Self::Generic(_) => None,
        }
    }

    pub fn as_agent(&self) -> Option<&Arc<AgentRegistry>> {
        match self {
            Self::Agent(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_tool(&self) -> Option<&Arc<ToolRegistry>> {
        match self {
            Self::Tool(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_service(&self) -> Option<&Arc<ServiceRegistry>> {
        match self {
            Self::Service(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_strategy(&self) -> Option<&Arc<StrategyRegistry>> {
        match self {
            Self::Strategy(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_generic(&self) -> Option<&Arc<GenericRegistry>> {
        match self {
            Self::Generic(r) => Some(r),
            _ => None,
        }
    }
}

impl std::fmt::Debug for RegistryHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryHandle")
            .field("name", &self.name())
            .field("type", &self.registry_type())
            .field("items", &self.len())
            .finish()
    }
}

// ============================================================================
// RegistryDirectory
// ============================================================================

/// 레지스트리 디렉터리
///
/// 호스트 코드가 직접 만들어 주입할 수 있고, `global_directory()`로 프로세스 전역
/// 인스턴스를 쓸 수도 있습니다.
#[derive(Default)]
pub struct RegistryDirectory {
    settings: RegistrySettings,
    agents: OnceLock<Arc<AgentRegistry>>,
    tools: OnceLock<Arc<ToolRegistry>>,
    services: OnceLock<Arc<ServiceRegistry>>,
    strategies: OnceLock<Arc<StrategyRegistry>>,
}

impl RegistryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: RegistrySettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &RegistrySettings {
        &self.settings
    }

    pub fn agents(&self) -> Arc<AgentRegistry> {
        Arc::clone(self.agents.get_or_init(|| {
            info!("[RegistryDirectory] Initializing AgentRegistry");
            Arc::new(AgentRegistry::with_config(
                self.settings.for_type(RegistryType::Agent.as_str()),
            ))
        }))
    }

    pub fn tools(&self) -> Arc<ToolRegistry> {
        Arc::clone(self.tools.get_or_init(|| {
            info!("[RegistryDirectory] Initializing ToolRegistry");
            Arc::new(ToolRegistry::with_config(
                self.settings.for_type(RegistryType::Tool.as_str()),
            ))
        }))
    }

    pub fn services(&self) -> Arc<ServiceRegistry> {
        Arc::clone(self.services.get_or_init(|| {
            info!("[RegistryDirectory] Initializing ServiceRegistry");
            Arc::new(ServiceRegistry::with_config(
                self.settings.for_type(RegistryType::Service.as_str()),
            ))
        }))
    }

    pub fn strategies(&self) -> Arc<StrategyRegistry> {
        Arc::clone(self.strategies.get_or_init(|| {
            info!("[RegistryDirectory] Initializing StrategyRegistry");
            Arc::new(StrategyRegistry::with_config(
                self.settings.for_type(RegistryType::Strategy.as_str()),
            ))
        }))
    }

    /// 종류별 전역 레지스트리
    pub fn registry(&self, registry_type: RegistryType) -> RegistryHandle {
        match registry_type {
            RegistryType::Agent => RegistryHandle::Agent(self.agents()),
            RegistryType::Tool => RegistryHandle::Tool(self.tools()),
            RegistryType::Service => RegistryHandle::Service(self.services()),
            RegistryType::Strategy => RegistryHandle::Strategy(self.strategies()),
        }
    }

    /// 이름으로 전역 레지스트리 조회 (대소문자 무시)
    pub fn get_global_registry(&self, type_name: &str) -> Result<RegistryHandle> {
        let registry_type: RegistryType = type_name.parse()?;
        Ok(self.registry(registry_type))
    }

    /// 이미 생성된 전역 레지스트리 종류
    pub fn initialized_types(&self) -> Vec<RegistryType> {
        RegistryType::all()
            .into_iter()
            .filter(|t| match t {
                RegistryType::Agent => self.agents.get().is_some(),
                RegistryType::Tool => self.tools.get().is_some(),
                RegistryType::Service => self.services.get().is_some(),
                RegistryType::Strategy => self.strategies.get().is_some(),
            })
            .collect()
    }

    /// 생성된 전역 레지스트리를 모두 동결
    pub fn freeze_all(&self) {
        for registry_type in self.initialized_types() {
            self.registry(registry_type).freeze();
        }
    }

    /// 새 scoped registry 생성 (`"{type_name}_{scope_id}"`)
    ///
    /// 알 수 없는 타입 이름이면 generic registry를 만듭니다.
    pub fn create_scoped_registry(&self, type_name: &str, scope_id: &str) -> RegistryHandle {
        let name = format!("{}_{}", type_name, scope_id);
        let config = self.settings.for_type(type_name);
        debug!("[RegistryDirectory] Creating scoped registry '{}'", name);

        match type_name.parse::<RegistryType>() {
            Ok(RegistryType::Agent) => {
                RegistryHandle::Agent(Arc::new(AgentRegistry::with_name(name, config)))
            }
            Ok(RegistryType::Tool) => {
                RegistryHandle::Tool(Arc::new(ToolRegistry::with_name(name, config)))
            }
            Ok(RegistryType::Service) => {
                RegistryHandle::Service(Arc::new(ServiceRegistry::with_name(name, config)))
            }
            Ok(RegistryType::Strategy) => {
                RegistryHandle::Strategy(Arc::new(StrategyRegistry::with_name(name, config)))
            }
            Err(_) => RegistryHandle::Generic(Arc::new(GenericRegistry::with_config(name, config))),
        }
    }
}

impl std::fmt::Debug for RegistryDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryDirectory")
            .field("initialized", &self.initialized_types())
            .finish()
    }
}

// ============================================================================
// 전역 디렉터리
// ============================================================================

static GLOBAL_DIRECTORY: OnceLock<Arc<RegistryDirectory>> = OnceLock::new();

/// 전역 디렉터리 초기화 (이미 있으면 기존 인스턴스 반환)
pub fn init_global_directory(settings: RegistrySettings) -> Arc<RegistryDirectory> {
    GLOBAL_DIRECTORY
        .get_or_init(|| Arc::new(RegistryDirectory::with_settings(settings)))
        .clone()
}

/// 전역 디렉터리 가져오기
pub fn global_directory() -> Arc<RegistryDirectory> {
    GLOBAL_DIRECTORY
        .get_or_init(|| Arc::new(RegistryDirectory::new()))
        .clone()
}
