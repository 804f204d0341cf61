//! Registry Config - 레지스트리 동작 설정
//!
//! 레지스트리 인스턴스별 정책(override, metrics, health 임계값)과
//! 레지스트리 타입별 설정을 묶는 `RegistrySettings`를 제공합니다.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// 설정 파일명
pub const REGISTRY_CONFIG_FILE: &str = "registry.toml";

// ============================================================================
// RegistryConfig - 단일 레지스트리 설정
// ============================================================================

/// 단일 레지스트리 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryConfig {
    /// 같은 키로 재등록 허용 여부
    #[serde(default)]
    pub allow_override: bool,

    /// 조회 메트릭 수집 여부
    #[serde(default = "default_true")]
    pub enable_metrics: bool,

    /// 변경 이벤트 채널 크기
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,

    /// 메트릭의 most accessed 목록 길이
    #[serde(default = "default_most_accessed_limit")]
    pub most_accessed_limit: usize,

    /// 이 비율을 넘는 등록 실패율은 degraded
    #[serde(default = "default_failure_rate_threshold")]
    pub failure_rate_threshold: f64,

    /// 이 비율을 넘는 미사용 항목은 warning
    #[serde(default = "default_unused_ratio_threshold")]
    pub unused_ratio_threshold: f64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            allow_override: false,
            enable_metrics: true,
            event_capacity: default_event_capacity(),
            most_accessed_limit: default_most_accessed_limit(),
            failure_rate_threshold: default_failure_rate_threshold(),
            unused_ratio_threshold: default_unused_ratio_threshold(),
        }
    }
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn allow_override(mut self, allow: bool) -> Self {
        self.allow_override = allow;
        self
    }

    pub fn enable_metrics(mut self, enable: bool) -> Self {
        self.enable_metrics = enable;
        self
    }

    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    pub fn most_accessed_limit(mut self, limit: usize) -> Self {
        self.most_accessed_limit = limit;
        self
    }

    pub fn failure_rate_threshold(mut self, threshold: f64) -> Self {
        self.failure_rate_threshold = threshold;
        self
    }

    pub fn unused_ratio_threshold(mut self, threshold: f64) -> Self {
        self.unused_ratio_threshold = threshold;
        self
    }

    /// 설정값 검증
    pub fn validate(&self) -> Result<()> {
        if self.event_capacity == 0 {
            return Err(Error::Config("eventCapacity must be greater than 0".into()));
        }
        for (name, value) in [
            ("failureRateThreshold", self.failure_rate_threshold),
            ("unusedRatioThreshold", self.unused_ratio_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::Config(format!(
                    "{} must be within 0.0..=1.0, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// RegistrySettings - 타입별 설정 묶음
// ============================================================================

/// 레지스트리 타입별 설정
///
/// `overrides`의 키는 소문자 레지스트리 타입 이름 (`agent`, `tool`, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySettings {
    /// 모든 레지스트리의 기본 설정
    #[serde(default)]
    pub defaults: RegistryConfig,

    /// 타입별 설정
    #[serde(default)]
    pub overrides: HashMap<String, RegistryConfig>,
}

impl RegistrySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// 타입에 적용되는 설정 (대소문자 무시)
    pub fn for_type(&self, registry_type: &str) -> RegistryConfig {
        self.overrides
            .get(&registry_type.to_ascii_lowercase())
            .cloned()
            .unwrap_or_else(|| self.defaults.clone())
    }

    /// 타입별 설정 추가
    pub fn with_override(mut self, registry_type: &str, config: RegistryConfig) -> Self {
        self.overrides
            .insert(registry_type.to_ascii_lowercase(), config);
        self
    }

    /// 기본 설정 교체
    pub fn with_defaults(mut self, config: RegistryConfig) -> Self {
        self.defaults = config;
        self
    }

    // ========================================================================
    // Load
    // ========================================================================

    /// JSON 문자열에서 로드
    pub fn from_json_str(content: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// TOML 문자열에서 로드
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// 파일에서 로드 (확장자로 형식 결정, 기본은 TOML)
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };

        let settings = parsed
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))?;
        debug!(
            "Loaded registry settings from {} ({} overrides)",
            path.display(),
            settings.overrides.len()
        );
        Ok(settings)
    }

    /// 파일이 있으면 로드, 없으면 기본값
    pub fn load_optional(path: impl AsRef<Path>) -> Result<Self> {
        if !path.as_ref().exists() {
            debug!("{} not found, using default registry settings", path.as_ref().display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// 모든 설정 검증
    pub fn validate(&self) -> Result<()> {
        self.defaults.validate()?;
        for (name, config) in &self.overrides {
            config
                .validate()
                .map_err(|e| Error::Config(format!("[{}] {}", name, e)))?;
        }
        Ok(())
    }

    // ========================================================================
    // Merge
    // ========================================================================

    /// 다른 설정과 병합 (other가 우선)
    pub fn merge(&mut self, other: RegistrySettings) {
        if other.defaults != RegistryConfig::default() {
            self.defaults = other.defaults;
        }
        for (name, config) in other.overrides {
            self.overrides.insert(name.to_ascii_lowercase(), config);
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn default_true() -> bool {
    true
}

fn default_event_capacity() -> usize {
    256
}

fn default_most_accessed_limit() -> usize {
    5
}

fn default_failure_rate_threshold() -> f64 {
    0.10
}

fn default_unused_ratio_threshold() -> f64 {
    0.80
}
