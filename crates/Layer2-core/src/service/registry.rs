//! Service Registry - 서비스 endpoint 등록

use crate::registry::{EntryMetadata, UniversalRegistry};
use keystone_foundation::{RegistryConfig, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::Deref;
use std::sync::Arc;
use url::Url;

pub const SERVICE_REGISTRY_NAME: &str = "ServiceRegistry";

/// 서비스 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_endpoint: Option<String>,

    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl ServiceRecord {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            health_endpoint: None,
            attributes: Map::new(),
        }
    }

    pub fn with_health_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.health_endpoint = Some(endpoint.into());
        self
    }
}

/// 서비스 레지스트리 - URL이 파싱되지 않는 레코드는 거부
pub struct ServiceRegistry {
    inner: UniversalRegistry<ServiceRecord>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self::with_name(SERVICE_REGISTRY_NAME, config)
    }

    pub fn with_name(name: impl Into<String>, config: RegistryConfig) -> Self {
        let inner: UniversalRegistry<ServiceRecord> = UniversalRegistry::with_config(name, config);
        inner.add_validation_handler(|_key, candidate| match candidate.instance() {
            Some(record) => {
                Url::parse(&record.url)?;
                Ok(true)
            }
            None => Ok(true),
        });
        Self { inner }
    }

    /// 서비스 등록 (메타데이터는 레코드 속성으로도 보관)
    pub fn register_service(
        &self,
        name: impl Into<String>,
        url: &str,
        health_endpoint: Option<&str>,
        metadata: EntryMetadata,
    ) -> Result<()> {
        let record = ServiceRecord {
            url: url.to_string(),
            health_endpoint: health_endpoint.map(str::to_string),
            attributes: metadata.as_map().clone(),
        };
        self.inner.register(name, Arc::new(record), metadata)
    }

    pub fn service_url(&self, name: &str) -> Option<String> {
        self.record(name).map(|record| record.url.clone())
    }

    pub fn health_endpoint(&self, name: &str) -> Option<String> {
        self.record(name)
            .and_then(|record| record.health_endpoint.clone())
    }

    fn record(&self, name: &str) -> Option<Arc<ServiceRecord>> {
        // 서비스는 싱글톤으로만 등록되므로 에러가 나지 않음
        self.inner.get(name, None).ok().flatten()
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for ServiceRegistry {
    type Target = UniversalRegistry<ServiceRecord>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl std::fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.inner, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keystone_foundation::Error;

    #[test]
    fn test_register_and_lookup() {
        let registry = ServiceRegistry::new();
        registry
            .register_service(
                "billing",
                "https://billing.internal:8443/api",
                Some("/healthz"),
                EntryMetadata::new().with_tag("payments").with("owner", "finance"),
            )
            .unwrap();

        assert_eq!(
            registry.service_url("billing").as_deref(),
            Some("https://billing.internal:8443/api")
        );
        assert_eq!(registry.health_endpoint("billing").as_deref(), Some("/healthz"));
        assert!(registry.list_by_tag("payments").contains("billing"));

        let record = registry.get("billing", None).unwrap().unwrap();
        assert_eq!(record.attributes.get("owner"), Some(&Value::from("finance")));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let registry = ServiceRegistry::new();
        let err = registry
            .register_service("broken", "not a url", None, EntryMetadata::new())
            .unwrap_err();

        assert!(matches!(err, Error::ValidationFailed { .. }));
        assert!(registry.service_url("broken").is_none());
        assert_eq!(registry.get_metrics().metrics.validation_failures, 1);
    }

    #[test]
    fn test_missing_health_endpoint() {
        let registry = ServiceRegistry::new();
        registry
            .register_service("cache", "redis://localhost:6379", None, EntryMetadata::new())
            .unwrap();
        assert!(registry.health_endpoint("cache").is_none());
        assert_eq!(registry.name(), "ServiceRegistry");
    }

    #[test]
    fn test_record_serialization() {
        let record = ServiceRecord::new("http://localhost").with_health_endpoint("/ping");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["healthEndpoint"], "/ping");

        let parsed: ServiceRecord = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, record);
    }
}
