//! Strategy Registry

use super::Strategy;
use crate::registry::{EntryMetadata, UniversalRegistry};
use keystone_foundation::{RegistryConfig, Result};
use std::ops::Deref;
use std::sync::Arc;

pub const STRATEGY_REGISTRY_NAME: &str = "StrategyRegistry";

pub struct StrategyRegistry {
    inner: UniversalRegistry<dyn Strategy>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self::with_name(STRATEGY_REGISTRY_NAME, config)
    }

    pub fn with_name(name: impl Into<String>, config: RegistryConfig) -> Self {
        Self {
            inner: UniversalRegistry::with_config(name, config),
        }
    }

    /// `strategy.name()`으로 등록
    pub fn register_strategy(&self, strategy: Arc<dyn Strategy>, metadata: EntryMetadata) -> Result<()> {
        let name = strategy.name().to_string();
        self.inner.register(name, strategy, metadata)
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for StrategyRegistry {
    type Target = UniversalRegistry<dyn Strategy>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.inner, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RoundRobin;

    impl Strategy for RoundRobin {
        fn name(&self) -> &str {
            "round_robin"
        }

        fn description(&self) -> &str {
            "Rotate through candidates"
        }
    }

    #[test]
    fn test_register_strategy() {
        let registry = StrategyRegistry::new();
        registry
            .register_strategy(Arc::new(RoundRobin), EntryMetadata::new().with_tag("routing"))
            .unwrap();

        let strategy = registry.get("round_robin", None).unwrap().unwrap();
        assert_eq!(strategy.description(), "Rotate through candidates");
        assert_eq!(registry.name(), "StrategyRegistry");
        assert_eq!(registry.validation_handler_count(), 0);
    }
}
