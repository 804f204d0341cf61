//! Registry Metrics - 카운터, 스냅샷, 상태 점검

use chrono::{DateTime, Utc};
use keystone_foundation::RegistryConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

// ============================================================================
// MetricsAccumulator - lock 없이 갱신되는 카운터
// ============================================================================

#[derive(Debug, Default)]
pub struct MetricsAccumulator {
    total_registrations: AtomicU64,
    successful_registrations: AtomicU64,
    failed_registrations: AtomicU64,
    total_retrievals: AtomicU64,
    factory_creations: AtomicU64,
    validation_failures: AtomicU64,
}

impl MetricsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&self) {
        self.total_registrations.fetch_add(1, Ordering::Relaxed);
        self.successful_registrations.fetch_add(1, Ordering::Relaxed);
    }

    /// 중복 키로 거부된 등록
    pub fn record_duplicate(&self) {
        self.total_registrations.fetch_add(1, Ordering::Relaxed);
        self.failed_registrations.fetch_add(1, Ordering::Relaxed);
    }

    /// 검증 실패로 거부된 등록
    pub fn record_validation_failure(&self) {
        self.total_registrations.fetch_add(1, Ordering::Relaxed);
        self.failed_registrations.fetch_add(1, Ordering::Relaxed);
        self.validation_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_retrieval(&self) {
        self.total_retrievals.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_factory_creation(&self) {
        self.factory_creations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricCounters {
        MetricCounters {
            total_registrations: self.total_registrations.load(Ordering::Relaxed),
            successful_registrations: self.successful_registrations.load(Ordering::Relaxed),
            failed_registrations: self.failed_registrations.load(Ordering::Relaxed),
            total_retrievals: self.total_retrievals.load(Ordering::Relaxed),
            factory_creations: self.factory_creations.load(Ordering::Relaxed),
            validation_failures: self.validation_failures.load(Ordering::Relaxed),
        }
    }
}

// ============================================================================
// Snapshot 타입
// ============================================================================

/// 카운터 스냅샷
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCounters {
    pub total_registrations: u64,
    pub successful_registrations: u64,
    pub failed_registrations: u64,
    pub total_retrievals: u64,
    pub factory_creations: u64,
    pub validation_failures: u64,
}

impl MetricCounters {
    /// 성공률 (시도가 없으면 0.0)
    pub fn success_rate(&self) -> f64 {
        self.successful_registrations as f64 / self.total_registrations.max(1) as f64
    }

    pub fn failure_rate(&self) -> f64 {
        self.failed_registrations as f64 / self.total_registrations.max(1) as f64
    }
}

/// 항목별 접근 기록
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRecord {
    pub key: String,
    pub access_count: u64,
    pub last_accessed: Option<DateTime<Utc>>,
}

impl AccessRecord {
    /// 접근 횟수 내림차순, 동률이면 키 오름차순으로 상위 `limit`개
    pub fn top(mut records: Vec<AccessRecord>, limit: usize) -> Vec<AccessRecord> {
        records.sort_by(|a, b| {
            b.access_count
                .cmp(&a.access_count)
                .then_with(|| a.key.cmp(&b.key))
        });
        records.truncate(limit);
        records
    }
}

/// 레지스트리 메트릭 스냅샷
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryMetrics {
    pub registry_name: String,
    pub total_items: usize,
    pub frozen: bool,
    pub frozen_at: Option<DateTime<Utc>>,
    pub uptime_seconds: u64,
    pub metrics: MetricCounters,
    pub category_distribution: BTreeMap<String, usize>,
    pub most_accessed: Vec<AccessRecord>,
    pub success_rate: f64,
}

// ============================================================================
// Health
// ============================================================================

/// 상태 등급 (심각도 순으로 정렬됨)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Degraded,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healthy => write!(f, "healthy"),
            Self::Warning => write!(f, "warning"),
            Self::Degraded => write!(f, "degraded"),
        }
    }
}

/// 상태 점검 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub issues: Vec<String>,
    pub metrics: RegistryMetrics,
}

impl HealthReport {
    /// 메트릭과 미사용 항목 수로 상태 판정
    ///
    /// 해당하는 이슈는 모두 누적되고, 최종 등급은 가장 심각한 것을 따릅니다.
    pub fn assess(metrics: RegistryMetrics, unused: usize, config: &RegistryConfig) -> Self {
        let mut status = HealthStatus::Healthy;
        let mut issues = Vec::new();

        if metrics.total_items == 0 {
            status = status.max(HealthStatus::Warning);
            issues.push("Registry is empty".to_string());
        }

        let counters = metrics.metrics;
        if counters.failed_registrations > 0
            && counters.failure_rate() > config.failure_rate_threshold
        {
            status = status.max(HealthStatus::Degraded);
            issues.push(format!(
                "High failure rate: {:.1}%",
                counters.failure_rate() * 100.0
            ));
        }

        if metrics.total_items > 0
            && unused as f64 / metrics.total_items as f64 > config.unused_ratio_threshold
        {
            status = status.max(HealthStatus::Warning);
            issues.push(format!("Many unused items: {}/{}", unused, metrics.total_items));
        }

        Self {
            status,
            issues,
            metrics,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}
