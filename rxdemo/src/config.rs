// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::ops::RangeInclusive;
use core::time::Duration;
use rxdemo_core::{DemoError, Result};
use serde::Deserialize;

/// Latency and payload size of the simulated backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendConfig {
    pub latency_ms: u64,
    pub response_length: usize,
}

impl BackendConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Interval reshaping parameters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReshapeConfig {
    pub source_period_ms: u64,
    pub period_ms: u64,
    /// First value that is no longer emitted
    pub limit: u64,
}

impl ReshapeConfig {
    pub fn source_period(&self) -> Duration {
        Duration::from_millis(self.source_period_ms)
    }

    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }
}

/// Flattening demonstration parameters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlattenConfig {
    pub first_index: u32,
    pub last_index: u32,
    pub inner_duration_ms: u64,
}

impl FlattenConfig {
    pub fn indices(&self) -> RangeInclusive<u32> {
        self.first_index..=self.last_index
    }

    pub fn inner_duration(&self) -> Duration {
        Duration::from_millis(self.inner_duration_ms)
    }
}

/// Complete demonstration configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DemoConfig {
    pub backend: BackendConfig,
    pub reshape: ReshapeConfig,
    pub flatten: FlattenConfig,
}

impl DemoConfig {
    /// Load configuration from embedded TOML file
    pub fn load() -> Result<Self> {
        Self::parse(include_str!("../demo.toml"))
    }

    pub fn parse(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| DemoError::config_error(e.to_string()))
    }
}
