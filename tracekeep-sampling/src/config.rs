// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use tracekeep::constants::{
    DEFAULT_MAX_TRACES_PER_SECOND, DEFAULT_SAMPLING_FRACTION, SAMPLING_DISABLED_SENTINEL,
};
use tracekeep::Config;

use crate::error::Result;
use crate::guaranteed_throughput::GuaranteedThroughputSampler;

/// Sampling parameters, as carried by dynamic configuration payloads
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Fraction of traces kept by the trace id ratio decision (0.0-1.0)
    #[serde(default = "default_fraction")]
    pub fraction: f64,

    /// Maximum number of traces sampled per second, per process
    #[serde(default = "default_max_traces_per_second")]
    pub max_traces_per_second: f64,
}

fn default_fraction() -> f64 {
    DEFAULT_SAMPLING_FRACTION
}

fn default_max_traces_per_second() -> f64 {
    DEFAULT_MAX_TRACES_PER_SECOND
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            fraction: DEFAULT_SAMPLING_FRACTION,
            max_traces_per_second: DEFAULT_MAX_TRACES_PER_SECOND,
        }
    }
}

impl SamplerConfig {
    pub fn new(fraction: f64, max_traces_per_second: f64) -> Self {
        SamplerConfig {
            fraction,
            max_traces_per_second,
        }
    }

    /// Sampling parameters of a tracer configuration
    pub fn from_config(config: &Config) -> Self {
        SamplerConfig {
            fraction: config.sampling_fraction(),
            max_traces_per_second: config.max_traces_per_second(),
        }
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> tracekeep::Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| tracekeep::Error::from(e).context("invalid sampler configuration"))
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> tracekeep::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Whether these parameters select the always-sample policy instead of
    /// guaranteed-throughput sampling
    pub fn is_always_on(&self) -> bool {
        self.fraction == SAMPLING_DISABLED_SENTINEL
            || self.max_traces_per_second == SAMPLING_DISABLED_SENTINEL
    }

    /// Create a GuaranteedThroughputSampler from this configuration
    pub fn build_sampler(&self) -> Result<GuaranteedThroughputSampler> {
        GuaranteedThroughputSampler::new(self.fraction, self.max_traces_per_second)
    }
}
