// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use opentelemetry::trace::TraceId;
use tracekeep::Config;

use crate::config::SamplerConfig;
use crate::decision::{Decision, Sampler};
use crate::error::Result;
use crate::guaranteed_throughput::GuaranteedThroughputSampler;
use crate::rate_limiter::{Clock, SystemClock};

/// The last guaranteed-throughput sampler is kept while another policy is active, so
/// that switching back resumes its rate limiter balance instead of starting full.
#[derive(Debug)]
enum Policy {
    /// Tracing is disabled
    AlwaysOff(Option<GuaranteedThroughputSampler>),
    /// Sampling is disabled through the `-1` sentinel
    AlwaysOn(Option<GuaranteedThroughputSampler>),
    GuaranteedThroughput(GuaranteedThroughputSampler),
}

/// The sampler installed in a tracer provider, driven by the tracer configuration.
///
/// The active policy can be swapped at runtime with [`ConfiguredSampler::reconfigure`]
/// or through the callback returned by [`ConfiguredSampler::on_config_update`].
/// Clones share the same policy.
#[derive(Debug, Clone)]
pub struct ConfiguredSampler {
    policy: Arc<RwLock<Policy>>,
    clock: Arc<dyn Clock>,
}

impl ConfiguredSampler {
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: &Config, clock: Arc<dyn Clock>) -> Result<Self> {
        let mut policy = Policy::AlwaysOff(None);
        policy.apply(config.enabled(), &SamplerConfig::from_config(config), &clock)?;
        Ok(ConfiguredSampler {
            policy: Arc::new(RwLock::new(policy)),
            clock,
        })
    }

    /// Applies a new tracer configuration.
    ///
    /// A guaranteed-throughput sampler is updated in place, keeping its rate limiter.
    /// On error the current policy stays active.
    pub fn reconfigure(&self, config: &Config) -> Result<()> {
        let mut policy = self.write();
        policy.apply(config.enabled(), &SamplerConfig::from_config(config), &self.clock)?;
        tracing::debug!(sampler = %policy.description(), "sampler reconfigured");
        Ok(())
    }

    /// Applies new sampling parameters.
    ///
    /// Ignored while tracing is disabled.
    pub fn update_sampling(&self, sampler_config: &SamplerConfig) -> Result<()> {
        let mut policy = self.write();
        if matches!(*policy, Policy::AlwaysOff(_)) {
            tracing::debug!("tracing is disabled, ignoring sampling update");
            return Ok(());
        }
        policy.apply(true, sampler_config, &self.clock)?;
        tracing::debug!(sampler = %policy.description(), "sampler reconfigured");
        Ok(())
    }

    /// Callback applying dynamic sampling configuration updates to this sampler.
    ///
    /// Invalid updates are logged and leave the sampler untouched.
    pub fn on_config_update(&self) -> Box<dyn Fn(&SamplerConfig) + Send + Sync> {
        let sampler = self.clone();
        Box::new(move |sampler_config| {
            if let Err(e) = sampler.update_sampling(sampler_config) {
                tracing::warn!(error = %e, "ignoring invalid sampling configuration update");
            }
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, Policy> {
        self.policy.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Policy> {
        self.policy.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Policy {
    fn retained(&self) -> Option<&GuaranteedThroughputSampler> {
        match self {
            Policy::AlwaysOff(retained) | Policy::AlwaysOn(retained) => retained.as_ref(),
            Policy::GuaranteedThroughput(sampler) => Some(sampler),
        }
    }

    /// Switches to the policy selected by the parameters. The policy is left unchanged
    /// on error.
    fn apply(
        &mut self,
        enabled: bool,
        sampler_config: &SamplerConfig,
        clock: &Arc<dyn Clock>,
    ) -> Result<()> {
        if !enabled {
            *self = Policy::AlwaysOff(self.retained().cloned());
            return Ok(());
        }
        if sampler_config.is_always_on() {
            *self = Policy::AlwaysOn(self.retained().cloned());
            return Ok(());
        }

        let sampler = match self.retained() {
            Some(sampler) => {
                sampler.update(sampler_config.fraction, sampler_config.max_traces_per_second)?;
                sampler.clone()
            }
            None => GuaranteedThroughputSampler::with_clock(
                sampler_config.fraction,
                sampler_config.max_traces_per_second,
                clock.clone(),
            )?,
        };
        *self = Policy::GuaranteedThroughput(sampler);
        Ok(())
    }

    fn should_sample(&self, trace_id: TraceId) -> Decision {
        match self {
            Policy::AlwaysOff(_) => Decision::Drop,
            Policy::AlwaysOn(_) => Decision::Sample,
            Policy::GuaranteedThroughput(sampler) => sampler.should_sample(trace_id),
        }
    }

    fn description(&self) -> String {
        match self {
            Policy::AlwaysOff(_) => "AlwaysOffSampler".to_string(),
            Policy::AlwaysOn(_) => "AlwaysOnSampler".to_string(),
            Policy::GuaranteedThroughput(sampler) => sampler.description(),
        }
    }
}

impl Sampler for ConfiguredSampler {
    fn should_sample(&self, trace_id: TraceId) -> Decision {
        self.read().should_sample(trace_id)
    }

    fn description(&self) -> String {
        self.read().description()
    }
}
