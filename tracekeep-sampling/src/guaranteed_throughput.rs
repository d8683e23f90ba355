// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use opentelemetry::trace::TraceId;

use crate::decision::{Decision, Sampler};
use crate::error::{check_fraction, check_non_negative, Result};
use crate::rate_limiter::{Clock, SystemClock};
use crate::rate_limiting_sampler::RateLimitingSampler;
use crate::rate_sampler::RateSampler;

/// Keeps a `fraction` of the traces, but never more than `max_traces_per_second`.
///
/// The trace id ratio decision runs first. Only the traces it keeps are charged to the
/// rate limiter, so the realized rate is `min(fraction * traffic, max_traces_per_second)`
/// on a sustained load, with bursts up to `max(max_traces_per_second, 1)` traces.
///
/// Clones share both the parameters and the rate limiter budget: an update through one
/// clone applies to all of them.
#[derive(Clone, Debug)]
pub struct GuaranteedThroughputSampler {
    // The write lock is held across a whole update so readers never see the new
    // fraction with the old rate
    probability_sampler: Arc<RwLock<RateSampler>>,
    rate_limiting_sampler: RateLimitingSampler,
}

impl GuaranteedThroughputSampler {
    /// # Errors
    /// `fraction` must be within `[0, 1]` and `max_traces_per_second` must be a finite,
    /// non-negative number.
    pub fn new(fraction: f64, max_traces_per_second: f64) -> Result<Self> {
        Self::with_clock(fraction, max_traces_per_second, Arc::new(SystemClock))
    }

    pub fn with_clock(
        fraction: f64,
        max_traces_per_second: f64,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let fraction = check_fraction(fraction)?;
        let sampler = GuaranteedThroughputSampler {
            probability_sampler: Arc::new(RwLock::new(RateSampler::new(fraction))),
            rate_limiting_sampler: RateLimitingSampler::with_clock(max_traces_per_second, clock)?,
        };
        tracing::debug!(sampler = %sampler.description(), "sampler created");
        Ok(sampler)
    }

    /// Re-parameterizes the sampler in place, for every clone.
    ///
    /// The rate limiter is kept and its balance pro-rated to the new burst capacity.
    /// Nothing changes if either parameter is invalid.
    pub fn update(&self, fraction: f64, max_traces_per_second: f64) -> Result<()> {
        let fraction = check_fraction(fraction)?;
        check_non_negative("max_traces_per_second", max_traces_per_second)?;

        let description = {
            let mut probability_sampler = self
                .probability_sampler
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            self.rate_limiting_sampler.update(max_traces_per_second)?;
            probability_sampler.set_sample_rate(fraction);
            describe(&probability_sampler, &self.rate_limiting_sampler)
        };
        tracing::debug!(sampler = %description, "sampler updated");
        Ok(())
    }

    pub fn fraction(&self) -> f64 {
        self.probability_sampler().sample_rate()
    }

    pub fn max_traces_per_second(&self) -> f64 {
        self.rate_limiting_sampler.max_traces_per_second()
    }

    pub fn rate_limiting_sampler(&self) -> &RateLimitingSampler {
        &self.rate_limiting_sampler
    }

    fn probability_sampler(&self) -> RwLockReadGuard<'_, RateSampler> {
        self.probability_sampler
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn describe(
    probability_sampler: &RateSampler,
    rate_limiting_sampler: &RateLimitingSampler,
) -> String {
    format!(
        "GuaranteedThroughputSampler(fraction={}, max_traces_per_second={})",
        probability_sampler.sample_rate(),
        rate_limiting_sampler.max_traces_per_second()
    )
}

impl Sampler for GuaranteedThroughputSampler {
    fn should_sample(&self, trace_id: TraceId) -> Decision {
        let probability_sampler = self.probability_sampler();
        match probability_sampler.should_sample(trace_id) {
            Decision::Drop => Decision::Drop,
            Decision::Sample => self.rate_limiting_sampler.should_sample(trace_id),
        }
    }

    fn description(&self) -> String {
        describe(&self.probability_sampler(), &self.rate_limiting_sampler)
    }
}
