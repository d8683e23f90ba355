// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use opentelemetry::trace::TraceId;

use crate::constants::limiter::{MIN_BURST_CAPACITY, TRACE_COST};
use crate::decision::{Decision, Sampler};
use crate::error::Result;
use crate::rate_limiter::{Clock, RateLimiter, SystemClock};

/// Samples at most `max_traces_per_second` traces.
///
/// Sampled traces follow the burstiness of the service: uniformly distributed requests
/// are sampled uniformly, while a sub-second burst can get several sequential requests
/// sampled, up to the burst capacity of `max(max_traces_per_second, 1)`.
///
/// The rate is the limiter's replenishment rate. Clones share the limiter, so an update
/// through any clone is seen by all of them.
#[derive(Clone, Debug)]
pub struct RateLimitingSampler {
    rate_limiter: RateLimiter,
}

fn burst_capacity(max_traces_per_second: f64) -> f64 {
    max_traces_per_second.max(MIN_BURST_CAPACITY)
}

impl RateLimitingSampler {
    pub fn new(max_traces_per_second: f64) -> Result<Self> {
        Self::with_clock(max_traces_per_second, Arc::new(SystemClock))
    }

    pub fn with_clock(max_traces_per_second: f64, clock: Arc<dyn Clock>) -> Result<Self> {
        let rate_limiter = RateLimiter::with_clock(
            max_traces_per_second,
            burst_capacity(max_traces_per_second),
            clock,
        )?;
        Ok(RateLimitingSampler { rate_limiter })
    }

    /// Re-parameterizes the sampler, keeping the limiter and its pro-rated balance
    pub fn update(&self, max_traces_per_second: f64) -> Result<()> {
        self.rate_limiter.update(
            max_traces_per_second,
            burst_capacity(max_traces_per_second),
        )
    }

    pub fn max_traces_per_second(&self) -> f64 {
        self.rate_limiter.credits_per_second()
    }

    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }
}

impl Sampler for RateLimitingSampler {
    fn should_sample(&self, _trace_id: TraceId) -> Decision {
        self.rate_limiter.check_credit(TRACE_COST).into()
    }

    fn description(&self) -> String {
        format!(
            "RateLimitingSampler(max_traces_per_second={})",
            self.max_traces_per_second()
        )
    }
}
