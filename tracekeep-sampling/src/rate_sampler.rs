// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use opentelemetry::trace::TraceId;
use std::fmt;

use crate::constants::{numeric, rate};
use crate::decision::{Decision, Sampler};
use numeric::{KNUTH_FACTOR, MAX_UINT_64BITS};

/// Keeps (100 * `sample_rate`)% of the traces.
///
/// The decision is a deterministic function of the trace id, so every process seeing the
/// same trace with the same rate takes the same decision.
#[derive(Clone)]
pub struct RateSampler {
    sample_rate: f64,
    sampling_id_threshold: u64,
}

impl fmt::Debug for RateSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RateSampler")
            .field("sample_rate", &self.sample_rate)
            .finish()
    }
}

impl RateSampler {
    fn calculate_threshold(rate: f64) -> u64 {
        if rate >= rate::MAX_SAMPLE_RATE {
            MAX_UINT_64BITS
        } else {
            (rate * (MAX_UINT_64BITS as f64)) as u64
        }
    }

    // NaN is clamped to 0
    fn clamp_rate(sample_rate: f64) -> f64 {
        if sample_rate.is_nan() {
            rate::MIN_SAMPLE_RATE
        } else {
            sample_rate.clamp(rate::MIN_SAMPLE_RATE, rate::MAX_SAMPLE_RATE)
        }
    }

    /// `sample_rate` is clamped between 0.0 and 1.0 inclusive.
    pub fn new(sample_rate: f64) -> Self {
        let clamped_rate = Self::clamp_rate(sample_rate);

        RateSampler {
            sample_rate: clamped_rate,
            sampling_id_threshold: Self::calculate_threshold(clamped_rate),
        }
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Sets a new sample rate for the sampler.
    /// `sample_rate` is clamped between 0.0 and 1.0 inclusive.
    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        let clamped_rate = Self::clamp_rate(sample_rate);
        self.sample_rate = clamped_rate;
        self.sampling_id_threshold = Self::calculate_threshold(clamped_rate);
    }

    /// Returns whether the trace is kept at this sampler's rate
    pub fn sample(&self, trace_id: TraceId) -> bool {
        if self.sample_rate <= rate::MIN_SAMPLE_RATE {
            return false;
        }
        if self.sample_rate >= rate::MAX_SAMPLE_RATE {
            return true;
        }

        hashed_id(trace_id) <= self.sampling_id_threshold
    }
}

/// Knuth multiplicative hash of the lower 64 bits of the trace id
fn hashed_id(trace_id: TraceId) -> u64 {
    let trace_id_u128 = u128::from_be_bytes(trace_id.to_bytes());
    (trace_id_u128 as u64).wrapping_mul(KNUTH_FACTOR)
}

impl Sampler for RateSampler {
    fn should_sample(&self, trace_id: TraceId) -> Decision {
        self.sample(trace_id).into()
    }

    fn description(&self) -> String {
        format!("RateSampler(sample_rate={})", self.sample_rate)
    }
}
