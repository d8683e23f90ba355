// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use opentelemetry::trace::{SamplingDecision, TraceId};

/// Outcome of a sampling decision for one trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Record and export the trace
    Sample,
    /// Neither record nor export the trace
    Drop,
}

impl Decision {
    pub fn is_sample(&self) -> bool {
        matches!(self, Decision::Sample)
    }
}

impl From<bool> for Decision {
    fn from(keep: bool) -> Self {
        if keep {
            Decision::Sample
        } else {
            Decision::Drop
        }
    }
}

impl From<Decision> for SamplingDecision {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Sample => SamplingDecision::RecordAndSample,
            Decision::Drop => SamplingDecision::Drop,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Sample => f.write_str("sample"),
            Decision::Drop => f.write_str("drop"),
        }
    }
}

/// Decides whether the trace starting with `trace_id` is sampled.
///
/// Implemented by each sampling strategy of this crate so that callers can swap one for
/// another. Implementations never fail: a `Drop` is an ordinary outcome.
pub trait Sampler: fmt::Debug + Send + Sync {
    fn should_sample(&self, trace_id: TraceId) -> Decision;

    /// Human readable description of the sampler and its parameters, for logs
    fn description(&self) -> String;
}
