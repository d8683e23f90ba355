// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use opentelemetry::trace::{
    Link, SamplingResult, SpanKind, TraceContextExt, TraceId, TraceState,
};
use opentelemetry::{Context, KeyValue};
use opentelemetry_sdk::trace::ShouldSample;

use crate::configured::ConfiguredSampler;
use crate::decision::{Decision, Sampler};
use crate::guaranteed_throughput::GuaranteedThroughputSampler;
use crate::rate_limiting_sampler::RateLimitingSampler;
use crate::rate_sampler::RateSampler;

/// The parent's sampling decision is not inherited, only its trace state is propagated.
fn sampling_result(decision: Decision, parent_context: Option<&Context>) -> SamplingResult {
    let trace_state = parent_context
        .filter(|c| c.has_active_span())
        .map(|c| c.span().span_context().trace_state().clone())
        .unwrap_or_else(TraceState::default);

    SamplingResult {
        decision: decision.into(),
        attributes: Vec::new(),
        trace_state,
    }
}

macro_rules! impl_should_sample {
    ($($sampler:ty),+ $(,)?) => {
        $(
            impl ShouldSample for $sampler {
                fn should_sample(
                    &self,
                    parent_context: Option<&Context>,
                    trace_id: TraceId,
                    _name: &str,
                    _span_kind: &SpanKind,
                    _attributes: &[KeyValue],
                    _links: &[Link],
                ) -> SamplingResult {
                    sampling_result(Sampler::should_sample(self, trace_id), parent_context)
                }
            }
        )+
    };
}

impl_should_sample!(
    RateSampler,
    RateLimitingSampler,
    GuaranteedThroughputSampler,
    ConfiguredSampler,
);
