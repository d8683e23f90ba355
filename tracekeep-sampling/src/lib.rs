// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Sampling decisions with a guaranteed, bounded throughput.
//!
//! [`GuaranteedThroughputSampler`] keeps a fraction of the traces and caps the kept
//! traces per second with a leaky-bucket [`RateLimiter`]. [`ConfiguredSampler`] selects
//! the sampling policy from a [`tracekeep::Config`] and is the sampler to install in an
//! OpenTelemetry tracer provider.

pub mod config;
pub mod configured;
pub mod constants;
pub mod decision;
pub mod guaranteed_throughput;
pub mod rate_limiter;
pub mod rate_limiting_sampler;
pub mod rate_sampler;

mod error;
mod otel;

// Re-exports for convenient usage
pub use config::SamplerConfig;
pub use configured::ConfiguredSampler;
pub use decision::{Decision, Sampler};
pub use error::{Error, Result};
pub use guaranteed_throughput::GuaranteedThroughputSampler;
pub use rate_limiter::{Clock, ManualClock, RateLimiter, SystemClock};
pub use rate_limiting_sampler::RateLimitingSampler;
pub use rate_sampler::RateSampler;
