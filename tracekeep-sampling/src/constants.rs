// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Shared constants for the tracekeep-sampling crate

/// Sampling rate limits
pub mod rate {
    /// Maximum sampling rate
    pub const MAX_SAMPLE_RATE: f64 = 1.0;
    /// Minimum sampling rate
    pub const MIN_SAMPLE_RATE: f64 = 0.0;
}

/// Numeric constants used in sampling algorithms
pub mod numeric {
    /// Knuth's multiplicative hash factor for deterministic sampling
    pub const KNUTH_FACTOR: u64 = 1_111_111_111_111_111_111;
    /// Maximum 64-bit unsigned integer value
    pub const MAX_UINT_64BITS: u64 = u64::MAX;
}

/// Rate limiting constants
pub mod limiter {
    /// Credit spent by one sampled trace
    pub const TRACE_COST: f64 = 1.0;
    /// Lower bound of the burst capacity of a rate limiting sampler, so that a rate
    /// below one trace per second can still admit a trace
    pub const MIN_BURST_CAPACITY: f64 = 1.0;
}
