// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

/// Default fraction of traces kept by the probability decision
pub const DEFAULT_SAMPLING_FRACTION: f64 = 0.1;

/// Default number of traces sampled per second, per process
pub const DEFAULT_MAX_TRACES_PER_SECOND: f64 = 1.0;

/// Configuring either sampling knob to this value selects the always-sample policy
pub const SAMPLING_DISABLED_SENTINEL: f64 = -1.0;
