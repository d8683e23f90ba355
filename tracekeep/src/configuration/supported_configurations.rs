// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

/// Configuration keys read from the configuration sources
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedConfigurations {
    TRACER_ENABLED,
    TRACER_SAMPLING_FRACTION,
    TRACER_MAX_TRACES_PER_SEC,
    TRACER_LOG_LEVEL,
}

impl SupportedConfigurations {
    pub const ALL: [SupportedConfigurations; 4] = [
        SupportedConfigurations::TRACER_ENABLED,
        SupportedConfigurations::TRACER_SAMPLING_FRACTION,
        SupportedConfigurations::TRACER_MAX_TRACES_PER_SEC,
        SupportedConfigurations::TRACER_LOG_LEVEL,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportedConfigurations::TRACER_ENABLED => "TRACER_ENABLED",
            SupportedConfigurations::TRACER_SAMPLING_FRACTION => "TRACER_SAMPLING_FRACTION",
            SupportedConfigurations::TRACER_MAX_TRACES_PER_SEC => "TRACER_MAX_TRACES_PER_SEC",
            SupportedConfigurations::TRACER_LOG_LEVEL => "TRACER_LOG_LEVEL",
        }
    }
}

impl std::fmt::Display for SupportedConfigurations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
