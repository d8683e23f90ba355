// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::sources::CompositeSource;
use crate::constants::{DEFAULT_MAX_TRACES_PER_SECOND, DEFAULT_SAMPLING_FRACTION};
use crate::log::LevelFilter;

use super::supported_configurations::SupportedConfigurations as Key;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
/// Configuration for trace sampling
///
/// The configuration is a plain value: whoever builds the tracer provider owns it and
/// passes it down, there is no process wide instance.
///
/// # Usage
/// ```
/// use tracekeep::Config;
///
/// // This pulls configuration from the environment
/// let mut builder = Config::builder();
///
/// // Manual overrides
/// builder
///     .set_sampling_fraction(0.25)
///     .set_max_traces_per_second(10.0);
///
/// let config = builder.build();
/// assert_eq!(config.max_traces_per_second(), 10.0);
/// ```
pub struct Config {
    /// Disables sampling of every trace if this is false
    enabled: bool,
    /// Fraction of traces kept by the trace id ratio decision.
    /// -1 selects the always-sample policy
    sampling_fraction: f64,
    /// Maximum number of traces to sample per second, per process.
    /// -1 selects the always-sample policy
    max_traces_per_second: f64,
    /// The log level for the library
    log_level: LevelFilter,
}

impl Config {
    fn from_sources(sources: &CompositeSource) -> Self {
        let default = Config::default();

        Self {
            enabled: sources
                .get_parse(Key::TRACER_ENABLED)
                .into_value()
                .unwrap_or(default.enabled),
            sampling_fraction: sources
                .get_parse(Key::TRACER_SAMPLING_FRACTION)
                .into_value()
                .unwrap_or(default.sampling_fraction),
            max_traces_per_second: sources
                .get_parse(Key::TRACER_MAX_TRACES_PER_SEC)
                .into_value()
                .unwrap_or(default.max_traces_per_second),
            log_level: sources
                .get_parse(Key::TRACER_LOG_LEVEL)
                .into_value()
                .unwrap_or(default.log_level),
        }
    }

    fn builder_with_sources(sources: &CompositeSource) -> ConfigBuilder {
        ConfigBuilder {
            config: Config::from_sources(sources),
        }
    }

    /// Creates a new builder to set overrides detected configuration
    pub fn builder() -> ConfigBuilder {
        Self::builder_with_sources(&CompositeSource::default_sources())
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn sampling_fraction(&self) -> f64 {
        self.sampling_fraction
    }

    pub fn max_traces_per_second(&self) -> f64 {
        self.max_traces_per_second
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            enabled: true,
            sampling_fraction: DEFAULT_SAMPLING_FRACTION,
            max_traces_per_second: DEFAULT_MAX_TRACES_PER_SECOND,
            log_level: LevelFilter::default(),
        }
    }
}

pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Finalizes the builder and returns the configuration
    pub fn build(self) -> Config {
        self.config
    }

    pub fn set_enabled(&mut self, enabled: bool) -> &mut Self {
        self.config.enabled = enabled;
        self
    }

    pub fn set_sampling_fraction(&mut self, fraction: f64) -> &mut Self {
        self.config.sampling_fraction = fraction;
        self
    }

    pub fn set_max_traces_per_second(&mut self, max_traces_per_second: f64) -> &mut Self {
        self.config.max_traces_per_second = max_traces_per_second;
        self
    }

    pub fn set_log_level(&mut self, log_level: LevelFilter) -> &mut Self {
        self.config.log_level = log_level;
        self
    }
}
