// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use super::supported_configurations::SupportedConfigurations;

/// Where a configuration value was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSourceOrigin {
    Default,
    EnvVar,
    Code,
}

impl fmt::Display for ConfigSourceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConfigSourceOrigin::Default => "default",
            ConfigSourceOrigin::EnvVar => "env_var",
            ConfigSourceOrigin::Code => "code",
        })
    }
}

/// A raw key/value provider
pub(crate) trait ConfigurationSource {
    fn origin(&self) -> ConfigSourceOrigin;

    fn get(&self, key: &str) -> Option<String>;
}

/// Reads the process environment
pub(crate) struct EnvSource;

impl ConfigurationSource for EnvSource {
    fn origin(&self) -> ConfigSourceOrigin {
        ConfigSourceOrigin::EnvVar
    }

    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory source, for tests
#[cfg(test)]
pub(crate) struct HashMapSource {
    values: std::collections::HashMap<String, String>,
    origin: ConfigSourceOrigin,
}

#[cfg(test)]
impl HashMapSource {
    pub(crate) fn from_iter<K: ToString, V: ToString>(
        values: impl IntoIterator<Item = (K, V)>,
        origin: ConfigSourceOrigin,
    ) -> Self {
        HashMapSource {
            values: values
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            origin,
        }
    }
}

#[cfg(test)]
impl ConfigurationSource for HashMapSource {
    fn origin(&self) -> ConfigSourceOrigin {
        self.origin
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// A value that was found but could not be parsed
#[derive(Debug, PartialEq)]
pub(crate) struct ParseFailure {
    pub(crate) expected: &'static str,
    pub(crate) reason: String,
    pub(crate) raw: String,
    pub(crate) origin: ConfigSourceOrigin,
}

/// Result of looking a key up across every source
#[derive(Debug, PartialEq)]
pub(crate) struct Lookup<T> {
    pub(crate) key: SupportedConfigurations,
    pub(crate) found: Option<(T, ConfigSourceOrigin)>,
    pub(crate) failures: Vec<ParseFailure>,
}

impl<T> Lookup<T> {
    /// The parsed value, if any. Values skipped because they did not parse are logged.
    pub(crate) fn into_value(self) -> Option<T> {
        for failure in &self.failures {
            tracing::warn!(
                key = %self.key,
                value = %failure.raw,
                origin = %failure.origin,
                "ignoring configuration value, expected {}: {}",
                failure.expected,
                failure.reason
            );
        }
        self.found.map(|(value, _)| value)
    }
}

/// Sources queried in order, the first one has the highest precedence.
pub(crate) struct CompositeSource {
    sources: Vec<Box<dyn ConfigurationSource>>,
}

impl CompositeSource {
    pub(crate) fn new() -> Self {
        CompositeSource {
            sources: Vec::new(),
        }
    }

    pub(crate) fn default_sources() -> Self {
        let mut sources = Self::new();
        sources.add_source(EnvSource);
        sources
    }

    pub(crate) fn add_source(&mut self, source: impl ConfigurationSource + 'static) {
        self.sources.push(Box::new(source));
    }

    /// Returns the first value of `key` that parses as a `T`, along with the values of
    /// higher precedence sources that did not.
    pub(crate) fn get_parse<T>(&self, key: SupportedConfigurations) -> Lookup<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let mut failures = Vec::new();
        for source in &self.sources {
            let Some(raw) = source.get(key.as_str()) else {
                continue;
            };
            match raw.parse::<T>() {
                Ok(value) => {
                    return Lookup {
                        key,
                        found: Some((value, source.origin())),
                        failures,
                    }
                }
                Err(e) => failures.push(ParseFailure {
                    expected: std::any::type_name::<T>(),
                    reason: e.to_string(),
                    raw,
                    origin: source.origin(),
                }),
            }
        }
        Lookup {
            key,
            found: None,
            failures,
        }
    }
}
