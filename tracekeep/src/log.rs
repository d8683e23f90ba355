// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Logging setup
//!
//! The crates of this workspace log through the `tracing` facade. Applications that
//! do not install their own subscriber can call [`init_logging`] to get a formatted
//! subscriber filtered at the configured level, or by `RUST_LOG` when it is set.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use tracing_subscriber::EnvFilter;

use crate::Config;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
/// The level at which the library will log
pub enum LevelFilter {
    Off,
    #[default]
    Error,
    Warn,
    Info,
    Debug,
}

impl FromStr for LevelFilter {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("debug") {
            Ok(LevelFilter::Debug)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(LevelFilter::Info)
        } else if s.eq_ignore_ascii_case("warn") {
            Ok(LevelFilter::Warn)
        } else if s.eq_ignore_ascii_case("error") {
            Ok(LevelFilter::Error)
        } else if s.eq_ignore_ascii_case("off") {
            Ok(LevelFilter::Off)
        } else {
            Err("log level filter should be one of DEBUG, INFO, WARN, ERROR, OFF")
        }
    }
}

impl Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filter = match self {
            LevelFilter::Debug => "DEBUG",
            LevelFilter::Info => "INFO",
            LevelFilter::Warn => "WARN",
            LevelFilter::Error => "ERROR",
            LevelFilter::Off => "OFF",
        };

        write!(f, "{filter}")
    }
}

impl From<LevelFilter> for tracing::level_filters::LevelFilter {
    fn from(lvl: LevelFilter) -> Self {
        match lvl {
            LevelFilter::Off => tracing::level_filters::LevelFilter::OFF,
            LevelFilter::Error => tracing::level_filters::LevelFilter::ERROR,
            LevelFilter::Warn => tracing::level_filters::LevelFilter::WARN,
            LevelFilter::Info => tracing::level_filters::LevelFilter::INFO,
            LevelFilter::Debug => tracing::level_filters::LevelFilter::DEBUG,
        }
    }
}

/// Builds the filter used by [`init_logging`]
///
/// `RUST_LOG` wins over the configured level when it is set and valid.
pub fn env_filter(lvl: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(tracing::level_filters::LevelFilter::from(lvl).into())
        .from_env_lossy()
}

/// Installs a global fmt subscriber at the level carried by `config`.
///
/// Returns `false` if a global subscriber was already installed, in which case
/// nothing changes.
pub fn init_logging(config: &Config) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.log_level()))
        .with_target(true)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(level = %config.log_level(), "tracekeep logging initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::{env_filter, LevelFilter};
    use tracing::level_filters::LevelFilter as TracingFilter;

    // RUST_LOG is only touched here, so that no other test observes it
    #[test]
    fn test_env_filter_rust_log_precedence() {
        std::env::remove_var("RUST_LOG");
        assert_eq!(
            env_filter(LevelFilter::Warn).max_level_hint(),
            Some(TracingFilter::WARN)
        );

        std::env::set_var("RUST_LOG", "debug");
        let filter = env_filter(LevelFilter::Warn);
        std::env::remove_var("RUST_LOG");

        assert_eq!(filter.max_level_hint(), Some(TracingFilter::DEBUG));
    }

    #[test]
    fn test_default_level() {
        assert_eq!(LevelFilter::default(), LevelFilter::Error);
    }

    #[test]
    fn test_parse_level_filter() {
        for (input, expected) in [
            ("debug", LevelFilter::Debug),
            ("INFO", LevelFilter::Info),
            ("Warn", LevelFilter::Warn),
            (" error ", LevelFilter::Error),
            ("OFF", LevelFilter::Off),
        ] {
            assert_eq!(input.parse::<LevelFilter>(), Ok(expected), "input: {input:?}");
        }
        assert!("trace".parse::<LevelFilter>().is_err());
        assert!("".parse::<LevelFilter>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for lvl in [
            LevelFilter::Off,
            LevelFilter::Error,
            LevelFilter::Warn,
            LevelFilter::Info,
            LevelFilter::Debug,
        ] {
            assert_eq!(lvl.to_string().parse::<LevelFilter>(), Ok(lvl));
        }
    }

    #[test]
    fn test_level_ordering() {
        assert!(LevelFilter::Off < LevelFilter::Error);
        assert!(LevelFilter::Error < LevelFilter::Warn);
        assert!(LevelFilter::Warn < LevelFilter::Info);
        assert!(LevelFilter::Info < LevelFilter::Debug);
    }

    #[test]
    fn test_into_tracing_filter() {
        assert_eq!(TracingFilter::from(LevelFilter::Off), TracingFilter::OFF);
        assert_eq!(TracingFilter::from(LevelFilter::Warn), TracingFilter::WARN);
        assert_eq!(TracingFilter::from(LevelFilter::Debug), TracingFilter::DEBUG);
    }
}
