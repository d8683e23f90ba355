// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

// Installs the global subscriber, so it lives in its own test binary

use tracekeep::log::{init_logging, LevelFilter};
use tracekeep::Config;

#[test]
fn init_logging_installs_once() {
    let mut builder = Config::builder();
    builder.set_log_level(LevelFilter::Debug);
    let config = builder.build();

    assert!(init_logging(&config));
    assert!(!init_logging(&config));
    assert!(tracing::enabled!(tracing::Level::DEBUG) || std::env::var("RUST_LOG").is_ok());
}
