// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Shared plumbing for the tracekeep sampling crates: layered configuration
//! and logging setup.

pub mod configuration;
pub mod constants;
pub use configuration::{Config, ConfigBuilder};

mod error;
pub use error::{Error, Result};

pub mod log;
