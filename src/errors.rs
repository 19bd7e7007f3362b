// ABOUTME: Unified error types re-exported from fitlog-core
// ABOUTME: Lets library modules and binaries import errors from one crate path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use fitlog_core::errors::*;
