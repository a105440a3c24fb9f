// Copyright 2025 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This file is the integration test suite for `fontmatch`.
//!
//! - The `util` module holds the shared sample corpus and the helper that
//!   runs every assertion against both corpus strategies.
//! - We do not use the default Rust test harness, but instead use this
//!   `mod.rs` file as the entry point to run all other tests, so the
//!   shared utilities are defined once.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod requests;
mod selection;
mod util;
