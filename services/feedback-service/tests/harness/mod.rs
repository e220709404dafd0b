// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Test harness for driving the feedback service in-process.
//!
//! Each test binary pulls in only the helpers it needs.
#![allow(dead_code)]

pub mod client;
pub mod generators;
