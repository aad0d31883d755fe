// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client for outbound action calls.
//!
//! Every client carries the same User-Agent, `actions/{version}/{platform}`.
//! Nothing here retries; a failed request is reported to the caller as-is.

mod client;

pub use client::{builder, new_client_with_timeout, platform, user_agent};
