// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Creates a client builder with the standard User-Agent header.
///
/// # Example
/// ```ignore
/// let client = actions_common_http::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Creates a client with the standard User-Agent and a whole-request timeout.
pub fn new_client_with_timeout(timeout: Duration) -> reqwest::Result<Client> {
	tracing::trace!(timeout_ms = timeout.as_millis() as u64, "building HTTP client");
	builder().timeout(timeout).build()
}

/// `{os}-{arch}` of the running binary, e.g. `linux-x86_64`.
pub fn platform() -> String {
	format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
}

/// Format: `actions/{version}/{platform}`
pub fn user_agent() -> String {
	format!("actions/{}/{}", env!("CARGO_PKG_VERSION"), platform())
}
