// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Version output for the `actions` binary.

/// Format version info for display.
pub fn format_version_info() -> String {
	format!(
		"actions version: {}\n\
         Platform:        {}\n\
         User-Agent:      {}",
		env!("CARGO_PKG_VERSION"),
		actions_common_http::platform(),
		actions_common_http::user_agent(),
	)
}
