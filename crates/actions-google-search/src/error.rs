// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the search action.

use actions_common_core::ActionError;
use thiserror::Error;

/// Errors that can occur when calling the Custom Search API.
#[derive(Debug, Error)]
pub enum SearchError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// The API answered with a status other than 200 or 201.
	#[error("Failed to search. Error: {body}")]
	Upstream { status: u16, body: String },

	/// The body was not JSON, or an item lacked `title`, `link` or `snippet`.
	#[error("Invalid response from search API: {0}")]
	InvalidResponse(String),

	/// The HTTP client could not be constructed.
	#[error("Failed to build HTTP client: {0}")]
	Client(String),
}

impl From<SearchError> for ActionError {
	fn from(err: SearchError) -> Self {
		ActionError::Transport(err.to_string())
	}
}
