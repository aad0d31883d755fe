// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Result type alias for action invocations.
pub type ActionResult<T> = Result<T, ActionError>;

/// The error signal an action hands back to its caller.
///
/// `Display` renders only the message so callers can surface it verbatim.
#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum ActionError {
	/// Required inputs or secrets are missing or malformed. Raised before any
	/// network I/O.
	#[error("{0}")]
	Configuration(String),

	/// The outbound call failed or returned something unusable.
	#[error("{0}")]
	Transport(String),
}

impl ActionError {
	pub fn configuration(message: impl Into<String>) -> Self {
		ActionError::Configuration(message.into())
	}

	pub fn transport(message: impl Into<String>) -> Self {
		ActionError::Transport(message.into())
	}

	/// Stable tag for the error kind.
	pub fn kind(&self) -> &'static str {
		match self {
			ActionError::Configuration(_) => "configuration",
			ActionError::Transport(_) => "transport",
		}
	}

	pub fn message(&self) -> &str {
		match self {
			ActionError::Configuration(message) | ActionError::Transport(message) => message,
		}
	}
}

impl Serialize for ActionError {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut state = serializer.serialize_struct("ActionError", 2)?;
		state.serialize_field("kind", self.kind())?;
		state.serialize_field("message", self.message())?;
		state.end()
	}
}
