// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the send-email action.

use actions_common_core::ActionError;

/// Prefix applied to every transport failure surfaced to the caller.
pub const SEND_ERROR_PREFIX: &str = "Email send error: ";

/// Errors that can occur while preparing or delivering an email.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
	/// One of host, port, username or password resolved empty.
	#[error("SMTP server details are missing.")]
	MissingServerDetails,

	/// The port secret is not a number in `1..=65535`.
	#[error("SMTP port must be a valid port number.")]
	InvalidPort,

	/// An address the MIME layer cannot encode.
	#[error("invalid email address '{address}': {reason}")]
	Address { address: String, reason: String },

	/// The message or its envelope could not be assembled.
	#[error("failed to build message: {0}")]
	Message(String),

	/// The SMTP transport could not be set up for the host.
	#[error("connection failed: {0}")]
	Connection(String),

	/// Connecting, STARTTLS, AUTH or the mail transaction failed.
	#[error("{0}")]
	Send(String),
}

impl EmailError {
	/// Whether the error was raised before any network I/O.
	pub fn is_configuration(&self) -> bool {
		matches!(self, EmailError::MissingServerDetails | EmailError::InvalidPort)
	}
}

impl From<EmailError> for ActionError {
	fn from(err: EmailError) -> Self {
		if err.is_configuration() {
			ActionError::Configuration(err.to_string())
		} else {
			ActionError::Transport(format!("{SEND_ERROR_PREFIX}{err}"))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_details_maps_to_configuration() {
		let err: ActionError = EmailError::MissingServerDetails.into();
		assert_eq!(
			err,
			ActionError::Configuration("SMTP server details are missing.".to_string())
		);
	}

	#[test]
	fn invalid_port_maps_to_configuration() {
		let err: ActionError = EmailError::InvalidPort.into();
		assert_eq!(err.kind(), "configuration");
	}

	#[test]
	fn send_failure_embeds_cause_after_prefix() {
		let err: ActionError =
			EmailError::Send("permanent error (535): authentication failed".to_string()).into();
		assert_eq!(err.kind(), "transport");
		assert_eq!(
			err.message(),
			"Email send error: permanent error (535): authentication failed"
		);
	}

	#[test]
	fn address_failure_is_a_transport_error() {
		let err: ActionError = EmailError::Address {
			address: "not an address".to_string(),
			reason: "missing domain".to_string(),
		}
		.into();
		assert!(err.message().starts_with(SEND_ERROR_PREFIX));
		assert!(err.message().contains("not an address"));
	}
}
