// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! SMTP connection parameters.

use std::env;

use actions_common_secret::{SecretSource, SecretString};

use crate::EmailError;

pub const SMTP_HOST_ENV: &str = "SEMA4_SMTP_HOST";
pub const SMTP_PORT_ENV: &str = "SEMA4_SMTP_PORT";
pub const SMTP_USERNAME_ENV: &str = "SEMA4_SMTP_USERNAME";
pub const SMTP_PASSWORD_ENV: &str = "SEMA4_SMTP_PASSWORD";

/// STARTTLS submission port, used when neither caller nor environment set one.
pub const DEFAULT_SMTP_PORT: &str = "587";

/// The four SMTP secrets as supplied to the action, not yet resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSecrets {
	pub host: SecretSource,
	pub port: SecretSource,
	pub username: SecretSource,
	pub password: SecretSource,
}

impl Default for SmtpSecrets {
	/// All four read from `SEMA4_SMTP_*`; the port defaults to 587.
	fn default() -> Self {
		Self {
			host: SecretSource::from_env(SMTP_HOST_ENV),
			port: SecretSource::from_env(SMTP_PORT_ENV).with_default(DEFAULT_SMTP_PORT),
			username: SecretSource::from_env(SMTP_USERNAME_ENV),
			password: SecretSource::from_env(SMTP_PASSWORD_ENV),
		}
	}
}

impl SmtpSecrets {
	/// Resolve against the process environment.
	///
	/// # Errors
	///
	/// [`EmailError::MissingServerDetails`] if any value is empty,
	/// [`EmailError::InvalidPort`] if the port does not parse.
	pub fn resolve(&self) -> Result<SmtpSettings, EmailError> {
		self.resolve_with(|key| env::var(key).ok())
	}

	/// Resolve using `lookup` in place of the process environment.
	pub fn resolve_with<F>(&self, lookup: F) -> Result<SmtpSettings, EmailError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let host = self.host.resolve_with(&lookup);
		let port = self.port.resolve_with(&lookup);
		let username = self.username.resolve_with(&lookup);
		let password = self.password.resolve_with(&lookup);

		if host.is_empty() || port.is_empty() || username.is_empty() || password.is_empty() {
			return Err(EmailError::MissingServerDetails);
		}

		let port = match port.expose().trim().parse::<u16>() {
			Ok(0) | Err(_) => return Err(EmailError::InvalidPort),
			Ok(port) => port,
		};

		Ok(SmtpSettings {
			host,
			port,
			username,
			password,
		})
	}
}

/// Resolved, validated SMTP parameters for a single send.
///
/// Host and username are held as secrets too; only the port is ever logged.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
	pub host: SecretString,
	pub port: u16,
	pub username: SecretString,
	pub password: SecretString,
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn explicit(host: &str, port: &str, username: &str, password: &str) -> SmtpSecrets {
		SmtpSecrets {
			host: SecretSource::new(host, SMTP_HOST_ENV),
			port: SecretSource::new(port, SMTP_PORT_ENV),
			username: SecretSource::new(username, SMTP_USERNAME_ENV),
			password: SecretSource::new(password, SMTP_PASSWORD_ENV),
		}
	}

	fn no_env(_: &str) -> Option<String> {
		None
	}

	#[test]
	fn resolves_explicit_values() {
		let settings = explicit("smtp.example.com", "2525", "user", "pass")
			.resolve_with(no_env)
			.unwrap();
		assert_eq!(settings.host.expose(), "smtp.example.com");
		assert_eq!(settings.port, 2525);
		assert_eq!(settings.username.expose(), "user");
		assert_eq!(settings.password.expose(), "pass");
	}

	#[test]
	fn each_missing_value_is_rejected() {
		let cases = [
			explicit("", "587", "user", "pass"),
			explicit("smtp.example.com", "", "user", "pass"),
			explicit("smtp.example.com", "587", "", "pass"),
			explicit("smtp.example.com", "587", "user", ""),
		];
		for secrets in cases {
			let err = secrets.resolve_with(no_env).unwrap_err();
			assert!(matches!(err, EmailError::MissingServerDetails));
		}
	}

	#[test]
	fn default_reads_environment_names() {
		let settings = SmtpSecrets::default()
			.resolve_with(|key| match key {
				SMTP_HOST_ENV => Some("smtp.env.com".to_string()),
				SMTP_USERNAME_ENV => Some("env-user".to_string()),
				SMTP_PASSWORD_ENV => Some("env-pass".to_string()),
				_ => None,
			})
			.unwrap();
		assert_eq!(settings.host.expose(), "smtp.env.com");
		assert_eq!(settings.port, 587);
	}

	#[test]
	fn non_numeric_port_is_rejected() {
		let err = explicit("smtp.example.com", "smtp", "user", "pass")
			.resolve_with(no_env)
			.unwrap_err();
		assert!(matches!(err, EmailError::InvalidPort));
	}

	#[test]
	fn port_zero_is_rejected() {
		let err = explicit("smtp.example.com", "0", "user", "pass")
			.resolve_with(no_env)
			.unwrap_err();
		assert!(matches!(err, EmailError::InvalidPort));
	}

	#[test]
	fn settings_debug_does_not_leak() {
		let settings = explicit("smtp.example.com", "587", "user@example.com", "hunter2")
			.resolve_with(no_env)
			.unwrap();
		let rendered = format!("{settings:?}");
		assert!(!rendered.contains("hunter2"));
		assert!(!rendered.contains("user@example.com"));
		assert!(!rendered.contains("smtp.example.com"));
	}

	proptest! {
			#[test]
			fn valid_ports_parse(port in 1u16..=65535u16) {
					let settings = explicit("h", &port.to_string(), "u", "p")
							.resolve_with(no_env)
							.unwrap();
					prop_assert_eq!(settings.port, port);
			}

			#[test]
			fn alphabetic_ports_are_rejected(port in "[a-zA-Z]{1,8}") {
					let result = explicit("h", &port, "u", "p").resolve_with(no_env);
					prop_assert!(matches!(result, Err(EmailError::InvalidPort)));
			}
	}
}
