// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Secret arguments that fall back to the environment.

use std::env;

use crate::SecretString;

/// An action argument holding an optional caller-supplied secret and the name
/// of the environment variable consulted when that value is empty.
///
/// Resolution order:
///
/// 1. the provided value, if non-empty
/// 2. the environment variable `env_key`, if set and non-empty
/// 3. the default, if one was configured
/// 4. an empty secret
///
/// The environment is read when [`SecretSource::resolve`] is called, never at
/// construction, so a `.env` file loaded after the argument was built is still
/// honoured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretSource {
	provided: Option<SecretString>,
	env_key: String,
	default: Option<String>,
}

impl SecretSource {
	/// A source with an explicit value; empty strings still fall back.
	pub fn new(provided: impl Into<String>, env_key: impl Into<String>) -> Self {
		Self {
			provided: Some(SecretString::new(provided.into())),
			env_key: env_key.into(),
			default: None,
		}
	}

	/// A source that only reads `env_key`.
	pub fn from_env(env_key: impl Into<String>) -> Self {
		Self {
			provided: None,
			env_key: env_key.into(),
			default: None,
		}
	}

	/// Replace the caller-supplied value. `None` clears it.
	pub fn with_provided(mut self, provided: Option<impl Into<String>>) -> Self {
		self.provided = provided.map(|v| SecretString::new(v.into()));
		self
	}

	/// Value used when neither the caller nor the environment supplies one.
	pub fn with_default(mut self, default: impl Into<String>) -> Self {
		self.default = Some(default.into());
		self
	}

	pub fn env_key(&self) -> &str {
		&self.env_key
	}

	/// Resolve against the process environment.
	pub fn resolve(&self) -> SecretString {
		self.resolve_with(|key| env::var(key).ok())
	}

	/// Resolve using `lookup` in place of the process environment.
	pub fn resolve_with<F>(&self, lookup: F) -> SecretString
	where
		F: FnOnce(&str) -> Option<String>,
	{
		if let Some(provided) = self.provided.as_ref().filter(|p| !p.is_empty()) {
			return provided.clone();
		}

		if let Some(value) = lookup(&self.env_key).filter(|v| !v.is_empty()) {
			tracing::trace!(env_key = %self.env_key, "secret resolved from environment");
			return SecretString::new(value);
		}

		match &self.default {
			Some(default) => SecretString::new(default.clone()),
			None => SecretString::default(),
		}
	}
}
