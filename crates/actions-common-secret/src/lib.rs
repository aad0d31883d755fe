// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Secret handling for action inputs.
//!
//! Two pieces live here:
//!
//! - [`Secret<T>`]: wraps credentials (SMTP passwords, search API keys) so they
//!   print as `[REDACTED]` through `Debug`, `Display` and `Serialize`, and are
//!   zeroized when dropped.
//! - [`SecretSource`]: an action argument that is either supplied by the caller
//!   or looked up from a named environment variable when the call happens.
//!
//! # Example
//!
//! ```
//! use actions_common_secret::{Secret, SecretSource};
//!
//! let password = Secret::new("hunter2".to_string());
//! assert_eq!(format!("{password}"), "[REDACTED]");
//! assert_eq!(password.expose(), "hunter2");
//!
//! let host = SecretSource::new("smtp.example.com", "SEMA4_SMTP_HOST");
//! assert_eq!(host.resolve_with(|_| None).expose(), "smtp.example.com");
//! ```

mod source;

use std::fmt;
use zeroize::Zeroize;

pub use source::SecretSource;

/// Placeholder written wherever a secret would otherwise be rendered.
pub const REDACTED: &str = "[REDACTED]";

/// A sensitive value that never renders its contents.
///
/// There is no `Deref`; call [`Secret::expose`] at the point where the raw
/// value is handed to a transport.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct Secret<T>
where
	T: Zeroize,
{
	inner: T,
}

/// Secret strings are the only kind the actions deal in.
pub type SecretString = Secret<String>;

impl<T> Secret<T>
where
	T: Zeroize,
{
	pub fn new(inner: T) -> Self {
		Self { inner }
	}

	/// Borrow the raw value.
	pub fn expose(&self) -> &T {
		&self.inner
	}

	/// Copy the raw value out for APIs that take ownership.
	///
	/// The wrapper keeps its own copy so it can still be zeroized on drop.
	pub fn into_inner(self) -> T
	where
		T: Clone,
	{
		self.inner.clone()
	}
}

impl SecretString {
	/// True when the wrapped string has no characters.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

impl Default for SecretString {
	fn default() -> Self {
		Self::new(String::new())
	}
}

impl From<String> for SecretString {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl From<&str> for SecretString {
	fn from(value: &str) -> Self {
		Self::new(value.to_string())
	}
}

impl<T> Clone for Secret<T>
where
	T: Zeroize + Clone,
{
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
		}
	}
}

impl<T> fmt::Debug for Secret<T>
where
	T: Zeroize,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Secret").field(&REDACTED).finish()
	}
}

impl<T> fmt::Display for Secret<T>
where
	T: Zeroize,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl<T> PartialEq for Secret<T>
where
	T: Zeroize + PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.inner == other.inner
	}
}

impl<T> Eq for Secret<T> where T: Zeroize + Eq {}

#[cfg(feature = "serde")]
mod serde_impl {
	use super::{Secret, REDACTED};
	use serde::{Deserialize, Deserializer, Serialize, Serializer};
	use zeroize::Zeroize;

	impl<T> Serialize for Secret<T>
	where
		T: Serialize + Zeroize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			serializer.serialize_str(REDACTED)
		}
	}

	impl<'de, T> Deserialize<'de> for Secret<T>
	where
		T: Deserialize<'de> + Zeroize,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			T::deserialize(deserializer).map(Secret::new)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn debug_hides_smtp_password() {
		let password = Secret::new("smtp-password-123".to_string());
		let rendered = format!("{password:?}");

		assert_eq!(rendered, "Secret(\"[REDACTED]\")");
		assert!(!rendered.contains("smtp-password-123"));
	}

	#[test]
	fn display_hides_api_key() {
		let key = Secret::new("AIzaSy-search-key".to_string());
		assert_eq!(format!("{key}"), REDACTED);
	}

	#[test]
	fn expose_and_into_inner_return_raw_value() {
		let key = Secret::new("cx-123".to_string());
		assert_eq!(key.expose(), "cx-123");
		assert_eq!(key.into_inner(), "cx-123");
	}

	#[test]
	fn empty_detection() {
		assert!(SecretString::default().is_empty());
		assert!(!SecretString::from("x").is_empty());
	}

	#[test]
	fn equality_uses_inner_value() {
		assert_eq!(SecretString::from("a"), SecretString::from("a"));
		assert_ne!(SecretString::from("a"), SecretString::from("b"));
	}

	#[test]
	fn optional_secret_stays_redacted() {
		let password: Option<SecretString> = Some("p@ss".into());
		let rendered = format!("{password:?}");
		assert!(rendered.contains(REDACTED));
		assert!(!rendered.contains("p@ss"));
	}

	#[cfg(feature = "serde")]
	mod serde_tests {
		use super::*;

		#[test]
		fn serializes_as_placeholder() {
			let json = serde_json::to_string(&SecretString::from("smtp-password")).unwrap();
			assert_eq!(json, "\"[REDACTED]\"");
		}

		#[test]
		fn deserializes_raw_value() {
			let secret: SecretString = serde_json::from_str("\"smtp-password\"").unwrap();
			assert_eq!(secret.expose(), "smtp-password");
		}
	}

	proptest! {
			#[test]
			fn rendering_never_leaks(inner in "[a-zA-Z0-9!@#$%^&*_+=;:,.<>?/-]{8,50}") {
					prop_assume!(!inner.contains("REDACTED"));
					prop_assume!(!inner.contains("Secret"));

					let secret = Secret::new(inner.clone());
					let debug = format!("{:?}", secret);
					let display = format!("{}", secret);
					prop_assert!(!debug.contains(&inner));
					prop_assert!(!display.contains(&inner));
			}

			#[test]
			fn clone_keeps_value(inner in ".*") {
					let secret = Secret::new(inner.clone());
					let cloned = secret.clone();
					prop_assert_eq!(cloned.expose(), &inner);
			}
	}
}
