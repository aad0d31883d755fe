// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use crate::SmtpSecrets;

/// Arguments of the send-email action.
///
/// `to`, `cc` and `bcc` are comma-separated address lists; `cc` and `bcc` may
/// be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRequest {
	pub to: String,
	pub subject: String,
	pub body: String,
	pub cc: String,
	pub bcc: String,
	pub smtp: SmtpSecrets,
}

impl EmailRequest {
	/// A request with no copies whose SMTP secrets come from the environment.
	pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
		Self {
			to: to.into(),
			subject: subject.into(),
			body: body.into(),
			cc: String::new(),
			bcc: String::new(),
			smtp: SmtpSecrets::default(),
		}
	}

	pub fn with_cc(mut self, cc: impl Into<String>) -> Self {
		self.cc = cc.into();
		self
	}

	pub fn with_bcc(mut self, bcc: impl Into<String>) -> Self {
		self.bcc = bcc.into();
		self
	}

	pub fn with_smtp(mut self, smtp: SmtpSecrets) -> Self {
		self.smtp = smtp;
		self
	}
}
