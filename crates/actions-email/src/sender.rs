// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The send-email action.

use actions_common_core::{ActionError, ActionResult};
use lettre::message::Mailbox;

use crate::{compose, EmailError, EmailRequest, Mailer, SmtpMailer, SmtpSettings};

/// Returned when the SMTP transaction completes.
pub const SUCCESS_MESSAGE: &str = "Email sent successfully!";

/// Sender used in the `From` header and as the envelope sender.
pub const DEFAULT_FROM_ADDRESS: &str = "noreply@sema4ai.email";

/// Appended to every body.
pub const DEFAULT_FOOTER: &str =
	"\n\nStart building your Agents and AI Actions at https://sema4.ai";

/// Sends plain-text email through an SMTP relay.
///
/// # Example
///
/// ```no_run
/// use actions_email::{EmailRequest, EmailSender};
///
/// # async fn example() -> actions_common_core::ActionResult<()> {
/// let sender = EmailSender::default();
/// let request = EmailRequest::new("a@example.com,b@example.com", "Hello", "Hi there")
///     .with_cc("c@example.com");
///
/// let confirmation = sender.send(request).await?;
/// assert_eq!(confirmation, "Email sent successfully!");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EmailSender<M = SmtpMailer> {
	mailer: M,
	from_address: String,
	footer: String,
}

impl Default for EmailSender<SmtpMailer> {
	fn default() -> Self {
		Self::new(SmtpMailer::default())
	}
}

impl<M: Mailer> EmailSender<M> {
	pub fn new(mailer: M) -> Self {
		Self {
			mailer,
			from_address: DEFAULT_FROM_ADDRESS.to_string(),
			footer: DEFAULT_FOOTER.to_string(),
		}
	}

	pub fn with_from_address(mut self, from_address: impl Into<String>) -> Self {
		self.from_address = from_address.into();
		self
	}

	pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
		self.footer = footer.into();
		self
	}

	pub fn mailer(&self) -> &M {
		&self.mailer
	}

	/// Send `request` and return [`SUCCESS_MESSAGE`].
	///
	/// # Errors
	///
	/// [`ActionError::Configuration`] if the SMTP secrets are incomplete; no
	/// connection is attempted in that case. [`ActionError::Transport`] with a
	/// message starting `"Email send error: "` for any failure while building
	/// or delivering the message. Nothing is retried.
	#[tracing::instrument(
        name = "send_email",
        skip(self, request),
        fields(subject = %request.subject)
    )]
	pub async fn send(&self, request: EmailRequest) -> ActionResult<String> {
		let settings = request.smtp.resolve().map_err(|e| {
			tracing::warn!(error = %e, "rejecting email request");
			ActionError::from(e)
		})?;

		match self.deliver(&settings, &request).await {
			Ok(()) => {
				tracing::info!("email sent successfully");
				Ok(SUCCESS_MESSAGE.to_string())
			}
			Err(e) => {
				let err = ActionError::from(e);
				tracing::error!(error = %err, "email send failed");
				Err(err)
			}
		}
	}

	async fn deliver(&self, settings: &SmtpSettings, request: &EmailRequest) -> Result<(), EmailError> {
		let from: Mailbox = self
			.from_address
			.parse()
			.map_err(|e| EmailError::Address {
				address: self.from_address.clone(),
				reason: format!("{e}"),
			})?;

		let message = compose(&from, request, &self.footer)?;
		tracing::debug!(
			recipients = message.envelope().to().len(),
			"email message assembled"
		);

		self.mailer.deliver(settings, message).await
	}
}
