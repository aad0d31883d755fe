// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Message delivery.

use std::time::Duration;

use async_trait::async_trait;
use lettre::{
	transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport, Message,
	Tokio1Executor,
};

use crate::{EmailError, SmtpSettings};

const DEFAULT_SMTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Delivers an assembled message through an SMTP server.
#[async_trait]
pub trait Mailer: Send + Sync {
	/// Open a session to `server`, authenticate, and run one mail transaction
	/// for `message` and its envelope. The session ends when this returns.
	async fn deliver(&self, server: &SmtpSettings, message: Message) -> Result<(), EmailError>;
}

/// [`Mailer`] over STARTTLS with `SMTP AUTH`, one connection per delivery.
#[derive(Debug, Clone)]
pub struct SmtpMailer {
	timeout: Duration,
}

impl SmtpMailer {
	pub fn new() -> Self {
		Self {
			timeout: DEFAULT_SMTP_TIMEOUT,
		}
	}

	/// Timeout applied to each SMTP command, including the initial connect.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	pub fn timeout(&self) -> Duration {
		self.timeout
	}
}

impl Default for SmtpMailer {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Mailer for SmtpMailer {
	#[tracing::instrument(
        name = "smtp_deliver",
        skip_all,
        fields(port = server.port, recipients = message.envelope().to().len())
    )]
	async fn deliver(&self, server: &SmtpSettings, message: Message) -> Result<(), EmailError> {
		// Built per call and dropped on return: the connection closes on every
		// path out of this function.
		let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(server.host.expose())
			.map_err(|e| EmailError::Connection(format!("{e}")))?
			.port(server.port)
			.credentials(Credentials::new(
				server.username.expose().clone(),
				server.password.expose().clone(),
			))
			.timeout(Some(self.timeout))
			.build();

		tracing::debug!("sending email");

		transport.send(message).await.map_err(|e| {
			tracing::debug!(error = %e, "SMTP transaction failed");
			EmailError::Send(format!("{e}"))
		})?;

		tracing::debug!("SMTP transaction completed");
		Ok(())
	}
}
