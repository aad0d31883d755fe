// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Send-email action.
//!
//! Builds a plain-text MIME message and delivers it through an SMTP relay over
//! STARTTLS with `SMTP AUTH`, using [`lettre`].
//!
//! # Behaviour
//!
//! - Host, port, username and password are [`SecretSource`]s: an explicit
//!   value, or `SEMA4_SMTP_*` from the environment at call time (port defaults
//!   to 587). If any resolves empty the request fails with
//!   `"SMTP server details are missing."` before a connection is opened.
//! - `to`, `cc` and `bcc` are comma-separated. All three feed the envelope;
//!   only `to` and `cc` appear as headers.
//! - A footer is appended to the body.
//! - Any failure while building or delivering the message becomes
//!   `"Email send error: <cause>"`. Nothing is retried.
//!
//! Passwords and other SMTP parameters are held as
//! [`SecretString`](actions_common_secret::SecretString) and never logged.
//!
//! [`SecretSource`]: actions_common_secret::SecretSource

mod error;
mod mailer;
mod message;
mod request;
mod sender;
mod settings;

pub use error::{EmailError, SEND_ERROR_PREFIX};
pub use mailer::{Mailer, SmtpMailer};
pub use message::{compose, split_addresses};
pub use request::EmailRequest;
pub use sender::{EmailSender, DEFAULT_FOOTER, DEFAULT_FROM_ADDRESS, SUCCESS_MESSAGE};
pub use settings::{
	SmtpSecrets, SmtpSettings, DEFAULT_SMTP_PORT, SMTP_HOST_ENV, SMTP_PASSWORD_ENV, SMTP_PORT_ENV,
	SMTP_USERNAME_ENV,
};
