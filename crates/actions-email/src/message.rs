// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! MIME message and SMTP envelope assembly.

use lettre::{
	address::{Address, Envelope},
	message::{
		header::{ContentType, HeaderName, HeaderValue},
		Mailbox, MultiPart, SinglePart,
	},
	Message,
};

use crate::{EmailError, EmailRequest};

/// Split a comma-separated address list, trimming each entry and skipping
/// empty ones.
pub fn split_addresses(list: &str) -> impl Iterator<Item = &str> + '_ {
	list.split(',').map(str::trim).filter(|a| !a.is_empty())
}

// The envelope needs typed addresses, so anything lettre cannot parse is
// refused here instead of by the relay.
fn parse_address(address: &str) -> Result<Address, EmailError> {
	address.parse().map_err(|e| EmailError::Address {
		address: address.to_string(),
		reason: format!("{e}"),
	})
}

/// Build the outgoing message for `request`.
///
/// `To` and `Cc` headers carry `to` and `cc` exactly as given. The envelope
/// delivers to `to`, then `cc`, then `bcc`; `bcc` addresses never appear in a
/// header. `footer` is appended to the body, which becomes the single
/// `text/plain` part of a `multipart/mixed` message.
pub fn compose(from: &Mailbox, request: &EmailRequest, footer: &str) -> Result<Message, EmailError> {
	let mut builder = Message::builder()
		.from(from.clone())
		.subject(request.subject.as_str());
	let mut recipients: Vec<Address> = Vec::new();

	for list in [&request.to, &request.cc, &request.bcc] {
		for address in split_addresses(list) {
			recipients.push(parse_address(address)?);
		}
	}

	builder = builder.raw_header(HeaderValue::new(
		HeaderName::new_from_ascii_str("To"),
		request.to.clone(),
	));
	if !request.cc.is_empty() {
		builder = builder.raw_header(HeaderValue::new(
			HeaderName::new_from_ascii_str("Cc"),
			request.cc.clone(),
		));
	}

	let envelope = Envelope::new(Some(from.email.clone()), recipients)
		.map_err(|e| EmailError::Message(format!("{e}")))?;

	builder
		.envelope(envelope)
		.multipart(
			MultiPart::mixed().singlepart(
				SinglePart::builder()
					.header(ContentType::TEXT_PLAIN)
					.body(format!("{}{}", request.body, footer)),
			),
		)
		.map_err(|e| EmailError::Message(format!("{e}")))
}
