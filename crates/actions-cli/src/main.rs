// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! `actions` - runs the send-email and web search actions.
//!
//! The orchestration host invokes one subcommand per action call. The typed
//! result is written to stdout as JSON; on failure an `{"error": {kind, message}}`
//! document is written instead and the process exits with status 1. Logs go to
//! stderr.

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use actions_common_core::{outcome_to_json, ActionResult, Response};
use actions_email::{EmailRequest, EmailSender, SmtpMailer, SmtpSecrets};
use actions_google_search::{SearchClient, SearchQuery, DEFAULT_COUNT};

mod version;

/// Email and web search actions.
#[derive(Parser, Debug)]
#[command(name = "actions", version, about, long_about = None)]
struct Args {
	/// Log level when RUST_LOG is unset
	#[arg(short, long, default_value = "info", global = true)]
	log_level: String,

	/// Output logs as JSON
	#[arg(long, global = true)]
	json_logs: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Send an email through an SMTP relay (STARTTLS + AUTH)
	SendEmail(SendEmailArgs),
	/// Search the web with Google Custom Search
	GoogleSearch(GoogleSearchArgs),
	/// Show version and build information
	Version,
}

/// Recipient lists are comma-separated. SMTP settings left unset are read
/// from SEMA4_SMTP_HOST, SEMA4_SMTP_PORT (default 587), SEMA4_SMTP_USERNAME
/// and SEMA4_SMTP_PASSWORD.
#[derive(clap::Args, Debug)]
struct SendEmailArgs {
	/// Recipient address(es)
	#[arg(long)]
	to: String,

	/// Subject line
	#[arg(long)]
	subject: String,

	/// Plain-text body
	#[arg(long)]
	body: String,

	/// Carbon-copy address(es)
	#[arg(long, default_value = "")]
	cc: String,

	/// Blind-carbon-copy address(es)
	#[arg(long, default_value = "")]
	bcc: String,

	#[arg(long)]
	smtp_host: Option<String>,

	#[arg(long)]
	smtp_port: Option<String>,

	#[arg(long)]
	smtp_username: Option<String>,

	#[arg(long)]
	smtp_password: Option<String>,

	/// Per-command SMTP timeout in seconds
	#[arg(long, default_value_t = 30)]
	smtp_timeout_secs: u64,

	/// Override the sender address
	#[arg(long)]
	from_address: Option<String>,
}

/// Credentials left unset are read from GOOGLE_SEARCH_API_KEY and
/// GOOGLE_SEARCH_CONTEXT.
#[derive(clap::Args, Debug)]
struct GoogleSearchArgs {
	/// What to search for
	#[arg(long)]
	topic: String,

	/// Maximum results; 0 returns everything
	#[arg(long, default_value_t = DEFAULT_COUNT, allow_negative_numbers = true)]
	count: i64,

	/// Custom Search API key
	#[arg(long)]
	api_key: Option<String>,

	/// Custom Search Engine id
	#[arg(long)]
	context: Option<String>,

	/// Request timeout in seconds
	#[arg(long, default_value_t = 10)]
	timeout_secs: u64,

	/// Override the search endpoint
	#[arg(long, hide = true)]
	endpoint: Option<String>,
}

fn email_request(args: &SendEmailArgs) -> EmailRequest {
	let defaults = SmtpSecrets::default();
	let smtp = SmtpSecrets {
		host: defaults.host.with_provided(args.smtp_host.clone()),
		port: defaults.port.with_provided(args.smtp_port.clone()),
		username: defaults.username.with_provided(args.smtp_username.clone()),
		password: defaults.password.with_provided(args.smtp_password.clone()),
	};

	EmailRequest::new(&args.to, &args.subject, &args.body)
		.with_cc(&args.cc)
		.with_bcc(&args.bcc)
		.with_smtp(smtp)
}

fn search_query(args: &GoogleSearchArgs) -> SearchQuery {
	let mut query = SearchQuery::new(&args.topic).with_count(args.count);
	query.api_key = query.api_key.with_provided(args.api_key.clone());
	query.context = query.context.with_provided(args.context.clone());
	query
}

async fn send_email(args: SendEmailArgs) -> ActionResult<Response<String>> {
	let mailer = SmtpMailer::new().with_timeout(Duration::from_secs(args.smtp_timeout_secs));
	let mut sender = EmailSender::new(mailer);
	if let Some(from_address) = &args.from_address {
		sender = sender.with_from_address(from_address);
	}

	sender.send(email_request(&args)).await.map(Response::new)
}

async fn google_search(
	args: GoogleSearchArgs,
) -> ActionResult<actions_google_search::SearchResultList> {
	let mut client = SearchClient::with_timeout(Duration::from_secs(args.timeout_secs))?;
	if let Some(endpoint) = &args.endpoint {
		client = client.with_base_url(endpoint);
	}

	client.search(&search_query(&args)).await
}

fn init_tracing(log_level: &str, json_logs: bool) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
	let registry = tracing_subscriber::registry().with(filter);

	if json_logs {
		registry
			.with(fmt::layer().json().with_writer(std::io::stderr))
			.init();
	} else {
		registry.with(fmt::layer().with_writer(std::io::stderr)).init();
	}
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
	let args = Args::parse();

	// Load .env file if present
	dotenvy::dotenv().ok();

	init_tracing(&args.log_level, args.json_logs);

	let (output, failed) = match args.command {
		Command::SendEmail(email) => {
			tracing::debug!(to = %email.to, "running send-email");
			let outcome = send_email(email).await;
			(outcome_to_json(&outcome)?, outcome.is_err())
		}
		Command::GoogleSearch(search) => {
			tracing::debug!(topic = %search.topic, count = search.count, "running google-search");
			let outcome = google_search(search).await;
			(outcome_to_json(&outcome)?, outcome.is_err())
		}
		Command::Version => (version::format_version_info(), false),
	};

	println!("{output}");

	Ok(if failed {
		ExitCode::FAILURE
	} else {
		ExitCode::SUCCESS
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(argv: &[&str]) -> Args {
		Args::try_parse_from(argv).unwrap()
	}

	#[test]
	fn send_email_defaults_copies_to_empty() {
		let args = parse(&[
			"actions",
			"send-email",
			"--to",
			"a@x.com,b@x.com",
			"--subject",
			"Hi",
			"--body",
			"Body",
		]);
		let Command::SendEmail(email) = args.command else {
			panic!("expected send-email");
		};
		assert_eq!(email.cc, "");
		assert_eq!(email.bcc, "");
		assert_eq!(email.smtp_timeout_secs, 30);

		let request = email_request(&email);
		assert_eq!(request.to, "a@x.com,b@x.com");
		assert_eq!(request.smtp.host.env_key(), "SEMA4_SMTP_HOST");
	}

	#[test]
	fn explicit_smtp_flags_win() {
		let args = parse(&[
			"actions",
			"send-email",
			"--to",
			"a@x.com",
			"--subject",
			"Hi",
			"--body",
			"Body",
			"--smtp-host",
			"smtp.example.com",
			"--smtp-port",
			"2525",
			"--smtp-username",
			"user",
			"--smtp-password",
			"pass",
		]);
		let Command::SendEmail(email) = args.command else {
			panic!("expected send-email");
		};

		let settings = email_request(&email)
			.smtp
			.resolve_with(|_| None)
			.unwrap();
		assert_eq!(settings.host.expose(), "smtp.example.com");
		assert_eq!(settings.port, 2525);
	}

	#[test]
	fn google_search_count_defaults_to_ten() {
		let args = parse(&["actions", "google-search", "--topic", "rust"]);
		let Command::GoogleSearch(search) = args.command else {
			panic!("expected google-search");
		};
		assert_eq!(search_query(&search).count, 10);
	}

	#[test]
	fn google_search_accepts_negative_count() {
		let args = parse(&["actions", "google-search", "--topic", "rust", "--count", "-1"]);
		let Command::GoogleSearch(search) = args.command else {
			panic!("expected google-search");
		};
		let query = search_query(&search);
		assert_eq!(query.count, -1);
		assert_eq!(query.limit(), None);
	}

	#[test]
	fn google_search_credentials_from_flags() {
		let args = parse(&[
			"actions",
			"google-search",
			"--topic",
			"rust",
			"--api-key",
			"k",
			"--context",
			"cx",
		]);
		let Command::GoogleSearch(search) = args.command else {
			panic!("expected google-search");
		};
		let query = search_query(&search);
		assert_eq!(query.api_key.resolve_with(|_| None).expose(), "k");
		assert_eq!(query.context.resolve_with(|_| None).expose(), "cx");
	}

	#[test]
	fn log_level_is_global() {
		let args = parse(&["actions", "version", "--log-level", "debug"]);
		assert_eq!(args.log_level, "debug");
	}

	#[test]
	fn missing_topic_is_rejected() {
		assert!(Args::try_parse_from(["actions", "google-search"]).is_err());
	}
}
