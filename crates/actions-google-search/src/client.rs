// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Custom Search JSON API client.

use std::time::Duration;

use actions_common_core::{ActionError, ActionResult};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, error, info, instrument, trace, warn};

use crate::error::SearchError;
use crate::types::{SearchQuery, SearchResult, SearchResultList};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/customsearch/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the search action. One GET per call, never retried.
#[derive(Debug, Clone)]
pub struct SearchClient {
	http_client: Client,
	base_url: String,
}

#[derive(Debug, Deserialize)]
struct GoogleSearchResponse {
	items: Option<Vec<GoogleSearchItem>>,
}

#[derive(Debug, Deserialize)]
struct GoogleSearchItem {
	title: String,
	link: String,
	snippet: String,
}

impl From<GoogleSearchItem> for SearchResult {
	fn from(item: GoogleSearchItem) -> Self {
		SearchResult {
			title: item.title,
			link: item.link,
			desc: item.snippet,
		}
	}
}

impl SearchClient {
	/// Creates a client with a 10 second request timeout.
	pub fn new() -> Result<Self, SearchError> {
		Self::with_timeout(REQUEST_TIMEOUT)
	}

	/// Creates a client whose requests give up after `timeout`.
	pub fn with_timeout(timeout: Duration) -> Result<Self, SearchError> {
		let http_client = actions_common_http::new_client_with_timeout(timeout)
			.map_err(|e| SearchError::Client(e.to_string()))?;

		Ok(Self {
			http_client,
			base_url: DEFAULT_BASE_URL.to_string(),
		})
	}

	/// Sets a custom endpoint URL (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Runs `query` and returns the hits in API order, cut to `query.count`
	/// when it is positive.
	///
	/// # Errors
	///
	/// [`ActionError::Transport`] when the request fails, the status is not
	/// 200 or 201 (the message carries the raw body), or the body cannot be
	/// mapped. A response without `items` is an empty list, not an error.
	#[instrument(skip(self, query), fields(topic = %query.topic, count = query.count))]
	pub async fn search(&self, query: &SearchQuery) -> ActionResult<SearchResultList> {
		self.search_inner(query).await.map_err(|e| {
			error!(error = %e, "search failed");
			ActionError::from(e)
		})
	}

	async fn search_inner(&self, query: &SearchQuery) -> Result<SearchResultList, SearchError> {
		let api_key = query.api_key.resolve();
		let cx = query.context.resolve();

		let mut url = Url::parse(&self.base_url)
			.map_err(|e| SearchError::InvalidResponse(format!("Invalid base URL: {e}")))?;

		url
			.query_pairs_mut()
			.append_pair("key", api_key.expose())
			.append_pair("cx", cx.expose())
			.append_pair("q", &query.topic);

		debug!(url = %self.base_url, "Sending search request");

		let response = self.http_client.get(url).send().await.map_err(|e| {
			if e.is_timeout() {
				return SearchError::Timeout;
			}
			SearchError::Network(e)
		})?;

		let status = response.status();
		debug!(status = %status, "Received search response");

		let body = response.text().await?;

		if status != StatusCode::OK && status != StatusCode::CREATED {
			return Err(SearchError::Upstream {
				status: status.as_u16(),
				body,
			});
		}

		trace!(body = %body, "Response body");

		let parsed: GoogleSearchResponse = serde_json::from_str(&body)
			.map_err(|e| SearchError::InvalidResponse(format!("JSON parse error: {e}")))?;

		let results: Vec<SearchResult> = parsed
			.items
			.unwrap_or_default()
			.into_iter()
			.map(SearchResult::from)
			.collect();

		let mut message = format!("Found {} results for '{}'", results.len(), query.topic);
		if query.count > 0 {
			message.push_str(&format!(" and returning {} of those.", query.count));
		} else if query.count < 0 {
			warn!(count = query.count, "negative count, returning all results");
		}
		info!(found = results.len(), "{message}");

		Ok(SearchResultList::new(results).limited(query.limit()))
	}
}
