// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Types for the search action.

use actions_common_secret::SecretSource;
use serde::{Deserialize, Serialize};

pub const API_KEY_ENV: &str = "GOOGLE_SEARCH_API_KEY";
pub const CONTEXT_ENV: &str = "GOOGLE_SEARCH_CONTEXT";

/// Results returned when the caller does not say otherwise.
pub const DEFAULT_COUNT: i64 = 10;

/// Arguments of the search action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
	pub topic: String,
	/// Maximum results to return. `0` (or any non-positive value) returns
	/// everything the API sent back.
	pub count: i64,
	pub api_key: SecretSource,
	/// Custom Search Engine id (`cx`).
	pub context: SecretSource,
}

impl SearchQuery {
	/// A query for `topic` returning up to [`DEFAULT_COUNT`] results, with
	/// credentials read from the environment.
	pub fn new(topic: impl Into<String>) -> Self {
		Self {
			topic: topic.into(),
			count: DEFAULT_COUNT,
			api_key: SecretSource::from_env(API_KEY_ENV),
			context: SecretSource::from_env(CONTEXT_ENV),
		}
	}

	pub fn with_count(mut self, count: i64) -> Self {
		self.count = count;
		self
	}

	/// Explicit API key; an empty string still falls back to the environment.
	pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
		self.api_key = SecretSource::new(api_key, API_KEY_ENV);
		self
	}

	/// Explicit engine id; an empty string still falls back to the environment.
	pub fn with_context(mut self, context: impl Into<String>) -> Self {
		self.context = SecretSource::new(context, CONTEXT_ENV);
		self
	}

	/// How many results to keep, or `None` for all of them.
	pub fn limit(&self) -> Option<usize> {
		if self.count > 0 {
			usize::try_from(self.count).ok()
		} else {
			None
		}
	}
}

/// One normalized search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
	pub title: String,
	pub link: String,
	pub desc: String,
}

/// Search hits in the order the API returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultList {
	pub results: Vec<SearchResult>,
}

impl SearchResultList {
	pub fn new(results: Vec<SearchResult>) -> Self {
		Self { results }
	}

	/// Keep the first `limit` results; `None` keeps them all.
	pub fn limited(mut self, limit: Option<usize>) -> Self {
		if let Some(limit) = limit {
			self.results.truncate(limit);
		}
		self
	}

	pub fn len(&self) -> usize {
		self.results.len()
	}

	pub fn is_empty(&self) -> bool {
		self.results.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn hits(n: usize) -> SearchResultList {
		SearchResultList::new(
			(0..n)
				.map(|i| SearchResult {
					title: format!("T{i}"),
					link: format!("https://example.com/{i}"),
					desc: format!("S{i}"),
				})
				.collect(),
		)
	}

	#[test]
	fn new_query_defaults_to_ten() {
		let query = SearchQuery::new("rust");
		assert_eq!(query.count, DEFAULT_COUNT);
		assert_eq!(query.limit(), Some(10));
		assert_eq!(query.api_key.env_key(), API_KEY_ENV);
		assert_eq!(query.context.env_key(), CONTEXT_ENV);
	}

	#[test]
	fn zero_count_means_unlimited() {
		assert_eq!(SearchQuery::new("rust").with_count(0).limit(), None);
	}

	#[test]
	fn negative_count_means_unlimited() {
		assert_eq!(SearchQuery::new("rust").with_count(-3).limit(), None);
	}

	#[test]
	fn limit_larger_than_results_keeps_all() {
		assert_eq!(hits(3).limited(Some(10)).len(), 3);
	}

	#[test]
	fn serializes_with_desc_field() {
		let json = serde_json::to_value(hits(1)).unwrap();
		assert_eq!(
			json,
			serde_json::json!({
					"results": [{"title": "T0", "link": "https://example.com/0", "desc": "S0"}]
			})
		);
	}

	proptest! {
			#[test]
			fn limited_is_a_prefix(total in 0usize..30, count in 1i64..40) {
					let all = hits(total);
					let query = SearchQuery::new("q").with_count(count);
					let kept = all.clone().limited(query.limit());

					prop_assert_eq!(kept.len(), total.min(count as usize));
					prop_assert_eq!(&kept.results[..], &all.results[..kept.len()]);
			}

			#[test]
			fn non_positive_count_keeps_everything(total in 0usize..30, count in -20i64..=0) {
					let all = hits(total);
					let kept = all.clone().limited(SearchQuery::new("q").with_count(count).limit());
					prop_assert_eq!(kept, all);
			}
	}
}
