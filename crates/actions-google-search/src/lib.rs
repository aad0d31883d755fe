// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Google Custom Search action.
//!
//! Queries the Custom Search JSON API and normalizes each hit into a
//! [`SearchResult`] of title, link and snippet.

pub mod client;
pub mod error;
pub mod types;

pub use client::SearchClient;
pub use error::SearchError;
pub use types::{
	SearchQuery, SearchResult, SearchResultList, API_KEY_ENV, CONTEXT_ENV, DEFAULT_COUNT,
};
