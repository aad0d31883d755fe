// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

use crate::{ActionError, ActionResult};

/// Success envelope for actions whose payload is a bare value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response<T> {
	pub result: T,
}

impl<T> Response<T> {
	pub fn new(result: T) -> Self {
		Self { result }
	}
}

/// Failure envelope written back to the orchestration host.
#[derive(Clone, Debug, Serialize)]
pub struct ErrorResponse<'a> {
	pub error: &'a ActionError,
}

/// Render an action outcome as the JSON document handed back to the caller.
///
/// Success payloads are serialized as-is; wrap bare values in [`Response`]
/// first when the host expects a `result` field.
pub fn outcome_to_json<T: Serialize>(outcome: &ActionResult<T>) -> serde_json::Result<String> {
	match outcome {
		Ok(value) => serde_json::to_string_pretty(value),
		Err(error) => serde_json::to_string_pretty(&ErrorResponse { error }),
	}
}
