//! Capability oracle answering whether the current user may edit a document.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::prelude::*;

/// Rights statement returned by the wiki for one document.
///
/// The payload is schema-checked: a body without a boolean `canEdit` field
/// does not deserialize and counts as an unusable answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRights {
	pub can_edit: bool,
}

/// Outcome of one capability lookup.
#[derive(Debug)]
pub enum RightsOutcome {
	/// The endpoint answered with a well-formed rights statement.
	Known(DocumentRights),
	/// The endpoint answered, but not with a usable rights statement
	/// (error status or malformed body). Treated as a denial downstream.
	Unavailable,
}

/// Answers whether the current user may edit a given document.
///
/// One lookup per call, no retry. Implementations impose no timeout of
/// their own; callers needing a deadline wrap the call, e.g. in
/// `tokio::time::timeout`. Transport-level failures are `Err` and
/// propagate.
#[async_trait]
pub trait CapabilityOracle: Debug + Send + Sync {
	async fn document_rights(&self, document_ref: &DocumentRef) -> CoResult<RightsOutcome>;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rights_payload_schema() {
		let rights: DocumentRights = serde_json::from_str(r#"{"canEdit":true}"#).unwrap();
		assert!(rights.can_edit);

		let rights: DocumentRights = serde_json::from_str(r#"{"canEdit":false}"#).unwrap();
		assert!(!rights.can_edit);
	}

	#[test]
	fn test_rights_payload_rejects_other_shapes() {
		assert!(serde_json::from_str::<DocumentRights>(r#"{}"#).is_err());
		assert!(serde_json::from_str::<DocumentRights>(r#"{"canEdit":"yes"}"#).is_err());
		assert!(serde_json::from_str::<DocumentRights>(r#"{"can_edit":true}"#).is_err());
		assert!(serde_json::from_str::<DocumentRights>(r#"[true]"#).is_err());
	}
}

// vim: ts=4
