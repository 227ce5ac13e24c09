//! Access resolution tests against a scripted capability oracle.
//!
//! Covers the downgrade rules, the fail-closed handling of unusable
//! rights answers and the short-circuit that skips the oracle entirely
//! for unrecognized extensions.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use collabora_launch::resolve_for_document;
use collabora_types::error::{CoResult, Error};
use collabora_types::oracle::{CapabilityOracle, DocumentRights, RightsOutcome};
use collabora_types::types::{Action, DocumentRef, WikiCtx};

#[derive(Debug)]
enum Script {
	Allow,
	Deny,
	Unavailable,
	TransportError,
}

#[derive(Debug)]
struct ScriptedOracle {
	script: Script,
	calls: AtomicUsize,
}

impl ScriptedOracle {
	fn new(script: Script) -> Self {
		Self { script, calls: AtomicUsize::new(0) }
	}

	fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl CapabilityOracle for ScriptedOracle {
	async fn document_rights(&self, _document_ref: &DocumentRef) -> CoResult<RightsOutcome> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		match self.script {
			Script::Allow => Ok(RightsOutcome::Known(DocumentRights { can_edit: true })),
			Script::Deny => Ok(RightsOutcome::Known(DocumentRights { can_edit: false })),
			Script::Unavailable => Ok(RightsOutcome::Unavailable),
			Script::TransportError => Err(Error::Internal("connection refused".into())),
		}
	}
}

fn ctx(has_edit: bool) -> WikiCtx {
	WikiCtx {
		origin: "https://wiki.example.com".into(),
		context_path: "/wiki".into(),
		current_document: DocumentRef::from("Sandbox.WebHome"),
		has_edit,
	}
}

fn doc() -> DocumentRef {
	DocumentRef::from("Space.Page")
}

#[tokio::test]
async fn test_unrecognized_extension_skips_the_oracle() {
	let oracle = ScriptedOracle::new(Script::Allow);

	let action =
		resolve_for_document(&oracle, &ctx(true), "archive.zip", Some(&doc())).await.unwrap();

	assert_eq!(action, None);
	assert_eq!(oracle.calls(), 0);
}

#[tokio::test]
async fn test_rights_allow_keeps_edit() {
	let oracle = ScriptedOracle::new(Script::Allow);

	let action = resolve_for_document(&oracle, &ctx(true), "x.docx", Some(&doc())).await.unwrap();

	assert_eq!(action, Some(Action::Edit));
	assert_eq!(oracle.calls(), 1);
}

#[tokio::test]
async fn test_rights_deny_downgrades_to_view() {
	let oracle = ScriptedOracle::new(Script::Deny);

	let action = resolve_for_document(&oracle, &ctx(true), "x.docx", Some(&doc())).await.unwrap();

	assert_eq!(action, Some(Action::View));
}

#[tokio::test]
async fn test_view_file_stays_view_even_with_edit_rights() {
	let oracle = ScriptedOracle::new(Script::Allow);

	let action = resolve_for_document(&oracle, &ctx(true), "scan.pdf", Some(&doc())).await.unwrap();

	assert_eq!(action, Some(Action::View));
}

#[tokio::test]
async fn test_unavailable_rights_deny_access() {
	let oracle = ScriptedOracle::new(Script::Unavailable);

	let action = resolve_for_document(&oracle, &ctx(true), "x.docx", Some(&doc())).await.unwrap();

	assert_eq!(action, None);
	assert_eq!(oracle.calls(), 1);
}

#[tokio::test]
async fn test_without_document_uses_ambient_rights() {
	let oracle = ScriptedOracle::new(Script::Allow);

	let action = resolve_for_document(&oracle, &ctx(false), "x.docx", None).await.unwrap();
	assert_eq!(action, Some(Action::View));
	assert_eq!(oracle.calls(), 0);

	let action = resolve_for_document(&oracle, &ctx(true), "x.docx", None).await.unwrap();
	assert_eq!(action, Some(Action::Edit));
	assert_eq!(oracle.calls(), 0);
}

#[tokio::test]
async fn test_transport_error_propagates() {
	let oracle = ScriptedOracle::new(Script::TransportError);

	let result = resolve_for_document(&oracle, &ctx(true), "x.docx", Some(&doc())).await;

	assert!(matches!(result, Err(Error::Internal(_))));
}

// vim: ts=4
