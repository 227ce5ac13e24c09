//! Common types used throughout the Collabora integration.

use serde::{Deserialize, Serialize};

// Action //
//********//

/// Permitted interaction with an attachment.
///
/// An attachment whose extension is not recognized at all has no action;
/// that case is `Option::<Action>::None` at the resolver seams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
	Edit,
	View,
}

impl Action {
	/// Wire form of the action, as carried in launch URL query strings.
	pub fn as_str(self) -> &'static str {
		match self {
			Action::Edit => "edit",
			Action::View => "view",
		}
	}

	/// Associate a requested mode string with an action.
	///
	/// Absent or unrecognized modes fall back to `Edit`. Hosts use this to
	/// read the `action` parameter back off a launch URL.
	pub fn from_mode(mode: Option<&str>) -> Self {
		match mode {
			Some(mode) if mode.eq_ignore_ascii_case("view") => Action::View,
			_ => Action::Edit,
		}
	}
}

impl std::fmt::Display for Action {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

// DocumentRef //
//*************//

/// Canonical string reference of a wiki document, e.g. `Sandbox.WebHome`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRef(pub Box<str>);

impl DocumentRef {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for DocumentRef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<&str> for DocumentRef {
	fn from(value: &str) -> Self {
		DocumentRef(value.into())
	}
}

impl From<String> for DocumentRef {
	fn from(value: String) -> Self {
		DocumentRef(value.into())
	}
}

impl Serialize for DocumentRef {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0)
	}
}

impl<'de> Deserialize<'de> for DocumentRef {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(DocumentRef(String::deserialize(deserializer)?.into()))
	}
}

// WikiCtx //
//*********//

/// Execution context of one resolver call.
///
/// Carries what the host page knows: where the wiki lives, which document
/// the page shows and whether the user may edit in this context. Threaded
/// explicitly through every operation instead of read from process-wide
/// state.
#[derive(Clone, Debug)]
pub struct WikiCtx {
	/// Scheme and host of the wiki, e.g. `https://wiki.example.com`.
	pub origin: Box<str>,
	/// Base path the wiki is served under, e.g. `/wiki`.
	pub context_path: Box<str>,
	/// Document the current page shows.
	pub current_document: DocumentRef,
	/// Whether the current user has edit rights in this context.
	pub has_edit: bool,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_action_from_mode() {
		assert_eq!(Action::from_mode(None), Action::Edit);
		assert_eq!(Action::from_mode(Some("edit")), Action::Edit);
		assert_eq!(Action::from_mode(Some("view")), Action::View);
		assert_eq!(Action::from_mode(Some("VIEW")), Action::View);
		assert_eq!(Action::from_mode(Some("print")), Action::Edit);
	}

	#[test]
	fn test_action_wire_form() {
		assert_eq!(Action::Edit.as_str(), "edit");
		assert_eq!(Action::View.to_string(), "view");
		assert_eq!(serde_json::to_string(&Action::Edit).unwrap(), "\"edit\"");
	}

	#[test]
	fn test_document_ref_round_trip() {
		let doc = DocumentRef::from("Space.Page");
		assert_eq!(doc.to_string(), "Space.Page");
		assert_eq!(serde_json::to_string(&doc).unwrap(), "\"Space.Page\"");

		let parsed: DocumentRef = serde_json::from_str("\"Space.Page\"").unwrap();
		assert_eq!(parsed, doc);
	}
}

// vim: ts=4
