//! Attachment access resolution.
//!
//! Maps a file extension to the action Collabora Online can perform on it,
//! then downgrades that action based on the user's edit rights: the
//! ambient context flag, or the wiki's rights endpoint when an explicit
//! document is named.

use crate::prelude::*;

/// Default action class for a recognized attachment extension.
///
/// Office formats Collabora can write are `Edit`, read-only formats are
/// `View`, anything else is unrecognized.
fn action_for_extension(ext: &str) -> Option<Action> {
	match ext {
		"doc" | "docx" | "xls" | "xlsx" | "ppt" | "pptx" | "csv" | "rtf" | "txt" | "odt"
		| "ods" | "odp" | "odg" => Some(Action::Edit),
		"pdf" | "fb2" => Some(Action::View),
		_ => None,
	}
}

/// Classify an attachment by file name.
///
/// The lookup key is the substring after the last `.`, lowercased. A file
/// name without a dot is looked up as a whole and normally misses.
pub fn classify(file_name: &str) -> Option<Action> {
	let ext = file_name.rsplit('.').next().unwrap_or(file_name).to_lowercase();
	action_for_extension(&ext)
}

/// Resolve the permitted action for an attachment of the current document.
///
/// `Edit` is downgraded to `View` when the context lacks edit rights. A
/// `View` classification is never upgraded and an unrecognized extension
/// stays unrecognized.
pub fn resolve_for_current_context(ctx: &WikiCtx, file_name: &str) -> Option<Action> {
	let action = classify(file_name)?;
	if action == Action::Edit && !ctx.has_edit {
		return Some(Action::View);
	}
	Some(action)
}

/// Resolve the permitted action for an attachment of an explicitly named
/// document.
///
/// Behaves like [`resolve_for_current_context`] when no document is given.
/// Otherwise asks the capability oracle once, with no retry. An answer
/// that cannot be used denies access altogether, even for a recognized
/// extension. Transport failures propagate; callers wanting a deadline
/// wrap the call, e.g. in `tokio::time::timeout`.
pub async fn resolve_for_document(
	oracle: &dyn CapabilityOracle,
	ctx: &WikiCtx,
	file_name: &str,
	document_ref: Option<&DocumentRef>,
) -> CoResult<Option<Action>> {
	let Some(action) = classify(file_name) else {
		return Ok(None);
	};
	let Some(document_ref) = document_ref else {
		return Ok(resolve_for_current_context(ctx, file_name));
	};

	match oracle.document_rights(document_ref).await? {
		RightsOutcome::Known(rights) => {
			if action == Action::Edit && !rights.can_edit {
				Ok(Some(Action::View))
			} else {
				Ok(Some(action))
			}
		}
		RightsOutcome::Unavailable => {
			warn!(
				document = %document_ref,
				file = file_name,
				"Rights could not be determined, denying access"
			);
			Ok(None)
		}
	}
}


// vim: ts=4
