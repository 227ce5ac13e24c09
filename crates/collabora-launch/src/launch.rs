//! Launch URL construction and attachment affordance population.

use url::form_urlencoded;

use crate::prelude::*;

/// Localization keys consumed by the attachment UI.
///
/// The host application owns the message bundles; the keys are fixed here
/// so both sides agree on them.
pub mod keys {
	/// Label for an attachment opened in edit mode.
	pub const EDIT_TITLE: &str = "edit.title";
	/// Label for an attachment opened in view mode.
	pub const VIEW_TITLE: &str = "view.title";
	/// Shown by the host when launching the editor fails.
	pub const MODAL_SUBMIT_ERROR: &str = "modal.submit.error";
}

/// Resolves UI message keys to localized strings.
///
/// An unknown key falls back to the key itself.
pub trait Localizer {
	fn message(&self, key: &str) -> Box<str>;
}

impl Localizer for std::collections::HashMap<String, String> {
	fn message(&self, key: &str) -> Box<str> {
		self.get(key).map_or_else(|| key.into(), |value| value.as_str().into())
	}
}

/// One attachment button or link in the host UI.
///
/// The resolver only writes through this seam; rendering stays with the
/// host application.
pub trait LaunchAffordance {
	/// Base editor URL preconfigured on the element by the host page.
	fn editor_url(&self) -> Box<str>;
	/// Set the tooltip shown on hover.
	fn set_tooltip(&mut self, title: &str);
	/// Set the alternate text of the embedded icon.
	fn set_image_alt(&mut self, alt: &str);
	/// Set the link target.
	fn set_href(&mut self, url: &str);
}

/// Build the URL that opens Collabora Online on an attachment.
///
/// The query carries the document reference (explicit, or the context's
/// current document), the file name, the resolved action and the plain
/// page marker, all form-encoded. `editor_base_url` is taken as-is; a
/// malformed base simply yields an unusable URL.
pub fn build_launch_url(
	ctx: &WikiCtx,
	file_name: &str,
	action: Action,
	editor_base_url: &str,
	document_ref: Option<&DocumentRef>,
) -> String {
	let document = document_ref.unwrap_or(&ctx.current_document);
	let query = form_urlencoded::Serializer::new(String::new())
		.append_pair("document", document.as_str())
		.append_pair("filename", file_name)
		.append_pair("action", action.as_str())
		.append_pair("xpage", "plain")
		.finish();
	let separator = if editor_base_url.contains('?') { '&' } else { '?' };
	format!("{}{}{}", editor_base_url, separator, query)
}

/// Fill in an attachment affordance: localized label as tooltip and image
/// alternate text, and the launch URL as link target.
pub fn populate_launch_affordance(
	ctx: &WikiCtx,
	l10n: &dyn Localizer,
	affordance: &mut dyn LaunchAffordance,
	file_name: &str,
	action: Action,
	document_ref: Option<&DocumentRef>,
) {
	let title_key = if action == Action::Edit { keys::EDIT_TITLE } else { keys::VIEW_TITLE };
	let title = l10n.message(title_key);
	affordance.set_tooltip(&title);
	affordance.set_image_alt(&title);

	let editor_url = affordance.editor_url();
	let url = build_launch_url(ctx, file_name, action, &editor_url, document_ref);
	affordance.set_href(&url);
}


// vim: ts=4
