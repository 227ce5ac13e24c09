//! REST client for the wiki's Collabora rights endpoint.

use async_trait::async_trait;
use url::form_urlencoded;

use crate::prelude::*;
use crate::request::{GetOutcome, Request};

/// Capability oracle backed by the wiki's REST API.
///
/// Asks `GET {origin}{context_path}/rest/collabora/rights` whether the
/// current user may edit a document. One attempt per lookup; an error
/// status or a body that fails the schema check resolves to
/// [`RightsOutcome::Unavailable`], which denies access downstream.
#[derive(Debug, Clone)]
pub struct RestCapabilityOracle {
	request: Request,
	origin: Box<str>,
	context_path: Box<str>,
}

impl RestCapabilityOracle {
	pub fn new(origin: &str, context_path: &str) -> CoResult<Self> {
		Ok(Self {
			request: Request::new()?,
			origin: origin.into(),
			context_path: context_path.into(),
		})
	}

	/// Oracle for the origin and context path of the given context.
	pub fn for_ctx(ctx: &WikiCtx) -> CoResult<Self> {
		Self::new(&ctx.origin, &ctx.context_path)
	}

	fn rights_url(&self, document_ref: &DocumentRef) -> String {
		rights_url_for(&self.origin, &self.context_path, document_ref)
	}
}

fn rights_url_for(origin: &str, context_path: &str, document_ref: &DocumentRef) -> String {
	let query = form_urlencoded::Serializer::new(String::new())
		.append_pair("document_ref", document_ref.as_str())
		.finish();
	format!("{}{}/rest/collabora/rights?{}", origin, context_path, query)
}

#[async_trait]
impl CapabilityOracle for RestCapabilityOracle {
	async fn document_rights(&self, document_ref: &DocumentRef) -> CoResult<RightsOutcome> {
		let url = self.rights_url(document_ref);
		debug!(url = %url, "Checking document rights");

		let body = match self.request.get(&url, Some("application/json")).await? {
			GetOutcome::Body(body) => body,
			GetOutcome::Status(status) => {
				warn!(
					document = %document_ref,
					status = %status,
					"Rights endpoint returned an error status"
				);
				return Ok(RightsOutcome::Unavailable);
			}
		};

		match serde_json::from_slice::<DocumentRights>(&body) {
			Ok(rights) => Ok(RightsOutcome::Known(rights)),
			Err(err) => {
				warn!(document = %document_ref, error = %err, "Malformed rights response");
				Ok(RightsOutcome::Unavailable)
			}
		}
	}
}


// vim: ts=4
