//! Collabora discovery document lookup.
//!
//! Collabora Online publishes a discovery document at
//! `{server}/hosting/discovery` listing, per file extension, which part of
//! the editor to load (the `urlsrc` attribute of an `<action>` element).

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::prelude::*;
use crate::request::{GetOutcome, Request};
use crate::settings::CollaboraSettings;

/// Client for the Collabora discovery endpoint.
#[derive(Debug, Clone)]
pub struct DiscoveryClient {
	request: Request,
	discovery_url: Box<str>,
}

impl DiscoveryClient {
	pub fn new(settings: &CollaboraSettings) -> CoResult<Self> {
		Ok(Self { request: Request::new()?, discovery_url: settings.discovery_url().into() })
	}

	/// Get the `urlsrc` specific to this type of file, needed to know
	/// which part of Collabora Online to load.
	///
	/// `Ok(None)` when the discovery document carries no action for the
	/// file's extension.
	pub async fn url_src(&self, file_name: &str) -> CoResult<Option<Box<str>>> {
		debug!(url = %self.discovery_url, "Fetching the Collabora discovery document");

		let body = match self.request.get(&self.discovery_url, None).await? {
			GetOutcome::Body(body) => body,
			GetOutcome::Status(status) => {
				warn!(status = %status, "Discovery endpoint returned an error status");
				return Err(Error::Internal(format!("Discovery request failed: HTTP {}", status)));
			}
		};

		let xml = std::str::from_utf8(&body).map_err(|_| Error::Parse)?;
		url_src_for(xml, file_name)
	}
}

/// Find the `urlsrc` of the `<action>` element whose `ext` attribute
/// matches the file's extension.
fn url_src_for(xml: &str, file_name: &str) -> CoResult<Option<Box<str>>> {
	let ext = file_name.rsplit('.').next().unwrap_or(file_name);
	let mut reader = Reader::from_str(xml);

	loop {
		match reader.read_event() {
			Ok(Event::Start(elem) | Event::Empty(elem))
				if elem.name().as_ref() == b"action" =>
			{
				let mut ext_matches = false;
				let mut url_src = None;
				for attr in elem.attributes() {
					let attr = attr.map_err(|_| Error::Parse)?;
					match attr.key.as_ref() {
						b"ext" => ext_matches = attr.value.as_ref() == ext.as_bytes(),
						b"urlsrc" => {
							url_src = Some(
								attr.unescape_value().map_err(|_| Error::Parse)?.into_owned(),
							);
						}
						_ => {}
					}
				}
				if ext_matches {
					return Ok(url_src.map(String::into_boxed_str));
				}
			}
			Ok(Event::Eof) => {
				debug!(file = file_name, "No urlsrc found in the Collabora discovery document");
				return Ok(None);
			}
			Err(_) => return Err(Error::Parse),
			Ok(_) => {}
		}
	}
}


// vim: ts=4
