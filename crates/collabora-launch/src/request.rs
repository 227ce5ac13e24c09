//! Request client implementation

use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::prelude::*;

type HttpsClient = Client<HttpsConnector<HttpConnector>, Empty<Bytes>>;

/// Answer to one GET: a collected 2xx body, or the non-success status.
pub(crate) enum GetOutcome {
	Body(Bytes),
	Status(hyper::StatusCode),
}

#[derive(Debug, Clone)]
pub(crate) struct Request(HttpsClient);

impl Request {
	pub(crate) fn new() -> CoResult<Self> {
		let connector = HttpsConnectorBuilder::new()
			.with_native_roots()
			.map_err(|err| Error::Internal(format!("TLS root store error: {}", err)))?
			.https_or_http()
			.enable_http1()
			.build();
		Ok(Request(Client::builder(TokioExecutor::new()).build(connector)))
	}

	/// Issue one GET request, with a single attempt and no timeout of its
	/// own. Transport failures are `Err`; any response the server managed
	/// to produce, success or not, is `Ok`.
	pub(crate) async fn get(&self, url: &str, accept: Option<&str>) -> CoResult<GetOutcome> {
		let uri: hyper::Uri = url
			.parse()
			.map_err(|_| Error::ValidationError(format!("Invalid URL: {}", url)))?;

		let mut request = hyper::Request::builder().method(hyper::Method::GET).uri(uri);
		if let Some(accept) = accept {
			request = request.header(hyper::header::ACCEPT, accept);
		}
		let request = request
			.body(Empty::new())
			.map_err(|err| Error::Internal(format!("Request build error: {}", err)))?;

		let response = self
			.0
			.request(request)
			.await
			.map_err(|err| Error::Internal(format!("Network error: {}", err)))?;

		let status = response.status();
		if !status.is_success() {
			return Ok(GetOutcome::Status(status));
		}

		let body = response
			.into_body()
			.collect()
			.await
			.map_err(|err| Error::Internal(format!("Network error: {}", err)))?
			.to_bytes();
		Ok(GetOutcome::Body(body))
	}
}

// vim: ts=4
