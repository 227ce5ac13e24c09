//! Collabora integration settings.

use serde::{Deserialize, Serialize};

/// Configuration of the Collabora Online integration, as stored by the
/// host wiki (camelCase JSON).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaboraSettings {
	/// Whether the integration is enabled. Off when not specified.
	#[serde(default)]
	pub enabled: bool,

	/// Base URL of the Collabora Online server, e.g.
	/// `https://collabora.example.com:9980`.
	pub server_url: Box<str>,
}

impl CollaboraSettings {
	/// URL of the discovery document on the Collabora server.
	pub fn discovery_url(&self) -> String {
		format!("{}/hosting/discovery", self.server_url.trim_end_matches('/'))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_settings_deserialize() {
		let settings: CollaboraSettings = serde_json::from_str(
			r#"{"enabled":true,"serverUrl":"https://collabora.example.com:9980"}"#,
		)
		.unwrap();

		assert!(settings.enabled);
		assert_eq!(&*settings.server_url, "https://collabora.example.com:9980");
	}

	#[test]
	fn test_settings_enabled_defaults_to_off() {
		let settings: CollaboraSettings =
			serde_json::from_str(r#"{"serverUrl":"https://collabora.example.com"}"#).unwrap();
		assert!(!settings.enabled);
	}

	#[test]
	fn test_discovery_url_handles_trailing_slash() {
		let settings = CollaboraSettings {
			enabled: true,
			server_url: "https://collabora.example.com:9980/".into(),
		};
		assert_eq!(
			settings.discovery_url(),
			"https://collabora.example.com:9980/hosting/discovery"
		);
	}
}

// vim: ts=4
