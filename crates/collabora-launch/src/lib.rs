//! Collabora Online attachment integration.
//!
//! Decides whether the current user may edit or only view a file
//! attachment through Collabora Online and builds the URL that launches
//! the editing session.
//!
//! # Features
//!
//! - Extension-based action classification (edit / view / unrecognized)
//! - Rights-aware downgrade, from the ambient context or from the wiki's
//!   REST rights endpoint for an explicitly named document
//! - Launch URL construction with form-encoded query parameters
//! - UI affordance population through host-implemented trait seams
//! - Collabora discovery document lookup (`urlsrc` per file extension)
//!
//! The surrounding wiki application owns authentication, document storage
//! and the rights endpoint itself; this crate is the client-side glue.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod access;
pub mod discovery;
pub mod launch;
pub mod rights;
pub mod settings;

mod prelude;
mod request;

pub use access::{classify, resolve_for_current_context, resolve_for_document};
pub use discovery::DiscoveryClient;
pub use launch::{build_launch_url, populate_launch_affordance, LaunchAffordance, Localizer};
pub use rights::RestCapabilityOracle;
pub use settings::CollaboraSettings;

// vim: ts=4
