pub use crate::error::{CoResult, Error};
pub use crate::types::{Action, DocumentRef, WikiCtx};

// vim: ts=4
