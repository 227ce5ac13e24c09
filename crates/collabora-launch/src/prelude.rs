pub use collabora_types::error::{CoResult, Error};
pub use collabora_types::oracle::{CapabilityOracle, DocumentRights, RightsOutcome};
pub use collabora_types::types::{Action, DocumentRef, WikiCtx};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
