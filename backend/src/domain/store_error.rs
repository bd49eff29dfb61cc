//! Translation of entity store failures into domain errors.

use serde_json::json;
use tracing::{error, warn};

use super::Error;
use super::ports::EntityStoreError;

/// Map a driven-port failure onto the domain error taxonomy.
pub(crate) fn map_store_error(err: EntityStoreError) -> Error {
    match err {
        EntityStoreError::Connection { message } => {
            warn!(%message, "entity store unavailable");
            Error::service_unavailable(format!("entity store unavailable: {message}"))
        }
        EntityStoreError::Query { message } => {
            error!(%message, "entity store query failed");
            Error::internal(format!("entity store error: {message}"))
        }
        EntityStoreError::Conflict { entity, key } => {
            Error::conflict(format!("{entity} already exists"))
                .with_details(json!({ "entity": entity, "key": key }))
        }
    }
}

/// Report a broken invariant: logged with context, surfaced as internal.
pub(crate) fn broken_invariant(message: impl Into<String>) -> Error {
    let message = message.into();
    error!(%message, "invariant violated");
    Error::internal(message)
}
