//! Recipe discovery and analytics engine for the DiShared platform.
//!
//! The crate follows a hexagonal layout:
//! - [`domain`] holds the entities, rating aggregation, and discovery
//!   services, plus the ports they depend on and expose.
//! - [`outbound`] implements the entity store ports.
//! - [`inbound`] exposes the driving ports over HTTP.
//! - [`middleware`] carries request-scoped concerns such as trace ids.
//! - [`demo_data`] loads a fixed catalogue for local runs.

pub mod demo_data;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use domain::TraceId;
pub use middleware::Trace;
