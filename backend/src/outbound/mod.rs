//! Outbound adapters implementing the driven ports.
//!
//! - **memory**: process-local entity store used by the server and tests.
//!
//! Adapters are thin: they store and filter entities and enforce uniqueness,
//! and contain no discovery logic.

pub mod memory;
