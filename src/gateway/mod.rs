//! Operation gateway for Taskboard.
//!
//! The gateway exposes the task repository's five operations as a typed
//! query/mutation surface. It owns the operation schema (an explicit
//! dispatch table covering every operation), coerces wire-level arguments
//! (string identifiers to numeric ids, optional fields distinguishable
//! from explicit values), and translates repository failures 1:1 into
//! wire-level error entries. It holds no task state between requests.

mod error;
mod schema;
mod service;
mod wire;

pub use error::GatewayError;
pub use schema::{Operation, OperationKind, Schema};
pub use service::TaskGateway;
pub use wire::{OperationRequest, OperationResponse, TaskView, WireError};

#[cfg(test)]
mod tests;
