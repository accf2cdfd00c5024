//! Taskboard: a minimal task-tracking core.
//!
//! This crate provides the data-access and resolver layer of a task
//! tracker: a typed operation gateway that translates wire-level
//! query/mutation requests into repository calls against a relational
//! store.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`task`]: Task entity, repository port, and storage adapters
//! - [`gateway`]: Stateless operation dispatch, coercion, and error
//!   translation
//! - [`worker`]: Shell-quoting shared with the embedded-database worker
//!   binary

pub mod gateway;
pub mod task;
pub mod worker;
