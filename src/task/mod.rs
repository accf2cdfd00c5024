//! Task persistence for Taskboard.
//!
//! This module owns the task entity and its storage. The repository port
//! exposes five operations (list, find, create, update, delete) and hides
//! the storage engine behind them. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
