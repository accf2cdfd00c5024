//! Domain model for task records.
//!
//! The task domain models creation, partial update, and lookup of to-do
//! items while keeping all infrastructure concerns outside of the domain
//! boundary.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::{TaskId, TaskTitle};
pub use task::{PersistedTaskData, Task, TaskDraft, TaskPatch};
