//! In-memory adapter for the task repository port.

mod repository;

pub use repository::InMemoryTaskRepository;
