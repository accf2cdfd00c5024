//! Unit tests for the task domain and the in-memory adapter.
