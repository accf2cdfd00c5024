//! Unit tests for the gateway: schema coverage, coercion, and error
//! translation.
