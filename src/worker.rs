//! Shell-quoting shared between the embedded-database worker binary and
//! its test harness.

/// Quotes a value for safe interpolation into a POSIX shell command.
///
/// Single-quote wrapping with the standard `'\''` sequence for embedded
/// quotes.
#[must_use]
pub fn shell_escape(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}
