/// Numeric conversion helpers.
///
/// Safe conversions between the interpreter's `i64` integers and the `usize`
/// and `i32` values the host needs for indexing and exit codes. All helpers
/// return `None` instead of truncating.
pub mod num;
/// Stack growth for deep recursion.
///
/// Keeps recursive parsing and evaluation from overflowing the native stack,
/// so the configured call-depth limit is what stops runaway recursion.
pub mod stack;
