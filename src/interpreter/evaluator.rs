/// Core evaluation logic and context management.
///
/// Contains the evaluation context (operand stack, namespace, I/O, window
/// slot), block and statement evaluation, and name resolution.
pub mod core;

/// The operand stack.
///
/// A last-in-first-out sequence of values with typed, checked pops.
pub mod stack;

/// Built-in opcode evaluation.
///
/// Dispatches every opcode to its implementation: stack manipulation, I/O,
/// assertions, random numbers and array access.
pub mod builtin;

/// Binary operator evaluation.
///
/// Arithmetic and equality over two operands of the same type.
pub mod binary;

/// Type casts.
///
/// `toNum`, `toString` and `toBool`.
pub mod cast;

/// Window opcodes.
///
/// Tracks the single open window and forwards each opcode to the display
/// device.
pub mod window;
