/// Runtime value representation.
///
/// Defines the closed `Value` enum shared by the parser (for literals) and the
/// evaluator (for everything on the operand stack), together with its textual
/// rendering and truthiness rules.
pub mod core;
/// Literal recognition and decoding.
///
/// Decides whether a token introduces a literal and turns literal text
/// (strings, numbers, booleans) into values.
pub mod literal;
