/// Shared parser plumbing.
///
/// Holds the token stream the other parser modules consume, the `ParseResult`
/// alias, the keyword spellings and the program entry point.
pub mod core;

/// Block parsing.
///
/// Parses sequences of statements up to the end of input or a block
/// terminator.
pub mod block;

/// Statement parsing.
///
/// Dispatches on the leading token: control constructs (`if`, `while`),
/// definitions (`fnn`, `const`, `var`, `set`), literals, opcodes and words.
pub mod statement;

/// Array literal parsing.
///
/// Builds array values from nested literal elements at parse time.
pub mod array;
