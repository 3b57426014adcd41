/// The assembler module turns an entry file and its dependencies into one
/// token stream.
///
/// A program may pull in other files with `file <path>` lines. The assembler
/// reads each file once, follows the directives depth-first, and concatenates
/// the token streams so that every dependency is loaded before the file that
/// needs it.
///
/// # Responsibilities
/// - Rejects files without a `.stko` or `.stacko` extension.
/// - Orders dependencies and removes duplicates.
/// - Reports unreadable files and malformed directives.
pub mod assembler;
/// The device module defines the window surface driven by the window
/// opcodes.
///
/// The evaluator only talks to the [`device::WindowDevice`] trait. The crate
/// ships a headless implementation that tracks fills and frames without a
/// windowing system.
pub mod device;
/// The evaluator module runs parsed blocks against the program state.
///
/// The evaluator walks statements in order, moving values through the operand
/// stack, binding names in the global namespace and driving the standard
/// streams and the window device.
///
/// # Responsibilities
/// - Executes literals, opcodes, words and control constructs.
/// - Calls user functions on the shared stack, bounded by a depth limit.
/// - Reports runtime errors such as stack underflow or type mismatches.
pub mod evaluator;
/// The lexer module splits source text into tokens.
///
/// Tokens are whitespace-separated words with their file and line. Quoted
/// strings stay whole, comments are dropped and `file` lines are handed to the
/// assembler instead of becoming tokens.
pub mod lexer;
/// Global name bindings.
///
/// Functions, constants and variables share one namespace, so a name can be
/// bound only once.
pub mod namespace;
/// The parser module builds blocks of statements from tokens.
///
/// The parser consumes the assembled token stream front to back and builds
/// the nested block structure: control constructs with their bodies,
/// definitions with their names, and literal values.
///
/// # Responsibilities
/// - Matches `{ }` and `[ ]` pairs, reporting what was expected and where.
/// - Resolves opcodes and literals once, at parse time.
pub mod parser;
/// The value module defines the runtime data types.
///
/// Strings, integers, reals, booleans and arrays, together with how they
/// print and how literal text becomes a value.
pub mod value;
