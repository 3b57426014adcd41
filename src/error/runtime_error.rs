use std::io;

use crate::{ast::Location, interpreter::device::DeviceError};

#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An operation needed more values than the stack holds.
    StackUnderflow {
        /// Number of values the operation needs.
        required: usize,
        /// Number of values on the stack.
        found:    usize,
        /// The source location of the operation.
        location: Location,
    },
    /// The two operands of an operation have different types.
    TypeMismatch {
        /// Type of the deeper operand.
        left:     &'static str,
        /// Type of the top operand.
        right:    &'static str,
        /// The source location of the operation.
        location: Location,
    },
    /// An operand has the wrong type for the operation.
    UnexpectedType {
        /// The type the operation requires.
        expected: &'static str,
        /// The type found on the stack.
        found:    &'static str,
        /// The source location of the operation.
        location: Location,
    },
    /// Both operands agree in type, but the operation is not defined for it.
    UnsupportedOperation {
        /// Spelling of the operation.
        op:       &'static str,
        /// The operand type.
        operand:  &'static str,
        /// The source location of the operation.
        location: Location,
    },
    /// Tried to bind a name that is already a function, constant or variable.
    NameTaken {
        /// The name.
        name:     String,
        /// The source location of the definition.
        location: Location,
    },
    /// `set` named something that is not a declared variable.
    UndeclaredVariable {
        /// The name.
        name:     String,
        /// The source location of the `set`.
        location: Location,
    },
    /// A variable was read before any `set`.
    UnsetVariable {
        /// The name.
        name:     String,
        /// The source location of the read.
        location: Location,
    },
    /// A word is neither a built-in nor a bound name.
    UnknownToken {
        /// The word.
        name:     String,
        /// The source location of the word.
        location: Location,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// The source location of the operation.
        location: Location,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source location of the operation.
        location: Location,
    },
    /// `getElement` index outside the array.
    IndexOutOfBounds {
        /// The requested index.
        index:    i64,
        /// Length of the array.
        len:      usize,
        /// The source location of the operation.
        location: Location,
    },
    /// `toNum` was given a string that is not a number.
    InvalidNumber {
        /// The string.
        text:     String,
        /// The source location of the cast.
        location: Location,
    },
    /// `exit` was given a code the operating system cannot represent.
    InvalidExitCode {
        /// The requested code.
        code:     i64,
        /// The source location of the `exit`.
        location: Location,
    },
    /// `waitMore` was given a negative or non-finite duration.
    InvalidDuration {
        /// The requested number of seconds.
        seconds:  f64,
        /// The source location of the `waitMore`.
        location: Location,
    },
    /// `readLine` reached the end of standard input.
    EndOfInput {
        /// The source location of the `readLine`.
        location: Location,
    },
    /// Reading standard input or writing standard output failed.
    Io {
        /// The underlying failure.
        source:   io::Error,
        /// The source location of the operation.
        location: Location,
    },
    /// Function calls nested deeper than the configured limit.
    RecursionLimit {
        /// The configured maximum depth.
        limit:    usize,
        /// The source location of the call that exceeded it.
        location: Location,
    },
    /// `assert`, `assertEqual` or `assertNotEqual` failed.
    AssertionFailed {
        /// What the assertion expected, for the two-operand forms.
        detail:   Option<&'static str>,
        /// The source location of the assertion.
        location: Location,
    },
    /// A window opcode ran while no window was open.
    WindowNotOpen {
        /// The source location of the opcode.
        location: Location,
    },
    /// `createWindow` ran while a window was already open.
    WindowAlreadyOpen {
        /// The source location of the opcode.
        location: Location,
    },
    /// The display device rejected an operation.
    Device {
        /// The device failure.
        source:   DeviceError,
        /// The source location of the opcode.
        location: Location,
    },
}

impl RuntimeError {
    /// Returns `true` for failed assertions, which use their own exit code.
    #[must_use]
    pub const fn is_assertion(&self) -> bool {
        matches!(self, Self::AssertionFailed { .. })
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StackUnderflow { required,
                                   found,
                                   location, } => write!(f,
                                                         "{location}: Expected at least {required} item(s) on stack to perform operation. Found {found} instead."),
            Self::TypeMismatch { left,
                                 right,
                                 location, } => write!(f,
                                                       "{location}: Type '{left}' and '{right}' cannot be used together in an operation."),
            Self::UnexpectedType { expected,
                                   found,
                                   location, } => {
                write!(f, "{location}: Expected a value of type '{expected}', found '{found}'.")
            },
            Self::UnsupportedOperation { op,
                                         operand,
                                         location, } => {
                write!(f, "{location}: Operation '{op}' is not defined for type '{operand}'.")
            },
            Self::NameTaken { name, location } => {
                write!(f, "{location}: Name '{name}' already exists elsewhere.")
            },
            Self::UndeclaredVariable { name, location } => {
                write!(f, "{location}: The variable '{name}' does not exist.")
            },
            Self::UnsetVariable { name, location } => {
                write!(f, "{location}: The variable '{name}' was read before being set.")
            },
            Self::UnknownToken { name, location } => {
                write!(f, "{location}: Unknown token '{name}'.")
            },
            Self::DivisionByZero { location } => write!(f, "{location}: Division by zero."),
            Self::Overflow { location } => {
                write!(f, "{location}: Integer overflow while trying to compute result.")
            },
            Self::IndexOutOfBounds { index,
                                     len,
                                     location, } => write!(f,
                                                           "{location}: Index {index} is out of bounds for an array of length {len}."),
            Self::InvalidNumber { text, location } => {
                write!(f, "{location}: Cannot convert '{text}' to a number.")
            },
            Self::InvalidExitCode { code, location } => {
                write!(f, "{location}: Exit code {code} is out of range.")
            },
            Self::InvalidDuration { seconds, location } => {
                write!(f, "{location}: Cannot wait for {seconds} seconds.")
            },
            Self::EndOfInput { location } => {
                write!(f, "{location}: Reached the end of standard input.")
            },
            Self::Io { source, location } => write!(f, "{location}: I/O error: {source}."),
            Self::RecursionLimit { limit, location } => write!(f,
                                                               "{location}: Function calls nested deeper than {limit} levels."),
            Self::AssertionFailed { detail: Some(detail),
                                    location, } => {
                write!(f, "{location}: Assertion failed. {detail}")
            },
            Self::AssertionFailed { detail: None,
                                    location, } => write!(f, "{location}: Assertion failed."),
            Self::WindowNotOpen { location } => {
                write!(f, "{location}: No window is open. Use 'createWindow' first.")
            },
            Self::WindowAlreadyOpen { location } => {
                write!(f, "{location}: A window is already open.")
            },
            Self::Device { source, location } => write!(f, "{location}: Window error: {source}."),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Device { source, .. } => Some(source),
            _ => None,
        }
    }
}
