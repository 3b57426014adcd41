/// Load errors.
///
/// Raised while reading the entry file and its `file` dependencies, before
/// anything is parsed: bad extensions, unreadable files and malformed
/// directives.
pub mod load_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the block structure
/// from tokens: missing or mismatched delimiters, missing names and literals
/// that cannot be represented.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: stack
/// underflow, type mismatches, name collisions, unknown words, failed
/// assertions and window device failures.
pub mod runtime_error;

use std::fmt;

pub use load_error::LoadError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Exit code used for load, parse and runtime errors.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code used for failed assertions.
pub const EXIT_ASSERTION: i32 = 2;

/// Any error that stops a program.
///
/// There is no recovery construct in the language, so each of these ends the
/// run. The variant records which phase gave up.
#[derive(Debug)]
pub enum Error {
    /// Reading the program or one of its dependencies failed.
    Load(LoadError),
    /// The token stream did not form a valid program.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl Error {
    /// The process exit code this error terminates the program with.
    ///
    /// # Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use stacko::{
    ///     ast::Location,
    ///     error::{Error, RuntimeError},
    /// };
    ///
    /// let location = Location::new(&Rc::from("main.stko"), 1);
    /// let err = Error::from(RuntimeError::AssertionFailed { detail: None, location });
    /// assert_eq!(err.exit_code(), 2);
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Runtime(e) if e.is_assertion() => EXIT_ASSERTION,
            _ => EXIT_FAILURE,
        }
    }

    /// A short emoji hint shown after the message by the command line
    /// reporter. Lookups that found nothing get a magnifying glass.
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Load(LoadError::Unreadable { .. })
            | Self::Parse(ParseError::Expected { .. } | ParseError::UnexpectedEnd { .. })
            | Self::Runtime(RuntimeError::UndeclaredVariable { .. }) => "😐🔍",
            _ => "😭",
        }
    }
}

impl From<LoadError> for Error {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
