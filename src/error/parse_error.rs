use crate::ast::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing.
pub enum ParseError {
    /// A specific token was required but a different one was found.
    Expected {
        /// The token the parser needed.
        expected: String,
        /// The token actually found.
        found:    String,
        /// Where the unexpected token appeared.
        location: Location,
    },
    /// The token stream ended where a specific token was required.
    UnexpectedEnd {
        /// The token the parser needed.
        expected: String,
        /// Location of the last token seen, if any.
        location: Option<Location>,
    },
    /// A block terminator appeared with no construct to close.
    UnmatchedTerminator {
        /// The stray `}` or `]`.
        token:    String,
        /// Where it appeared.
        location: Location,
    },
    /// An array element was not a literal.
    NotALiteral {
        /// The offending element.
        token:    String,
        /// Where it appeared.
        location: Location,
    },
    /// Blocks or array literals are nested deeper than the parser allows.
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit:    usize,
        /// The opening token that went past the limit.
        location: Location,
    },
    /// A numeric literal does not fit its type.
    LiteralOutOfRange {
        /// The literal as written.
        token:    String,
        /// Where it appeared.
        location: Location,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expected { expected,
                             found,
                             location, } => {
                write!(f, "{location}: Expected '{expected}', found '{found}' instead.")
            },
            Self::UnexpectedEnd { expected,
                                  location: Some(location), } => {
                write!(f, "{location}: Expected '{expected}', found nothing instead.")
            },
            Self::UnexpectedEnd { expected,
                                  location: None, } => {
                write!(f, "Expected '{expected}', found nothing instead.")
            },
            Self::UnmatchedTerminator { token, location } => {
                write!(f, "{location}: Found '{token}' without a matching opening token.")
            },
            Self::NotALiteral { token, location } => {
                write!(f, "{location}: Failed to parse token '{token}' as a literal.")
            },
            Self::NestingTooDeep { limit, location } => {
                write!(f, "{location}: Nesting is deeper than {limit} levels.")
            },
            Self::LiteralOutOfRange { token, location } => {
                write!(f, "{location}: Literal '{token}' is out of range.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
