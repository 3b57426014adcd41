use std::{iter::Peekable, vec};

use crate::{
    ast::{Block, Location},
    error::ParseError,
    interpreter::{lexer::Token, parser::block::parse_block},
    util::stack::ensure_sufficient_stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// `if`
pub const IF: &str = "if";
/// `else`
pub const ELSE: &str = "else";
/// `while`
pub const WHILE: &str = "while";
/// `fnn`
pub const FUNCTION: &str = "fnn";
/// `const`
pub const CONST: &str = "const";
/// `var`
pub const VAR: &str = "var";
/// `set`
pub const SET: &str = "set";
/// Opens a body.
pub const BLOCK_OPEN: &str = "{";
/// Closes a body.
pub const BLOCK_CLOSE: &str = "}";

/// Deepest nesting of bodies and array literals a program may use.
///
/// Parsed trees are dropped recursively, so the depth is capped while
/// parsing rather than left to the native stack.
pub const MAX_NESTING_DEPTH: usize = 1_000;

/// The tokens of a program, consumed front to back.
///
/// Remembers the location of the last token handed out, so running out of
/// tokens can still be reported near the place it happened.
pub struct TokenStream {
    tokens: Peekable<vec::IntoIter<Token>>,
    last:   Option<Location>,
    depth:  usize,
}

impl TokenStream {
    /// Wraps an assembled token sequence.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens: tokens.into_iter().peekable(),
               last:   None,
               depth:  0, }
    }

    /// Text of the next token, without consuming it.
    pub fn peek_text(&mut self) -> Option<&str> {
        self.tokens.peek().map(|t| t.text.as_str())
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Option<Token> {
        let token = self.tokens.next()?;
        self.last = Some(token.location.clone());
        Some(token)
    }

    /// Returns `true` if the next token ends the current block: `}`, `]`, or
    /// the end of input.
    pub fn at_block_end(&mut self) -> bool {
        self.peek_text().is_none_or(is_terminator)
    }

    /// Runs `parse` one nesting level deeper than the current one.
    ///
    /// # Errors
    /// `ParseError::NestingTooDeep` at `open` if the level would exceed
    /// [`MAX_NESTING_DEPTH`], otherwise whatever `parse` returns.
    pub fn nested<T>(&mut self,
                     open: &Location,
                     parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                     -> ParseResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                                    location: open.clone(), });
        }

        self.depth += 1;
        let result = ensure_sufficient_stack(|| parse(self));
        self.depth -= 1;

        result
    }

    /// Consumes the next token, which must be exactly `expected`.
    ///
    /// # Errors
    /// `ParseError::UnexpectedEnd` if no tokens remain,
    /// `ParseError::Expected` if a different token is next.
    pub fn expect(&mut self, expected: &str) -> ParseResult<Token> {
        let token = self.expect_any(expected)?;
        if token.text == expected {
            Ok(token)
        } else {
            Err(ParseError::Expected { expected: expected.to_string(),
                                       found:    token.text,
                                       location: token.location, })
        }
    }

    /// Consumes the next token, whatever it is. `description` names what was
    /// wanted, for the error when the stream is empty.
    ///
    /// # Errors
    /// `ParseError::UnexpectedEnd` if no tokens remain.
    pub fn expect_any(&mut self, description: &str) -> ParseResult<Token> {
        self.next_token()
            .ok_or_else(|| ParseError::UnexpectedEnd { expected: description.to_string(),
                                                       location: self.last.clone(), })
    }
}

/// Returns `true` for the tokens that close a body or an array literal.
#[must_use]
pub fn is_terminator(text: &str) -> bool {
    text == BLOCK_CLOSE || text == crate::interpreter::value::literal::ARRAY_CLOSE
}

/// Parses a whole program into its top-level block.
///
/// # Errors
/// Returns the first `ParseError` met. A `}` or `]` that closes nothing is
/// reported as `ParseError::UnmatchedTerminator`.
///
/// # Example
/// ```
/// use std::rc::Rc;
///
/// use stacko::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("Yes if { 1 printLine } else { 2 printLine }", &Rc::from("main.stko"));
/// let program = parse_program(tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse_program(tokens: Vec<Token>) -> ParseResult<Block> {
    let mut stream = TokenStream::new(tokens);
    let program = parse_block(&mut stream)?;

    if let Some(stray) = stream.next_token() {
        return Err(ParseError::UnmatchedTerminator { token:    stray.text,
                                                     location: stray.location, });
    }

    tracing::debug!(statements = program.len(), "parsed program");
    Ok(program)
}
