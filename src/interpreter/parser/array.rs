use crate::{
    ast::Location,
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, TokenStream, is_terminator},
        value::{
            core::Value,
            literal::{ARRAY_CLOSE, ARRAY_OPEN, parse_scalar},
        },
    },
};

/// Parses the elements of an array literal after its opening `[`.
///
/// Elements are scalar literals or nested array literals, separated by
/// whitespace only. The closing `]` is consumed.
///
/// Grammar: `array := "[" (scalar | array)* "]"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening bracket.
/// - `open`: Location of the opening bracket, for error reporting.
///
/// # Returns
/// The finished `Value::Array`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an element is not a literal,
/// - a `}` appears before the closing `]`,
/// - the input ends before the closing `]`,
/// - arrays nest deeper than [`MAX_NESTING_DEPTH`](crate::interpreter::parser::core::MAX_NESTING_DEPTH).
pub fn parse_array(tokens: &mut TokenStream, open: &Location) -> ParseResult<Value> {
    let mut elements = Vec::new();

    loop {
        let token = tokens.expect_any(ARRAY_CLOSE)?;

        match token.text.as_str() {
            ARRAY_CLOSE => break,
            ARRAY_OPEN => {
                let nested =
                    tokens.nested(&token.location, |tokens| parse_array(tokens, &token.location))?;
                elements.push(nested);
            },
            text if is_terminator(text) => {
                return Err(ParseError::Expected { expected: ARRAY_CLOSE.to_string(),
                                                  found:    token.text,
                                                  location: token.location, });
            },
            text => match parse_scalar(text, &token.location) {
                Some(value) => elements.push(value?),
                None => {
                    return Err(ParseError::NotALiteral { token:    token.text,
                                                         location: token.location, });
                },
            },
        }
    }

    tracing::trace!(%open, len = elements.len(), "parsed array literal");
    Ok(Value::from(elements))
}
