use crate::{ast::Location, error::ParseError, interpreter::value::core::Value};

/// Opens an array literal.
pub const ARRAY_OPEN: &str = "[";
/// Closes an array literal.
pub const ARRAY_CLOSE: &str = "]";

/// Returns `true` if the token text is a quoted string (`"..."`).
#[must_use]
pub fn is_string_literal(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('"') && text.ends_with('"')
}

/// Returns `true` if the token text is a numeric literal.
///
/// One leading `+` or `-` is ignored, then at most one `.` may appear among
/// ASCII digits. At least one digit is required.
///
/// # Example
/// ```
/// use stacko::interpreter::value::literal::is_numeric_literal;
///
/// assert!(is_numeric_literal("42"));
/// assert!(is_numeric_literal("-3.5"));
/// assert!(is_numeric_literal(".5"));
/// assert!(!is_numeric_literal("1.2.3"));
/// assert!(!is_numeric_literal("-"));
/// ```
#[must_use]
pub fn is_numeric_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let mut dots = 0;
    let mut digits = 0;

    for c in unsigned.chars() {
        match c {
            '.' => dots += 1,
            '0'..='9' => digits += 1,
            _ => return false,
        }
    }

    dots <= 1 && digits > 0
}

/// Strips the quotes of a string literal and expands its escapes.
///
/// Supported escapes are `\e` (ESC), `\n`, `\r` and `\t`. Any other backslash
/// is kept verbatim.
///
/// # Example
/// ```
/// use stacko::interpreter::value::literal::decode_string;
///
/// assert_eq!(decode_string("\"a\\tb\""), "a\tb");
/// assert_eq!(decode_string("\"\\e[31m\""), "\u{1b}[31m");
/// ```
#[must_use]
pub fn decode_string(text: &str) -> String {
    let inner = &text[1..text.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let expanded = match chars.peek() {
            Some('e') => '\u{1b}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            _ => {
                out.push('\\');
                continue;
            },
        };
        chars.next();
        out.push(expanded);
    }

    out
}

/// Parses a scalar literal (string, number or boolean).
///
/// Returns `None` when the text is not a scalar literal at all. Array literals
/// are assembled by the parser from their elements and are not handled here.
///
/// # Errors
/// Returns `ParseError::LiteralOutOfRange` if a numeric literal does not fit
/// its type.
pub fn parse_scalar(text: &str, location: &Location) -> Option<Result<Value, ParseError>> {
    if is_string_literal(text) {
        return Some(Ok(Value::String(decode_string(text))));
    }
    if is_numeric_literal(text) {
        let out_of_range = || ParseError::LiteralOutOfRange { token:    text.to_string(),
                                                              location: location.clone(), };
        let value = if text.contains('.') {
            text.parse::<f64>().map(Value::Real).map_err(|_| out_of_range())
        } else {
            text.parse::<i64>().map(Value::Integer).map_err(|_| out_of_range())
        };
        return Some(value);
    }
    match text {
        "Yes" => Some(Ok(Value::Bool(true))),
        "No" => Some(Ok(Value::Bool(false))),
        _ => None,
    }
}
