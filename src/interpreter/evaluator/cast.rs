use crate::{
    ast::Location,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Converts a value to a real for `toNum`.
///
/// Integers and reals convert numerically, booleans become `1.0` or `0.0`,
/// and strings are parsed after trimming surrounding whitespace.
///
/// # Errors
/// `InvalidNumber` for strings that are not numbers, `UnexpectedType` for
/// arrays.
#[allow(clippy::cast_precision_loss)]
pub fn to_num(value: &Value, location: &Location) -> EvalResult<f64> {
    match value {
        Value::Integer(n) => Ok(*n as f64),
        Value::Real(r) => Ok(*r),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => {
            s.trim().parse().map_err(|_| RuntimeError::InvalidNumber { text:     s.clone(),
                                                                      location: location.clone(), })
        },
        Value::Array(_) => Err(RuntimeError::UnexpectedType { expected: "Real",
                                                              found:    value.type_name(),
                                                              location: location.clone(), }),
    }
}

/// Renders a value for `toString`: the same text `print` would write.
#[must_use]
pub fn to_string(value: &Value) -> String {
    value.to_string()
}

/// Converts a value to a boolean for `toBool`.
///
/// The strings `"Yes"` and `"No"` convert to their boolean; every other value
/// uses [`Value::is_truthy`].
#[must_use]
pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::String(s) if s == "Yes" => true,
        Value::String(s) if s == "No" => false,
        other => other.is_truthy(),
    }
}
