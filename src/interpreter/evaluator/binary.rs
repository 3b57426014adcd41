use std::rc::Rc;

use crate::{
    ast::{Builtin, Location},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Fails unless both operands have the same concrete type.
///
/// Integer and Real count as different types: there is no numeric promotion.
///
/// # Errors
/// `RuntimeError::TypeMismatch` naming both types.
pub fn check_same_type(left: &Value, right: &Value, location: &Location) -> EvalResult<()> {
    if left.same_type(right) {
        Ok(())
    } else {
        Err(RuntimeError::TypeMismatch { left:     left.type_name(),
                                         right:    right.type_name(),
                                         location: location.clone(), })
    }
}

/// Applies an arithmetic opcode (`+ - * / %`) to `left op right`, where
/// `left` was deeper on the stack.
///
/// - Integers use checked arithmetic; `/` on integers divides exactly and
///   yields a Real.
/// - `%` is floored: the result takes the sign of the divisor.
/// - `+` also concatenates two strings or two arrays.
///
/// # Errors
/// `TypeMismatch` for differing types, `UnsupportedOperation` for types the
/// operator does not handle, `DivisionByZero` and `Overflow`.
pub fn arithmetic(op: Builtin, left: Value, right: Value, location: &Location) -> EvalResult<Value> {
    check_same_type(&left, &right, location)?;

    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => integer_arithmetic(op, l, r, location),
        (Value::Real(l), Value::Real(r)) => real_arithmetic(op, l, r, location),
        (Value::String(mut l), Value::String(r)) if op == Builtin::Add => {
            l.push_str(&r);
            Ok(Value::String(l))
        },
        (Value::Array(l), Value::Array(r)) if op == Builtin::Add => {
            let mut joined = Rc::unwrap_or_clone(l);
            joined.extend(r.iter().cloned());
            Ok(Value::from(joined))
        },
        (other, _) => Err(RuntimeError::UnsupportedOperation { op:       op.as_str(),
                                                              operand:  other.type_name(),
                                                              location: location.clone(), }),
    }
}

#[allow(clippy::cast_precision_loss)]
fn integer_arithmetic(op: Builtin, l: i64, r: i64, location: &Location) -> EvalResult<Value> {
    let overflow = || RuntimeError::Overflow { location: location.clone() };
    let division_by_zero = || RuntimeError::DivisionByZero { location: location.clone() };

    let result = match op {
        Builtin::Add => l.checked_add(r).ok_or_else(overflow)?,
        Builtin::Subtract => l.checked_sub(r).ok_or_else(overflow)?,
        Builtin::Multiply => l.checked_mul(r).ok_or_else(overflow)?,
        Builtin::Divide => {
            if r == 0 {
                return Err(division_by_zero());
            }
            return Ok(Value::Real(l as f64 / r as f64));
        },
        Builtin::Modulo => {
            if r == 0 {
                return Err(division_by_zero());
            }
            // Only `i64::MIN % -1` wraps, and its remainder is 0.
            let rem = l.wrapping_rem(r);
            if rem != 0 && (rem < 0) != (r < 0) { rem + r } else { rem }
        },
        _ => return Err(not_arithmetic(op, "Integer", location)),
    };

    Ok(Value::Integer(result))
}

fn real_arithmetic(op: Builtin, l: f64, r: f64, location: &Location) -> EvalResult<Value> {
    let result = match op {
        Builtin::Add => l + r,
        Builtin::Subtract => l - r,
        Builtin::Multiply => l * r,
        Builtin::Divide | Builtin::Modulo if r == 0.0 => {
            return Err(RuntimeError::DivisionByZero { location: location.clone() });
        },
        Builtin::Divide => l / r,
        Builtin::Modulo => {
            let rem = l % r;
            if rem != 0.0 && (rem < 0.0) != (r < 0.0) { rem + r } else { rem }
        },
        _ => return Err(not_arithmetic(op, "Real", location)),
    };

    Ok(Value::Real(result))
}

fn not_arithmetic(op: Builtin, operand: &'static str, location: &Location) -> RuntimeError {
    RuntimeError::UnsupportedOperation { op: op.as_str(),
                                         operand,
                                         location: location.clone() }
}

/// Compares two values of the same type for equality.
///
/// # Errors
/// `RuntimeError::TypeMismatch` if the types differ.
pub fn equals(left: &Value, right: &Value, location: &Location) -> EvalResult<bool> {
    check_same_type(left, right, location)?;
    Ok(left == right)
}
