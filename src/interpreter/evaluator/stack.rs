use std::rc::Rc;

use crate::{
    ast::Location,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// The operand stack shared by all code in a program.
///
/// Every pop is checked: an empty stack is a `StackUnderflow`, and the typed
/// pops reject values of any other type with `UnexpectedType`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OperandStack {
    values: Vec<Value>,
}

impl OperandStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the stack holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pushes a value.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    /// Fails unless at least `required` values are on the stack.
    ///
    /// # Errors
    /// `RuntimeError::StackUnderflow` naming both counts.
    pub fn require(&self, required: usize, location: &Location) -> EvalResult<()> {
        if self.values.len() < required {
            return Err(RuntimeError::StackUnderflow { required,
                                                      found: self.values.len(),
                                                      location: location.clone() });
        }
        Ok(())
    }

    /// The top value, without removing it.
    ///
    /// # Errors
    /// `RuntimeError::StackUnderflow` if the stack is empty.
    pub fn peek(&self, location: &Location) -> EvalResult<&Value> {
        self.values.last().ok_or_else(|| empty_stack(location))
    }

    /// Removes and returns the top value.
    ///
    /// # Errors
    /// `RuntimeError::StackUnderflow` if the stack is empty.
    pub fn pop(&mut self, location: &Location) -> EvalResult<Value> {
        self.values.pop().ok_or_else(|| empty_stack(location))
    }

    /// Pops the top two values, returning `(deeper, top)`.
    ///
    /// # Errors
    /// `RuntimeError::StackUnderflow` if fewer than two values are present.
    pub fn pop_pair(&mut self, location: &Location) -> EvalResult<(Value, Value)> {
        self.require(2, location)?;
        let top = self.pop(location)?;
        let deeper = self.pop(location)?;
        Ok((deeper, top))
    }

    /// Pops a value that must be a boolean.
    ///
    /// # Errors
    /// `StackUnderflow` or `UnexpectedType`.
    pub fn pop_bool(&mut self, location: &Location) -> EvalResult<bool> {
        match self.pop(location)? {
            Value::Bool(b) => Ok(b),
            other => Err(unexpected("Boolean", &other, location)),
        }
    }

    /// Pops a value that must be an integer.
    ///
    /// # Errors
    /// `StackUnderflow` or `UnexpectedType`.
    pub fn pop_integer(&mut self, location: &Location) -> EvalResult<i64> {
        match self.pop(location)? {
            Value::Integer(n) => Ok(n),
            other => Err(unexpected("Integer", &other, location)),
        }
    }

    /// Pops a value that must be a real.
    ///
    /// # Errors
    /// `StackUnderflow` or `UnexpectedType`.
    pub fn pop_real(&mut self, location: &Location) -> EvalResult<f64> {
        match self.pop(location)? {
            Value::Real(r) => Ok(r),
            other => Err(unexpected("Real", &other, location)),
        }
    }

    /// Pops a value that must be a string.
    ///
    /// # Errors
    /// `StackUnderflow` or `UnexpectedType`.
    pub fn pop_string(&mut self, location: &Location) -> EvalResult<String> {
        match self.pop(location)? {
            Value::String(s) => Ok(s),
            other => Err(unexpected("String", &other, location)),
        }
    }

    /// Pops a value that must be an array.
    ///
    /// # Errors
    /// `StackUnderflow` or `UnexpectedType`.
    pub fn pop_array(&mut self, location: &Location) -> EvalResult<Rc<Vec<Value>>> {
        match self.pop(location)? {
            Value::Array(items) => Ok(items),
            other => Err(unexpected("Array", &other, location)),
        }
    }
}

fn unexpected(expected: &'static str, found: &Value, location: &Location) -> RuntimeError {
    RuntimeError::UnexpectedType { expected,
                                   found: found.type_name(),
                                   location: location.clone() }
}

fn empty_stack(location: &Location) -> RuntimeError {
    RuntimeError::StackUnderflow { required: 1,
                                   found:    0,
                                   location: location.clone(), }
}
