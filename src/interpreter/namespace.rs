use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{Block, Location},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// What a global name is bound to.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    /// A function body, run when the name is used.
    Function(Rc<Block>),
    /// A constant, bound once by `const`.
    Constant(Value),
    /// A variable declared by `var`; `None` until the first `set`.
    Variable(Option<Value>),
}

impl Binding {
    /// Name of the binding's category, for diagnostics and logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Function(_) => "function",
            Self::Constant(_) => "constant",
            Self::Variable(_) => "variable",
        }
    }
}

/// The global namespace: every function, constant and variable of a program.
///
/// Names live in one map, so a name can only ever belong to one category.
/// Bindings are created while the program runs and are never removed.
#[derive(Debug, Default, Clone)]
pub struct Namespace {
    bindings: HashMap<String, Binding>,
}

impl Namespace {
    /// Creates an empty namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Returns `true` if the name is bound in any category.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Binds a new name.
    ///
    /// # Errors
    /// `RuntimeError::NameTaken` if the name is already bound, whatever its
    /// category.
    pub fn define(&mut self, name: &str, binding: Binding, location: &Location) -> EvalResult<()> {
        if self.contains(name) {
            return Err(RuntimeError::NameTaken { name:     name.to_string(),
                                                 location: location.clone(), });
        }

        tracing::debug!(name, kind = binding.kind(), %location, "defined name");
        self.bindings.insert(name.to_string(), binding);
        Ok(())
    }

    /// Overwrites the value of a declared variable.
    ///
    /// # Errors
    /// `RuntimeError::UndeclaredVariable` if the name is unbound or bound to
    /// a function or constant.
    pub fn assign(&mut self, name: &str, value: Value, location: &Location) -> EvalResult<()> {
        match self.bindings.get_mut(name) {
            Some(Binding::Variable(slot)) => {
                *slot = Some(value);
                Ok(())
            },
            _ => Err(RuntimeError::UndeclaredVariable { name:     name.to_string(),
                                                        location: location.clone(), }),
        }
    }

    /// Returns `true` if the name is a declared variable.
    #[must_use]
    pub fn is_variable(&self, name: &str) -> bool {
        matches!(self.bindings.get(name), Some(Binding::Variable(_)))
    }
}
