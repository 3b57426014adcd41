use std::{
    io::{BufRead, Write},
    ops::ControlFlow,
    rc::Rc,
};

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    ast::{Block, Location, Statement},
    config::Settings,
    error::RuntimeError,
    interpreter::{
        device::{HeadlessDevice, WindowDevice, WindowHandle},
        evaluator::stack::OperandStack,
        namespace::{Binding, Namespace},
    },
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Outcome of running a statement or block: keep going, or stop the whole
/// program with an exit code (the `exit` opcode).
pub type Flow = ControlFlow<i32>;

/// Exit code of a program that runs to its end.
pub const EXIT_SUCCESS: i32 = 0;

/// Stores the runtime evaluation context.
///
/// This struct holds the whole interpreter state: the operand stack, the
/// global namespace, the standard streams, the window device and the handle
/// of the open window.
///
/// ## Usage
///
/// A `Context` is created once per program. Function calls re-enter
/// [`Context::eval_block`] on the same context, so function bodies share the
/// caller's stack and namespace.
pub struct Context<'io, D: WindowDevice = HeadlessDevice> {
    /// The operand stack.
    pub stack:            OperandStack,
    /// Functions, constants and variables.
    pub namespace:        Namespace,
    pub(super) output:    &'io mut dyn Write,
    pub(super) input:     &'io mut dyn BufRead,
    pub(super) device:    D,
    pub(super) window:    Option<WindowHandle>,
    pub(super) rng:       StdRng,
    depth:                usize,
    max_call_depth:       usize,
}

impl<'io, D: WindowDevice> Context<'io, D> {
    /// Creates a context with an empty stack and namespace.
    ///
    /// # Parameters
    /// - `output`: Receives everything `print` and `printLine` write.
    /// - `input`: Source of `readLine`.
    /// - `device`: Window device for the window opcodes.
    /// - `settings`: Call depth limit and random seed.
    pub fn new(output: &'io mut dyn Write,
               input: &'io mut dyn BufRead,
               device: D,
               settings: &Settings)
               -> Self {
        let rng = settings.seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

        Self { stack: OperandStack::new(),
               namespace: Namespace::new(),
               output,
               input,
               device,
               window: None,
               rng,
               depth: 0,
               max_call_depth: settings.max_call_depth }
    }

    /// Runs a program to completion.
    ///
    /// # Returns
    /// The exit code: the value given to `exit`, or `0` when the program runs
    /// off its end.
    ///
    /// # Errors
    /// The first `RuntimeError` raised. Output written before the error is
    /// flushed either way.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.len()))]
    pub fn run(&mut self, program: &Block) -> EvalResult<i32> {
        let result = self.eval_block(program);
        let flushed = self.output.flush();

        let code = match result? {
            ControlFlow::Continue(()) => EXIT_SUCCESS,
            ControlFlow::Break(code) => code,
        };
        if let Err(source) = flushed {
            return Err(RuntimeError::Io { source,
                                          location: end_of(program) });
        }

        tracing::debug!(code, stack = self.stack.len(), "program finished");
        Ok(code)
    }

    /// Runs every statement of a block in order.
    ///
    /// Stops early only when a statement asks to exit the program.
    pub fn eval_block(&mut self, block: &[Statement]) -> EvalResult<Flow> {
        for statement in block {
            if let ControlFlow::Break(code) = self.eval_statement(statement)? {
                return Ok(ControlFlow::Break(code));
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Evaluates a single statement.
    ///
    /// Literals push their value, opcodes run, words resolve against the
    /// namespace, control constructs pop their condition, and definitions bind
    /// names.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Literal { value, .. } => self.stack.push(value.clone()),
            Statement::Builtin { op, location } => return self.eval_builtin(*op, location),
            Statement::Word { name, location } => return self.eval_word(name, location),
            Statement::If { then_branch,
                            else_branch,
                            location, } => {
                if self.stack.pop_bool(location)? {
                    return self.eval_nested(then_branch);
                }
                if let Some(else_branch) = else_branch {
                    return self.eval_nested(else_branch);
                }
            },
            Statement::While { body, location } => loop {
                if !self.stack.pop_bool(location)? {
                    break;
                }
                if let ControlFlow::Break(code) = self.eval_nested(body)? {
                    return Ok(ControlFlow::Break(code));
                }
            },
            Statement::Function { name, body, location } => {
                self.namespace.define(name, Binding::Function(Rc::clone(body)), location)?;
            },
            Statement::Const { name, location } => {
                self.stack.require(1, location)?;
                if self.namespace.contains(name) {
                    return Err(RuntimeError::NameTaken { name:     name.clone(),
                                                         location: location.clone(), });
                }
                let value = self.stack.pop(location)?;
                self.namespace.define(name, Binding::Constant(value), location)?;
            },
            Statement::Var { name, location } => {
                self.namespace.define(name, Binding::Variable(None), location)?;
            },
            Statement::Set { name, location } => {
                self.stack.require(1, location)?;
                if !self.namespace.is_variable(name) {
                    return Err(RuntimeError::UndeclaredVariable { name:     name.clone(),
                                                                  location: location.clone(), });
                }
                let value = self.stack.pop(location)?;
                self.namespace.assign(name, value, location)?;
            },
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Resolves a word that is neither a literal nor an opcode.
    ///
    /// Functions run, constants push their value, variables push their
    /// current value.
    fn eval_word(&mut self, name: &str, location: &Location) -> EvalResult<Flow> {
        let body = match self.namespace.get(name) {
            Some(Binding::Function(body)) => Rc::clone(body),
            Some(Binding::Constant(value) | Binding::Variable(Some(value))) => {
                let value = value.clone();
                self.stack.push(value);
                return Ok(ControlFlow::Continue(()));
            },
            Some(Binding::Variable(None)) => {
                return Err(RuntimeError::UnsetVariable { name:     name.to_string(),
                                                         location: location.clone(), });
            },
            None => {
                return Err(RuntimeError::UnknownToken { name:     name.to_string(),
                                                        location: location.clone(), });
            },
        };

        self.call_function(name, &body, location)
    }

    /// Runs a function body on the shared stack, enforcing the call depth
    /// limit.
    fn call_function(&mut self, name: &str, body: &Block, location: &Location) -> EvalResult<Flow> {
        if self.depth >= self.max_call_depth {
            return Err(RuntimeError::RecursionLimit { limit:    self.max_call_depth,
                                                      location: location.clone(), });
        }

        tracing::trace!(name, depth = self.depth, "calling function");
        self.depth += 1;
        let result = self.eval_nested(body);
        self.depth -= 1;

        result
    }

    /// Evaluates a nested body, growing the native stack when needed.
    fn eval_nested(&mut self, block: &[Statement]) -> EvalResult<Flow> {
        ensure_sufficient_stack(|| self.eval_block(block))
    }
}

/// Location of a program's last statement, used for failures after
/// evaluation ended.
fn end_of(program: &Block) -> Location {
    program.last()
           .map_or_else(|| Location::new(&Rc::from("<program>"), 0), |s| s.location().clone())
}
