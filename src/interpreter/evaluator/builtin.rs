use std::{ops::ControlFlow, thread, time::Duration};

use rand::Rng;

use crate::{
    ast::{Builtin, Location},
    error::RuntimeError,
    interpreter::{
        device::WindowDevice,
        evaluator::{
            binary::{arithmetic, check_same_type, equals},
            cast::{to_bool, to_num, to_string},
            core::{Context, EvalResult, Flow},
        },
        value::core::Value,
    },
    util::num::{exit_code_checked, resolve_index},
};

impl<D: WindowDevice> Context<'_, D> {
    /// Runs a built-in opcode.
    ///
    /// Every opcode checks its stack depth and operand types before it changes
    /// anything it does not pop. Only `exit` breaks out of the program.
    pub fn eval_builtin(&mut self, op: Builtin, location: &Location) -> EvalResult<Flow> {
        match op {
            Builtin::ToNum => {
                let value = self.stack.pop(location)?;
                self.stack.push(to_num(&value, location)?);
            },
            Builtin::ToString => {
                let value = self.stack.pop(location)?;
                self.stack.push(to_string(&value));
            },
            Builtin::ToBool => {
                let value = to_bool(&self.stack.pop(location)?);
                self.stack.push(value);
                self.stack.push(value);
            },
            Builtin::Add
            | Builtin::Subtract
            | Builtin::Multiply
            | Builtin::Divide
            | Builtin::Modulo => {
                let (left, right) = self.stack.pop_pair(location)?;
                self.stack.push(arithmetic(op, left, right, location)?);
            },
            Builtin::Equal => {
                let (left, right) = self.stack.pop_pair(location)?;
                self.stack.push(equals(&left, &right, location)?);
            },
            Builtin::Greater => self.compare(location, |left, right| left > right)?,
            Builtin::Less => self.compare(location, |left, right| left < right)?,
            Builtin::GreaterEqual => self.compare(location, |left, right| left >= right)?,
            Builtin::LessEqual => self.compare(location, |left, right| left <= right)?,
            Builtin::Not => {
                let value = self.stack.pop_bool(location)?;
                self.stack.push(!value);
            },
            Builtin::Dup => {
                let top = self.stack.peek(location)?.clone();
                self.stack.push(top);
            },
            Builtin::Pop => {
                self.stack.pop(location)?;
            },
            Builtin::PrintLine => self.print(location, true)?,
            Builtin::Print => self.print(location, false)?,
            Builtin::ReadLine => self.read_line(location)?,
            Builtin::Exit => {
                let code = self.stack.pop_integer(location)?;
                let code = exit_code_checked(code).ok_or_else(|| {
                               RuntimeError::InvalidExitCode { code,
                                                               location: location.clone() }
                           })?;
                tracing::debug!(code, %location, "exit requested");
                return Ok(ControlFlow::Break(code));
            },
            Builtin::WaitMore => {
                let seconds = self.stack.pop_real(location)?;
                let duration = Duration::try_from_secs_f64(seconds).map_err(|_| {
                                   RuntimeError::InvalidDuration { seconds,
                                                                   location: location.clone() }
                               })?;
                self.output.flush().map_err(|source| io_error(source, location))?;
                thread::sleep(duration);
            },
            Builtin::Assert => {
                if !self.stack.pop_bool(location)? {
                    return Err(assertion_failed(None, location));
                }
            },
            Builtin::AssertEqual | Builtin::AssertNotEqual => {
                let (left, right) = self.stack.pop_pair(location)?;
                check_same_type(&left, &right, location)?;
                let equal = left == right;
                if op == Builtin::AssertEqual && !equal {
                    return Err(assertion_failed(Some("Values were not equal."), location));
                }
                if op == Builtin::AssertNotEqual && equal {
                    return Err(assertion_failed(Some("Values were equal."), location));
                }
            },
            Builtin::Random => {
                let value = self.rng.gen_range(0..=i64::MAX);
                self.stack.push(value);
            },
            Builtin::GetElement => {
                self.stack.require(2, location)?;
                let index = self.stack.pop_integer(location)?;
                let items = self.stack.pop_array(location)?;
                let position = resolve_index(index, items.len()).ok_or_else(|| {
                                   RuntimeError::IndexOutOfBounds { index,
                                                                    len: items.len(),
                                                                    location: location.clone() }
                               })?;
                self.stack.push(items[position].clone());
            },
            Builtin::CreateWindow => self.create_window(location)?,
            Builtin::CloseWindow => self.close_window(location)?,
            Builtin::WindowRunning => self.window_running(location)?,
            Builtin::SetWindowColor => self.set_window_color(location)?,
            Builtin::WindowUpdate => self.window_update(location)?,
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Pops two reals and pushes whether `holds(deeper, top)`.
    ///
    /// Only reals are ordered; integers have to go through `toNum` first.
    fn compare(&mut self,
               location: &Location,
               holds: impl FnOnce(f64, f64) -> bool)
               -> EvalResult<()> {
        self.stack.require(2, location)?;
        let right = self.stack.pop_real(location)?;
        let left = self.stack.pop_real(location)?;
        self.stack.push(holds(left, right));

        Ok(())
    }

    /// Pops a value and writes it to the output.
    fn print(&mut self, location: &Location, newline: bool) -> EvalResult<()> {
        let value: Value = self.stack.pop(location)?;

        let written = if newline {
            writeln!(self.output, "{value}")
        } else {
            write!(self.output, "{value}").and_then(|()| self.output.flush())
        };

        written.map_err(|source| io_error(source, location))
    }

    /// Reads one line of input, without its terminator, and pushes it.
    fn read_line(&mut self, location: &Location) -> EvalResult<()> {
        self.output.flush().map_err(|source| io_error(source, location))?;

        let mut line = String::new();
        let read = self.input
                       .read_line(&mut line)
                       .map_err(|source| io_error(source, location))?;
        if read == 0 {
            return Err(RuntimeError::EndOfInput { location: location.clone() });
        }

        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        self.stack.push(trimmed.to_string());

        Ok(())
    }
}

fn io_error(source: std::io::Error, location: &Location) -> RuntimeError {
    RuntimeError::Io { source,
                       location: location.clone() }
}

fn assertion_failed(detail: Option<&'static str>, location: &Location) -> RuntimeError {
    RuntimeError::AssertionFailed { detail,
                                    location: location.clone() }
}
