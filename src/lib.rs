//! # stacko
//!
//! stacko is an interpreter for Stacko, a small stack-based scripting
//! language. Programs push values onto one shared operand stack and run
//! opcodes, user functions and control constructs against it. A program can
//! pull in other files, print and read lines, make assertions and drive a
//! window.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{
    io::{self, BufRead, Write},
    rc::Rc,
};

use crate::{
    config::Settings,
    error::Error,
    interpreter::{
        assembler::assemble,
        device::{HeadlessDevice, WindowDevice},
        evaluator::core::Context,
        lexer::{Token, tokenize},
        parser::core::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` enum, the opcode table and the source
/// locations attached to every statement. The parser builds blocks of
/// statements and the evaluator walks them.
pub mod ast;
/// Run-time settings.
///
/// Knobs the command line exposes: the call depth limit, the headless
/// window's close request and the random seed.
pub mod config;
/// Provides unified error types for loading, parsing and evaluation.
///
/// This module defines all errors that can end a program. Each carries the
/// file and line it refers to, and the crate-level `Error` maps them to the
/// process exit code.
///
/// # Responsibilities
/// - Defines error enums for every phase (load, parse, runtime).
/// - Attaches locations and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together module assembly, lexing, parsing, evaluation and
/// the window device to provide a complete runtime for Stacko programs.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for loading, parsing and evaluating programs.
pub mod interpreter;
/// General utilities.
///
/// Index and exit code conversions, and stack growth for deep recursion.
pub mod util;

/// File name reported in diagnostics for programs given as text.
pub const SOURCE_NAME: &str = "<source>";

/// Runs a program given as text with default settings and a headless window
/// device.
///
/// `file` lines are not followed here; use [`run_file`] for programs with
/// dependencies.
///
/// # Returns
/// The program's exit code.
///
/// # Errors
/// Returns the parse or runtime error that stopped the program.
///
/// # Examples
/// ```
/// use stacko::run_source;
///
/// let mut output = Vec::new();
/// let code = run_source("5 3 + printLine", &mut output, &mut "".as_bytes()).unwrap();
///
/// assert_eq!(code, 0);
/// assert_eq!(output, b"8\n");
///
/// // An undefined word is an error.
/// assert!(run_source("foo printLine", &mut Vec::new(), &mut "".as_bytes()).is_err());
/// ```
pub fn run_source(source: &str, output: &mut dyn Write, input: &mut dyn BufRead) -> Result<i32, Error> {
    run_source_with(source, output, input, HeadlessDevice::new(), &Settings::default())
}

/// Runs a program given as text against the given window device and
/// settings.
///
/// Pass `&mut device` to inspect the device after the run.
///
/// # Errors
/// Returns the parse or runtime error that stopped the program.
pub fn run_source_with<D: WindowDevice>(source: &str,
                                        output: &mut dyn Write,
                                        input: &mut dyn BufRead,
                                        device: D,
                                        settings: &Settings)
                                        -> Result<i32, Error> {
    let tokens = tokenize(source, &Rc::from(SOURCE_NAME));
    execute(tokens, output, input, device, settings)
}

/// Loads the program at `path` with its dependencies and runs it on the
/// standard streams.
///
/// With `close_after_frames` set, the window opcodes drive a
/// [`HeadlessDevice`] that asks to close after that many frames. Otherwise
/// they drive the platform device: a desktop window when the `window` feature
/// is enabled, and a headless window that asks to close before its first
/// frame when it is not.
///
/// # Errors
/// Returns the load, parse or runtime error that stopped the program.
pub fn run_file(path: &str, settings: &Settings) -> Result<i32, Error> {
    let tokens = assemble(path)?;

    let stdout = io::stdout();
    let stdin = io::stdin();
    let (mut output, mut input) = (stdout.lock(), stdin.lock());

    match settings.close_after_frames {
        Some(frames) => execute(tokens,
                                &mut output,
                                &mut input,
                                HeadlessDevice::with_close_after(frames),
                                settings),
        None => execute(tokens, &mut output, &mut input, platform_device(), settings),
    }
}

#[cfg(feature = "window")]
fn platform_device() -> interpreter::device::NativeDevice {
    interpreter::device::NativeDevice::new()
}

#[cfg(not(feature = "window"))]
fn platform_device() -> HeadlessDevice {
    HeadlessDevice::with_close_after(0)
}

fn execute<D: WindowDevice>(tokens: Vec<Token>,
                            output: &mut dyn Write,
                            input: &mut dyn BufRead,
                            device: D,
                            settings: &Settings)
                            -> Result<i32, Error> {
    let program = parse_program(tokens)?;
    let mut context = Context::new(output, input, device, settings);

    Ok(context.run(&program)?)
}
