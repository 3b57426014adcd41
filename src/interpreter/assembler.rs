use std::{
    collections::{HashMap, HashSet},
    fs,
    rc::Rc,
};

use crate::{
    error::LoadError,
    interpreter::lexer::{ScannedFile, Token, scan},
    util::stack::ensure_sufficient_stack,
};

/// Result type used while loading program files.
pub type LoadResult<T> = Result<T, LoadError>;

/// File extensions accepted for programs and their dependencies.
pub const EXTENSIONS: [&str; 2] = [".stko", ".stacko"];

/// Fails unless `path` ends in one of the accepted [`EXTENSIONS`].
///
/// # Example
/// ```
/// use stacko::interpreter::assembler::check_extension;
///
/// assert!(check_extension("lib/math.stko").is_ok());
/// assert!(check_extension("game.stacko").is_ok());
/// assert!(check_extension("notes.txt").is_err());
/// ```
pub fn check_extension(path: &str) -> LoadResult<()> {
    if EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
        Ok(())
    } else {
        Err(LoadError::BadExtension { path: path.to_string() })
    }
}

/// Resolves `file` directives into one token stream.
///
/// Each file is read and scanned once, even when several files depend on it.
/// Paths are compared as written, so `lib.stko` and `./lib.stko` are two
/// different files to the assembler.
#[derive(Debug, Default)]
pub struct Assembler {
    scanned:    HashMap<String, ScannedFile>,
    discovered: Vec<String>,
    seen:       HashSet<String>,
}

impl Assembler {
    /// Creates an assembler that has loaded nothing yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `entry` and everything it depends on, returning the tokens of
    /// the whole program.
    ///
    /// Dependencies are discovered depth-first in the order their directives
    /// appear and then emitted in reverse discovery order, so a dependency's
    /// own dependencies come before it and every dependency comes before the
    /// entry file.
    ///
    /// # Errors
    /// `BadExtension`, `Unreadable` or `MissingImportPath` for the first file
    /// that cannot be loaded.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn assemble(&mut self, entry: &str) -> LoadResult<Vec<Token>> {
        self.seen.insert(entry.to_string());
        self.discover(entry)?;
        tracing::debug!(dependencies = ?self.discovered, "discovered dependencies");

        let order: Vec<String> = self.discovered.iter().rev().cloned().collect();
        let mut tokens = Vec::new();
        for path in order.iter().map(String::as_str).chain(std::iter::once(entry)) {
            let file = self.load(path)?;
            tokens.extend(file.tokens.iter().cloned());
        }

        Ok(tokens)
    }

    /// Walks the directives of `path`, recording each dependency the first
    /// time it is seen and descending into it right away.
    fn discover(&mut self, path: &str) -> LoadResult<()> {
        let directives = self.load(path)?.directives.clone();

        for directive in directives {
            let dependency = directive.path
                                      .ok_or(LoadError::MissingImportPath { location: directive.location })?;
            if !self.seen.insert(dependency.clone()) {
                continue;
            }
            self.discovered.push(dependency.clone());
            ensure_sufficient_stack(|| self.discover(&dependency))?;
        }

        Ok(())
    }

    /// Reads and scans `path`, or returns the cached scan.
    fn load(&mut self, path: &str) -> LoadResult<&ScannedFile> {
        if !self.scanned.contains_key(path) {
            check_extension(path)?;
            let source = fs::read_to_string(path).map_err(|source| {
                                                     LoadError::Unreadable { path: path.to_string(),
                                                                             source }
                                                 })?;
            let scanned = scan(&source, &Rc::from(path));
            tracing::debug!(path,
                            tokens = scanned.tokens.len(),
                            directives = scanned.directives.len(),
                            "scanned file");
            self.scanned.insert(path.to_string(), scanned);
        }

        self.scanned
            .get(path)
            .ok_or_else(|| LoadError::Unreadable { path:   path.to_string(),
                                                   source: std::io::ErrorKind::NotFound.into(), })
    }
}

/// Loads `entry` and its dependencies with a fresh [`Assembler`].
///
/// # Errors
/// See [`Assembler::assemble`].
pub fn assemble(entry: &str) -> LoadResult<Vec<Token>> {
    Assembler::new().assemble(entry)
}
