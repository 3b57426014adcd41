use std::{fmt, rc::Rc};

use crate::interpreter::value::core::Value;

/// A position in the assembled program: the file a token came from and its
/// 1-based line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Path of the source file, as it was named on the command line or in a
    /// `file` directive.
    pub file: Rc<str>,
    /// Line number in that file, starting at 1.
    pub line: usize,
}

impl Location {
    /// Creates a location in `file` at `line`.
    #[must_use]
    pub fn new(file: &Rc<str>, line: usize) -> Self {
        Self { file: Rc::clone(file),
               line }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// The built-in opcodes of the language.
///
/// Built-ins are recognized by the parser, so user definitions can never
/// shadow them: a function named `print` can be defined but not called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `toNum`
    ToNum,
    /// `toString`
    ToString,
    /// `toBool`
    ToBool,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `=`
    Equal,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `not`
    Not,
    /// `dup`
    Dup,
    /// `pop`
    Pop,
    /// `printLine`
    PrintLine,
    /// `print`
    Print,
    /// `readLine`
    ReadLine,
    /// `exit`
    Exit,
    /// `waitMore`
    WaitMore,
    /// `assert`
    Assert,
    /// `assertEqual`
    AssertEqual,
    /// `assertNotEqual`
    AssertNotEqual,
    /// `random`
    Random,
    /// `getElement`
    GetElement,
    /// `createWindow`
    CreateWindow,
    /// `closeWindow`
    CloseWindow,
    /// `windowRunning`
    WindowRunning,
    /// `setWindowColor`
    SetWindowColor,
    /// `windowUpdate`
    WindowUpdate,
}

impl Builtin {
    /// Every opcode, in declaration order.
    pub const ALL: [Self; 31] = [Self::ToNum,
                                 Self::ToString,
                                 Self::ToBool,
                                 Self::Add,
                                 Self::Subtract,
                                 Self::Multiply,
                                 Self::Divide,
                                 Self::Modulo,
                                 Self::Equal,
                                 Self::Greater,
                                 Self::Less,
                                 Self::GreaterEqual,
                                 Self::LessEqual,
                                 Self::Not,
                                 Self::Dup,
                                 Self::Pop,
                                 Self::PrintLine,
                                 Self::Print,
                                 Self::ReadLine,
                                 Self::Exit,
                                 Self::WaitMore,
                                 Self::Assert,
                                 Self::AssertEqual,
                                 Self::AssertNotEqual,
                                 Self::Random,
                                 Self::GetElement,
                                 Self::CreateWindow,
                                 Self::CloseWindow,
                                 Self::WindowRunning,
                                 Self::SetWindowColor,
                                 Self::WindowUpdate];

    /// Looks up the opcode spelled by `word`.
    ///
    /// # Example
    /// ```
    /// use stacko::ast::Builtin;
    ///
    /// assert_eq!(Builtin::from_word("dup"), Some(Builtin::Dup));
    /// assert_eq!(Builtin::from_word("square"), None);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.as_str() == word)
    }

    /// The source spelling of the opcode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToNum => "toNum",
            Self::ToString => "toString",
            Self::ToBool => "toBool",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Equal => "=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::Not => "not",
            Self::Dup => "dup",
            Self::Pop => "pop",
            Self::PrintLine => "printLine",
            Self::Print => "print",
            Self::ReadLine => "readLine",
            Self::Exit => "exit",
            Self::WaitMore => "waitMore",
            Self::Assert => "assert",
            Self::AssertEqual => "assertEqual",
            Self::AssertNotEqual => "assertNotEqual",
            Self::Random => "random",
            Self::GetElement => "getElement",
            Self::CreateWindow => "createWindow",
            Self::CloseWindow => "closeWindow",
            Self::WindowRunning => "windowRunning",
            Self::SetWindowColor => "setWindowColor",
            Self::WindowUpdate => "windowUpdate",
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered sequence of statements: the top-level program, a function body,
/// a loop body or one arm of an `if`.
pub type Block = Vec<Statement>;

/// One parsed instruction.
///
/// Every variant records where it came from, so evaluation errors can point
/// back at the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A string, number, boolean or array literal. Array literals are fully
    /// built at parse time.
    Literal {
        /// The value pushed when the statement runs.
        value:    Value,
        /// Source location of the literal.
        location: Location,
    },
    /// A built-in opcode.
    Builtin {
        /// The opcode.
        op:       Builtin,
        /// Source location of the opcode.
        location: Location,
    },
    /// Any other word: resolved against the global namespace when executed.
    Word {
        /// The word as written.
        name:     String,
        /// Source location of the word.
        location: Location,
    },
    /// `if { ... } else { ... }`
    If {
        /// Runs when the popped condition is `Yes`.
        then_branch: Block,
        /// Runs when the popped condition is `No`, if present.
        else_branch: Option<Block>,
        /// Source location of the `if` keyword.
        location:    Location,
    },
    /// `while { ... }`
    While {
        /// Runs once per `Yes` popped from the stack.
        body:     Block,
        /// Source location of the `while` keyword.
        location: Location,
    },
    /// `fnn name { ... }`
    Function {
        /// Name bound in the global namespace.
        name:     String,
        /// Shared with the namespace once the definition runs.
        body:     Rc<Block>,
        /// Source location of the `fnn` keyword.
        location: Location,
    },
    /// `const name`
    Const {
        /// Name of the constant.
        name:     String,
        /// Source location of the `const` keyword.
        location: Location,
    },
    /// `var name`
    Var {
        /// Name of the variable.
        name:     String,
        /// Source location of the `var` keyword.
        location: Location,
    },
    /// `set name`
    Set {
        /// Name of the variable to overwrite.
        name:     String,
        /// Source location of the `set` keyword.
        location: Location,
    },
}

impl Statement {
    /// Source location of the statement's first token.
    #[must_use]
    pub const fn location(&self) -> &Location {
        match self {
            Self::Literal { location, .. }
            | Self::Builtin { location, .. }
            | Self::Word { location, .. }
            | Self::If { location, .. }
            | Self::While { location, .. }
            | Self::Function { location, .. }
            | Self::Const { location, .. }
            | Self::Var { location, .. }
            | Self::Set { location, .. } => location,
        }
    }
}
