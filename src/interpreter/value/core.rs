use std::{fmt, rc::Rc};

/// Represents a runtime value in the interpreter.
///
/// Every item on the operand stack, every constant and every variable holds a
/// `Value`. Integer and real numbers are distinct variants: no operator
/// promotes one into the other.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A UTF-8 string, produced by quoted literals, `toString` and `readLine`.
    String(String),
    /// A 64-bit signed integer, produced by numeric literals without a `.`.
    Integer(i64),
    /// A double precision real, produced by numeric literals with a `.` and by
    /// `toNum`.
    Real(f64),
    /// A boolean, written `Yes` or `No` in source code.
    Bool(bool),
    /// An immutable array of values. Arrays are shared, never mutated in
    /// place.
    Array(Rc<Vec<Self>>),
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl Value {
    /// Returns the user-facing name of the value's type, as used in
    /// diagnostics.
    ///
    /// # Example
    /// ```
    /// use stacko::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "Integer");
    /// assert_eq!(Value::Real(1.0).type_name(), "Real");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "String",
            Self::Integer(_) => "Integer",
            Self::Real(_) => "Real",
            Self::Bool(_) => "Boolean",
            Self::Array(_) => "Array",
        }
    }

    /// Returns `true` when both values have the same concrete variant.
    #[must_use]
    pub fn same_type(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Generic truthiness used by `toBool` for values other than the strings
    /// `"Yes"` and `"No"`.
    ///
    /// Zero numbers, empty strings and empty arrays are false; everything else
    /// is true.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::String(s) => !s.is_empty(),
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Bool(b) => *b,
            Self::Array(items) => !items.is_empty(),
        }
    }
}

/// Formats a real so that it never reads as an integer: whole numbers keep a
/// fractional digit (`3.0`) and very large or very small magnitudes switch to
/// exponent form (`1e16`, `1e-5`).
///
/// # Example
/// ```
/// use stacko::interpreter::value::core::format_real;
///
/// assert_eq!(format_real(3.0), "3.0");
/// assert_eq!(format_real(-0.25), "-0.25");
/// assert_eq!(format_real(1e16), "1e16");
/// assert_eq!(format_real(0.00001), "1e-5");
/// ```
#[must_use]
pub fn format_real(r: f64) -> String {
    if r.is_nan() {
        "nan".to_string()
    } else if r.is_infinite() {
        if r > 0.0 { "inf".to_string() } else { "-inf".to_string() }
    } else {
        format!("{r:?}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{}", format_real(*r)),
            Self::Bool(true) => write!(f, "Yes"),
            Self::Bool(false) => write!(f, "No"),
            Self::Array(items) => {
                write!(f, "[ ")?;
                for item in items.iter() {
                    write!(f, "{item} ")?;
                }
                write!(f, "]")
            },
        }
    }
}
