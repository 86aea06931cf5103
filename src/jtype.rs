use std::fmt;

// ----------- Width -----------

/// Declared bit width of a vector-valued expression.
///
/// A width is only usable for propagation when it is statically known; a
/// vector whose width depends on runtime data carries `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    Known(u32),
    Unknown,
}

impl Width {
    /// Width of a two-operand arithmetic/bitwise result: the max of the two
    /// widths when both are statically known and positive, otherwise left
    /// unresolved. A known width of zero does not participate.
    pub fn max_known(self, other: Width) -> Width {
        match (self, other) {
            (Width::Known(a), Width::Known(b)) if a > 0 && b > 0 => Width::Known(a.max(b)),
            _ => Width::Unknown,
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Width::Known(w) => write!(f, "{}", w),
            Width::Unknown => write!(f, "?"),
        }
    }
}

// ----------- Target types -----------

/// Result type of a lowered (target-language) expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JType {
    /// Native two-state boolean.
    Boolean,
    /// Native fixed-width integer.
    Int,
    /// Boxed arbitrary-precision integer; object-valued, may be null.
    WideInt,
    /// Single 4-state bit (0/1/X/Z).
    Bit,
    /// Multi-bit 4-state vector with a possibly dynamic width.
    BitVec { width: Width },
    /// Target string type.
    Str,
    /// Named object/reference type.
    Object(String),
}

impl JType {
    pub fn bit_vec(width: u32) -> JType {
        JType::BitVec {
            width: Width::Known(width),
        }
    }

    pub fn object(name: impl Into<String>) -> JType {
        JType::Object(name.into())
    }

    /// Primitive types are compared by identity in generated code; everything
    /// else is compared equals-style.
    pub fn is_primitive(&self) -> bool {
        matches!(self, JType::Boolean | JType::Int)
    }

    /// Whether a value of this static type could be null in generated code.
    pub fn is_nullable(&self) -> bool {
        !self.is_primitive()
    }

    /// Declared width, for vector-valued types.
    pub fn width(&self) -> Width {
        match self {
            JType::BitVec { width } => *width,
            _ => Width::Unknown,
        }
    }
}

impl fmt::Display for JType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JType::Boolean => write!(f, "boolean"),
            JType::Int => write!(f, "int"),
            JType::WideInt => write!(f, "WideInt"),
            JType::Bit => write!(f, "Bit"),
            JType::BitVec { width } => write!(f, "BitVec<{}>", width),
            JType::Str => write!(f, "String"),
            JType::Object(name) => write!(f, "{}", name),
        }
    }
}
