use std::fmt;

use crate::category::OpGroup;

// ----------- Arithmetic / bitwise -----------

/// Two-operand arithmetic and bitwise operators of the source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithBinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    And,
    Or,
    Xor,
    AndNot,
    OrNot,
    XorNot,
}

impl ArithBinOp {
    /// Stable name used when a category delegates to a runtime static helper
    /// keyed by operator name.
    pub fn helper_name(self) -> &'static str {
        match self {
            ArithBinOp::Add => "add",
            ArithBinOp::Sub => "sub",
            ArithBinOp::Mul => "mul",
            ArithBinOp::Div => "div",
            ArithBinOp::Mod => "mod",
            ArithBinOp::And => "and",
            ArithBinOp::Or => "or",
            ArithBinOp::Xor => "xor",
            ArithBinOp::AndNot => "andNot",
            ArithBinOp::OrNot => "orNot",
            ArithBinOp::XorNot => "xorNot",
        }
    }
}

/// One-operand arithmetic/bitwise operators, including the reductive family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithUnOp {
    Negate,
    Not,
    Reverse,
    ReductiveAnd,
    ReductiveOr,
    ReductiveXor,
    ReductiveAndNot,
    ReductiveOrNot,
    ReductiveXorNot,
}

impl ArithUnOp {
    pub fn helper_name(self) -> &'static str {
        match self {
            ArithUnOp::Negate => "negate",
            ArithUnOp::Not => "not",
            ArithUnOp::Reverse => "reverse",
            ArithUnOp::ReductiveAnd => "reductiveAnd",
            ArithUnOp::ReductiveOr => "reductiveOr",
            ArithUnOp::ReductiveXor => "reductiveXor",
            ArithUnOp::ReductiveAndNot => "reductiveAndNot",
            ArithUnOp::ReductiveOrNot => "reductiveOrNot",
            ArithUnOp::ReductiveXorNot => "reductiveXorNot",
        }
    }
}

// ----------- Shift -----------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftOp {
    Shl,
    Shr,
}

impl ShiftOp {
    pub fn helper_name(self) -> &'static str {
        match self {
            ShiftOp::Shl => "shiftLeft",
            ShiftOp::Shr => "shiftRight",
        }
    }
}

// ----------- Equality -----------

/// Equality operators. `Eq`/`Ne` follow 4-state comparison semantics where
/// the operand type has them; `ExactEq`/`ExactNe` compare raw bit patterns
/// (X/Z as literal values); `WildEq`/`WildNe` treat X/Z bits of the right
/// operand as don't-cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EqOp {
    Eq,
    Ne,
    ExactEq,
    ExactNe,
    WildEq,
    WildNe,
}

impl EqOp {
    pub fn helper_name(self) -> &'static str {
        match self {
            EqOp::Eq => "equal",
            EqOp::Ne => "notEqual",
            EqOp::ExactEq => "exactEqual",
            EqOp::ExactNe => "exactNotEqual",
            EqOp::WildEq => "wildEqual",
            EqOp::WildNe => "wildNotEqual",
        }
    }

    /// Name used when the comparison lowers to a member method on the
    /// operand type instead of a static helper.
    pub fn member_name(self) -> &'static str {
        match self {
            EqOp::Eq => "equals",
            EqOp::Ne => "notEquals",
            EqOp::ExactEq => "exactEquals",
            EqOp::ExactNe => "exactNotEquals",
            EqOp::WildEq => "wildEquals",
            EqOp::WildNe => "wildNotEquals",
        }
    }
}

// ----------- Relational -----------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelOp {
    Lt,
    Le,
    Gt,
    Ge,
}

impl RelOp {
    pub fn helper_name(self) -> &'static str {
        match self {
            RelOp::Lt => "lt",
            RelOp::Le => "le",
            RelOp::Gt => "gt",
            RelOp::Ge => "ge",
        }
    }
}

// ----------- Grouped binary operator -----------

/// Any two-operand source operator, tagged with its capability group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Arith(ArithBinOp),
    Shift(ShiftOp),
    Eq(EqOp),
    Rel(RelOp),
}

impl BinOp {
    pub fn group(self) -> OpGroup {
        match self {
            BinOp::Arith(_) => OpGroup::Arithmetic,
            BinOp::Shift(_) => OpGroup::Shift,
            BinOp::Eq(_) => OpGroup::Equality,
            BinOp::Rel(_) => OpGroup::Relational,
        }
    }

    pub fn helper_name(self) -> &'static str {
        match self {
            BinOp::Arith(op) => op.helper_name(),
            BinOp::Shift(op) => op.helper_name(),
            BinOp::Eq(op) => op.helper_name(),
            BinOp::Rel(op) => op.helper_name(),
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.helper_name())
    }
}

impl fmt::Display for ArithUnOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.helper_name())
    }
}
