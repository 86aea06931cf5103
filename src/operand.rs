use crate::category::OperatorCategory;
use crate::jexpr::JExpr;
use crate::jtype::{JType, Width};

/// An already-lowered target expression paired with its result type.
///
/// Operands handed to the operation builders must already be side-effect
/// safe; the builders never introduce temporaries themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    pub expr: JExpr,
    pub ty: JType,
}

impl Operand {
    pub fn new(expr: JExpr, ty: JType) -> Operand {
        Operand { expr, ty }
    }

    /// Category derived from the result type; never stored separately.
    pub fn category(&self) -> Option<OperatorCategory> {
        OperatorCategory::of(&self.ty)
    }

    /// Declared width, for vector operands.
    pub fn width(&self) -> Width {
        self.ty.width()
    }
}
