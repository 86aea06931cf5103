//! Lowering rules for boxed arbitrary-precision integer operands.
//!
//! The boxed integer is object-valued and nullable, so no native operator
//! can express its null-propagation semantics; every operator, including
//! equality and relational, delegates to a runtime static helper keyed by
//! the operator name.

use crate::jexpr::JExpr;
use crate::jtype::JType;
use crate::op::{ArithBinOp, ArithUnOp, EqOp, RelOp, ShiftOp};
use crate::operand::Operand;
use crate::runtime;

fn helper(name: &'static str, args: Vec<JExpr>, ty: JType) -> Operand {
    Operand::new(JExpr::static_call(runtime::WIDE_INT_OP, name, args), ty)
}

pub(super) fn arith_bin(op: ArithBinOp, lhs: &Operand, rhs: &Operand) -> Operand {
    helper(
        op.helper_name(),
        vec![lhs.expr.clone(), rhs.expr.clone()],
        JType::WideInt,
    )
}

pub(super) fn arith_un(op: ArithUnOp, arg: &Operand) -> Operand {
    helper(op.helper_name(), vec![arg.expr.clone()], JType::WideInt)
}

pub(super) fn shift(op: ShiftOp, lhs: &Operand, rhs: &Operand) -> Operand {
    helper(
        op.helper_name(),
        vec![lhs.expr.clone(), rhs.expr.clone()],
        JType::WideInt,
    )
}

pub(super) fn eq(op: EqOp, lhs: &Operand, rhs: &Operand) -> Operand {
    helper(
        op.helper_name(),
        vec![lhs.expr.clone(), rhs.expr.clone()],
        JType::Boolean,
    )
}

pub(super) fn rel(op: RelOp, lhs: &Operand, rhs: &Operand) -> Operand {
    helper(
        op.helper_name(),
        vec![lhs.expr.clone(), rhs.expr.clone()],
        JType::Boolean,
    )
}
