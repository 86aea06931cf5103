//! Lowering rules for multi-bit 4-state vector operands.
//!
//! Arithmetic, bitwise, and shift operators are member operations on the
//! vector type. Result widths: two-operand arithmetic takes the max of the
//! operand widths when both are statically known and positive (otherwise
//! unresolved); one-operand forms keep their operand's width; shifts keep
//! the shifted operand's width, never the shift amount's. Equality and
//! relational operators delegate to 4-state-aware runtime helpers, except
//! the exact and wildcard forms, which are member methods on the vector.

use crate::jexpr::JExpr;
use crate::jtype::JType;
use crate::op::{ArithBinOp, ArithUnOp, EqOp, RelOp, ShiftOp};
use crate::operand::Operand;
use crate::runtime;

pub(super) fn arith_bin(op: ArithBinOp, lhs: &Operand, rhs: &Operand) -> Operand {
    let width = lhs.width().max_known(rhs.width());
    let expr = JExpr::method(lhs.expr.clone(), op.helper_name(), vec![rhs.expr.clone()]);
    Operand::new(expr, JType::BitVec { width })
}

pub(super) fn arith_un(op: ArithUnOp, arg: &Operand) -> Operand {
    let expr = JExpr::method(arg.expr.clone(), op.helper_name(), vec![]);
    Operand::new(
        expr,
        JType::BitVec {
            width: arg.width(),
        },
    )
}

pub(super) fn shift(op: ShiftOp, lhs: &Operand, rhs: &Operand) -> Operand {
    let expr = JExpr::method(lhs.expr.clone(), op.helper_name(), vec![rhs.expr.clone()]);
    Operand::new(
        expr,
        JType::BitVec {
            width: lhs.width(),
        },
    )
}

pub(super) fn eq(op: EqOp, lhs: &Operand, rhs: &Operand) -> Operand {
    let a = lhs.expr.clone();
    let b = rhs.expr.clone();
    match op {
        EqOp::Eq | EqOp::Ne => Operand::new(
            JExpr::static_call(runtime::BIT_VECTOR_OP, op.helper_name(), vec![a, b]),
            JType::Bit,
        ),
        // raw bit-pattern comparison, X/Z as literal values
        EqOp::ExactEq | EqOp::ExactNe => Operand::new(
            JExpr::method(a, op.member_name(), vec![b]),
            JType::Boolean,
        ),
        // right operand's X/Z bits act as wildcards
        EqOp::WildEq | EqOp::WildNe => {
            Operand::new(JExpr::method(a, op.member_name(), vec![b]), JType::Bit)
        }
    }
}

pub(super) fn rel(op: RelOp, lhs: &Operand, rhs: &Operand) -> Operand {
    let expr = JExpr::static_call(
        runtime::BIT_VECTOR_OP,
        op.helper_name(),
        vec![lhs.expr.clone(), rhs.expr.clone()],
    );
    Operand::new(expr, JType::Bit)
}
