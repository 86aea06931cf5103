//! Lowering rules for single 4-state bit operands (0/1/X/Z).
//!
//! One-bit arithmetic is self-inverse, so add and subtract both lower to
//! xor, and multiply coincides with conjunction. Negation and the positive
//! reductions collapse high-impedance to unknown (`ztox`). 4-state equality
//! needs a runtime helper because X/Z compare specially; only the exact
//! forms use the target's native equality on the bit values themselves.

use crate::jexpr::{JBinOp, JExpr};
use crate::jtype::JType;
use crate::op::{ArithBinOp, ArithUnOp, EqOp};
use crate::operand::Operand;
use crate::runtime;

pub(super) fn arith_bin(op: ArithBinOp, lhs: &Operand, rhs: &Operand) -> Operand {
    let a = lhs.expr.clone();
    let b = rhs.expr.clone();
    let expr = match op {
        ArithBinOp::Add | ArithBinOp::Sub | ArithBinOp::Xor => {
            JExpr::method(a, "xor", vec![b])
        }
        ArithBinOp::Mul | ArithBinOp::And => JExpr::method(a, "and", vec![b]),
        ArithBinOp::Or => JExpr::method(a, "or", vec![b]),
        ArithBinOp::Div | ArithBinOp::Mod => {
            JExpr::static_call(runtime::BIT_OP, op.helper_name(), vec![a, b])
        }
        ArithBinOp::AndNot => {
            JExpr::method(JExpr::method(a, "and", vec![b]), "not", vec![])
        }
        ArithBinOp::OrNot => JExpr::method(JExpr::method(a, "or", vec![b]), "not", vec![]),
        ArithBinOp::XorNot => {
            JExpr::method(JExpr::method(a, "xor", vec![b]), "not", vec![])
        }
    };
    Operand::new(expr, JType::Bit)
}

pub(super) fn arith_un(op: ArithUnOp, arg: &Operand) -> Operand {
    let a = arg.expr.clone();
    let expr = match op {
        ArithUnOp::Negate
        | ArithUnOp::ReductiveAnd
        | ArithUnOp::ReductiveOr
        | ArithUnOp::ReductiveXor => JExpr::method(a, runtime::ZTOX, vec![]),
        ArithUnOp::Not
        | ArithUnOp::ReductiveAndNot
        | ArithUnOp::ReductiveOrNot
        | ArithUnOp::ReductiveXorNot => JExpr::method(a, "not", vec![]),
        ArithUnOp::Reverse => a,
    };
    Operand::new(expr, JType::Bit)
}

pub(super) fn eq(op: EqOp, lhs: &Operand, rhs: &Operand) -> Operand {
    let a = lhs.expr.clone();
    let b = rhs.expr.clone();
    match op {
        EqOp::Eq | EqOp::Ne | EqOp::WildEq | EqOp::WildNe => Operand::new(
            JExpr::static_call(runtime::BIT_OP, op.helper_name(), vec![a, b]),
            JType::Bit,
        ),
        // bit-exact: X/Z compare as literal values
        EqOp::ExactEq => Operand::new(JExpr::binary(JBinOp::Eq, a, b), JType::Boolean),
        EqOp::ExactNe => Operand::new(JExpr::binary(JBinOp::Ne, a, b), JType::Boolean),
    }
}
