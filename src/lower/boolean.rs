//! Lowering rules for Boolean operands.
//!
//! A boolean carries exactly one bit of information, so the 1-bit arithmetic
//! identities apply: addition and subtraction are xor, multiplication is
//! conjunction, and every reduction over a single bit degrades to the bit
//! itself (or its negation).

use crate::jexpr::{JBinOp, JExpr, JUnOp};
use crate::jtype::JType;
use crate::op::{ArithBinOp, ArithUnOp};
use crate::operand::Operand;
use crate::runtime;

pub(super) fn arith_bin(op: ArithBinOp, lhs: &Operand, rhs: &Operand) -> Operand {
    let a = lhs.expr.clone();
    let b = rhs.expr.clone();
    let expr = match op {
        ArithBinOp::Add | ArithBinOp::Sub | ArithBinOp::Xor => {
            JExpr::binary(JBinOp::Xor, a, b)
        }
        ArithBinOp::Mul | ArithBinOp::And => JExpr::binary(JBinOp::LogAnd, a, b),
        ArithBinOp::Or => JExpr::binary(JBinOp::LogOr, a, b),
        // no native boolean division
        ArithBinOp::Div | ArithBinOp::Mod => {
            JExpr::static_call(runtime::BOOLEAN_OP, op.helper_name(), vec![a, b])
        }
        ArithBinOp::AndNot => {
            JExpr::unary(JUnOp::LogNot, JExpr::binary(JBinOp::LogAnd, a, b))
        }
        ArithBinOp::OrNot => {
            JExpr::unary(JUnOp::LogNot, JExpr::binary(JBinOp::LogOr, a, b))
        }
        ArithBinOp::XorNot => JExpr::unary(JUnOp::LogNot, JExpr::binary(JBinOp::Xor, a, b)),
    };
    Operand::new(expr, JType::Boolean)
}

pub(super) fn arith_un(op: ArithUnOp, arg: &Operand) -> Operand {
    let a = arg.expr.clone();
    let expr = match op {
        // nothing to negate, reverse, or reduce over one bit
        ArithUnOp::Negate
        | ArithUnOp::Reverse
        | ArithUnOp::ReductiveAnd
        | ArithUnOp::ReductiveOr
        | ArithUnOp::ReductiveXor => a,
        ArithUnOp::Not
        | ArithUnOp::ReductiveAndNot
        | ArithUnOp::ReductiveOrNot
        | ArithUnOp::ReductiveXorNot => JExpr::unary(JUnOp::LogNot, a),
    };
    Operand::new(expr, JType::Boolean)
}
