//! Lowering rules for native fixed-width integer operands.
//!
//! Almost everything maps 1:1 onto the target's own operators; only bit
//! reversal and the reductions go through the runtime, since no native
//! operator performs them. Equality is not offered here at all: the target's
//! `==`/`!=` are used directly by the caller.

use crate::jexpr::{JBinOp, JExpr, JUnOp};
use crate::jtype::JType;
use crate::op::{ArithBinOp, ArithUnOp, RelOp, ShiftOp};
use crate::operand::Operand;
use crate::runtime;

pub(super) fn arith_bin(op: ArithBinOp, lhs: &Operand, rhs: &Operand) -> Operand {
    let a = lhs.expr.clone();
    let b = rhs.expr.clone();
    let expr = match op {
        ArithBinOp::Add => JExpr::binary(JBinOp::Add, a, b),
        ArithBinOp::Sub => JExpr::binary(JBinOp::Sub, a, b),
        ArithBinOp::Mul => JExpr::binary(JBinOp::Mul, a, b),
        ArithBinOp::Div => JExpr::binary(JBinOp::Div, a, b),
        ArithBinOp::Mod => JExpr::binary(JBinOp::Rem, a, b),
        ArithBinOp::And => JExpr::binary(JBinOp::BitAnd, a, b),
        ArithBinOp::Or => JExpr::binary(JBinOp::BitOr, a, b),
        ArithBinOp::Xor => JExpr::binary(JBinOp::Xor, a, b),
        ArithBinOp::AndNot => {
            JExpr::unary(JUnOp::BitNot, JExpr::binary(JBinOp::BitAnd, a, b))
        }
        ArithBinOp::OrNot => JExpr::unary(JUnOp::BitNot, JExpr::binary(JBinOp::BitOr, a, b)),
        ArithBinOp::XorNot => JExpr::unary(JUnOp::BitNot, JExpr::binary(JBinOp::Xor, a, b)),
    };
    Operand::new(expr, JType::Int)
}

pub(super) fn arith_un(op: ArithUnOp, arg: &Operand) -> Operand {
    let a = arg.expr.clone();
    let expr = match op {
        ArithUnOp::Negate => JExpr::unary(JUnOp::Neg, a),
        ArithUnOp::Not => JExpr::unary(JUnOp::BitNot, a),
        ArithUnOp::Reverse
        | ArithUnOp::ReductiveAnd
        | ArithUnOp::ReductiveOr
        | ArithUnOp::ReductiveXor
        | ArithUnOp::ReductiveAndNot
        | ArithUnOp::ReductiveOrNot
        | ArithUnOp::ReductiveXorNot => {
            JExpr::static_call(runtime::INT_OP, op.helper_name(), vec![a])
        }
    };
    Operand::new(expr, JType::Int)
}

pub(super) fn shift(op: ShiftOp, lhs: &Operand, rhs: &Operand) -> Operand {
    let token = match op {
        ShiftOp::Shl => JBinOp::Shl,
        // sign-preserving right shift
        ShiftOp::Shr => JBinOp::Shr,
    };
    let expr = JExpr::binary(token, lhs.expr.clone(), rhs.expr.clone());
    Operand::new(expr, JType::Int)
}

pub(super) fn rel(op: RelOp, lhs: &Operand, rhs: &Operand) -> Operand {
    let token = match op {
        RelOp::Lt => JBinOp::Lt,
        RelOp::Le => JBinOp::Le,
        RelOp::Gt => JBinOp::Gt,
        RelOp::Ge => JBinOp::Ge,
    };
    let expr = JExpr::binary(token, lhs.expr.clone(), rhs.expr.clone());
    Operand::new(expr, JType::Boolean)
}
