//! Operator lowering entrypoints.
//!
//! The surrounding translator classifies each operand's category and calls
//! in here; dispatch is an exhaustive match over (category, operator group),
//! so adding a category or a group forces every combination to be revisited.
//! An illegal combination is a precondition violation: the upstream
//! classifier must never produce it, and translation of the current unit is
//! aborted when it does.

use log::debug;

use crate::category::OperatorCategory;
use crate::category::OperatorCategory as Cat;
use crate::ids::NodeId;
use crate::lower::errors::{LowerError, LowerResult};
use crate::lower::{bit_vector, boolean, boxed_int, native_int, single_bit};
use crate::op::{ArithUnOp, BinOp};
use crate::operand::Operand;

/// Lower a two-operand operator for the given category.
///
/// Both operands must already be side-effect safe; no temporaries are
/// introduced here.
pub fn lower_bin_op(
    op: BinOp,
    category: OperatorCategory,
    lhs: &Operand,
    rhs: &Operand,
    at: NodeId,
) -> LowerResult<Operand> {
    debug!("lowering {} for {} at {}", op, category, at);
    match (category, op) {
        (Cat::Boolean, BinOp::Arith(op)) => Ok(boolean::arith_bin(op, lhs, rhs)),

        (Cat::NativeInteger, BinOp::Arith(op)) => Ok(native_int::arith_bin(op, lhs, rhs)),
        (Cat::NativeInteger, BinOp::Shift(op)) => Ok(native_int::shift(op, lhs, rhs)),
        (Cat::NativeInteger, BinOp::Rel(op)) => Ok(native_int::rel(op, lhs, rhs)),

        (Cat::BoxedInteger, BinOp::Arith(op)) => Ok(boxed_int::arith_bin(op, lhs, rhs)),
        (Cat::BoxedInteger, BinOp::Shift(op)) => Ok(boxed_int::shift(op, lhs, rhs)),
        (Cat::BoxedInteger, BinOp::Eq(op)) => Ok(boxed_int::eq(op, lhs, rhs)),
        (Cat::BoxedInteger, BinOp::Rel(op)) => Ok(boxed_int::rel(op, lhs, rhs)),

        (Cat::SingleBit, BinOp::Arith(op)) => Ok(single_bit::arith_bin(op, lhs, rhs)),
        (Cat::SingleBit, BinOp::Eq(op)) => Ok(single_bit::eq(op, lhs, rhs)),

        (Cat::BitVector, BinOp::Arith(op)) => Ok(bit_vector::arith_bin(op, lhs, rhs)),
        (Cat::BitVector, BinOp::Shift(op)) => Ok(bit_vector::shift(op, lhs, rhs)),
        (Cat::BitVector, BinOp::Eq(op)) => Ok(bit_vector::eq(op, lhs, rhs)),
        (Cat::BitVector, BinOp::Rel(op)) => Ok(bit_vector::rel(op, lhs, rhs)),

        (category, op) => {
            debug_assert!(!category.supports(op.group()));
            Err(LowerError::IllegalOperator {
                op: op.helper_name(),
                category,
                at,
            })
        }
    }
}

/// Lower a one-operand operator for the given category. The one-operand
/// operators all belong to the arithmetic group, which every category
/// offers, so this cannot fail on a legal classifier.
pub fn lower_un_op(
    op: ArithUnOp,
    category: OperatorCategory,
    arg: &Operand,
    at: NodeId,
) -> LowerResult<Operand> {
    debug!("lowering {} for {} at {}", op, category, at);
    Ok(match category {
        Cat::Boolean => boolean::arith_un(op, arg),
        Cat::NativeInteger => native_int::arith_un(op, arg),
        Cat::BoxedInteger => boxed_int::arith_un(op, arg),
        Cat::SingleBit => single_bit::arith_un(op, arg),
        Cat::BitVector => bit_vector::arith_un(op, arg),
    })
}
