use crate::category::{OpGroup, OperatorCategory};
use crate::ids::NodeId;
use crate::jtype::{JType, Width};
use crate::lower::{lower_bin_op, lower_un_op, LowerError};
use crate::op::{ArithBinOp, ArithUnOp, BinOp, EqOp, RelOp, ShiftOp};
use crate::operand::Operand;

use super::{init_logging, var};

const AT: NodeId = NodeId(7);

fn bin(op: BinOp, cat: OperatorCategory, lhs: &Operand, rhs: &Operand) -> Operand {
    lower_bin_op(op, cat, lhs, rhs, AT).expect("operator should be legal for category")
}

fn un(op: ArithUnOp, cat: OperatorCategory, arg: &Operand) -> Operand {
    lower_un_op(op, cat, arg, AT).expect("unary operators are legal for every category")
}

// ----------- Boolean -----------

#[test]
fn test_boolean_binary_mapping() {
    init_logging();
    let a = var("a", JType::Boolean);
    let b = var("b", JType::Boolean);
    let cases = [
        (ArithBinOp::Add, "a ^ b"),
        (ArithBinOp::Sub, "a ^ b"),
        (ArithBinOp::Mul, "a && b"),
        (ArithBinOp::Div, "BooleanOp.div(a, b)"),
        (ArithBinOp::Mod, "BooleanOp.mod(a, b)"),
        (ArithBinOp::And, "a && b"),
        (ArithBinOp::Or, "a || b"),
        (ArithBinOp::Xor, "a ^ b"),
        (ArithBinOp::AndNot, "!(a && b)"),
        (ArithBinOp::OrNot, "!(a || b)"),
        (ArithBinOp::XorNot, "!(a ^ b)"),
    ];
    for (op, expected) in cases {
        let result = bin(BinOp::Arith(op), OperatorCategory::Boolean, &a, &b);
        assert_eq!(result.expr.to_string(), expected, "op {:?}", op);
        assert_eq!(result.ty, JType::Boolean);
    }
}

#[test]
fn test_boolean_unary_mapping() {
    let a = var("a", JType::Boolean);
    let cases = [
        (ArithUnOp::Negate, "a"),
        (ArithUnOp::Not, "!a"),
        (ArithUnOp::Reverse, "a"),
        (ArithUnOp::ReductiveAnd, "a"),
        (ArithUnOp::ReductiveOr, "a"),
        (ArithUnOp::ReductiveXor, "a"),
        (ArithUnOp::ReductiveAndNot, "!a"),
        (ArithUnOp::ReductiveOrNot, "!a"),
        (ArithUnOp::ReductiveXorNot, "!a"),
    ];
    for (op, expected) in cases {
        let result = un(op, OperatorCategory::Boolean, &a);
        assert_eq!(result.expr.to_string(), expected, "op {:?}", op);
    }
}

// ----------- NativeInteger -----------

#[test]
fn test_native_int_binary_mapping() {
    let a = var("a", JType::Int);
    let b = var("b", JType::Int);
    let cases = [
        (ArithBinOp::Add, "a + b"),
        (ArithBinOp::Sub, "a - b"),
        (ArithBinOp::Mul, "a * b"),
        (ArithBinOp::Div, "a / b"),
        (ArithBinOp::Mod, "a % b"),
        (ArithBinOp::And, "a & b"),
        (ArithBinOp::Or, "a | b"),
        (ArithBinOp::Xor, "a ^ b"),
        (ArithBinOp::AndNot, "~(a & b)"),
        (ArithBinOp::OrNot, "~(a | b)"),
        (ArithBinOp::XorNot, "~(a ^ b)"),
    ];
    for (op, expected) in cases {
        let result = bin(BinOp::Arith(op), OperatorCategory::NativeInteger, &a, &b);
        assert_eq!(result.expr.to_string(), expected, "op {:?}", op);
        assert_eq!(result.ty, JType::Int);
    }
}

#[test]
fn test_native_int_unary_mapping() {
    let a = var("a", JType::Int);
    let cases = [
        (ArithUnOp::Negate, "-a"),
        (ArithUnOp::Not, "~a"),
        (ArithUnOp::Reverse, "IntOp.reverse(a)"),
        (ArithUnOp::ReductiveAnd, "IntOp.reductiveAnd(a)"),
        (ArithUnOp::ReductiveOr, "IntOp.reductiveOr(a)"),
        (ArithUnOp::ReductiveXor, "IntOp.reductiveXor(a)"),
        (ArithUnOp::ReductiveAndNot, "IntOp.reductiveAndNot(a)"),
        (ArithUnOp::ReductiveOrNot, "IntOp.reductiveOrNot(a)"),
        (ArithUnOp::ReductiveXorNot, "IntOp.reductiveXorNot(a)"),
    ];
    for (op, expected) in cases {
        let result = un(op, OperatorCategory::NativeInteger, &a);
        assert_eq!(result.expr.to_string(), expected, "op {:?}", op);
    }
}

#[test]
fn test_native_int_shift_and_relational() {
    let a = var("a", JType::Int);
    let b = var("b", JType::Int);

    let shl = bin(BinOp::Shift(ShiftOp::Shl), OperatorCategory::NativeInteger, &a, &b);
    assert_eq!(shl.expr.to_string(), "a << b");
    assert_eq!(shl.ty, JType::Int);
    let shr = bin(BinOp::Shift(ShiftOp::Shr), OperatorCategory::NativeInteger, &a, &b);
    assert_eq!(shr.expr.to_string(), "a >> b");

    let cases = [
        (RelOp::Lt, "a < b"),
        (RelOp::Le, "a <= b"),
        (RelOp::Gt, "a > b"),
        (RelOp::Ge, "a >= b"),
    ];
    for (op, expected) in cases {
        let result = bin(BinOp::Rel(op), OperatorCategory::NativeInteger, &a, &b);
        assert_eq!(result.expr.to_string(), expected, "op {:?}", op);
        assert_eq!(result.ty, JType::Boolean);
    }
}

// ----------- BoxedInteger -----------

#[test]
fn test_boxed_int_delegates_by_operator_name() {
    let a = var("a", JType::WideInt);
    let b = var("b", JType::WideInt);

    let cases = [
        (BinOp::Arith(ArithBinOp::Add), "WideIntOp.add(a, b)", JType::WideInt),
        (BinOp::Arith(ArithBinOp::Mod), "WideIntOp.mod(a, b)", JType::WideInt),
        (BinOp::Arith(ArithBinOp::XorNot), "WideIntOp.xorNot(a, b)", JType::WideInt),
        (BinOp::Shift(ShiftOp::Shl), "WideIntOp.shiftLeft(a, b)", JType::WideInt),
        (BinOp::Shift(ShiftOp::Shr), "WideIntOp.shiftRight(a, b)", JType::WideInt),
        (BinOp::Eq(EqOp::Eq), "WideIntOp.equal(a, b)", JType::Boolean),
        (BinOp::Eq(EqOp::Ne), "WideIntOp.notEqual(a, b)", JType::Boolean),
        (BinOp::Rel(RelOp::Lt), "WideIntOp.lt(a, b)", JType::Boolean),
        (BinOp::Rel(RelOp::Ge), "WideIntOp.ge(a, b)", JType::Boolean),
    ];
    for (op, expected, ty) in cases {
        let result = bin(op, OperatorCategory::BoxedInteger, &a, &b);
        assert_eq!(result.expr.to_string(), expected, "op {:?}", op);
        assert_eq!(result.ty, ty, "op {:?}", op);
    }

    let neg = un(ArithUnOp::Negate, OperatorCategory::BoxedInteger, &a);
    assert_eq!(neg.expr.to_string(), "WideIntOp.negate(a)");
    assert_eq!(neg.ty, JType::WideInt);
}

// ----------- SingleBit -----------

#[test]
fn test_single_bit_binary_mapping() {
    let a = var("a", JType::Bit);
    let b = var("b", JType::Bit);
    let cases = [
        (ArithBinOp::Add, "a.xor(b)"),
        (ArithBinOp::Sub, "a.xor(b)"),
        (ArithBinOp::Mul, "a.and(b)"),
        (ArithBinOp::Div, "BitOp.div(a, b)"),
        (ArithBinOp::Mod, "BitOp.mod(a, b)"),
        (ArithBinOp::And, "a.and(b)"),
        (ArithBinOp::Or, "a.or(b)"),
        (ArithBinOp::Xor, "a.xor(b)"),
        (ArithBinOp::AndNot, "a.and(b).not()"),
        (ArithBinOp::OrNot, "a.or(b).not()"),
        (ArithBinOp::XorNot, "a.xor(b).not()"),
    ];
    for (op, expected) in cases {
        let result = bin(BinOp::Arith(op), OperatorCategory::SingleBit, &a, &b);
        assert_eq!(result.expr.to_string(), expected, "op {:?}", op);
        assert_eq!(result.ty, JType::Bit);
    }
}

#[test]
fn test_single_bit_unary_mapping() {
    let a = var("a", JType::Bit);
    let cases = [
        (ArithUnOp::Negate, "a.ztox()"),
        (ArithUnOp::Not, "a.not()"),
        (ArithUnOp::Reverse, "a"),
        (ArithUnOp::ReductiveAnd, "a.ztox()"),
        (ArithUnOp::ReductiveOr, "a.ztox()"),
        (ArithUnOp::ReductiveXor, "a.ztox()"),
        (ArithUnOp::ReductiveAndNot, "a.not()"),
        (ArithUnOp::ReductiveOrNot, "a.not()"),
        (ArithUnOp::ReductiveXorNot, "a.not()"),
    ];
    for (op, expected) in cases {
        let result = un(op, OperatorCategory::SingleBit, &a);
        assert_eq!(result.expr.to_string(), expected, "op {:?}", op);
    }
}

#[test]
fn test_single_bit_equality_mapping() {
    let a = var("a", JType::Bit);
    let b = var("b", JType::Bit);
    let cases = [
        (EqOp::Eq, "BitOp.equal(a, b)", JType::Bit),
        (EqOp::Ne, "BitOp.notEqual(a, b)", JType::Bit),
        (EqOp::ExactEq, "a == b", JType::Boolean),
        (EqOp::ExactNe, "a != b", JType::Boolean),
        (EqOp::WildEq, "BitOp.wildEqual(a, b)", JType::Bit),
        (EqOp::WildNe, "BitOp.wildNotEqual(a, b)", JType::Bit),
    ];
    for (op, expected, ty) in cases {
        let result = bin(BinOp::Eq(op), OperatorCategory::SingleBit, &a, &b);
        assert_eq!(result.expr.to_string(), expected, "op {:?}", op);
        assert_eq!(result.ty, ty, "op {:?}", op);
    }
}

// ----------- BitVector -----------

#[test]
fn test_bit_vector_member_ops_and_width() {
    let a = var("a", JType::bit_vec(4));
    let b = var("b", JType::bit_vec(9));

    let add = bin(BinOp::Arith(ArithBinOp::Add), OperatorCategory::BitVector, &a, &b);
    assert_eq!(add.expr.to_string(), "a.add(b)");
    assert_eq!(add.ty, JType::bit_vec(9));

    let and_not = bin(BinOp::Arith(ArithBinOp::AndNot), OperatorCategory::BitVector, &a, &b);
    assert_eq!(and_not.expr.to_string(), "a.andNot(b)");
    assert_eq!(and_not.ty, JType::bit_vec(9));

    // any unresolved operand width leaves the result width unresolved
    let dyn_b = var("b", JType::BitVec { width: Width::Unknown });
    let add_dyn = bin(BinOp::Arith(ArithBinOp::Add), OperatorCategory::BitVector, &a, &dyn_b);
    assert_eq!(add_dyn.ty, JType::BitVec { width: Width::Unknown });

    // a declared zero width is not a usable static width
    let zero = var("z", JType::bit_vec(0));
    let add_zero = bin(BinOp::Arith(ArithBinOp::Add), OperatorCategory::BitVector, &a, &zero);
    assert_eq!(add_zero.ty, JType::BitVec { width: Width::Unknown });
}

#[test]
fn test_bit_vector_unary_keeps_width() {
    let a = var("a", JType::bit_vec(4));
    let cases = [
        (ArithUnOp::Negate, "a.negate()"),
        (ArithUnOp::Not, "a.not()"),
        (ArithUnOp::Reverse, "a.reverse()"),
        (ArithUnOp::ReductiveAnd, "a.reductiveAnd()"),
        (ArithUnOp::ReductiveXorNot, "a.reductiveXorNot()"),
    ];
    for (op, expected) in cases {
        let result = un(op, OperatorCategory::BitVector, &a);
        assert_eq!(result.expr.to_string(), expected, "op {:?}", op);
        assert_eq!(result.ty, JType::bit_vec(4), "op {:?}", op);
    }
}

#[test]
fn test_bit_vector_shift_keeps_shifted_width() {
    let a = var("a", JType::bit_vec(4));
    let b = var("b", JType::bit_vec(9));

    let shl = bin(BinOp::Shift(ShiftOp::Shl), OperatorCategory::BitVector, &a, &b);
    assert_eq!(shl.expr.to_string(), "a.shiftLeft(b)");
    // result width follows the shifted operand, not the shift amount
    assert_eq!(shl.ty, JType::bit_vec(4));

    let shr = bin(BinOp::Shift(ShiftOp::Shr), OperatorCategory::BitVector, &a, &b);
    assert_eq!(shr.expr.to_string(), "a.shiftRight(b)");
    assert_eq!(shr.ty, JType::bit_vec(4));
}

#[test]
fn test_bit_vector_equality_and_relational() {
    let a = var("a", JType::BitVec { width: Width::Unknown });
    let b = var("b", JType::BitVec { width: Width::Unknown });
    let cases = [
        (BinOp::Eq(EqOp::Eq), "BitVectorOp.equal(a, b)", JType::Bit),
        (BinOp::Eq(EqOp::Ne), "BitVectorOp.notEqual(a, b)", JType::Bit),
        (BinOp::Eq(EqOp::ExactEq), "a.exactEquals(b)", JType::Boolean),
        (BinOp::Eq(EqOp::ExactNe), "a.exactNotEquals(b)", JType::Boolean),
        (BinOp::Eq(EqOp::WildEq), "a.wildEquals(b)", JType::Bit),
        (BinOp::Eq(EqOp::WildNe), "a.wildNotEquals(b)", JType::Bit),
        (BinOp::Rel(RelOp::Lt), "BitVectorOp.lt(a, b)", JType::Bit),
        (BinOp::Rel(RelOp::Le), "BitVectorOp.le(a, b)", JType::Bit),
        (BinOp::Rel(RelOp::Gt), "BitVectorOp.gt(a, b)", JType::Bit),
        (BinOp::Rel(RelOp::Ge), "BitVectorOp.ge(a, b)", JType::Bit),
    ];
    for (op, expected, ty) in cases {
        let result = bin(op, OperatorCategory::BitVector, &a, &b);
        assert_eq!(result.expr.to_string(), expected, "op {:?}", op);
        assert_eq!(result.ty, ty, "op {:?}", op);
    }
}

// ----------- Classification -----------

#[test]
fn test_category_is_derived_from_type() {
    assert_eq!(
        var("a", JType::Boolean).category(),
        Some(OperatorCategory::Boolean)
    );
    assert_eq!(
        var("a", JType::Int).category(),
        Some(OperatorCategory::NativeInteger)
    );
    assert_eq!(
        var("a", JType::WideInt).category(),
        Some(OperatorCategory::BoxedInteger)
    );
    assert_eq!(
        var("a", JType::Bit).category(),
        Some(OperatorCategory::SingleBit)
    );
    assert_eq!(
        var("a", JType::bit_vec(8)).category(),
        Some(OperatorCategory::BitVector)
    );
    // no operator semantics for plain reference types
    assert_eq!(var("a", JType::Str).category(), None);
    assert_eq!(var("a", JType::object("Module")).category(), None);
}

// ----------- Capability matrix -----------

#[test]
fn test_illegal_operator_is_precondition_violation() {
    let a = var("a", JType::Boolean);
    let b = var("b", JType::Boolean);

    let err = lower_bin_op(BinOp::Rel(RelOp::Lt), OperatorCategory::Boolean, &a, &b, AT)
        .expect_err("relational on Boolean must be rejected");
    assert_eq!(
        err,
        LowerError::IllegalOperator {
            op: "lt",
            category: OperatorCategory::Boolean,
            at: AT,
        }
    );
    assert_eq!(
        err.to_string(),
        "operator `lt` is not legal for category Boolean at node #7"
    );
}

#[test]
fn test_dispatch_agrees_with_capability_matrix() {
    let categories = [
        (OperatorCategory::Boolean, JType::Boolean),
        (OperatorCategory::NativeInteger, JType::Int),
        (OperatorCategory::BoxedInteger, JType::WideInt),
        (OperatorCategory::SingleBit, JType::Bit),
        (OperatorCategory::BitVector, JType::bit_vec(8)),
    ];
    let samples = [
        (OpGroup::Arithmetic, BinOp::Arith(ArithBinOp::Add)),
        (OpGroup::Shift, BinOp::Shift(ShiftOp::Shl)),
        (OpGroup::Equality, BinOp::Eq(EqOp::Eq)),
        (OpGroup::Relational, BinOp::Rel(RelOp::Lt)),
    ];
    for (cat, ty) in &categories {
        let a = var("a", ty.clone());
        let b = var("b", ty.clone());
        for (group, op) in samples {
            let result = lower_bin_op(op, *cat, &a, &b, AT);
            assert_eq!(
                result.is_ok(),
                cat.supports(group),
                "category {} group {}",
                cat,
                group
            );
        }
    }
}
