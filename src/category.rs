use std::fmt;

use crate::jtype::JType;

/// Semantic category of an operand, derived from its result type. The
/// category selects which set of lowering rules applies to an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Boolean,
    NativeInteger,
    BoxedInteger,
    SingleBit,
    BitVector,
}

/// Capability group an operator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpGroup {
    Arithmetic,
    Shift,
    Equality,
    Relational,
}

impl OperatorCategory {
    /// Derive the category from a result type. Types with no operator
    /// semantics (strings, plain objects) have no category.
    pub fn of(ty: &JType) -> Option<OperatorCategory> {
        match ty {
            JType::Boolean => Some(OperatorCategory::Boolean),
            JType::Int => Some(OperatorCategory::NativeInteger),
            JType::WideInt => Some(OperatorCategory::BoxedInteger),
            JType::Bit => Some(OperatorCategory::SingleBit),
            JType::BitVec { .. } => Some(OperatorCategory::BitVector),
            JType::Str | JType::Object(_) => None,
        }
    }

    /// Capability matrix: which operator groups are legal for this category.
    ///
    /// Boolean equality is handled by a separate equals-builder outside this
    /// family, and NativeInteger equality by the target's native `==`/`!=`,
    /// so neither offers the Equality group here.
    pub fn supports(self, group: OpGroup) -> bool {
        match self {
            OperatorCategory::Boolean => matches!(group, OpGroup::Arithmetic),
            OperatorCategory::NativeInteger => matches!(
                group,
                OpGroup::Arithmetic | OpGroup::Shift | OpGroup::Relational
            ),
            OperatorCategory::BoxedInteger => true,
            OperatorCategory::SingleBit => {
                matches!(group, OpGroup::Arithmetic | OpGroup::Equality)
            }
            OperatorCategory::BitVector => true,
        }
    }
}

impl fmt::Display for OperatorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperatorCategory::Boolean => "Boolean",
            OperatorCategory::NativeInteger => "NativeInteger",
            OperatorCategory::BoxedInteger => "BoxedInteger",
            OperatorCategory::SingleBit => "SingleBit",
            OperatorCategory::BitVector => "BitVector",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for OpGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OpGroup::Arithmetic => "arithmetic",
            OpGroup::Shift => "shift",
            OpGroup::Equality => "equality",
            OpGroup::Relational => "relational",
        };
        write!(f, "{}", name)
    }
}
