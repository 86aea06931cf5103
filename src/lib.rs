//! Expression and assignment lowering core of a source-to-source translator.
//!
//! The surrounding translator walks an already-typed source tree and calls
//! in here to lower operators and assignments into target-language
//! expression trees:
//!
//! - [`lower::lower_bin_op`] / [`lower::lower_un_op`] apply the
//!   per-category operator rules, one rule set per
//!   [`category::OperatorCategory`].
//! - [`lower::lower_lvalue`] turns an assignable target expression into an
//!   [`lower::LvalueDescriptor`] whose read and write are safe to use any
//!   number of times, hoisting side-effecting parts through the caller's
//!   [`context::TransContext`].
//! - [`lower::rewrite`] is the single-evaluation rewriter both of those
//!   build on.

pub mod category;
pub mod context;
pub mod ids;
pub mod jexpr;
pub mod jtype;
pub mod lower;
pub mod op;
pub mod operand;
pub mod runtime;

pub use category::{OpGroup, OperatorCategory};
pub use context::{NotifyMap, StmtContext, TemporaryBinding, TransContext, ValueTypeRegistry};
pub use ids::NodeId;
pub use jexpr::{JBinOp, JExpr, JStmt, JUnOp};
pub use jtype::{JType, Width};
pub use lower::{
    lower_bin_op, lower_lvalue, lower_un_op, Access, LowerError, LowerResult, LvalueDescriptor,
};
pub use op::{ArithBinOp, ArithUnOp, BinOp, EqOp, RelOp, ShiftOp};
pub use operand::Operand;

#[cfg(test)]
mod tests;
