//! Single-evaluation rewriter.
//!
//! An expression that will be referenced more than once in the output may
//! only be duplicated if re-evaluating it is observably free. Everything
//! else is hoisted into ordered temporaries so each side-effecting
//! sub-expression executes exactly once, no matter how many times the
//! rebuilt expression is subsequently read or written.

use log::trace;

use crate::context::TransContext;
use crate::jexpr::JExpr;
use crate::jtype::JType;

/// Whether `expr` may be safely duplicated: literals, bare references, and
/// field accesses off a bare reference. Anything involving a call, an index,
/// or a computed base must be hoisted before reuse.
pub fn is_simple(expr: &JExpr) -> bool {
    match expr {
        JExpr::IntLit(_)
        | JExpr::BoolLit(_)
        | JExpr::CharLit(_)
        | JExpr::StrLit(_)
        | JExpr::Null
        | JExpr::Name(_) => true,
        JExpr::Field { base, .. } => matches!(base.as_ref(), JExpr::Name(_)),
        _ => false,
    }
}

/// Hoist `expr` as a whole into one temporary if it will be referenced more
/// than once and is not already simple; otherwise hand it back unchanged.
pub fn eval_const(
    expr: JExpr,
    ty: Option<JType>,
    hint: &str,
    multi_ref: bool,
    ctx: &mut dyn TransContext,
) -> JExpr {
    if multi_ref && !is_simple(&expr) {
        trace!("hoisting `{}` into temp `{}`", expr, hint);
        ctx.add_temp_for(hint, ty, expr, true)
    } else {
        expr
    }
}

/// Structure-aware variant for lvalues: rather than hoisting the whole
/// expression (which would lose its assignability), hoist its side-effecting
/// pieces and rebuild the same lvalue shape over the hoisted parts.
///
/// For a field access only the base object is hoisted; the member selector
/// itself never is. For an indexed access the indexed-into expression is
/// rewritten recursively and each index is hoisted independently.
pub fn eval_lhs(
    expr: JExpr,
    hint: &str,
    multi_ref: bool,
    ctx: &mut dyn TransContext,
) -> JExpr {
    match expr {
        JExpr::Field { base, name } => {
            let base = eval_const(*base, None, hint, multi_ref, ctx);
            JExpr::Field {
                base: Box::new(base),
                name,
            }
        }
        JExpr::Index { base, indices } => {
            let base = eval_lhs(*base, hint, multi_ref, ctx);
            let indices = indices
                .into_iter()
                .map(|index| eval_const(index, None, hint, multi_ref, ctx))
                .collect();
            JExpr::Index {
                base: Box::new(base),
                indices,
            }
        }
        other => eval_const(other, None, hint, multi_ref, ctx),
    }
}
