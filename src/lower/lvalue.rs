//! Lvalue and assignment translation.
//!
//! An assignable source construct becomes an [`LvalueDescriptor`]: a read
//! expression that is safe to reference more than once, plus a write
//! operation producing the store and any change-notification logic. When the
//! lvalue will be both read and written, or its variable carries an update
//! event, its side-effecting parts are hoisted first so they run exactly
//! once.

use log::debug;

use crate::context::{NotifyMap, TransContext, ValueTypeRegistry};
use crate::jexpr::{JExpr, JStmt};
use crate::jtype::JType;
use crate::lower::rewrite::{eval_lhs, is_simple};
use crate::operand::Operand;
use crate::runtime;

/// Read/write access the surrounding translator needs on an lvalue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    pub read: bool,
    pub write: bool,
}

impl Access {
    pub const READ: Access = Access {
        read: true,
        write: false,
    };
    pub const WRITE: Access = Access {
        read: false,
        write: true,
    };
    pub const READ_WRITE: Access = Access {
        read: true,
        write: true,
    };
}

/// A translated assignable location.
#[derive(Debug, Clone)]
pub struct LvalueDescriptor {
    result_ty: JType,
    update_event: Option<JExpr>,
    read: JExpr,
    value_semantics: bool,
    var_hint: String,
}

/// Translate an already-lowered assignable target expression into an lvalue
/// descriptor. The notification companion, if any, is looked up by the
/// lvalue's root variable in the externally owned map; this core never
/// manages that map's lifecycle.
pub fn lower_lvalue(
    expr: JExpr,
    result_ty: JType,
    access: Access,
    notify: &NotifyMap,
    values: &ValueTypeRegistry,
    ctx: &mut dyn TransContext,
) -> LvalueDescriptor {
    let var_hint = root_var(&expr).unwrap_or("lv").to_string();
    let update_event = notify.event_for(&var_hint).cloned();

    let multi_access = (access.read && access.write) || update_event.is_some();
    let read = if multi_access && !is_simple(&expr) {
        debug!("multi-access lvalue `{}` needs hoisting", expr);
        eval_lhs(expr, &format!("{}_tmp", var_hint), true, ctx)
    } else {
        expr
    };

    let value_semantics = values.is_value_type(&result_ty);

    LvalueDescriptor {
        result_ty,
        update_event,
        read,
        value_semantics,
        var_hint,
    }
}

impl LvalueDescriptor {
    pub fn result_ty(&self) -> &JType {
        &self.result_ty
    }

    pub fn update_event(&self) -> Option<&JExpr> {
        self.update_event.as_ref()
    }

    /// The read expression; safe to take any number of times.
    pub fn read(&self) -> JExpr {
        self.read.clone()
    }

    /// Emit the store of `value` into this lvalue.
    ///
    /// A value-semantics destination is mutated in place and never triggers
    /// notification. A reference-semantics destination with a notification
    /// companion captures the prior value first, then stores, then lets the
    /// runtime compare old vs new and fire the event when they differ
    /// (identity comparison for primitive result types, equals-style
    /// otherwise).
    pub fn write(&self, value: Operand, ctx: &mut dyn TransContext) -> Vec<JStmt> {
        if self.value_semantics {
            // cast disambiguates overload resolution for possibly-null args
            let arg = if value.ty.is_nullable() {
                JExpr::cast(value.ty.clone(), value.expr)
            } else {
                value.expr
            };
            let store = JExpr::method(self.read(), runtime::ASSIGN, vec![arg]);
            return vec![JStmt::Expr(store)];
        }

        let mut stmts = Vec::new();
        match &self.update_event {
            Some(event) => {
                let old = ctx.add_temp_for(
                    &format!("old_{}", self.var_hint),
                    Some(self.result_ty.clone()),
                    self.read(),
                    false,
                );
                stmts.push(JStmt::Expr(JExpr::assign(self.read(), value.expr)));
                stmts.push(JStmt::Expr(JExpr::call(
                    runtime::CHECK_UPDATE,
                    vec![
                        old,
                        self.read(),
                        JExpr::BoolLit(self.result_ty.is_primitive()),
                        event.clone(),
                    ],
                )));
            }
            None => {
                stmts.push(JStmt::Expr(JExpr::assign(self.read(), value.expr)));
            }
        }
        stmts
    }
}

/// Root variable of an lvalue shape: the leftmost bare reference under any
/// chain of field and index projections.
fn root_var(expr: &JExpr) -> Option<&str> {
    match expr {
        JExpr::Name(name) => Some(name),
        JExpr::Field { base, .. } | JExpr::Index { base, .. } => root_var(base),
        _ => None,
    }
}
