mod t_op_builder;

use crate::jexpr::{JExpr, JStmt};
use crate::jtype::JType;
use crate::operand::Operand;

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A named operand of the given type.
pub(crate) fn var(name: &str, ty: JType) -> Operand {
    Operand::new(JExpr::name(name), ty)
}

/// Render a statement sequence the way `indoc!` expected blocks are written:
/// one statement per line, trailing newline.
pub(crate) fn render_stmts(stmts: &[JStmt]) -> String {
    let mut out = String::new();
    for stmt in stmts {
        out.push_str(&stmt.to_string());
        out.push('\n');
    }
    out
}
