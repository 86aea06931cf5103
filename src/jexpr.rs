use std::fmt;

use crate::jtype::JType;

// ----------- Operators -----------

/// Binary operator tokens of the target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JBinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Shl,
    Shr,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    BitAnd,
    Xor,
    BitOr,
    LogAnd,
    LogOr,
}

impl JBinOp {
    /// Binding strength; higher binds tighter.
    fn prec(self) -> u8 {
        match self {
            JBinOp::Mul | JBinOp::Div | JBinOp::Rem => 11,
            JBinOp::Add | JBinOp::Sub => 10,
            JBinOp::Shl | JBinOp::Shr => 9,
            JBinOp::Lt | JBinOp::Le | JBinOp::Gt | JBinOp::Ge => 8,
            JBinOp::Eq | JBinOp::Ne => 7,
            JBinOp::BitAnd => 6,
            JBinOp::Xor => 5,
            JBinOp::BitOr => 4,
            JBinOp::LogAnd => 3,
            JBinOp::LogOr => 2,
        }
    }

    fn token(self) -> &'static str {
        match self {
            JBinOp::Add => "+",
            JBinOp::Sub => "-",
            JBinOp::Mul => "*",
            JBinOp::Div => "/",
            JBinOp::Rem => "%",
            JBinOp::Shl => "<<",
            JBinOp::Shr => ">>",
            JBinOp::Lt => "<",
            JBinOp::Le => "<=",
            JBinOp::Gt => ">",
            JBinOp::Ge => ">=",
            JBinOp::Eq => "==",
            JBinOp::Ne => "!=",
            JBinOp::BitAnd => "&",
            JBinOp::Xor => "^",
            JBinOp::BitOr => "|",
            JBinOp::LogAnd => "&&",
            JBinOp::LogOr => "||",
        }
    }
}

/// Unary operator tokens of the target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JUnOp {
    Neg,
    BitNot,
    LogNot,
}

impl JUnOp {
    fn token(self) -> &'static str {
        match self {
            JUnOp::Neg => "-",
            JUnOp::BitNot => "~",
            JUnOp::LogNot => "!",
        }
    }
}

// ----------- Expressions -----------

const PREC_ASSIGN: u8 = 1;
const PREC_UNARY: u8 = 12;
const PREC_POSTFIX: u8 = 13;

/// Target-language expression tree.
///
/// This is the output side of lowering: a Java-ish object/imperative
/// expression language. The `Display` rendering is the reference spelling
/// tests assert against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JExpr {
    IntLit(i64),
    BoolLit(bool),
    CharLit(char),
    StrLit(String),
    Null,
    /// Bare variable reference (also `this` / `super`).
    Name(String),
    Field {
        base: Box<JExpr>,
        name: String,
    },
    Index {
        base: Box<JExpr>,
        indices: Vec<JExpr>,
    },
    MethodCall {
        target: Box<JExpr>,
        name: String,
        args: Vec<JExpr>,
    },
    StaticCall {
        class: &'static str,
        name: String,
        args: Vec<JExpr>,
    },
    /// Free-standing call, resolved by a static import in the output.
    Call {
        name: String,
        args: Vec<JExpr>,
    },
    Unary {
        op: JUnOp,
        arg: Box<JExpr>,
    },
    Binary {
        op: JBinOp,
        lhs: Box<JExpr>,
        rhs: Box<JExpr>,
    },
    Cast {
        ty: JType,
        expr: Box<JExpr>,
    },
    Assign {
        target: Box<JExpr>,
        value: Box<JExpr>,
    },
}

impl JExpr {
    pub fn name(name: impl Into<String>) -> JExpr {
        JExpr::Name(name.into())
    }

    pub fn field(base: JExpr, name: impl Into<String>) -> JExpr {
        JExpr::Field {
            base: Box::new(base),
            name: name.into(),
        }
    }

    pub fn index(base: JExpr, indices: Vec<JExpr>) -> JExpr {
        JExpr::Index {
            base: Box::new(base),
            indices,
        }
    }

    pub fn method(target: JExpr, name: impl Into<String>, args: Vec<JExpr>) -> JExpr {
        JExpr::MethodCall {
            target: Box::new(target),
            name: name.into(),
            args,
        }
    }

    pub fn static_call(class: &'static str, name: impl Into<String>, args: Vec<JExpr>) -> JExpr {
        JExpr::StaticCall {
            class,
            name: name.into(),
            args,
        }
    }

    pub fn call(name: impl Into<String>, args: Vec<JExpr>) -> JExpr {
        JExpr::Call {
            name: name.into(),
            args,
        }
    }

    pub fn unary(op: JUnOp, arg: JExpr) -> JExpr {
        JExpr::Unary {
            op,
            arg: Box::new(arg),
        }
    }

    pub fn binary(op: JBinOp, lhs: JExpr, rhs: JExpr) -> JExpr {
        JExpr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn cast(ty: JType, expr: JExpr) -> JExpr {
        JExpr::Cast {
            ty,
            expr: Box::new(expr),
        }
    }

    pub fn assign(target: JExpr, value: JExpr) -> JExpr {
        JExpr::Assign {
            target: Box::new(target),
            value: Box::new(value),
        }
    }

    fn prec(&self) -> u8 {
        match self {
            JExpr::Binary { op, .. } => op.prec(),
            JExpr::Unary { .. } | JExpr::Cast { .. } => PREC_UNARY,
            JExpr::Assign { .. } => PREC_ASSIGN,
            _ => 14,
        }
    }

    fn fmt_prec(&self, f: &mut fmt::Formatter<'_>, min_prec: u8) -> fmt::Result {
        let needs_parens = self.prec() < min_prec;
        if needs_parens {
            write!(f, "(")?;
        }
        match self {
            JExpr::IntLit(v) => write!(f, "{}", v)?,
            JExpr::BoolLit(v) => write!(f, "{}", v)?,
            JExpr::CharLit(c) => write!(f, "'{}'", c)?,
            JExpr::StrLit(s) => write!(f, "\"{}\"", s)?,
            JExpr::Null => write!(f, "null")?,
            JExpr::Name(name) => write!(f, "{}", name)?,
            JExpr::Field { base, name } => {
                base.fmt_prec(f, PREC_POSTFIX)?;
                write!(f, ".{}", name)?;
            }
            JExpr::Index { base, indices } => {
                base.fmt_prec(f, PREC_POSTFIX)?;
                for index in indices {
                    write!(f, "[")?;
                    index.fmt_prec(f, 0)?;
                    write!(f, "]")?;
                }
            }
            JExpr::MethodCall { target, name, args } => {
                target.fmt_prec(f, PREC_POSTFIX)?;
                write!(f, ".{}", name)?;
                fmt_args(f, args)?;
            }
            JExpr::StaticCall { class, name, args } => {
                write!(f, "{}.{}", class, name)?;
                fmt_args(f, args)?;
            }
            JExpr::Call { name, args } => {
                write!(f, "{}", name)?;
                fmt_args(f, args)?;
            }
            JExpr::Unary { op, arg } => {
                write!(f, "{}", op.token())?;
                // nested unaries are parenthesized
                arg.fmt_prec(f, PREC_POSTFIX)?;
            }
            JExpr::Cast { ty, expr } => {
                write!(f, "({}) ", ty)?;
                expr.fmt_prec(f, PREC_POSTFIX)?;
            }
            JExpr::Binary { op, lhs, rhs } => {
                lhs.fmt_prec(f, op.prec())?;
                write!(f, " {} ", op.token())?;
                // left-associative: parenthesize an equal-precedence rhs
                rhs.fmt_prec(f, op.prec() + 1)?;
            }
            JExpr::Assign { target, value } => {
                target.fmt_prec(f, PREC_ASSIGN + 1)?;
                write!(f, " = ")?;
                value.fmt_prec(f, PREC_ASSIGN)?;
            }
        }
        if needs_parens {
            write!(f, ")")?;
        }
        Ok(())
    }
}

fn fmt_args(f: &mut fmt::Formatter<'_>, args: &[JExpr]) -> fmt::Result {
    write!(f, "(")?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        arg.fmt_prec(f, 0)?;
    }
    write!(f, ")")
}

impl fmt::Display for JExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_prec(f, 0)
    }
}

// ----------- Statements -----------

/// Target-language statement produced by assignment translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JStmt {
    Expr(JExpr),
    /// Local declaration; `ty` of `None` renders as an inferred local.
    Local {
        ty: Option<JType>,
        name: String,
        init: JExpr,
        is_final: bool,
    },
}

impl fmt::Display for JStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JStmt::Expr(expr) => write!(f, "{};", expr),
            JStmt::Local {
                ty,
                name,
                init,
                is_final,
            } => {
                if *is_final {
                    write!(f, "final ")?;
                }
                match ty {
                    Some(ty) => write!(f, "{} ", ty)?,
                    None => write!(f, "var ")?,
                }
                write!(f, "{} = {};", name, init)
            }
        }
    }
}
