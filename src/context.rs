use indexmap::{IndexMap, IndexSet};

use crate::jexpr::{JExpr, JStmt};
use crate::jtype::JType;

// ----------- Temporaries -----------

/// A hoisted temporary requested during rewriting. Bindings are flushed into
/// the enclosing statement list in the exact order they were requested,
/// preserving source evaluation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporaryBinding {
    pub name: String,
    pub ty: Option<JType>,
    pub init: JExpr,
    pub is_final: bool,
}

/// Translation context supplied by the surrounding translator.
///
/// The core only requests temporary allocation and ordering within its own
/// rewriting; placement within the broader statement sequence belongs to the
/// caller.
pub trait TransContext {
    /// Allocate a temporary initialized to `init` and return a reference to
    /// it. `hint` seeds the temporary's name.
    fn add_temp_for(&mut self, hint: &str, ty: Option<JType>, init: JExpr, is_final: bool)
        -> JExpr;

    /// Flush all pending temporaries into `target` as local declarations, in
    /// first-encounter order.
    fn merge_into_result(&mut self, target: &mut Vec<JStmt>);
}

/// Per-statement translation context. Owns the temporaries hoisted while
/// translating one statement; finalizing the statement drains them.
#[derive(Debug, Default)]
pub struct StmtContext {
    temps: Vec<TemporaryBinding>,
    name_counts: IndexMap<String, u32>,
}

impl StmtContext {
    pub fn new() -> StmtContext {
        StmtContext::default()
    }

    pub fn temps(&self) -> &[TemporaryBinding] {
        &self.temps
    }

    fn unique_name(&mut self, hint: &str) -> String {
        let count = self.name_counts.entry(hint.to_string()).or_insert(0);
        *count += 1;
        if *count == 1 {
            hint.to_string()
        } else {
            format!("{}_{}", hint, count)
        }
    }
}

impl TransContext for StmtContext {
    fn add_temp_for(
        &mut self,
        hint: &str,
        ty: Option<JType>,
        init: JExpr,
        is_final: bool,
    ) -> JExpr {
        let name = self.unique_name(hint);
        self.temps.push(TemporaryBinding {
            name: name.clone(),
            ty,
            init,
            is_final,
        });
        JExpr::Name(name)
    }

    fn merge_into_result(&mut self, target: &mut Vec<JStmt>) {
        for temp in self.temps.drain(..) {
            target.push(JStmt::Local {
                ty: temp.ty,
                name: temp.name,
                init: temp.init,
                is_final: temp.is_final,
            });
        }
    }
}

// ----------- Value-semantics registry -----------

/// Registry of target types whose destinations are written by in-place
/// mutation rather than reference rebinding. Owned by the surrounding
/// translator; the core only consults it.
#[derive(Debug, Default)]
pub struct ValueTypeRegistry {
    names: IndexSet<String>,
}

impl ValueTypeRegistry {
    pub fn new() -> ValueTypeRegistry {
        ValueTypeRegistry::default()
    }

    pub fn register(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn is_value_type(&self, ty: &JType) -> bool {
        match ty {
            JType::Object(name) => self.names.contains(name),
            _ => false,
        }
    }
}

// ----------- Notification map -----------

/// Variable → update-event map, owned by the surrounding translator. A
/// variable with an entry here has a notification companion that must fire
/// whenever the variable's value changes.
#[derive(Debug, Default)]
pub struct NotifyMap {
    events: IndexMap<String, JExpr>,
}

impl NotifyMap {
    pub fn new() -> NotifyMap {
        NotifyMap::default()
    }

    pub fn insert(&mut self, var: impl Into<String>, event: JExpr) {
        self.events.insert(var.into(), event);
    }

    pub fn event_for(&self, var: &str) -> Option<&JExpr> {
        self.events.get(var)
    }
}
