use std::fmt;

/// Identity of a source-tree node, assigned by the surrounding translator.
///
/// The core never walks the source tree itself; it only carries node ids
/// through so precondition violations can point back at the offending
/// construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
