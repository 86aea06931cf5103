use thiserror::Error;

use crate::category::OperatorCategory;
use crate::ids::NodeId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LowerError {
    /// An operator was requested against a category for which it is not
    /// legal. Signals a defect in the upstream classifier, never a user
    /// error; translation of the current unit is aborted.
    #[error("operator `{op}` is not legal for category {category} at node {at}")]
    IllegalOperator {
        op: &'static str,
        category: OperatorCategory,
        at: NodeId,
    },
}

pub type LowerResult<T> = Result<T, LowerError>;
