pub mod errors;
pub mod lvalue;
pub mod op_builder;
pub mod rewrite;

mod bit_vector;
mod boolean;
mod boxed_int;
mod native_int;
mod single_bit;

pub use errors::{LowerError, LowerResult};
pub use lvalue::{lower_lvalue, Access, LvalueDescriptor};
pub use op_builder::{lower_bin_op, lower_un_op};
