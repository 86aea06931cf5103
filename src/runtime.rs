//! Names of the runtime support classes and methods referenced by lowered
//! output. The runtime library itself is part of the generated program, not
//! of this crate; only the spellings live here.

/// Boolean division/modulo helpers (no native boolean division exists).
pub const BOOLEAN_OP: &str = "BooleanOp";

/// Native-integer bit manipulation helpers (reversal, reductions).
pub const INT_OP: &str = "IntOp";

/// Boxed-integer helpers; every operator goes through these to get
/// null-propagation semantics.
pub const WIDE_INT_OP: &str = "WideIntOp";

/// Single-bit 4-state helpers (division, 4-state and wildcard equality).
pub const BIT_OP: &str = "BitOp";

/// Bit-vector 4-state comparison helpers.
pub const BIT_VECTOR_OP: &str = "BitVectorOp";

/// Member method collapsing high-impedance (Z) bits to unknown (X).
pub const ZTOX: &str = "ztox";

/// In-place mutation method on value-semantics destinations.
pub const ASSIGN: &str = "assign";

/// Free-standing old-vs-new comparison that conditionally fires an update
/// event; statically imported in the output.
pub const CHECK_UPDATE: &str = "checkUpdate";
