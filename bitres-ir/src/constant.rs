//! Typed constant values and their runtime categories.
//!
//! A constant is an immutable node: a runtime category, a declared shape,
//! and zero or more ordered sub-constants. The taxonomy is a closed set so
//! every consumer matches exhaustively; adding a category is a compile
//! error everywhere it is not handled.

use crate::types::{FloatPrecision, Type};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opcode of a constant expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExprOpcode {
    /// Address computation over a base constant
    GetElementPtr,
    /// Reinterpret the operand's bits at another type
    BitCast,
    /// Integer reinterpreted as a pointer
    IntToPtr,
    /// Pointer reinterpreted as an integer
    PtrToInt,
    /// Truncate to a narrower integer
    Trunc,
    Add,
    Sub,
    Mul,
}

impl ExprOpcode {
    /// Opcodes whose result carries the bit pattern of operand 0 unchanged.
    pub fn is_bit_identity(self) -> bool {
        matches!(
            self,
            ExprOpcode::GetElementPtr
                | ExprOpcode::BitCast
                | ExprOpcode::IntToPtr
                | ExprOpcode::PtrToInt
        )
    }
}

impl fmt::Display for ExprOpcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExprOpcode::GetElementPtr => "getelementptr",
            ExprOpcode::BitCast => "bitcast",
            ExprOpcode::IntToPtr => "inttoptr",
            ExprOpcode::PtrToInt => "ptrtoint",
            ExprOpcode::Trunc => "trunc",
            ExprOpcode::Add => "add",
            ExprOpcode::Sub => "sub",
            ExprOpcode::Mul => "mul",
        };
        write!(f, "{}", name)
    }
}

/// Runtime category of a constant (closed set).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Function,
    Int,
    Float,
    Global,
    ZeroAggregate,
    DataSequence,
    Struct,
    Array,
    Expr,
    NullPtr,
    Undef,
    Vector,
    BlockAddress,
    Opaque,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Function => "function",
            Category::Int => "integer",
            Category::Float => "floating-point",
            Category::Global => "global",
            Category::ZeroAggregate => "zero-aggregate",
            Category::DataSequence => "data-sequence",
            Category::Struct => "struct",
            Category::Array => "array",
            Category::Expr => "expression",
            Category::NullPtr => "null-pointer",
            Category::Undef => "undef",
            Category::Vector => "vector",
            Category::BlockAddress => "block-address",
            Category::Opaque => "unclassified",
        };
        write!(f, "{}", name)
    }
}

/// A typed constant value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Constant {
    // ========== Scalars ==========
    /// Integer scalar. `value` holds the two's-complement magnitude
    /// truncated to `bits` (supported widths: 1..=64).
    Int { bits: u32, value: u64 },

    /// Floating-point scalar. The raw pattern accessor always yields the
    /// binary64 pattern of `value`, whatever the declared precision.
    Float { precision: FloatPrecision, value: f64 },

    // ========== References ==========
    /// Reference to a function symbol. Carries no data bit pattern.
    FunctionRef { name: String },

    /// Reference to a global definition by name; the initializer lives on
    /// the owning module's `Global`.
    GlobalRef { name: String },

    /// Address of a basic block inside a function.
    BlockAddress { function: String, block: String },

    // ========== Aggregates ==========
    /// Aggregate with every field zero.
    ZeroAggregate { ty: Type },

    /// Homogeneous flat sequence of primitive integer elements, each
    /// `elem_bits` wide (1..=64), in declared order.
    DataSequence { elem_bits: u32, elems: Vec<u64> },

    /// Structure aggregate with ordered fields.
    Struct { fields: Vec<Constant> },

    /// Array aggregate with ordered elements.
    Array { elems: Vec<Constant> },

    /// Vector aggregate with ordered lanes.
    VectorConst { elems: Vec<Constant> },

    // ========== Expressions ==========
    /// Constant expression: an opcode over constant operands.
    Expr {
        opcode: ExprOpcode,
        operands: Vec<Constant>,
    },

    // ========== Degenerate ==========
    /// Null pointer of the given pointee type.
    NullPtr { ty: Type },

    /// Undefined value of the given type.
    Undef { ty: Type },

    /// Catch-all for constants the model does not classify further. Keeps
    /// a textual dump of the original node for diagnostics.
    Opaque { dump: String },
}

impl Constant {
    /// Integer constant, with the payload masked to the declared width.
    pub fn int(bits: u32, value: u64) -> Self {
        let value = if bits >= 64 {
            value
        } else {
            value & ((1u64 << bits) - 1)
        };
        Constant::Int { bits, value }
    }

    /// Single-precision float constant (widened losslessly to f64).
    pub fn single(value: f32) -> Self {
        Constant::Float {
            precision: FloatPrecision::Single,
            value: value as f64,
        }
    }

    /// Double-precision float constant.
    pub fn double(value: f64) -> Self {
        Constant::Float {
            precision: FloatPrecision::Double,
            value,
        }
    }

    /// Runtime category of this constant.
    pub fn category(&self) -> Category {
        match self {
            Constant::Int { .. } => Category::Int,
            Constant::Float { .. } => Category::Float,
            Constant::FunctionRef { .. } => Category::Function,
            Constant::GlobalRef { .. } => Category::Global,
            Constant::BlockAddress { .. } => Category::BlockAddress,
            Constant::ZeroAggregate { .. } => Category::ZeroAggregate,
            Constant::DataSequence { .. } => Category::DataSequence,
            Constant::Struct { .. } => Category::Struct,
            Constant::Array { .. } => Category::Array,
            Constant::VectorConst { .. } => Category::Vector,
            Constant::Expr { .. } => Category::Expr,
            Constant::NullPtr { .. } => Category::NullPtr,
            Constant::Undef { .. } => Category::Undef,
            Constant::Opaque { .. } => Category::Opaque,
        }
    }

    /// Raw integer payload: `(bits, value)` for the integer category.
    pub fn int_payload(&self) -> Option<(u32, u64)> {
        match self {
            Constant::Int { bits, value } => Some((*bits, *value)),
            _ => None,
        }
    }

    /// Raw 64-bit IEEE-754 pattern for the floating-point category.
    pub fn float_pattern(&self) -> Option<u64> {
        match self {
            Constant::Float { value, .. } => Some(value.to_bits()),
            _ => None,
        }
    }

    /// Ordered sub-constants of aggregates and expressions.
    pub fn operands(&self) -> &[Constant] {
        match self {
            Constant::Struct { fields } => fields,
            Constant::Array { elems } => elems,
            Constant::VectorConst { elems } => elems,
            Constant::Expr { operands, .. } => operands,
            Constant::Int { .. }
            | Constant::Float { .. }
            | Constant::FunctionRef { .. }
            | Constant::GlobalRef { .. }
            | Constant::BlockAddress { .. }
            | Constant::ZeroAggregate { .. }
            | Constant::DataSequence { .. }
            | Constant::NullPtr { .. }
            | Constant::Undef { .. }
            | Constant::Opaque { .. } => &[],
        }
    }
}
