//! # IR Program Graph
//!
//! Immutable program representation consumed by the constant analysis:
//! global definitions, functions, basic blocks, instructions, and typed
//! constant values.
//!
//! ## Key Features
//! - Closed constant taxonomy (scalars, references, aggregates, expressions)
//! - Ordered enumeration: globals in declaration order, functions in module
//!   order, blocks and instructions in program order
//! - Scalar payload accessors (raw integer value + width, raw float pattern)
//! - Semantic validation (`Module::validate`)
//! - Binary snapshots via bincode (`Module::to_bytes` / `Module::from_bytes`)
//!
//! The analysis side only ever reads this model; nothing here mutates a
//! module once it is built.

pub mod constant;
pub mod error;
pub mod module;
pub mod types;
pub mod validation;

pub use constant::{Category, Constant, ExprOpcode};
pub use error::IrError;
pub use module::{BasicBlock, Function, Global, Instruction, Module, Opcode, Operand};
pub use types::{FloatPrecision, Type};
pub use validation::MAX_INT_BITS;
