//! Per-category tally of constant operands.
//!
//! A single pass over every instruction operand in the module, independent
//! of the resolver. The accumulator is plain data owned by the caller, so
//! traversals can run back to back (or in test parallelism) without shared
//! state.

use bitres_ir::{Constant, Module};
use std::fmt;

/// Counts of constant operands by runtime category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryTally {
    pub total: u64,
    pub integer: u64,
    pub floating_point: u64,
    pub function: u64,
    pub null_pointer: u64,
    pub global: u64,
    pub expression: u64,
    pub unclassified: u64,
    /// Raw dumps of everything that landed in the unclassified bucket
    pub dumps: Vec<String>,
}

impl CategoryTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one constant operand.
    pub fn observe(&mut self, constant: &Constant) {
        self.total += 1;
        match constant {
            Constant::FunctionRef { .. } => self.function += 1,
            Constant::Int { .. } => self.integer += 1,
            Constant::Float { .. } => self.floating_point += 1,
            Constant::NullPtr { .. } => self.null_pointer += 1,
            Constant::GlobalRef { .. } => self.global += 1,
            Constant::Expr { .. } => self.expression += 1,
            Constant::ZeroAggregate { .. }
            | Constant::DataSequence { .. }
            | Constant::Struct { .. }
            | Constant::Array { .. }
            | Constant::VectorConst { .. }
            | Constant::BlockAddress { .. }
            | Constant::Undef { .. }
            | Constant::Opaque { .. } => {
                self.unclassified += 1;
                self.dumps.push(format!("{:?}", constant));
            }
        }
    }
}

impl fmt::Display for CategoryTally {
    /// The fixed report block written at the end of a traversal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total constants: {}", self.total)?;
        writeln!(f, "integer: {}", self.integer)?;
        writeln!(f, "floating-point: {}", self.floating_point)?;
        writeln!(f, "function: {}", self.function)?;
        writeln!(f, "null-pointer: {}", self.null_pointer)?;
        writeln!(f, "global: {}", self.global)?;
        writeln!(f, "expression: {}", self.expression)?;
        write!(f, "unclassified: {}", self.unclassified)
    }
}

/// Tally every constant instruction operand in the module.
///
/// Global initializers are not counted; the walk covers instruction
/// operands only.
pub fn tally_module(module: &Module) -> CategoryTally {
    let mut tally = CategoryTally::new();
    for function in &module.functions {
        for block in &function.blocks {
            for instruction in &block.instructions {
                for operand in &instruction.operands {
                    if let Some(constant) = operand.as_constant() {
                        tally.observe(constant);
                    }
                }
            }
        }
    }
    tally
}
