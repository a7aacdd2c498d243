//! Semantic validation of a module.
//!
//! Catches shapes the constructors cannot reject on their own:
//! - Integer widths outside 1..=64 (types and constants)
//! - Zero-lane vector types, empty data sequences
//! - References to globals, functions, or blocks the module does not define
//!
//! Validation never follows a global reference into its initializer, so a
//! self-referential initializer graph validates fine; cycles are the
//! resolver's recursion guard's problem.

use crate::constant::Constant;
use crate::error::IrError;
use crate::module::{Module, Operand};
use crate::types::Type;

/// Widest supported integer (payloads are stored in a u64).
pub const MAX_INT_BITS: u32 = 64;

impl Module {
    /// Validate every type and constant reachable from this module.
    ///
    /// Returns the first problem found, in traversal order.
    pub fn validate(&self) -> Result<(), IrError> {
        for global in &self.globals {
            check_type(&global.ty)?;
            if let Some(init) = &global.initializer {
                self.check_constant(init)?;
            }
        }
        for function in &self.functions {
            for block in &function.blocks {
                for instruction in &block.instructions {
                    for operand in &instruction.operands {
                        if let Operand::Const(constant) = operand {
                            self.check_constant(constant)?;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn check_constant(&self, constant: &Constant) -> Result<(), IrError> {
        match constant {
            Constant::Int { bits, .. } => check_width(*bits, "integer constant"),
            Constant::Float { .. } => Ok(()),
            Constant::FunctionRef { name } => {
                if self.function(name).is_none() {
                    return Err(IrError::UndefinedFunction(name.clone()));
                }
                Ok(())
            }
            Constant::GlobalRef { name } => {
                if self.global(name).is_none() {
                    return Err(IrError::UndefinedGlobal(name.clone()));
                }
                Ok(())
            }
            Constant::BlockAddress { function, block } => {
                let Some(f) = self.function(function) else {
                    return Err(IrError::UndefinedFunction(function.clone()));
                };
                if f.blocks.iter().all(|b| b.label != *block) {
                    return Err(IrError::UndefinedBlock {
                        function: function.clone(),
                        block: block.clone(),
                    });
                }
                Ok(())
            }
            Constant::ZeroAggregate { ty } => check_type(ty),
            Constant::DataSequence { elem_bits, elems } => {
                check_width(*elem_bits, "data sequence element")?;
                if elems.is_empty() {
                    return Err(IrError::EmptyDataSequence);
                }
                Ok(())
            }
            Constant::Struct { fields } => {
                fields.iter().try_for_each(|c| self.check_constant(c))
            }
            Constant::Array { elems } => elems.iter().try_for_each(|c| self.check_constant(c)),
            Constant::VectorConst { elems } => {
                elems.iter().try_for_each(|c| self.check_constant(c))
            }
            Constant::Expr { operands, .. } => {
                operands.iter().try_for_each(|c| self.check_constant(c))
            }
            Constant::NullPtr { ty } | Constant::Undef { ty } => check_type(ty),
            Constant::Opaque { .. } => Ok(()),
        }
    }
}

fn check_type(ty: &Type) -> Result<(), IrError> {
    match ty {
        Type::Void | Type::Float(_) | Type::Label => Ok(()),
        Type::Int { bits } => check_width(*bits, "integer type"),
        Type::Pointer(pointee) => check_type(pointee),
        Type::Array { elem, .. } => check_type(elem),
        Type::Struct { fields } => fields.iter().try_for_each(check_type),
        Type::Vector { elem, lanes } => {
            if *lanes == 0 {
                return Err(IrError::ZeroLaneVector);
            }
            check_type(elem)
        }
        Type::Function { ret, params } => {
            check_type(ret)?;
            params.iter().try_for_each(check_type)
        }
    }
}

fn check_width(bits: u32, context: &'static str) -> Result<(), IrError> {
    if bits == 0 || bits > MAX_INT_BITS {
        return Err(IrError::InvalidIntWidth { context, bits });
    }
    Ok(())
}
