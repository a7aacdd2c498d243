//! Constant bit-vector resolution.
//!
//! The resolver classifies a typed constant by its runtime category and
//! encodes its raw storage bit pattern as a [`BitVector`], recursing through
//! references, aggregates, and expressions until it reaches a terminal
//! scalar or gives up with the length-0 sentinel.
//!
//! # Algorithm
//!
//! 1. Dispatch on the constant's category (exhaustive, closed set)
//! 2. Scalars encode directly: integers at their declared width, floats as
//!    the 64-bit binary64 pattern of their value
//! 3. References and composites recurse: global references into their
//!    initializer, structs into their first field, arrays into a struct or
//!    expression first element, bit-identity expressions into operand 0
//! 4. Everything else degrades to the sentinel, with a [`Note`] where the
//!    shape warrants a diagnostic
//!
//! Resolution is referentially transparent: the same node always yields a
//! bit-identical vector and the same notes in the same order. The only hard
//! failure is exceeding the recursion-depth ceiling, which guards against
//! cyclic initializer graphs the host representation does not rule out.

use crate::bitvec::BitVector;
use crate::error::ResolveError;
use bitres_ir::{Category, Constant, ExprOpcode, Module, Type};
use std::fmt;

/// Default recursion-depth ceiling.
pub const DEFAULT_DEPTH_LIMIT: usize = 64;

/// Structured diagnostic emitted alongside a resolution.
///
/// Notes are data, not text: unit tests assert on them directly and the
/// traversal driver decides how to log them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Note {
    /// Category (or aggregate element category) with no encoding rule
    UnsupportedCategory { category: Category },
    /// Expression opcode outside the bit-identity set
    UnsupportedOpcode { opcode: ExprOpcode },
    /// Unclassified constant, with its raw dump
    Unclassified { dump: String },
    /// Global reference to a name the module does not define
    UnknownGlobal { name: String },
    /// One element of a data sequence, logged before packing
    SequenceElement {
        index: usize,
        value: u64,
        bits: String,
    },
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Note::UnsupportedCategory { category } => {
                write!(f, "no encoding rule for {} constant", category)
            }
            Note::UnsupportedOpcode { opcode } => {
                write!(f, "unsupported expression opcode {}", opcode)
            }
            Note::Unclassified { dump } => write!(f, "unclassified constant: {}", dump),
            Note::UnknownGlobal { name } => {
                write!(f, "global `{}` is not defined in this module", name)
            }
            Note::SequenceElement { index, value, bits } => {
                write!(f, "sequence element {}: value {} bits {}", index, value, bits)
            }
        }
    }
}

/// Outcome of resolving one constant.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    /// Encoded bit pattern; empty means "not resolved"
    pub bits: BitVector,
    /// Diagnostics gathered along the way, in encounter order
    pub notes: Vec<Note>,
}

/// Resolves constants against one module.
///
/// Borrows the module read-only for its lifetime; the module supplies
/// global initializers when a global reference is followed.
pub struct Resolver<'m> {
    module: &'m Module,
    depth_limit: usize,
}

impl<'m> Resolver<'m> {
    pub fn new(module: &'m Module) -> Self {
        Self::with_depth_limit(module, DEFAULT_DEPTH_LIMIT)
    }

    /// Resolver with a custom recursion-depth ceiling.
    pub fn with_depth_limit(module: &'m Module, depth_limit: usize) -> Self {
        Self {
            module,
            depth_limit,
        }
    }

    /// Resolve one constant to its bit pattern.
    ///
    /// Unsupported or partially handled shapes yield the sentinel plus
    /// notes; the only error is blowing the recursion-depth ceiling.
    pub fn resolve(&self, constant: &Constant) -> Result<Resolution, ResolveError> {
        let mut notes = Vec::new();
        let bits = self.resolve_at(constant, 0, &mut notes)?;
        Ok(Resolution { bits, notes })
    }

    fn resolve_at(
        &self,
        constant: &Constant,
        depth: usize,
        notes: &mut Vec<Note>,
    ) -> Result<BitVector, ResolveError> {
        if depth > self.depth_limit {
            return Err(ResolveError::DepthLimitExceeded {
                limit: self.depth_limit,
            });
        }
        match constant {
            // Functions carry no data bit pattern at this level.
            Constant::FunctionRef { .. } => Ok(BitVector::empty()),

            Constant::Int { bits, value } => Ok(BitVector::from_word(*value, *bits as usize)),

            // Fixed-width policy: always the binary64 pattern, whatever the
            // declared precision.
            Constant::Float { value, .. } => Ok(BitVector::from_word(value.to_bits(), 64)),

            Constant::GlobalRef { name } => {
                let Some(global) = self.module.global(name) else {
                    notes.push(Note::UnknownGlobal { name: name.clone() });
                    return Ok(BitVector::empty());
                };
                let Some(init) = &global.initializer else {
                    return Ok(BitVector::empty());
                };
                if admits_initializer(&global.ty) {
                    self.resolve_at(init, depth + 1, notes)
                } else {
                    Ok(BitVector::empty())
                }
            }

            // Not expanded into an actual zero-filled vector.
            Constant::ZeroAggregate { .. } => Ok(BitVector::empty()),

            Constant::DataSequence { elem_bits, elems } => {
                for (index, &value) in elems.iter().enumerate() {
                    notes.push(Note::SequenceElement {
                        index,
                        value,
                        bits: element_bits(value, *elem_bits),
                    });
                }
                Ok(BitVector::pack_msb_first(elems, *elem_bits))
            }

            Constant::Struct { fields } => {
                // Mixed code/data records: a function reference in the
                // second field means this is not plain data.
                if matches!(fields.get(1), Some(Constant::FunctionRef { .. })) {
                    return Ok(BitVector::empty());
                }
                // First field only; remaining fields are dropped.
                match fields.first() {
                    Some(first) => self.resolve_at(first, depth + 1, notes),
                    None => Ok(BitVector::empty()),
                }
            }

            Constant::Array { elems } => match elems.first() {
                Some(first)
                    if matches!(first, Constant::Struct { .. } | Constant::Expr { .. }) =>
                {
                    self.resolve_at(first, depth + 1, notes)
                }
                Some(Constant::NullPtr { .. }) => Ok(BitVector::empty()),
                Some(other) => {
                    notes.push(Note::UnsupportedCategory {
                        category: other.category(),
                    });
                    Ok(BitVector::empty())
                }
                None => {
                    notes.push(Note::UnsupportedCategory {
                        category: Category::Array,
                    });
                    Ok(BitVector::empty())
                }
            },

            Constant::Expr { opcode, operands } => {
                if matches!(operands.first(), Some(Constant::FunctionRef { .. })) {
                    return Ok(BitVector::empty());
                }
                match operands.first() {
                    Some(base) if opcode.is_bit_identity() => {
                        // Identity with respect to the bit pattern.
                        self.resolve_at(base, depth + 1, notes)
                    }
                    _ => {
                        notes.push(Note::UnsupportedOpcode { opcode: *opcode });
                        Ok(BitVector::empty())
                    }
                }
            }

            Constant::NullPtr { .. }
            | Constant::Undef { .. }
            | Constant::VectorConst { .. }
            | Constant::BlockAddress { .. } => Ok(BitVector::empty()),

            Constant::Opaque { dump } => {
                notes.push(Note::Unclassified { dump: dump.clone() });
                Ok(BitVector::empty())
            }
        }
    }
}

/// Global value types whose initializer is worth descending into.
fn admits_initializer(ty: &Type) -> bool {
    matches!(
        ty,
        Type::Int { .. } | Type::Struct { .. } | Type::Array { .. } | Type::Pointer(_)
    )
}

/// Per-element bit string, most-significant bit first.
fn element_bits(value: u64, elem_bits: u32) -> String {
    (0..elem_bits)
        .rev()
        .map(|bit| if (value >> bit) & 1 == 1 { '1' } else { '0' })
        .collect()
}
