//! Static type model for the IR program graph.
//!
//! A `Type` describes the declared storage shape of a value. Types carry
//! declared widths only; layout policy (alignment, padding) is out of scope.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Floating-point precision of a `Type::Float`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatPrecision {
    /// IEEE-754 binary32
    Single,
    /// IEEE-754 binary64
    Double,
}

/// Static type of a value in the program graph.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Void,
    /// Integer with a declared bit width (supported widths: 1..=64)
    Int { bits: u32 },
    Float(FloatPrecision),
    Pointer(Box<Type>),
    Array { elem: Box<Type>, len: u64 },
    Struct { fields: Vec<Type> },
    Vector { elem: Box<Type>, lanes: u32 },
    Function { ret: Box<Type>, params: Vec<Type> },
    Label,
}

impl Type {
    /// Integer type of the given width.
    pub fn int(bits: u32) -> Self {
        Type::Int { bits }
    }

    /// Pointer to `pointee`.
    pub fn ptr(pointee: Type) -> Self {
        Type::Pointer(Box::new(pointee))
    }

    /// Array of `len` elements of `elem`.
    pub fn array(elem: Type, len: u64) -> Self {
        Type::Array {
            elem: Box::new(elem),
            len,
        }
    }

    /// Structure with the given field types.
    pub fn structure(fields: Vec<Type>) -> Self {
        Type::Struct { fields }
    }

    /// Vector of `lanes` elements of `elem`.
    pub fn vector(elem: Type, lanes: u32) -> Self {
        Type::Vector {
            elem: Box::new(elem),
            lanes,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => write!(f, "void"),
            Type::Int { bits } => write!(f, "i{}", bits),
            Type::Float(FloatPrecision::Single) => write!(f, "float"),
            Type::Float(FloatPrecision::Double) => write!(f, "double"),
            Type::Pointer(pointee) => write!(f, "{}*", pointee),
            Type::Array { elem, len } => write!(f, "[{} x {}]", len, elem),
            Type::Struct { fields } => {
                write!(f, "{{ ")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", field)?;
                }
                write!(f, " }}")
            }
            Type::Vector { elem, lanes } => write!(f, "<{} x {}>", lanes, elem),
            Type::Function { ret, params } => {
                write!(f, "{} (", ret)?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", param)?;
                }
                write!(f, ")")
            }
            Type::Label => write!(f, "label"),
        }
    }
}
