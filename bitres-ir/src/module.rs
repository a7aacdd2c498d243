//! Module structure: globals, functions, basic blocks, instructions.
//!
//! Enumeration order is part of the contract: globals iterate in
//! declaration order, functions in module order, blocks and instructions
//! in program order, operands left to right. Consumers may rely on this
//! order for reproducible output.

use crate::constant::Constant;
use crate::error::IrError;
use crate::types::Type;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Instruction opcode. The constant analysis never interprets these;
/// instructions are carriers for operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    Ret,
    Br,
    Add,
    Sub,
    Mul,
    Load,
    Store,
    Call,
    ICmp,
    GetElementPtr,
    Select,
    Phi,
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Opcode::Ret => "ret",
            Opcode::Br => "br",
            Opcode::Add => "add",
            Opcode::Sub => "sub",
            Opcode::Mul => "mul",
            Opcode::Load => "load",
            Opcode::Store => "store",
            Opcode::Call => "call",
            Opcode::ICmp => "icmp",
            Opcode::GetElementPtr => "getelementptr",
            Opcode::Select => "select",
            Opcode::Phi => "phi",
        };
        write!(f, "{}", name)
    }
}

/// Instruction operand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    /// A constant value
    Const(Constant),
    /// A local SSA value, by name
    Local(String),
    /// A block label
    Label(String),
}

impl Operand {
    /// The constant behind this operand, if it is one.
    pub fn as_constant(&self) -> Option<&Constant> {
        match self {
            Operand::Const(constant) => Some(constant),
            Operand::Local(_) | Operand::Label(_) => None,
        }
    }
}

/// One instruction: an opcode and its ordered operands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operands: Vec<Operand>,
}

impl Instruction {
    pub fn new(opcode: Opcode, operands: Vec<Operand>) -> Self {
        Self { opcode, operands }
    }
}

/// A basic block: a label and its instructions in program order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BasicBlock {
    pub label: String,
    pub instructions: Vec<Instruction>,
}

impl BasicBlock {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            instructions: Vec::new(),
        }
    }

    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }
}

/// A function definition: a name and its blocks in function order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub blocks: Vec<BasicBlock>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocks: Vec::new(),
        }
    }

    pub fn push_block(&mut self, block: BasicBlock) {
        self.blocks.push(block);
    }
}

/// A global definition: a name, a declared value type, and an optional
/// initializer constant of that type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Global {
    pub name: String,
    pub ty: Type,
    pub initializer: Option<Constant>,
}

impl Global {
    pub fn new(name: impl Into<String>, ty: Type, initializer: Option<Constant>) -> Self {
        Self {
            name: name.into(),
            ty,
            initializer,
        }
    }
}

/// A whole program module.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    /// Globals in declaration order
    pub globals: Vec<Global>,
    /// Functions in module order
    pub functions: Vec<Function>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            globals: Vec::new(),
            functions: Vec::new(),
        }
    }

    /// Look up a global definition by name.
    pub fn global(&self, name: &str) -> Option<&Global> {
        self.globals.iter().find(|g| g.name == name)
    }

    /// Look up a function by name.
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == name)
    }

    pub fn push_global(&mut self, global: Global) {
        self.globals.push(global);
    }

    pub fn push_function(&mut self, function: Function) {
        self.functions.push(function);
    }

    /// Serialize to a binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, IrError> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize from a binary snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IrError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
