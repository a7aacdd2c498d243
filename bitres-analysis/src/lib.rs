//! # Constant Bit-Vector Analysis
//!
//! Read-only analysis over an IR program graph: for every constant value
//! reachable from global definitions and instruction operands, compute a
//! canonical bit-level encoding of its raw storage representation.
//!
//! ## Components
//! - [`bitvec::BitVector`] — fixed-length bit sequence; length 0 is the
//!   "not resolved" sentinel
//! - [`resolver::Resolver`] — the recursive classify-and-encode core
//! - [`render::render`] — binary-string rendering, sentinel suppressed
//! - [`tally::CategoryTally`] — per-category operand counts
//! - [`driver`] — deterministic module traversal tying it all together
//!
//! ## Example
//!
//! ```
//! use bitres_ir::{Constant, Global, Module, Type};
//! use bitres_analysis::run_analysis;
//!
//! let mut module = Module::new("demo");
//! module.push_global(Global::new(
//!     "answer",
//!     Type::int(32),
//!     Some(Constant::int(32, 42)),
//! ));
//!
//! let mut out = Vec::new();
//! let tally = run_analysis(&module, &mut out).unwrap();
//! assert_eq!(tally.total, 0); // no instruction operands in this module
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("00000000000000000000000000101010"));
//! ```

pub mod bitvec;
pub mod driver;
pub mod error;
pub mod render;
pub mod resolver;
pub mod tally;

pub use bitvec::BitVector;
pub use driver::{run_analysis, traverse};
pub use error::{AnalysisError, ResolveError};
pub use render::render;
pub use resolver::{Note, Resolution, Resolver, DEFAULT_DEPTH_LIMIT};
pub use tally::{tally_module, CategoryTally};
