//! Module traversal: resolve, render, and report.
//!
//! Traversal order is a contract, not an implementation detail: globals in
//! declaration order (the reference, then its initializer), then functions
//! in module order (the reference, then every constant instruction operand
//! left to right, block by block). Golden-output tests rely on it.

use crate::error::AnalysisError;
use crate::render::render;
use crate::resolver::{Note, Resolution, Resolver};
use crate::tally::{tally_module, CategoryTally};
use bitres_ir::{Constant, Module};
use std::io::Write;

/// Resolve and render every constant reachable from the module, writing
/// rendered lines to `sink`. Sentinel results produce no line.
pub fn traverse<W: Write>(
    module: &Module,
    resolver: &Resolver<'_>,
    sink: &mut W,
) -> Result<(), AnalysisError> {
    for global in &module.globals {
        let reference = Constant::GlobalRef {
            name: global.name.clone(),
        };
        emit(resolver, &reference, sink)?;
        if let Some(init) = &global.initializer {
            emit(resolver, init, sink)?;
        }
    }
    for function in &module.functions {
        let reference = Constant::FunctionRef {
            name: function.name.clone(),
        };
        emit(resolver, &reference, sink)?;
        for block in &function.blocks {
            for instruction in &block.instructions {
                for operand in &instruction.operands {
                    if let Some(constant) = operand.as_constant() {
                        emit(resolver, constant, sink)?;
                    }
                }
            }
        }
    }
    Ok(())
}

fn emit<W: Write>(
    resolver: &Resolver<'_>,
    constant: &Constant,
    sink: &mut W,
) -> Result<(), AnalysisError> {
    let Resolution { bits, notes } = resolver.resolve(constant)?;
    for note in &notes {
        log_note(note);
    }
    if let Some(line) = render(&bits) {
        writeln!(sink, "{}", line)?;
    }
    Ok(())
}

fn log_note(note: &Note) {
    match note {
        Note::SequenceElement { .. } => tracing::debug!("{}", note),
        Note::UnsupportedCategory { .. }
        | Note::UnsupportedOpcode { .. }
        | Note::Unclassified { .. }
        | Note::UnknownGlobal { .. } => tracing::warn!("{}", note),
    }
}

/// Run the whole analysis: tally, traversal, and the final report block.
///
/// Returns the tally so callers can inspect counts programmatically. The
/// module is never mutated.
pub fn run_analysis<W: Write>(
    module: &Module,
    sink: &mut W,
) -> Result<CategoryTally, AnalysisError> {
    let tally = tally_module(module);
    let resolver = Resolver::new(module);
    traverse(module, &resolver, sink)?;
    writeln!(sink, "{}", tally)?;
    Ok(tally)
}
