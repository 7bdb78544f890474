//! # IR Opcodes
//!
//! This module defines the intermediate representation (IR) for contract
//! emission. The IR is a flat sequence of source-level opcodes that can be
//! inspected, normalised and rendered to Solidity text.
//!
//! ## Design Philosophy
//!
//! The IR sits between canvas components and raw source text:
//!
//! ```text
//! Components → IR (inspectable) → Optimizer → Codegen → Source
//! ```
//!
//! Ops never carry indentation. Nesting is expressed with `Open`/`Close`
//! pairs and codegen derives the indent depth from them.

/// IR opcodes - the "bytecode" for contract emission.
///
/// Each variant represents a single line-level operation. The IR can be:
/// - Inspected for debugging (`{:#?}`)
/// - Normalised to remove redundant blank lines
/// - Rendered to Solidity source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// A `// ...` comment line at the current depth.
    Comment(String),

    /// A single source line at the current depth (statement or declaration).
    Line(String),

    /// Multi-line text supplied by the user (function bodies, init code).
    ///
    /// Common leading whitespace is stripped and each line is re-indented
    /// to the current depth.
    Verbatim(String),

    /// Empty line.
    Blank,

    /// Open a block: emits `<header> {` and increases depth.
    Open(String),

    /// Close the innermost block: decreases depth and emits `}`.
    Close,
}

/// A sequence of IR ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an op.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }
}
