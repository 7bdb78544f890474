//! # Intermediate Representation (IR)
//!
//! This module provides the IR layer for contract emission. The IR is a
//! line-level representation that sits between canvas components and the
//! final Solidity text.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌───────────┐     ┌──────────┐
//! │ Components  │ ──► │     IR      │ ──► │ Optimizer │ ──► │ Codegen  │
//! │  (canvas)   │     │  (Vec<Op>)  │     │           │     │ (source) │
//! └─────────────┘     └─────────────┘     └───────────┘     └──────────┘
//!        │                                                        ▲
//!        └──────── analyze: imports / bases / interfaces ─────────┘
//! ```
//!
//! ## Benefits of IR
//!
//! 1. **Inspectable**: see which declarations a canvas produces
//! 2. **Normalised**: section emitters never worry about blank lines
//! 3. **Testable**: unit test components without string matching
//!
//! ## Example
//!
//! ```
//! use solcraft::ir::{Op, Program};
//!
//! let mut program = Program::new();
//! program.push(Op::Open("contract A".into()));
//! program.push(Op::Blank);
//! program.push(Op::Line("uint256 x;".into()));
//! program.push(Op::Close);
//!
//! let source = program.optimize().to_source();
//! assert_eq!(source, "contract A {\n    uint256 x;\n}\n");
//! ```

mod analyze;
mod codegen;
mod ops;
mod optimize;

pub use analyze::{Features, Interface, Marker};
// Re-export the ops types (codegen and optimize add methods to Program via impl)
pub use ops::*;
