//! # Solcraft - Visual Solidity Contract Builder
//!
//! Solcraft turns a canvas of typed building blocks into a single Solidity
//! contract, and recovers a rough canvas from pasted Solidity. It provides:
//!
//! - **Canvas model**: components keyed by `originalId`, with typed properties
//! - **Emitter**: deterministic, section-ordered Solidity generation
//! - **Importer**: line-based recognition of pasted Solidity
//! - **Diagnostics**: checks for canvases that emit non-compiling code
//! - **Pipeline**: import, compile, test, deploy and verify stages
//!
//! ## Quick Start
//!
//! ```
//! use solcraft::canvas::{Canvas, ComponentKind, StateVariable};
//!
//! let mut canvas = Canvas::new();
//! canvas.place(
//!     ComponentKind::StateVariable(StateVariable {
//!         name: Some("totalSupply".into()),
//!         data_type: Some("uint256".into()),
//!         visibility: Some("public".into()),
//!         ..Default::default()
//!     }),
//!     50.0,
//!     50.0,
//! );
//!
//! let source = canvas.emit();
//! assert!(source.contains("uint256 public totalSupply;"));
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`canvas`] | Component model and emission |
//! | [`ir`] | Line-level IR, optimizer and feature detection |
//! | [`parser`] | Solidity to components |
//! | [`validate`] | Canvas diagnostics |
//! | [`presets`] | Starter canvases |
//! | [`pipeline`] | Deployment stage runner |
//! | [`server`] | HTTP API and builder UI |
//! | [`error`] | Error types |

pub mod canvas;
pub mod error;
pub mod ir;
pub mod parser;
pub mod pipeline;
pub mod presets;
pub mod server;
pub mod validate;

// Re-exports for convenience
pub use canvas::{Canvas, CanvasComponent, ComponentKind, EmitOptions};
pub use error::SolcraftError;
