//! # Solidity Import
//!
//! Best-effort reverse mapping from pasted Solidity to canvas components.
//!
//! The input is scanned line by line against a fixed set of patterns, in
//! priority order:
//!
//! | Pattern | Component |
//! |---------|-----------|
//! | `uint256 public totalSupply = 1000;` | `state-variable` |
//! | `function f(uint256 a) external view returns (bool)` | `function` |
//! | `event Transfer(address from, address to);` | `event` |
//! | `mapping(address => uint256) public balances;` | `mapping` |
//! | `constructor(address admin)` | `constructor` |
//!
//! First match wins. Everything else (modifiers, structs, comments, bodies,
//! multi-line signatures) is skipped, so `parse(emit(x))` is generally a
//! strict subset of `x`.
//!
//! Recognised components are laid out on a vertical grid: `x` is fixed and
//! `y` advances by [`ROW_SPACING`] per recognised line.

use regex::{Captures, Regex};
use serde::Serialize;
use std::sync::LazyLock;
use tracing::{debug, info};

use crate::canvas::{
    CanvasComponent, ComponentKind, Constructor, Event, Function, Mapping, StateVariable,
};

/// Column of every imported component.
pub const ORIGIN_X: f64 = 50.0;
/// Row of the first imported component.
pub const ORIGIN_Y: f64 = 50.0;
/// Vertical distance between imported components.
pub const ROW_SPACING: f64 = 150.0;

static STATE_VARIABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(uint\d*|int\d*|address(?:\s+payable)?|bool|string|bytes\d*)\s+(?:(public|private|internal)\s+)?(?:(constant|immutable)\s+)?(\w+)\s*(?:=\s*([^;]+?))?\s*;",
    )
    .expect("state variable pattern is valid")
});

static FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*function\s+(\w+)\s*\(([^)]*)\)\s*(public|private|internal|external)?\s*(view|pure|payable)?\s*(?:returns\s*\(([^)]*)\))?",
    )
    .expect("function pattern is valid")
});

static EVENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*event\s+(\w+)\s*\(([^)]*)\)\s*(anonymous)?\s*;")
        .expect("event pattern is valid")
});

static MAPPING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*mapping\s*\(\s*([\w\s]+?)\s*=>\s*([\w\s\[\]]+?)\s*\)\s*(public|private|internal)?\s*(\w+)\s*;",
    )
    .expect("mapping pattern is valid")
});

static CONSTRUCTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*constructor\s*\(([^)]*)\)").expect("constructor pattern is valid")
});

/// Result of scanning pasted source.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseOutcome {
    /// Recognised components, in source order.
    pub components: Vec<CanvasComponent>,
    /// Non-blank lines that matched no pattern.
    pub skipped: usize,
}

/// Scan `source` and rebuild a component list. Never fails.
pub fn parse(source: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    let mut y = ORIGIN_Y;

    for (number, line) in source.lines().enumerate() {
        match recognise(line) {
            Some(kind) => {
                debug!(line = number + 1, original_id = kind.original_id(), "recognised");
                outcome.components.push(CanvasComponent::new(kind, ORIGIN_X, y));
                y += ROW_SPACING;
            }
            None if line.trim().is_empty() => {}
            None => {
                debug!(line = number + 1, text = line.trim(), "skipped");
                outcome.skipped += 1;
            }
        }
    }

    info!(
        recognised = outcome.components.len(),
        skipped = outcome.skipped,
        "parsed solidity source"
    );
    outcome
}

/// Match one line against the patterns in priority order.
pub fn recognise(line: &str) -> Option<ComponentKind> {
    if let Some(caps) = STATE_VARIABLE.captures(line) {
        let modifier = text(&caps, 3);
        return Some(ComponentKind::StateVariable(StateVariable {
            data_type: text(&caps, 1).map(collapse_whitespace),
            visibility: Some(text(&caps, 2).unwrap_or("internal").to_string()),
            constant: modifier == Some("constant"),
            immutable: modifier == Some("immutable"),
            name: owned(&caps, 4),
            default_value: owned(&caps, 5),
        }));
    }

    if let Some(caps) = FUNCTION.captures(line) {
        let mutability = text(&caps, 4);
        return Some(ComponentKind::Function(Function {
            name: owned(&caps, 1),
            parameters: owned(&caps, 2),
            visibility: Some(text(&caps, 3).unwrap_or("public").to_string()),
            view: mutability == Some("view"),
            pure: mutability == Some("pure"),
            payable: mutability == Some("payable"),
            returns: owned(&caps, 5),
            ..Default::default()
        }));
    }

    if let Some(caps) = EVENT.captures(line) {
        return Some(ComponentKind::Event(Event {
            name: owned(&caps, 1),
            parameters: owned(&caps, 2),
            anonymous: caps.get(3).is_some(),
        }));
    }

    if let Some(caps) = MAPPING.captures(line) {
        return Some(ComponentKind::Mapping(Mapping {
            key_type: text(&caps, 1).map(collapse_whitespace),
            value_type: text(&caps, 2).map(collapse_whitespace),
            visibility: Some(text(&caps, 3).unwrap_or("internal").to_string()),
            name: owned(&caps, 4),
        }));
    }

    if let Some(caps) = CONSTRUCTOR.captures(line) {
        return Some(ComponentKind::Constructor(Constructor {
            parameters: owned(&caps, 1),
            init_code: None,
        }));
    }

    None
}

/// A capture group's trimmed text, `None` when absent or blank.
fn text<'a>(caps: &Captures<'a>, group: usize) -> Option<&'a str> {
    caps.get(group)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
}

fn owned(caps: &Captures<'_>, group: usize) -> Option<String> {
    text(caps, group).map(str::to_string)
}

/// `address   payable` → `address payable`
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
