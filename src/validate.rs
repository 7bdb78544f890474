//! # Canvas Diagnostics
//!
//! Non-fatal checks over a component list. Emission never depends on these;
//! they surface problems that would otherwise only show up as generated
//! code that does not compile, or behaves unexpectedly.

use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::canvas::{CanvasComponent, ComponentKind, ComponentType};

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// One finding, optionally tied to a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    pub message: String,
}

impl Diagnostic {
    fn error(component: &CanvasComponent, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            component_id: Some(component.id.clone()),
            message: message.into(),
        }
    }

    fn warning(component: &CanvasComponent, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            component_id: Some(component.id.clone()),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.component_id {
            Some(id) => write!(f, "{} [{}]: {}", self.severity, id, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// The declared identifier of a component: its `name` property, or the
/// literal the emitter falls back to.
fn declared_name(kind: &ComponentKind) -> Option<(Option<&str>, &'static str)> {
    Some(match kind {
        ComponentKind::StateVariable(c) => (c.name.as_deref(), "myVariable"),
        ComponentKind::Mapping(c) => (c.name.as_deref(), "myMapping"),
        ComponentKind::NestedMapping(c) => (c.name.as_deref(), "allowances"),
        ComponentKind::DiamondStorage(c) => (c.name.as_deref(), "DiamondStorage"),
        ComponentKind::Struct(c) => (c.name.as_deref(), "CustomStruct"),
        ComponentKind::Event(c) => (c.name.as_deref(), "CustomEvent"),
        ComponentKind::AccessControl(c) => (c.name.as_deref(), "onlyOwner"),
        ComponentKind::ReentrancyGuard(c) => (c.name.as_deref(), "nonReentrant"),
        ComponentKind::TimeLock(c) => (c.name.as_deref(), "onlyAfterUnlock"),
        ComponentKind::MultiSig(c) => (c.name.as_deref(), "requiresMultiSig"),
        ComponentKind::CustomModifier(c) => (c.name.as_deref(), "customModifier"),
        ComponentKind::Function(c) => (c.name.as_deref(), "myFunction"),
        ComponentKind::ViewFunction(c) => (c.name.as_deref(), "getValue"),
        ComponentKind::PayableFunction(c) => (c.name.as_deref(), "deposit"),
        ComponentKind::BatchTransfer(c) => (c.name.as_deref(), "batchTransfer"),
        _ => return None,
    })
}

/// Run every check over a component list.
///
/// Diagnostics are ordered by check, then by component order.
pub fn check(components: &[CanvasComponent]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    check_names(components, &mut diagnostics);
    check_duplicates(components, &mut diagnostics);
    check_payment_event(components, &mut diagnostics);
    check_ignored_bodies(components, &mut diagnostics);
    check_singletons(components, &mut diagnostics);
    diagnostics
}

/// Whether any diagnostic is an error.
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(|d| d.severity == Severity::Error)
}

fn check_names(components: &[CanvasComponent], out: &mut Vec<Diagnostic>) {
    for component in components {
        match declared_name(&component.kind) {
            Some((None, fallback)) => out.push(Diagnostic::warning(
                component,
                format!("{} has no name; `{}` is used", component.kind.label(), fallback),
            )),
            Some((Some(name), _)) if !IDENTIFIER.is_match(name) => out.push(Diagnostic::error(
                component,
                format!("`{}` is not a valid identifier", name),
            )),
            _ => {}
        }
    }
}

/// Same identifier declared twice in one section. Functions may be
/// overloaded, so repeats there are only a warning.
fn check_duplicates(components: &[CanvasComponent], out: &mut Vec<Diagnostic>) {
    let mut seen: HashMap<(ComponentType, &str), &str> = HashMap::new();
    for component in components {
        let Some((name, fallback)) = declared_name(&component.kind) else {
            continue;
        };
        let name = name.unwrap_or(fallback);
        let section = component.component_type();
        if let Some(first) = seen.get(&(section, name)) {
            let message = format!("`{}` is already declared by component {}", name, first);
            out.push(if section == ComponentType::Function {
                Diagnostic::warning(component, message)
            } else {
                Diagnostic::error(component, message)
            });
        } else {
            seen.insert((section, name), component.id.as_str());
        }
    }
}

/// Payable functions emit `PaymentReceived`, which the emitter never
/// declares on its own.
fn check_payment_event(components: &[CanvasComponent], out: &mut Vec<Diagnostic>) {
    let declared = components.iter().any(|c| {
        matches!(&c.kind, ComponentKind::Event(e) if e.name.as_deref() == Some("PaymentReceived"))
    });
    if declared {
        return;
    }
    for component in components {
        if matches!(component.kind, ComponentKind::PayableFunction(_)) {
            out.push(Diagnostic::error(
                component,
                "emits PaymentReceived but no event component declares it",
            ));
        }
    }
}

fn check_ignored_bodies(components: &[CanvasComponent], out: &mut Vec<Diagnostic>) {
    for component in components {
        match &component.kind {
            ComponentKind::PayableFunction(f) if f.function_body.is_some() => {
                out.push(Diagnostic::warning(
                    component,
                    "functionBody is not emitted for payable functions",
                ))
            }
            ComponentKind::BatchTransfer(f) if f.function_body.is_some() => {
                out.push(Diagnostic::warning(
                    component,
                    "functionBody is appended after the batch transfer loop",
                ))
            }
            _ => {}
        }
    }
}

/// Kinds where only the first instance takes effect.
fn check_singletons(components: &[CanvasComponent], out: &mut Vec<Diagnostic>) {
    let mut seen: HashMap<&'static str, &str> = HashMap::new();
    for component in components {
        let original_id = component.original_id();
        if !matches!(
            component.kind,
            ComponentKind::Constructor(_)
                | ComponentKind::Erc20(_)
                | ComponentKind::Erc721(_)
                | ComponentKind::DaoVoting(_)
        ) {
            continue;
        }
        match seen.get(original_id) {
            Some(first) => out.push(Diagnostic::warning(
                component,
                format!("ignored; component {} already provides {}", first, original_id),
            )),
            None => {
                seen.insert(original_id, component.id.as_str());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{BatchTransfer, Constructor, Event, Mapping, PayableFunction, StateVariable};
    use pretty_assertions::assert_eq;

    fn place(id: &str, kind: ComponentKind) -> CanvasComponent {
        CanvasComponent {
            id: id.into(),
            kind,
            x: 0.0,
            y: 0.0,
        }
    }

    fn named_event(id: &str, name: &str) -> CanvasComponent {
        place(
            id,
            ComponentKind::Event(Event {
                name: Some(name.into()),
                ..Default::default()
            }),
        )
    }

    #[test]
    fn test_clean_canvas() {
        assert!(check(&[named_event("e", "Transfer")]).is_empty());
        assert!(check(&[]).is_empty());
    }

    #[test]
    fn test_missing_payment_event() {
        let payable = place("p", ComponentKind::PayableFunction(PayableFunction::default()));
        let diagnostics = check(&[payable.clone()]);
        assert_eq!(diagnostics.len(), 2, "{:?}", diagnostics);
        assert!(has_errors(&diagnostics));
        assert!(diagnostics.iter().any(|d| d.message.contains("PaymentReceived")));

        let fixed = check(&[payable, named_event("e", "PaymentReceived")]);
        assert!(fixed.iter().all(|d| !d.message.contains("PaymentReceived")));
    }

    #[test]
    fn test_function_body_on_scaffolded_kinds() {
        let batch = place(
            "b",
            ComponentKind::BatchTransfer(BatchTransfer {
                name: Some("send".into()),
                function_body: Some("x++;".into()),
                ..Default::default()
            }),
        );
        let diagnostics = check(&[batch]);
        assert_eq!(
            diagnostics,
            vec![Diagnostic {
                severity: Severity::Warning,
                component_id: Some("b".into()),
                message: "functionBody is appended after the batch transfer loop".into(),
            }]
        );
    }

    #[test]
    fn test_missing_and_invalid_names() {
        let unnamed = place("u", ComponentKind::Mapping(Mapping::default()));
        let invalid = place(
            "i",
            ComponentKind::StateVariable(StateVariable {
                name: Some("total supply".into()),
                ..Default::default()
            }),
        );
        let diagnostics = check(&[unnamed, invalid]);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert!(diagnostics[0].message.contains("`myMapping` is used"));
        assert_eq!(diagnostics[1].severity, Severity::Error);
        assert_eq!(diagnostics[1].component_id.as_deref(), Some("i"));
    }

    #[test]
    fn test_duplicate_names_per_section() {
        let diagnostics = check(&[
            named_event("a", "Ping"),
            named_event("b", "Ping"),
            place(
                "c",
                ComponentKind::StateVariable(StateVariable {
                    name: Some("Ping".into()),
                    ..Default::default()
                }),
            ),
        ]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].component_id.as_deref(), Some("b"));
        assert_eq!(diagnostics[0].message, "`Ping` is already declared by component a");
    }

    #[test]
    fn test_second_constructor_ignored() {
        let diagnostics = check(&[
            place("c1", ComponentKind::Constructor(Constructor::default())),
            place("c2", ComponentKind::Constructor(Constructor::default())),
        ]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].to_string(), "warning [c2]: ignored; component c1 already provides constructor");
    }
}
