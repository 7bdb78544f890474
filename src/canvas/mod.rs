//! # Canvas Model
//!
//! The visual builder's component list, as a single type hierarchy that is
//! both the Rust API and the JSON record format.
//!
//! ```
//! use solcraft::canvas::{Canvas, CanvasComponent, ComponentKind, Mapping};
//!
//! let mut canvas = Canvas::new();
//! canvas
//!     .add(CanvasComponent::new(
//!         ComponentKind::Mapping(Mapping {
//!             name: Some("balances".into()),
//!             visibility: Some("public".into()),
//!             ..Default::default()
//!         }),
//!         50.0,
//!         50.0,
//!     ))
//!     .unwrap();
//!
//! let source = canvas.emit();
//! assert!(source.contains("mapping(address => uint256) public balances;"));
//! ```
//!
//! ## Emission order
//!
//! Components are grouped by [`ComponentType`], never re-sorted by position:
//!
//! ```text
//! license/pragma → imports → interfaces → contract header → errors
//!   → structs → state variables → events → modifiers → constructor
//!   → functions → }
//! ```

pub mod types;

mod declarations;
mod functions;
mod modifiers;
mod templates;

pub use types::*;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::debug;
use uuid::Uuid;

use crate::error::CanvasError;
use crate::ir::{Features, Op, Program};
use crate::parser::{self, ParseOutcome};

// ============================================================================
// EMIT CONTEXT
// ============================================================================

/// Context passed to component `emit()` methods, carrying the ops buffer.
pub struct EmitContext {
    /// The IR ops buffer being built.
    pub ops: Vec<Op>,
}

impl Default for EmitContext {
    fn default() -> Self {
        Self::new()
    }
}

impl EmitContext {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn line(&mut self, text: impl Into<String>) {
        self.ops.push(Op::Line(text.into()));
    }

    pub fn comment(&mut self, text: impl Into<String>) {
        self.ops.push(Op::Comment(text.into()));
    }

    pub fn verbatim(&mut self, text: impl Into<String>) {
        self.ops.push(Op::Verbatim(text.into()));
    }

    pub fn blank(&mut self) {
        self.ops.push(Op::Blank);
    }

    pub fn open(&mut self, header: impl Into<String>) {
        self.ops.push(Op::Open(header.into()));
    }

    pub fn close(&mut self) {
        self.ops.push(Op::Close);
    }
}

/// Contract-level emission options.
///
/// Defaults reproduce the fixed header: MIT licence, `^0.8.20` pragma and
/// a contract named `GeneratedContract`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmitOptions {
    pub contract_name: String,
    pub license: String,
    pub pragma: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            contract_name: "GeneratedContract".into(),
            license: "MIT".into(),
            pragma: "^0.8.20".into(),
        }
    }
}

/// Custom errors declared by every generated contract.
pub const CUSTOM_ERRORS: [&str; 4] = [
    "Unauthorized",
    "InsufficientBalance",
    "InvalidInput",
    "TransferFailed",
];

// ============================================================================
// COMPONENT KINDS
// ============================================================================

/// Define the ComponentKind enum and all dispatch methods from a single list.
///
/// Adding a new component kind: add one line here, then define the struct
/// in `types.rs` with `impl ComponentMeta` and an `emit` method.
macro_rules! define_components {
    ($($variant:ident($inner:ty) = $id:literal, $category:ident;)+) => {
        /// Closed set of component kinds, one per `originalId`.
        ///
        /// The `originalId` is the dispatch key for emission; the coarse
        /// [`ComponentType`] is derived from it.
        #[derive(Debug, Clone, PartialEq)]
        pub enum ComponentKind {
            $($variant($inner),)+
        }

        impl ComponentKind {
            /// Every recognised `originalId`, in library order.
            pub const ORIGINAL_IDS: &'static [&'static str] = &[$($id,)+];

            /// The template/library identifier this kind was cloned from.
            pub fn original_id(&self) -> &'static str {
                match self { $(ComponentKind::$variant(_) => $id,)+ }
            }

            /// Coarse category used for section placement.
            pub fn component_type(&self) -> ComponentType {
                match self { $(ComponentKind::$variant(_) => ComponentType::$category,)+ }
            }

            /// Human-readable display label (from [`ComponentMeta::label`]).
            pub fn label(&self) -> &'static str {
                match self { $(ComponentKind::$variant(_) => <$inner>::label(),)+ }
            }

            pub fn icon(&self) -> &'static str {
                match self { $(ComponentKind::$variant(_) => <$inner>::icon(),)+ }
            }

            pub fn color(&self) -> &'static str {
                match self { $(ComponentKind::$variant(_) => <$inner>::color(),)+ }
            }

            /// Emit IR ops for this component's own declaration.
            ///
            /// Templates and the constructor emit nothing here; their
            /// effect flows through feature detection.
            pub fn emit(&self, ctx: &mut EmitContext) {
                match self { $(ComponentKind::$variant(c) => c.emit(ctx),)+ }
            }

            /// Build a kind from its `originalId` and JSON property object.
            pub fn from_properties(original_id: &str, properties: Value) -> Result<Self, CanvasError> {
                let properties = match properties {
                    Value::Null => Value::Object(Map::new()),
                    obj @ Value::Object(_) => obj,
                    _ => return Err(CanvasError::PropertiesNotAnObject),
                };
                let invalid = |e: serde_json::Error| CanvasError::InvalidProperties {
                    original_id: original_id.to_string(),
                    message: e.to_string(),
                };
                match original_id {
                    $($id => serde_json::from_value::<$inner>(properties)
                        .map(ComponentKind::$variant)
                        .map_err(invalid),)+
                    other => Err(CanvasError::UnknownOriginalId(other.to_string())),
                }
            }

            /// The property object as it appears in the JSON record.
            pub fn properties(&self) -> Map<String, Value> {
                let value = match self { $(ComponentKind::$variant(c) => serde_json::to_value(c),)+ };
                match value {
                    Ok(Value::Object(map)) => map,
                    _ => Map::new(),
                }
            }

            /// Editor defaults for every kind (from [`ComponentMeta::editor_default`]).
            ///
            /// Single source of truth for [`component_library`] and [`default_component`].
            pub fn all_editor_defaults() -> Vec<Self> {
                vec![$(ComponentKind::$variant(<$inner>::editor_default()),)+]
            }
        }
    };
}

define_components! {
    StateVariable(StateVariable) = "state-variable", Variable;
    Mapping(Mapping) = "mapping", Variable;
    NestedMapping(NestedMapping) = "nested-mapping", Variable;
    DiamondStorage(DiamondStorage) = "diamond-storage", Variable;
    Struct(StructDef) = "struct", Struct;
    Event(Event) = "event", Event;
    AccessControl(AccessControl) = "access-control", Modifier;
    ReentrancyGuard(ReentrancyGuard) = "reentrancy-guard", Modifier;
    TimeLock(TimeLock) = "time-lock", Modifier;
    MultiSig(MultiSig) = "multi-sig", Modifier;
    CustomModifier(CustomModifier) = "custom-modifier", Modifier;
    Function(Function) = "function", Function;
    ViewFunction(ViewFunction) = "view-function", Function;
    PayableFunction(PayableFunction) = "payable-function", Function;
    BatchTransfer(BatchTransfer) = "batch-transfer", Function;
    Constructor(Constructor) = "constructor", Function;
    Erc20(Erc20) = "erc20-advanced", Template;
    Erc721(Erc721) = "erc721", Template;
    DaoVoting(DaoVoting) = "dao-voting", Template;
    FlashLoan(FlashLoan) = "flash-loan", Template;
    UpgradeableProxy(UpgradeableProxy) = "upgradeable-proxy", Template;
    ChainlinkPriceFeed(ChainlinkPriceFeed) = "chainlink-price-feed", Template;
}

// ============================================================================
// CANVAS COMPONENT
// ============================================================================

/// One building block on the canvas.
///
/// Serializes to the builder's record shape:
/// `{"id", "originalId", "type", "properties", "x", "y"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ComponentRecord", into = "ComponentRecord")]
pub struct CanvasComponent {
    /// Unique instance id. Never reused.
    pub id: String,
    pub kind: ComponentKind,
    /// Canvas position. Irrelevant to emitted code.
    pub x: f64,
    pub y: f64,
}

impl CanvasComponent {
    /// Create a component with a freshly generated id.
    pub fn new(kind: ComponentKind, x: f64, y: f64) -> Self {
        Self {
            id: fresh_id(),
            kind,
            x,
            y,
        }
    }

    pub fn original_id(&self) -> &'static str {
        self.kind.original_id()
    }

    pub fn component_type(&self) -> ComponentType {
        self.kind.component_type()
    }
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// Wire form of [`CanvasComponent`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComponentRecord {
    /// Missing ids are assigned on load.
    #[serde(default)]
    id: Option<String>,
    original_id: String,
    /// Optional on input; checked against the `originalId` when present.
    #[serde(rename = "type", default)]
    component_type: Option<ComponentType>,
    #[serde(default)]
    properties: Value,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
}

impl TryFrom<ComponentRecord> for CanvasComponent {
    type Error = CanvasError;

    fn try_from(record: ComponentRecord) -> Result<Self, Self::Error> {
        let kind = ComponentKind::from_properties(&record.original_id, record.properties)?;

        if let Some(found) = record.component_type
            && found != kind.component_type()
        {
            return Err(CanvasError::TypeMismatch {
                original_id: record.original_id,
                expected: kind.component_type(),
                found,
            });
        }

        Ok(Self {
            id: record.id.filter(|id| !id.is_empty()).unwrap_or_else(fresh_id),
            kind,
            x: record.x,
            y: record.y,
        })
    }
}

impl From<CanvasComponent> for ComponentRecord {
    fn from(component: CanvasComponent) -> Self {
        Self {
            id: Some(component.id),
            original_id: component.kind.original_id().to_string(),
            component_type: Some(component.kind.component_type()),
            properties: Value::Object(component.kind.properties()),
            x: component.x,
            y: component.y,
        }
    }
}

// ============================================================================
// CANVAS
// ============================================================================

/// Deserialize a component list, rejecting duplicate ids.
fn deserialize_unique<'de, D>(deserializer: D) -> Result<Vec<CanvasComponent>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let components: Vec<CanvasComponent> = Vec::deserialize(deserializer)?;
    let mut seen = HashSet::new();
    for component in &components {
        if !seen.insert(component.id.as_str()) {
            return Err(serde::de::Error::custom(CanvasError::DuplicateId(
                component.id.clone(),
            )));
        }
    }
    Ok(components)
}

/// The ordered component list behind the visual builder.
///
/// Ids are unique at all times. Order matters only for grouping within a
/// section of the emitted contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    #[serde(default, deserialize_with = "deserialize_unique")]
    components: Vec<CanvasComponent>,
}

impl Canvas {
    /// Create an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a canvas from a component list, checking id uniqueness.
    pub fn from_components(components: Vec<CanvasComponent>) -> Result<Self, CanvasError> {
        let mut canvas = Self::new();
        for component in components {
            canvas.add(component)?;
        }
        Ok(canvas)
    }

    pub fn components(&self) -> &[CanvasComponent] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CanvasComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut CanvasComponent, CanvasError> {
        self.components
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CanvasError::NotFound(id.to_string()))
    }

    /// Append a component. Fails if its id is already present.
    pub fn add(&mut self, component: CanvasComponent) -> Result<(), CanvasError> {
        if self.get(&component.id).is_some() {
            return Err(CanvasError::DuplicateId(component.id));
        }
        self.components.push(component);
        Ok(())
    }

    /// Drop a library entry onto the canvas (the drag-drop path).
    ///
    /// The new component starts from the entry's editor default and gets a
    /// fresh id.
    pub fn instantiate(
        &mut self,
        original_id: &str,
        x: f64,
        y: f64,
    ) -> Result<&CanvasComponent, CanvasError> {
        let kind = default_component(original_id)
            .ok_or_else(|| CanvasError::UnknownOriginalId(original_id.to_string()))?;
        let component = self.place(kind, x, y);
        debug!(id = %component.id, original_id, "instantiated component");
        Ok(component)
    }

    /// Append a component built from `kind` under a fresh id.
    pub fn place(&mut self, kind: ComponentKind, x: f64, y: f64) -> &CanvasComponent {
        let index = self.components.len();
        self.components.push(CanvasComponent::new(kind, x, y));
        &self.components[index]
    }

    /// Merge a JSON object into a component's properties, key by key.
    ///
    /// `null` values reset a property to its default. The merged property
    /// set is re-validated; on error the component is left unchanged.
    pub fn update_properties(
        &mut self,
        id: &str,
        patch: &Value,
    ) -> Result<&CanvasComponent, CanvasError> {
        let Value::Object(patch) = patch else {
            return Err(CanvasError::PropertiesNotAnObject);
        };

        let component = self.get_mut(id)?;
        let mut merged = component.kind.properties();
        for (key, value) in patch {
            if value.is_null() {
                merged.remove(key);
            } else {
                merged.insert(key.clone(), value.clone());
            }
        }

        component.kind =
            ComponentKind::from_properties(component.original_id(), Value::Object(merged))?;
        Ok(&*component)
    }

    /// Reposition a component.
    pub fn move_to(&mut self, id: &str, x: f64, y: f64) -> Result<(), CanvasError> {
        let component = self.get_mut(id)?;
        component.x = x;
        component.y = y;
        Ok(())
    }

    /// Remove a component, returning it if it existed.
    pub fn remove(&mut self, id: &str) -> Option<CanvasComponent> {
        let index = self.components.iter().position(|c| c.id == id)?;
        Some(self.components.remove(index))
    }

    /// Remove every component.
    pub fn clear(&mut self) {
        self.components.clear();
    }

    /// Replace the canvas with components recognised in pasted Solidity.
    ///
    /// Best effort: unrecognised lines are skipped.
    pub fn import_solidity(&mut self, source: &str) -> ParseOutcome {
        let outcome = parser::parse(source);
        self.components = outcome.components.clone();
        outcome
    }

    /// Compile the canvas to an optimized IR program.
    pub fn compile(&self, options: &EmitOptions) -> Program {
        compile(&self.components, options)
    }

    /// Generate Solidity source with default options.
    pub fn emit(&self) -> String {
        emit(&self.components)
    }

    /// Generate Solidity source with explicit options.
    pub fn emit_with(&self, options: &EmitOptions) -> String {
        self.compile(options).to_source()
    }
}

// ============================================================================
// EMISSION
// ============================================================================

/// Generate Solidity source for a component list.
///
/// Pure and infallible: missing properties degrade to default literals.
pub fn emit(components: &[CanvasComponent]) -> String {
    compile(components, &EmitOptions::default()).to_source()
}

/// Compile a component list to an optimized IR program.
pub fn compile(components: &[CanvasComponent], options: &EmitOptions) -> Program {
    let features = Features::detect(components);
    let mut ctx = EmitContext::new();

    // Header
    ctx.comment(format!("SPDX-License-Identifier: {}", options.license));
    ctx.line(format!("pragma solidity {};", options.pragma));
    ctx.blank();
    for import in &features.imports {
        ctx.line(format!("import \"{}\";", import));
    }
    ctx.blank();

    for interface in &features.interfaces {
        interface.emit(&mut ctx);
        ctx.blank();
    }

    // Contract declaration
    if features.bases.is_empty() {
        ctx.open(format!("contract {}", options.contract_name));
    } else {
        let bases: Vec<&str> = features.bases.iter().copied().collect();
        ctx.open(format!("contract {} is {}", options.contract_name, bases.join(", ")));
    }

    ctx.comment("Custom errors");
    for error in CUSTOM_ERRORS {
        ctx.line(format!("error {}();", error));
    }
    ctx.blank();

    let of_type = |ty: ComponentType| components.iter().filter(move |c| c.component_type() == ty);

    emit_section(&mut ctx, "Structs", of_type(ComponentType::Struct), true);
    emit_section(&mut ctx, "State variables", of_type(ComponentType::Variable), false);
    emit_section(&mut ctx, "Events", of_type(ComponentType::Event), false);
    emit_section(&mut ctx, "Modifiers", of_type(ComponentType::Modifier), true);

    let constructor = components.iter().find_map(|c| match &c.kind {
        ComponentKind::Constructor(ctor) => Some(ctor),
        _ => None,
    });
    functions::emit_constructor(&mut ctx, constructor, &features);

    emit_section(
        &mut ctx,
        "Functions",
        of_type(ComponentType::Function).filter(|c| !matches!(c.kind, ComponentKind::Constructor(_))),
        true,
    );

    ctx.close();

    Program { ops: ctx.ops }.optimize()
}

/// Emit a titled section. Nothing (not even the title) for an empty section.
fn emit_section<'a>(
    ctx: &mut EmitContext,
    title: &str,
    components: impl Iterator<Item = &'a CanvasComponent>,
    spaced: bool,
) {
    let mut components = components.peekable();
    if components.peek().is_none() {
        return;
    }

    ctx.comment(title);
    for component in components {
        component.kind.emit(ctx);
        if spaced {
            ctx.blank();
        }
    }
    ctx.blank();
}

// ============================================================================
// LIBRARY METADATA
// ============================================================================

/// One palette entry of the component library.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryEntry {
    pub original_id: &'static str,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    /// Editor-default properties of a freshly dropped instance.
    pub properties: Map<String, Value>,
}

/// The component palette, derived from [`ComponentKind::all_editor_defaults`].
pub fn component_library() -> Vec<LibraryEntry> {
    ComponentKind::all_editor_defaults()
        .iter()
        .map(|kind| LibraryEntry {
            original_id: kind.original_id(),
            component_type: kind.component_type(),
            label: kind.label(),
            icon: kind.icon(),
            color: kind.color(),
            properties: kind.properties(),
        })
        .collect()
}

/// Create a component kind with editor defaults by `originalId`.
///
/// Returns `None` for unknown ids.
pub fn default_component(original_id: &str) -> Option<ComponentKind> {
    ComponentKind::all_editor_defaults()
        .into_iter()
        .find(|kind| kind.original_id() == original_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn component(value: Value) -> CanvasComponent {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_canvas_output() {
        let source = emit(&[]);
        assert_eq!(
            source,
            "// SPDX-License-Identifier: MIT\n\
             pragma solidity ^0.8.20;\n\
             \n\
             contract GeneratedContract {\n    \
                 // Custom errors\n    \
                 error Unauthorized();\n    \
                 error InsufficientBalance();\n    \
                 error InvalidInput();\n    \
                 error TransferFailed();\n\
             }\n"
        );
    }

    #[test]
    fn test_record_roundtrip() {
        let record = json!({
            "id": "c1",
            "originalId": "mapping",
            "type": "variable",
            "properties": {"name": "balances", "keyType": "address", "valueType": "uint256"},
            "x": 50.0,
            "y": 200.0
        });
        let parsed = component(record.clone());
        assert_eq!(parsed.id, "c1");
        assert_eq!(parsed.component_type(), ComponentType::Variable);
        assert_eq!(serde_json::to_value(&parsed).unwrap(), record);
    }

    #[test]
    fn test_missing_id_is_generated() {
        let a = component(json!({"originalId": "event"}));
        let b = component(json!({"originalId": "event"}));
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_unknown_original_id_rejected() {
        let result: Result<CanvasComponent, _> =
            serde_json::from_value(json!({"originalId": "selfdestruct-button"}));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown originalId"), "{}", err);
    }

    #[test]
    fn test_type_mismatch_rejected() {
        let result: Result<CanvasComponent, _> =
            serde_json::from_value(json!({"originalId": "mapping", "type": "function"}));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("is a variable component"), "{}", err);
    }

    #[test]
    fn test_duplicate_ids_rejected_on_load() {
        let result: Result<Canvas, _> = serde_json::from_value(json!({
            "components": [
                {"id": "a", "originalId": "event"},
                {"id": "a", "originalId": "struct"}
            ]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let mut canvas = Canvas::new();
        let c = component(json!({"id": "x", "originalId": "event"}));
        canvas.add(c.clone()).unwrap();
        assert!(matches!(canvas.add(c), Err(CanvasError::DuplicateId(_))));
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn test_instantiate_uses_editor_default() {
        let mut canvas = Canvas::new();
        let id = canvas.instantiate("mapping", 10.0, 20.0).unwrap().id.clone();
        let placed = canvas.get(&id).unwrap();
        assert_eq!((placed.x, placed.y), (10.0, 20.0));
        assert!(matches!(
            &placed.kind,
            ComponentKind::Mapping(m) if m.name.as_deref() == Some("balances")
        ));
        assert!(canvas.instantiate("nope", 0.0, 0.0).is_err());
    }

    #[test]
    fn test_instantiate_never_reuses_ids() {
        let mut canvas = Canvas::new();
        let first = canvas.instantiate("event", 0.0, 0.0).unwrap().id.clone();
        canvas.remove(&first);
        let second = canvas.instantiate("event", 0.0, 0.0).unwrap().id.clone();
        assert_ne!(first, second);
    }

    #[test]
    fn test_update_properties_merges() {
        let mut canvas = Canvas::new();
        let id = canvas.instantiate("mapping", 0.0, 0.0).unwrap().id.clone();
        canvas
            .update_properties(&id, &json!({"valueType": "bool", "visibility": null}))
            .unwrap();
        let ComponentKind::Mapping(m) = &canvas.get(&id).unwrap().kind else {
            panic!("kind changed");
        };
        assert_eq!(m.name.as_deref(), Some("balances"));
        assert_eq!(m.value_type.as_deref(), Some("bool"));
        assert_eq!(m.visibility, None);
    }

    #[test]
    fn test_update_properties_invalid_leaves_component() {
        let mut canvas = Canvas::new();
        let id = canvas.instantiate("event", 0.0, 0.0).unwrap().id.clone();
        let before = canvas.get(&id).unwrap().clone();
        let result = canvas.update_properties(&id, &json!({"anonymous": "maybe"}));
        assert!(matches!(result, Err(CanvasError::InvalidProperties { .. })));
        assert_eq!(canvas.get(&id).unwrap(), &before);
    }

    #[test]
    fn test_update_missing_component() {
        let mut canvas = Canvas::new();
        assert!(matches!(
            canvas.update_properties("ghost", &json!({})),
            Err(CanvasError::NotFound(_))
        ));
        assert!(canvas.move_to("ghost", 1.0, 1.0).is_err());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut canvas = Canvas::new();
        let id = canvas.instantiate("struct", 0.0, 0.0).unwrap().id.clone();
        canvas.instantiate("event", 0.0, 0.0).unwrap();
        assert!(canvas.remove(&id).is_some());
        assert!(canvas.remove(&id).is_none());
        assert_eq!(canvas.len(), 1);
        canvas.clear();
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_library_covers_every_original_id() {
        let library = component_library();
        let ids: Vec<&str> = library.iter().map(|e| e.original_id).collect();
        assert_eq!(ids, ComponentKind::ORIGINAL_IDS);
        for id in ComponentKind::ORIGINAL_IDS {
            assert!(default_component(id).is_some(), "{}", id);
        }
    }

    #[test]
    fn test_emit_options() {
        let options = EmitOptions {
            contract_name: "Vault".into(),
            license: "Apache-2.0".into(),
            pragma: "0.8.24".into(),
        };
        let source = Canvas::new().emit_with(&options);
        assert!(source.starts_with("// SPDX-License-Identifier: Apache-2.0\npragma solidity 0.8.24;\n"));
        assert!(source.contains("contract Vault {"));
    }

    #[test]
    fn test_section_titles_only_when_populated() {
        let canvas = Canvas::from_components(vec![component(json!({"originalId": "event"}))]).unwrap();
        let source = canvas.emit();
        assert!(source.contains("// Events"));
        assert!(!source.contains("// State variables"));
        assert!(!source.contains("// Functions"));
    }
}
