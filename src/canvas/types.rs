//! Component property types for the canvas model.
//!
//! One struct per `originalId`. All types derive `Serialize + Deserialize`
//! so the same types serve both Rust construction and the JSON records
//! produced by the visual builder (`properties` object, camelCase keys).
//!
//! Text properties are `Option<String>`: absent, `null` and blank values
//! all deserialize to `None`, and the emitters substitute the documented
//! default literal. Numbers and booleans supplied where text is expected
//! are stringified, since the builder's property editor stores scalars.
//! Falsy scalars (`0`, `false`) count as absent, so `defaultValue: 0`
//! emits no initialiser and `votingDelay: 0` falls back to `1`. The text
//! `"0"` is kept as given.
//!
//! Each component implements [`ComponentMeta`] to declare its display label,
//! palette icon/colour and editor default.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata that every component struct must provide.
///
/// Adding a new component kind is self-contained: implement this trait,
/// add one line to `define_components!` and the compiler will guide you
/// to the remaining exhaustive matches.
pub trait ComponentMeta: Sized {
    /// Human-readable display label (e.g. "Mapping", "ERC20 Token").
    fn label() -> &'static str;

    /// Palette icon name shown on the canvas card.
    fn icon() -> &'static str;

    /// Card accent colour (CSS hex).
    fn color() -> &'static str;

    /// Starter value created when the component is dropped on the canvas.
    ///
    /// Distinct from `Default`: editor defaults carry example content so a
    /// freshly dropped component already emits something meaningful.
    fn editor_default() -> Self;
}

/// Coarse component category, used for section placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Variable,
    Function,
    Event,
    Modifier,
    Struct,
    Template,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Variable => "variable",
            ComponentType::Function => "function",
            ComponentType::Event => "event",
            ComponentType::Modifier => "modifier",
            ComponentType::Struct => "struct",
            ComponentType::Template => "template",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Custom deserializer for text properties: accepts a string, number or
/// boolean. Blank strings, `null`, zero and `false` become `None`.
pub(crate) fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Bool(bool),
    }

    let opt: Option<Scalar> = Option::deserialize(deserializer)?;
    Ok(match opt {
        None => None,
        Some(Scalar::Text(s)) if s.trim().is_empty() => None,
        Some(Scalar::Text(s)) => Some(s),
        Some(Scalar::Unsigned(0) | Scalar::Signed(0) | Scalar::Bool(false)) => None,
        Some(Scalar::Float(n)) if n == 0.0 => None,
        Some(Scalar::Unsigned(n)) => Some(n.to_string()),
        Some(Scalar::Signed(n)) => Some(n.to_string()),
        Some(Scalar::Float(n)) => Some(n.to_string()),
        Some(Scalar::Bool(true)) => Some("true".to_string()),
    })
}

/// Split a `;`-separated member list, trimming and dropping empty entries.
pub(crate) fn split_members(list: Option<&str>) -> Vec<&str> {
    list.unwrap_or_default()
        .split(';')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect()
}

// ============================================================================
// VARIABLE COMPONENTS
// ============================================================================

/// Plain state variable: `<dataType> <visibility>[ constant][ immutable] <name>[ = <defaultValue>];`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StateVariable {
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Solidity type, default `uint256`.
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    /// Default `internal`.
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    pub constant: bool,
    pub immutable: bool,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl ComponentMeta for StateVariable {
    fn label() -> &'static str { "State Variable" }
    fn icon() -> &'static str { "database" }
    fn color() -> &'static str { "#3b82f6" }
    fn editor_default() -> Self {
        Self {
            name: Some("totalSupply".into()),
            data_type: Some("uint256".into()),
            visibility: Some("public".into()),
            ..Default::default()
        }
    }
}

/// Single-level mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Mapping {
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub key_type: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

impl ComponentMeta for Mapping {
    fn label() -> &'static str { "Mapping" }
    fn icon() -> &'static str { "map" }
    fn color() -> &'static str { "#6366f1" }
    fn editor_default() -> Self {
        Self {
            name: Some("balances".into()),
            key_type: Some("address".into()),
            value_type: Some("uint256".into()),
            visibility: Some("public".into()),
        }
    }
}

/// Two-level mapping, e.g. ERC20 allowances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NestedMapping {
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub key_type1: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub key_type2: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

impl ComponentMeta for NestedMapping {
    fn label() -> &'static str { "Nested Mapping" }
    fn icon() -> &'static str { "layers" }
    fn color() -> &'static str { "#8b5cf6" }
    fn editor_default() -> Self {
        Self {
            name: Some("allowances".into()),
            key_type1: Some("address".into()),
            key_type2: Some("address".into()),
            value_type: Some("uint256".into()),
            visibility: Some("public".into()),
        }
    }
}

/// Diamond (EIP-2535) namespaced storage: slot constant, storage struct
/// and an assembly accessor binding the struct to the slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiamondStorage {
    /// Struct name, default `DiamondStorage`.
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Storage namespace, default `diamond`. Drives the slot constant name.
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// `;`-separated member declarations.
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub variables: Option<String>,
}

impl ComponentMeta for DiamondStorage {
    fn label() -> &'static str { "Diamond Storage" }
    fn icon() -> &'static str { "gem" }
    fn color() -> &'static str { "#0ea5e9" }
    fn editor_default() -> Self {
        Self {
            name: Some("DiamondStorage".into()),
            namespace: Some("diamond".into()),
            variables: Some("address owner; mapping(bytes4 => address) facets".into()),
        }
    }
}

// ============================================================================
// STRUCT / EVENT COMPONENTS
// ============================================================================

/// Struct definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StructDef {
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `;`-separated field declarations.
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

impl ComponentMeta for StructDef {
    fn label() -> &'static str { "Struct" }
    fn icon() -> &'static str { "box" }
    fn color() -> &'static str { "#14b8a6" }
    fn editor_default() -> Self {
        Self {
            name: Some("User".into()),
            fields: Some("address wallet; uint256 balance; bool active".into()),
        }
    }
}

/// Event declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    pub anonymous: bool,
}

impl ComponentMeta for Event {
    fn label() -> &'static str { "Event" }
    fn icon() -> &'static str { "bell" }
    fn color() -> &'static str { "#f59e0b" }
    fn editor_default() -> Self {
        Self {
            name: Some("Transfer".into()),
            parameters: Some("address indexed from, address indexed to, uint256 value".into()),
            anonymous: false,
        }
    }
}

// ============================================================================
// MODIFIER COMPONENTS
// ============================================================================

/// Owner-style access check. Marks the contract as `Ownable`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessControl {
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    /// Revert condition, default `msg.sender != owner()`.
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl ComponentMeta for AccessControl {
    fn label() -> &'static str { "Access Control" }
    fn icon() -> &'static str { "shield" }
    fn color() -> &'static str { "#ef4444" }
    fn editor_default() -> Self {
        Self {
            name: Some("onlyOwner".into()),
            condition: Some("msg.sender != owner()".into()),
            ..Default::default()
        }
    }
}

/// Reentrancy lock. Its body places `_;` itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReentrancyGuard {
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub entered: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub not_entered: Option<String>,
}

impl ComponentMeta for ReentrancyGuard {
    fn label() -> &'static str { "Reentrancy Guard" }
    fn icon() -> &'static str { "lock" }
    fn color() -> &'static str { "#dc2626" }
    fn editor_default() -> Self {
        Self {
            name: Some("nonReentrant".into()),
            status: Some("_status".into()),
            entered: Some("_ENTERED".into()),
            not_entered: Some("_NOT_ENTERED".into()),
            ..Default::default()
        }
    }
}

/// Time lock: reverts until the condition holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeLock {
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub time_condition: Option<String>,
}

impl ComponentMeta for TimeLock {
    fn label() -> &'static str { "Time Lock" }
    fn icon() -> &'static str { "clock" }
    fn color() -> &'static str { "#f97316" }
    fn editor_default() -> Self {
        Self {
            name: Some("onlyAfterUnlock".into()),
            time_condition: Some("block.timestamp >= unlockTime".into()),
            ..Default::default()
        }
    }
}

/// Multi-signature gate via `_verifyMultipleSignatures`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MultiSig {
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub proposal_id: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub signers: Option<String>,
}

impl ComponentMeta for MultiSig {
    fn label() -> &'static str { "Multi-Sig" }
    fn icon() -> &'static str { "users" }
    fn color() -> &'static str { "#b91c1c" }
    fn editor_default() -> Self {
        Self {
            name: Some("requiresMultiSig".into()),
            parameters: Some("uint256 proposalId, address[] memory signers".into()),
            proposal_id: Some("proposalId".into()),
            signers: Some("signers".into()),
        }
    }
}

/// Free-form modifier guarded by a condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomModifier {
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl ComponentMeta for CustomModifier {
    fn label() -> &'static str { "Custom Modifier" }
    fn icon() -> &'static str { "filter" }
    fn color() -> &'static str { "#e11d48" }
    fn editor_default() -> Self {
        Self {
            name: Some("whenActive".into()),
            condition: Some("active".into()),
            ..Default::default()
        }
    }
}

// ============================================================================
// FUNCTION COMPONENTS
// ============================================================================

/// General function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Function {
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    /// Default `public`.
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    pub view: bool,
    pub pure: bool,
    pub payable: bool,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
    /// Space-separated modifier invocations, e.g. `onlyOwner nonReentrant`.
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub function_body: Option<String>,
}

impl ComponentMeta for Function {
    fn label() -> &'static str { "Function" }
    fn icon() -> &'static str { "code" }
    fn color() -> &'static str { "#10b981" }
    fn editor_default() -> Self {
        Self {
            name: Some("myFunction".into()),
            visibility: Some("public".into()),
            ..Default::default()
        }
    }
}

/// Read-only accessor. Always renders a `returns (...)` clause.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewFunction {
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// Mutability keyword slot (`view` / `pure`), empty unless set.
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub function_body: Option<String>,
}

impl ComponentMeta for ViewFunction {
    fn label() -> &'static str { "View Function" }
    fn icon() -> &'static str { "eye" }
    fn color() -> &'static str { "#059669" }
    fn editor_default() -> Self {
        Self {
            name: Some("getBalance".into()),
            parameters: Some("address account".into()),
            visibility: Some("public".into()),
            state_mutability: Some("view".into()),
            returns: Some("uint256".into()),
            function_body: Some("return balances[account];".into()),
            ..Default::default()
        }
    }
}

/// Ether-accepting function with a minimum-value check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PayableFunction {
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<String>,
    /// Minimum `msg.value`, default `0`.
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub min_value: Option<String>,
    /// Not emitted for this kind; see `validate`.
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub function_body: Option<String>,
}

impl ComponentMeta for PayableFunction {
    fn label() -> &'static str { "Payable Function" }
    fn icon() -> &'static str { "coins" }
    fn color() -> &'static str { "#16a34a" }
    fn editor_default() -> Self {
        Self {
            name: Some("deposit".into()),
            visibility: Some("external".into()),
            min_value: Some("0.01 ether".into()),
            ..Default::default()
        }
    }
}

/// Batch transfer scaffold over parallel recipient/amount arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BatchTransfer {
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<String>,
    /// Upper bound on `recipients.length`, default `100`.
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub max_batch_size: Option<String>,
    /// Appended after the scaffold when set.
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub function_body: Option<String>,
}

impl ComponentMeta for BatchTransfer {
    fn label() -> &'static str { "Batch Transfer" }
    fn icon() -> &'static str { "send" }
    fn color() -> &'static str { "#15803d" }
    fn editor_default() -> Self {
        Self {
            name: Some("batchTransfer".into()),
            parameters: Some("address[] calldata recipients, uint256[] calldata amounts".into()),
            visibility: Some("external".into()),
            max_batch_size: Some("100".into()),
            ..Default::default()
        }
    }
}

/// Explicit constructor. Merged with template-driven constructor logic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Constructor {
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub init_code: Option<String>,
}

impl ComponentMeta for Constructor {
    fn label() -> &'static str { "Constructor" }
    fn icon() -> &'static str { "hammer" }
    fn color() -> &'static str { "#0d9488" }
    fn editor_default() -> Self { Self::default() }
}

// ============================================================================
// TEMPLATE COMPONENTS
// ============================================================================

/// ERC20 token preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Erc20 {
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Whole-token supply minted to the deployer, default `1000000`.
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub supply: Option<String>,
    pub mintable: bool,
}

impl ComponentMeta for Erc20 {
    fn label() -> &'static str { "ERC20 Token" }
    fn icon() -> &'static str { "coin" }
    fn color() -> &'static str { "#eab308" }
    fn editor_default() -> Self {
        Self {
            name: Some("MyToken".into()),
            symbol: Some("MTK".into()),
            supply: Some("1000000".into()),
            mintable: true,
        }
    }
}

/// ERC721 NFT preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Erc721 {
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl ComponentMeta for Erc721 {
    fn label() -> &'static str { "ERC721 NFT" }
    fn icon() -> &'static str { "image" }
    fn color() -> &'static str { "#a855f7" }
    fn editor_default() -> Self {
        Self {
            name: Some("MyCollection".into()),
            symbol: Some("MCOL".into()),
        }
    }
}

/// Governor-based DAO preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DaoVoting {
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub voting_delay: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub voting_period: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub proposal_threshold: Option<String>,
}

impl ComponentMeta for DaoVoting {
    fn label() -> &'static str { "DAO Voting" }
    fn icon() -> &'static str { "vote" }
    fn color() -> &'static str { "#ec4899" }
    fn editor_default() -> Self {
        Self {
            name: Some("MyGovernor".into()),
            voting_delay: Some("1".into()),
            voting_period: Some("50400".into()),
            proposal_threshold: Some("0".into()),
        }
    }
}

/// Flash-loan receiver preset. Adds the receiver interface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlashLoan {}

impl ComponentMeta for FlashLoan {
    fn label() -> &'static str { "Flash Loan" }
    fn icon() -> &'static str { "zap" }
    fn color() -> &'static str { "#06b6d4" }
    fn editor_default() -> Self { Self {} }
}

/// Upgradeable (initializer-based) contract marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpgradeableProxy {}

impl ComponentMeta for UpgradeableProxy {
    fn label() -> &'static str { "Upgradeable Proxy" }
    fn icon() -> &'static str { "refresh" }
    fn color() -> &'static str { "#64748b" }
    fn editor_default() -> Self { Self {} }
}

/// Chainlink price feed marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainlinkPriceFeed {}

impl ComponentMeta for ChainlinkPriceFeed {
    fn label() -> &'static str { "Chainlink Price Feed" }
    fn icon() -> &'static str { "link" }
    fn color() -> &'static str { "#2563eb" }
    fn editor_default() -> Self { Self {} }
}
