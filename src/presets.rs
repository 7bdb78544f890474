//! # Starter Canvases
//!
//! Pre-built canvases that show typical combinations of components. Each
//! one emits a complete contract and can be loaded into the builder as a
//! starting point.

use crate::canvas::{
    AccessControl, Canvas, ComponentKind, DaoVoting, Erc20, Erc721, Event, Function, Mapping,
    PayableFunction, ReentrancyGuard, StateVariable, StructDef, ViewFunction,
};
use crate::parser::{ORIGIN_X, ORIGIN_Y, ROW_SPACING};

// ============================================================================
// PRESETS
// ============================================================================

/// Mintable ERC20 with an owner-only mint function.
pub fn token() -> Canvas {
    layout(vec![
        ComponentKind::Erc20(Erc20 {
            name: Some("MyToken".into()),
            symbol: Some("MTK".into()),
            supply: Some("1000000".into()),
            mintable: true,
        }),
        ComponentKind::AccessControl(AccessControl {
            name: Some("onlyMinter".into()),
            condition: Some("msg.sender != owner()".into()),
            ..Default::default()
        }),
        ComponentKind::Event(Event {
            name: Some("Minted".into()),
            parameters: Some("address indexed to, uint256 amount".into()),
            anonymous: false,
        }),
        ComponentKind::Function(Function {
            name: Some("mint".into()),
            parameters: Some("address to, uint256 amount".into()),
            visibility: Some("external".into()),
            modifiers: Some("onlyMinter".into()),
            function_body: Some("_mint(to, amount);\nemit Minted(to, amount);".into()),
            ..Default::default()
        }),
    ])
}

/// ERC721 collection with sequential token ids.
pub fn nft() -> Canvas {
    layout(vec![
        ComponentKind::Erc721(Erc721 {
            name: Some("MyCollection".into()),
            symbol: Some("MCOL".into()),
        }),
        ComponentKind::StateVariable(StateVariable {
            name: Some("_nextTokenId".into()),
            data_type: Some("uint256".into()),
            visibility: Some("private".into()),
            ..Default::default()
        }),
        ComponentKind::AccessControl(AccessControl {
            name: Some("onlyCurator".into()),
            ..Default::default()
        }),
        ComponentKind::Function(Function {
            name: Some("safeMint".into()),
            parameters: Some("address to".into()),
            visibility: Some("public".into()),
            returns: Some("uint256".into()),
            modifiers: Some("onlyCurator".into()),
            function_body: Some(
                "uint256 tokenId = _nextTokenId++;\n_safeMint(to, tokenId);\nreturn tokenId;".into(),
            ),
            ..Default::default()
        }),
    ])
}

/// Governor with an on-chain memo board.
pub fn dao() -> Canvas {
    layout(vec![
        ComponentKind::DaoVoting(DaoVoting {
            name: Some("CommunityGovernor".into()),
            voting_delay: Some("7200".into()),
            voting_period: Some("50400".into()),
            proposal_threshold: Some("0".into()),
        }),
        ComponentKind::Struct(StructDef {
            name: Some("Memo".into()),
            fields: Some("address author; string text; uint256 createdAt".into()),
        }),
        ComponentKind::Mapping(Mapping {
            name: Some("memos".into()),
            key_type: Some("uint256".into()),
            value_type: Some("Memo".into()),
            visibility: Some("public".into()),
        }),
        ComponentKind::Event(Event {
            name: Some("MemoPosted".into()),
            parameters: Some("uint256 indexed id, address indexed author".into()),
            anonymous: false,
        }),
    ])
}

/// Ether vault with a reentrancy lock.
pub fn vault() -> Canvas {
    layout(vec![
        ComponentKind::StateVariable(StateVariable {
            name: Some("_locked".into()),
            data_type: Some("uint256".into()),
            visibility: Some("private".into()),
            default_value: Some("1".into()),
            ..Default::default()
        }),
        ComponentKind::Mapping(Mapping {
            name: Some("deposits".into()),
            key_type: Some("address".into()),
            value_type: Some("uint256".into()),
            visibility: Some("public".into()),
        }),
        ComponentKind::Event(Event {
            name: Some("PaymentReceived".into()),
            parameters: Some("address indexed from, uint256 amount".into()),
            anonymous: false,
        }),
        ComponentKind::ReentrancyGuard(ReentrancyGuard {
            name: Some("lock".into()),
            status: Some("_locked".into()),
            entered: Some("2".into()),
            not_entered: Some("1".into()),
            ..Default::default()
        }),
        ComponentKind::PayableFunction(PayableFunction {
            name: Some("deposit".into()),
            visibility: Some("external".into()),
            min_value: Some("0.01 ether".into()),
            ..Default::default()
        }),
        ComponentKind::Function(Function {
            name: Some("withdraw".into()),
            parameters: Some("uint256 amount".into()),
            visibility: Some("external".into()),
            modifiers: Some("lock".into()),
            function_body: Some(
                "if (deposits[msg.sender] < amount) revert InsufficientBalance();\n\
                 deposits[msg.sender] -= amount;\n\
                 (bool ok, ) = msg.sender.call{value: amount}(\"\");\n\
                 if (!ok) revert TransferFailed();"
                    .into(),
            ),
            ..Default::default()
        }),
        ComponentKind::ViewFunction(ViewFunction {
            name: Some("depositOf".into()),
            parameters: Some("address account".into()),
            visibility: Some("external".into()),
            state_mutability: Some("view".into()),
            returns: Some("uint256".into()),
            function_body: Some("return deposits[account];".into()),
            ..Default::default()
        }),
    ])
}

/// Stack components in one column, the same grid the importer uses.
fn layout(kinds: Vec<ComponentKind>) -> Canvas {
    let mut canvas = Canvas::new();
    let mut y = ORIGIN_Y;
    for kind in kinds {
        canvas.place(kind, ORIGIN_X, y);
        y += ROW_SPACING;
    }
    canvas
}

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// List available presets
pub fn list_presets() -> &'static [&'static str] {
    &["token", "nft", "dao", "vault"]
}

/// One-line description of a preset.
pub fn describe(name: &str) -> Option<&'static str> {
    match name.to_lowercase().as_str() {
        "token" => Some("Mintable ERC20 token with an owner-only mint"),
        "nft" => Some("ERC721 collection with sequential token ids"),
        "dao" => Some("Governor-based DAO with an on-chain memo board"),
        "vault" => Some("Ether vault with deposits, withdrawals and a reentrancy lock"),
        _ => None,
    }
}

/// Get a preset canvas by name
pub fn by_name(name: &str) -> Option<Canvas> {
    match name.to_lowercase().as_str() {
        "token" | "erc20" => Some(token()),
        "nft" | "erc721" => Some(nft()),
        "dao" | "governor" => Some(dao()),
        "vault" => Some(vault()),
        _ => None,
    }
}

/// Check if a name is a preset
pub fn is_preset(name: &str) -> bool {
    matches!(
        name.to_lowercase().as_str(),
        "token" | "erc20" | "nft" | "erc721" | "dao" | "governor" | "vault"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{self, Severity};

    #[test]
    fn test_list_presets() {
        let presets = list_presets();
        assert!(presets.contains(&"token"));
        assert!(presets.contains(&"vault"));
        for name in presets {
            assert!(is_preset(name));
            assert!(describe(name).is_some());
        }
    }

    #[test]
    fn test_by_name() {
        assert!(by_name("token").is_some());
        assert!(by_name("ERC20").is_some());
        assert!(by_name("nonexistent").is_none());
    }

    #[test]
    fn test_is_preset() {
        assert!(is_preset("dao"));
        assert!(!is_preset("casino"));
    }

    #[test]
    fn test_token_emits_mint_constructor() {
        let source = token().emit();
        assert!(source.contains("contract GeneratedContract is ERC20, Ownable {"));
        assert!(source.contains("ERC20(\"MyToken\", \"MTK\")"));
        assert!(source.contains("_mint(msg.sender, 1000000 * 10**decimals());"));
        assert!(source.contains("function mint(address to, uint256 amount) external onlyMinter {"));
    }

    #[test]
    fn test_presets_are_laid_out_in_a_column() {
        let canvas = vault();
        let rows: Vec<f64> = canvas.components().iter().map(|c| c.y).collect();
        assert_eq!(rows[0], 50.0);
        assert!(rows.windows(2).all(|w| w[1] - w[0] == 150.0));
    }

    #[test]
    fn test_presets_have_no_errors() {
        for name in list_presets() {
            let canvas = by_name(name).unwrap();
            let errors: Vec<_> = validate::check(canvas.components())
                .into_iter()
                .filter(|d| d.severity == Severity::Error)
                .collect();
            assert!(errors.is_empty(), "{}: {:?}", name, errors);
        }
    }

    #[test]
    fn test_vault_declares_payment_event() {
        let diagnostics = validate::check(vault().components());
        assert!(diagnostics.iter().all(|d| !d.message.contains("PaymentReceived")));
    }
}
