//! Emit logic for function components and the constructor.

use super::EmitContext;
use super::types::{BatchTransfer, Constructor, Function, PayableFunction, ViewFunction};
use crate::ir::Features;

/// Build a function header without the trailing `{`.
///
/// `function <name>(<parameters>) <visibility>[ view][ pure][ payable][ returns (<returns>)][ <modifiers>]`
fn header(
    name: &str,
    parameters: Option<&str>,
    visibility: Option<&str>,
    mutability: &[(&str, bool)],
    returns: Option<&str>,
    modifiers: Option<&str>,
) -> String {
    let mut header = format!(
        "function {}({}) {}",
        name,
        parameters.unwrap_or_default(),
        visibility.unwrap_or("public")
    );
    for (keyword, enabled) in mutability {
        if *enabled {
            header.push(' ');
            header.push_str(keyword);
        }
    }
    if let Some(returns) = returns {
        header.push_str(&format!(" returns ({})", returns));
    }
    if let Some(modifiers) = modifiers {
        header.push(' ');
        header.push_str(modifiers);
    }
    header
}

impl Function {
    pub fn emit(&self, ctx: &mut EmitContext) {
        ctx.open(header(
            self.name.as_deref().unwrap_or("myFunction"),
            self.parameters.as_deref(),
            self.visibility.as_deref(),
            &[("view", self.view), ("pure", self.pure), ("payable", self.payable)],
            self.returns.as_deref(),
            self.modifiers.as_deref(),
        ));
        match &self.function_body {
            Some(body) => ctx.verbatim(body.as_str()),
            None => ctx.comment("TODO: Implement function logic"),
        }
        ctx.close();
    }
}

impl ViewFunction {
    /// The returns clause is always present, even when empty:
    /// `function getValue() public view returns (uint256) {`.
    pub fn emit(&self, ctx: &mut EmitContext) {
        let mut header = format!(
            "function {}({}) {} {} returns ({})",
            self.name.as_deref().unwrap_or("getValue"),
            self.parameters.as_deref().unwrap_or_default(),
            self.visibility.as_deref().unwrap_or("public"),
            self.state_mutability.as_deref().unwrap_or_default(),
            self.returns.as_deref().unwrap_or_default(),
        );
        if let Some(modifiers) = &self.modifiers {
            header.push(' ');
            header.push_str(modifiers);
        }
        ctx.open(header);
        ctx.verbatim(self.function_body.as_deref().unwrap_or("return 0;"));
        ctx.close();
    }
}

impl PayableFunction {
    /// Value check and `PaymentReceived` emission. `functionBody` is not
    /// rendered for this kind.
    pub fn emit(&self, ctx: &mut EmitContext) {
        ctx.open(header(
            self.name.as_deref().unwrap_or("deposit"),
            self.parameters.as_deref(),
            self.visibility.as_deref(),
            &[("payable", true)],
            self.returns.as_deref(),
            self.modifiers.as_deref(),
        ));
        ctx.line(format!(
            "if (msg.value < {}) revert InsufficientBalance();",
            self.min_value.as_deref().unwrap_or("0")
        ));
        ctx.line("emit PaymentReceived(msg.sender, msg.value);");
        ctx.close();
    }
}

impl BatchTransfer {
    /// Length and size checks, then a per-recipient loop scaffold. A set
    /// `functionBody` follows the scaffold.
    pub fn emit(&self, ctx: &mut EmitContext) {
        ctx.open(header(
            self.name.as_deref().unwrap_or("batchTransfer"),
            Some(
                self.parameters
                    .as_deref()
                    .unwrap_or("address[] calldata recipients, uint256[] calldata amounts"),
            ),
            self.visibility.as_deref(),
            &[],
            None,
            self.modifiers.as_deref(),
        ));
        ctx.line("if (recipients.length != amounts.length) revert InvalidInput();");
        ctx.line(format!(
            "if (recipients.length > {}) revert InvalidInput();",
            self.max_batch_size.as_deref().unwrap_or("100")
        ));
        ctx.blank();
        ctx.open("for (uint256 i = 0; i < recipients.length; i++)");
        ctx.comment("Batch transfer logic for recipients[i] and amounts[i]");
        ctx.line("if (amounts[i] == 0) revert InvalidInput();");
        ctx.close();
        if let Some(body) = &self.function_body {
            ctx.blank();
            ctx.verbatim(body.as_str());
        }
        ctx.close();
    }
}

impl Constructor {
    /// Emitted by [`emit_constructor`] together with template logic.
    pub fn emit(&self, _ctx: &mut EmitContext) {}
}

/// Emit the merged constructor: explicit component plus template
/// requirements (token metadata parameters, base calls, initial mint).
///
/// Emits nothing when there is neither an explicit constructor nor a
/// template that needs one.
pub(super) fn emit_constructor(
    ctx: &mut EmitContext,
    constructor: Option<&Constructor>,
    features: &Features,
) {
    if constructor.is_none() && !features.requires_constructor() {
        return;
    }

    let mut params = constructor
        .and_then(|c| c.parameters.clone())
        .unwrap_or_default();
    for present in [features.erc20.is_some(), features.erc721.is_some()] {
        if present && !params.contains("string") {
            if !params.is_empty() {
                params.push_str(", ");
            }
            params.push_str("string memory name, string memory symbol");
        }
    }

    let mut calls = Vec::new();
    if let Some(erc20) = &features.erc20 {
        calls.push(format!(
            "ERC20(\"{}\", \"{}\")",
            erc20.name.as_deref().unwrap_or("name"),
            erc20.symbol.as_deref().unwrap_or("symbol")
        ));
    }
    if let Some(erc721) = &features.erc721 {
        calls.push(format!(
            "ERC721(\"{}\", \"{}\")",
            erc721.name.as_deref().unwrap_or("name"),
            erc721.symbol.as_deref().unwrap_or("symbol")
        ));
    }
    if let Some(dao) = &features.dao {
        calls.push(format!(
            "Governor(\"{}\")",
            dao.name.as_deref().unwrap_or("GeneratedGovernor")
        ));
        calls.push(format!(
            "GovernorSettings({}, {}, {})",
            dao.voting_delay.as_deref().unwrap_or("1"),
            dao.voting_period.as_deref().unwrap_or("50400"),
            dao.proposal_threshold.as_deref().unwrap_or("0")
        ));
    }

    let mut header = format!("constructor({})", params);
    if !calls.is_empty() {
        header.push(' ');
        header.push_str(&calls.join(" "));
    }

    ctx.comment("Constructor");
    ctx.open(header);
    if let Some(erc20) = &features.erc20
        && erc20.mintable
    {
        ctx.line(format!(
            "_mint(msg.sender, {} * 10**decimals());",
            erc20.supply.as_deref().unwrap_or("1000000")
        ));
    }
    if let Some(init) = constructor.and_then(|c| c.init_code.as_deref()) {
        ctx.verbatim(init);
    }
    ctx.close();
    ctx.blank();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CanvasComponent, ComponentKind, DaoVoting, Erc20, Erc721};
    use crate::ir::Program;
    use pretty_assertions::assert_eq;

    fn render(emit: impl FnOnce(&mut EmitContext)) -> String {
        let mut ctx = EmitContext::new();
        emit(&mut ctx);
        Program { ops: ctx.ops }.optimize().to_source()
    }

    fn constructor_for(kinds: Vec<ComponentKind>, explicit: Option<&Constructor>) -> String {
        let components: Vec<_> = kinds
            .into_iter()
            .map(|k| CanvasComponent::new(k, 0.0, 0.0))
            .collect();
        let features = Features::detect(&components);
        render(|ctx| emit_constructor(ctx, explicit, &features))
    }

    #[test]
    fn test_function_header_clauses() {
        let f = Function {
            name: Some("withdraw".into()),
            parameters: Some("uint256 amount".into()),
            visibility: Some("external".into()),
            returns: Some("bool".into()),
            modifiers: Some("onlyOwner nonReentrant".into()),
            function_body: Some("return true;".into()),
            ..Default::default()
        };
        assert_eq!(
            render(|ctx| f.emit(ctx)),
            "function withdraw(uint256 amount) external returns (bool) onlyOwner nonReentrant {\n    \
                 return true;\n\
             }\n"
        );
    }

    #[test]
    fn test_function_defaults_to_placeholder() {
        let f = Function {
            view: true,
            ..Default::default()
        };
        assert_eq!(
            render(|ctx| f.emit(ctx)),
            "function myFunction() public view {\n    \
                 // TODO: Implement function logic\n\
             }\n"
        );
    }

    #[test]
    fn test_function_multiline_body_reindented() {
        let f = Function {
            name: Some("f".into()),
            function_body: Some("uint256 a = 1;\nif (a > 0) {\n    a--;\n}".into()),
            ..Default::default()
        };
        assert_eq!(
            render(|ctx| f.emit(ctx)),
            "function f() public {\n    \
                 uint256 a = 1;\n    \
                 if (a > 0) {\n        \
                     a--;\n    \
                 }\n\
             }\n"
        );
    }

    #[test]
    fn test_view_function_empty_returns_clause() {
        let f = ViewFunction {
            name: Some("getBalance".into()),
            function_body: Some("return balances[msg.sender];".into()),
            ..Default::default()
        };
        assert_eq!(
            render(|ctx| f.emit(ctx)),
            "function getBalance() public  returns () {\n    \
                 return balances[msg.sender];\n\
             }\n"
        );
    }

    #[test]
    fn test_view_function_fallback_body() {
        let f = ViewFunction {
            state_mutability: Some("view".into()),
            returns: Some("uint256".into()),
            ..Default::default()
        };
        assert_eq!(
            render(|ctx| f.emit(ctx)),
            "function getValue() public view returns (uint256) {\n    return 0;\n}\n"
        );
    }

    #[test]
    fn test_payable_ignores_function_body() {
        let f = PayableFunction {
            min_value: Some("1 ether".into()),
            function_body: Some("counter++;".into()),
            ..Default::default()
        };
        assert_eq!(
            render(|ctx| f.emit(ctx)),
            "function deposit() public payable {\n    \
                 if (msg.value < 1 ether) revert InsufficientBalance();\n    \
                 emit PaymentReceived(msg.sender, msg.value);\n\
             }\n"
        );
    }

    #[test]
    fn test_batch_transfer_scaffold_then_body() {
        let f = BatchTransfer {
            visibility: Some("external".into()),
            max_batch_size: Some("50".into()),
            function_body: Some("emit BatchDone();".into()),
            ..Default::default()
        };
        assert_eq!(
            render(|ctx| f.emit(ctx)),
            "function batchTransfer(address[] calldata recipients, uint256[] calldata amounts) external {\n    \
                 if (recipients.length != amounts.length) revert InvalidInput();\n    \
                 if (recipients.length > 50) revert InvalidInput();\n\
                 \n    \
                 for (uint256 i = 0; i < recipients.length; i++) {\n        \
                     // Batch transfer logic for recipients[i] and amounts[i]\n        \
                     if (amounts[i] == 0) revert InvalidInput();\n    \
                 }\n\
                 \n    \
                 emit BatchDone();\n\
             }\n"
        );
    }

    #[test]
    fn test_no_constructor_without_cause() {
        assert_eq!(constructor_for(vec![], None), "");
    }

    #[test]
    fn test_erc20_mintable_constructor() {
        let erc20 = Erc20 {
            name: Some("Coin".into()),
            symbol: Some("CN".into()),
            supply: Some("1000000".into()),
            mintable: true,
        };
        assert_eq!(
            constructor_for(vec![ComponentKind::Erc20(erc20)], None),
            "// Constructor\n\
             constructor(string memory name, string memory symbol) ERC20(\"Coin\", \"CN\") {\n    \
                 _mint(msg.sender, 1000000 * 10**decimals());\n\
             }\n"
        );
    }

    #[test]
    fn test_token_params_added_once() {
        let source = constructor_for(
            vec![
                ComponentKind::Erc20(Erc20::default()),
                ComponentKind::Erc721(Erc721::default()),
            ],
            None,
        );
        assert_eq!(source.matches("string memory name").count(), 1);
        assert!(source.contains("ERC20(\"name\", \"symbol\") ERC721(\"name\", \"symbol\")"));
        assert!(!source.contains("_mint"));
    }

    #[test]
    fn test_explicit_string_param_suppresses_token_params() {
        let explicit = Constructor {
            parameters: Some("string memory label".into()),
            init_code: Some("label_ = label;".into()),
        };
        let source = constructor_for(vec![ComponentKind::Erc721(Erc721::default())], Some(&explicit));
        assert!(source.contains("constructor(string memory label) ERC721(\"name\", \"symbol\") {"));
        assert!(source.contains("    label_ = label;\n"));
    }

    #[test]
    fn test_explicit_params_extended() {
        let explicit = Constructor {
            parameters: Some("address admin".into()),
            init_code: None,
        };
        let source = constructor_for(vec![ComponentKind::Erc20(Erc20::default())], Some(&explicit));
        assert!(source.contains(
            "constructor(address admin, string memory name, string memory symbol) ERC20(\"name\", \"symbol\") {"
        ));
    }

    #[test]
    fn test_dao_base_calls() {
        let source = constructor_for(vec![ComponentKind::DaoVoting(DaoVoting::default())], None);
        assert!(source.contains(
            "constructor() Governor(\"GeneratedGovernor\") GovernorSettings(1, 50400, 0) {"
        ));
    }
}
