//! Emit logic for declarations: state variables, mappings, diamond storage,
//! structs and events.

use super::EmitContext;
use super::types::{
    DiamondStorage, Event, Mapping, NestedMapping, StateVariable, StructDef, split_members,
};

impl StateVariable {
    /// `<dataType> <visibility>[ constant][ immutable] <name>[ = <defaultValue>];`
    pub fn emit(&self, ctx: &mut EmitContext) {
        let mut decl = format!(
            "{} {}",
            self.data_type.as_deref().unwrap_or("uint256"),
            self.visibility.as_deref().unwrap_or("internal"),
        );
        if self.constant {
            decl.push_str(" constant");
        }
        if self.immutable {
            decl.push_str(" immutable");
        }
        decl.push(' ');
        decl.push_str(self.name.as_deref().unwrap_or("myVariable"));
        if let Some(value) = &self.default_value {
            decl.push_str(" = ");
            decl.push_str(value);
        }
        decl.push(';');
        ctx.line(decl);
    }
}

impl Mapping {
    pub fn emit(&self, ctx: &mut EmitContext) {
        ctx.line(format!(
            "mapping({} => {}) {} {};",
            self.key_type.as_deref().unwrap_or("address"),
            self.value_type.as_deref().unwrap_or("uint256"),
            self.visibility.as_deref().unwrap_or("internal"),
            self.name.as_deref().unwrap_or("myMapping"),
        ));
    }
}

impl NestedMapping {
    pub fn emit(&self, ctx: &mut EmitContext) {
        ctx.line(format!(
            "mapping({} => mapping({} => {})) {} {};",
            self.key_type1.as_deref().unwrap_or("address"),
            self.key_type2.as_deref().unwrap_or("address"),
            self.value_type.as_deref().unwrap_or("uint256"),
            self.visibility.as_deref().unwrap_or("internal"),
            self.name.as_deref().unwrap_or("allowances"),
        ));
    }
}

impl DiamondStorage {
    /// Slot constant, storage struct and assembly accessor.
    ///
    /// ```text
    /// bytes32 constant DIAMOND_STORAGE_POSITION = keccak256("diamond.storage");
    /// struct DiamondStorage { ... }
    /// function diamondStorage() internal pure returns (DiamondStorage storage ds) { ... }
    /// ```
    pub fn emit(&self, ctx: &mut EmitContext) {
        let namespace = self.namespace.as_deref().unwrap_or("diamond");
        let name = self.name.as_deref().unwrap_or("DiamondStorage");
        let position = format!("{}_STORAGE_POSITION", constant_case(namespace));

        ctx.blank();
        ctx.line(format!(
            "bytes32 constant {} = keccak256(\"{}.storage\");",
            position, namespace
        ));
        ctx.blank();

        ctx.open(format!("struct {}", name));
        for member in split_members(self.variables.as_deref()) {
            ctx.line(format!("{};", member));
        }
        ctx.close();
        ctx.blank();

        ctx.open(format!(
            "function {}() internal pure returns ({} storage ds)",
            lower_first(name),
            name
        ));
        ctx.line(format!("bytes32 position = {};", position));
        ctx.open("assembly");
        ctx.line("ds.slot := position");
        ctx.close();
        ctx.close();
        ctx.blank();
    }
}

impl StructDef {
    pub fn emit(&self, ctx: &mut EmitContext) {
        ctx.open(format!("struct {}", self.name.as_deref().unwrap_or("CustomStruct")));
        for field in split_members(self.fields.as_deref()) {
            ctx.line(format!("{};", field));
        }
        ctx.close();
    }
}

impl Event {
    /// `event <name>(<parameters>)[ anonymous];`
    pub fn emit(&self, ctx: &mut EmitContext) {
        ctx.line(format!(
            "event {}({}){};",
            self.name.as_deref().unwrap_or("CustomEvent"),
            self.parameters.as_deref().unwrap_or_default(),
            if self.anonymous { " anonymous" } else { "" },
        ));
    }
}

/// `my.app-v2` → `MY_APP_V2`
fn constant_case(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect()
}

/// `DiamondStorage` → `diamondStorage`
fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Op, Program};
    use pretty_assertions::assert_eq;

    fn render(emit: impl FnOnce(&mut EmitContext)) -> String {
        let mut ctx = EmitContext::new();
        emit(&mut ctx);
        Program { ops: ctx.ops }.optimize().to_source()
    }

    #[test]
    fn test_state_variable_all_clauses() {
        let var = StateVariable {
            name: Some("MAX".into()),
            data_type: Some("uint256".into()),
            visibility: Some("public".into()),
            constant: true,
            default_value: Some("100".into()),
            ..Default::default()
        };
        assert_eq!(render(|ctx| var.emit(ctx)), "uint256 public constant MAX = 100;\n");
    }

    #[test]
    fn test_state_variable_defaults() {
        let var = StateVariable::default();
        assert_eq!(render(|ctx| var.emit(ctx)), "uint256 internal myVariable;\n");
    }

    #[test]
    fn test_immutable_flag() {
        let var = StateVariable {
            name: Some("deployer".into()),
            data_type: Some("address".into()),
            immutable: true,
            ..Default::default()
        };
        assert_eq!(render(|ctx| var.emit(ctx)), "address internal immutable deployer;\n");
    }

    #[test]
    fn test_mapping_default_visibility() {
        let mapping = Mapping {
            name: Some("owners".into()),
            key_type: Some("uint256".into()),
            value_type: Some("address".into()),
            visibility: None,
        };
        assert_eq!(
            render(|ctx| mapping.emit(ctx)),
            "mapping(uint256 => address) internal owners;\n"
        );
    }

    #[test]
    fn test_nested_mapping() {
        let nested = NestedMapping {
            visibility: Some("public".into()),
            ..Default::default()
        };
        assert_eq!(
            render(|ctx| nested.emit(ctx)),
            "mapping(address => mapping(address => uint256)) public allowances;\n"
        );
    }

    #[test]
    fn test_diamond_storage() {
        let diamond = DiamondStorage {
            name: Some("AppStorage".into()),
            namespace: Some("my.app".into()),
            variables: Some("address owner; uint256 count;".into()),
        };
        assert_eq!(
            render(|ctx| diamond.emit(ctx)),
            "bytes32 constant MY_APP_STORAGE_POSITION = keccak256(\"my.app.storage\");\n\
             \n\
             struct AppStorage {\n    \
                 address owner;\n    \
                 uint256 count;\n\
             }\n\
             \n\
             function appStorage() internal pure returns (AppStorage storage ds) {\n    \
                 bytes32 position = MY_APP_STORAGE_POSITION;\n    \
                 assembly {\n        \
                     ds.slot := position\n    \
                 }\n\
             }\n"
        );
    }

    #[test]
    fn test_struct_drops_empty_fields() {
        let def = StructDef {
            name: Some("Proposal".into()),
            fields: Some("string description;; uint256 votes ; ".into()),
        };
        let mut ctx = EmitContext::new();
        def.emit(&mut ctx);
        assert_eq!(
            ctx.ops,
            vec![
                Op::Open("struct Proposal".into()),
                Op::Line("string description;".into()),
                Op::Line("uint256 votes;".into()),
                Op::Close,
            ]
        );
    }

    #[test]
    fn test_event_anonymous() {
        let event = Event {
            name: Some("Ping".into()),
            parameters: Some("address indexed from".into()),
            anonymous: true,
        };
        assert_eq!(
            render(|ctx| event.emit(ctx)),
            "event Ping(address indexed from) anonymous;\n"
        );
    }

    #[test]
    fn test_case_helpers() {
        assert_eq!(constant_case("diamond"), "DIAMOND");
        assert_eq!(constant_case("a.b-c"), "A_B_C");
        assert_eq!(lower_first("Storage"), "storage");
        assert_eq!(lower_first(""), "");
    }
}
