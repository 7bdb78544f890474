//! Feature detection: which imports, base contracts and interfaces a
//! component list pulls into the generated contract.
//!
//! Detection is a single pass over the list. Markers are monotonic: adding
//! a component can only add entries, never remove one, and the set of
//! entries does not depend on the list's order. Output order is the order
//! in which markers were first seen.

use indexmap::IndexSet;

use crate::canvas::{CanvasComponent, ComponentKind, DaoVoting, Erc20, Erc721};

/// A component kind that changes the contract's shape beyond its own
/// declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    AccessControl,
    ReentrancyGuard,
    UpgradeableProxy,
    ChainlinkPriceFeed,
    Erc20,
    Erc721,
    DaoVoting,
    FlashLoan,
}

impl Marker {
    pub fn from_kind(kind: &ComponentKind) -> Option<Self> {
        Some(match kind {
            ComponentKind::AccessControl(_) => Marker::AccessControl,
            ComponentKind::ReentrancyGuard(_) => Marker::ReentrancyGuard,
            ComponentKind::UpgradeableProxy(_) => Marker::UpgradeableProxy,
            ComponentKind::ChainlinkPriceFeed(_) => Marker::ChainlinkPriceFeed,
            ComponentKind::Erc20(_) => Marker::Erc20,
            ComponentKind::Erc721(_) => Marker::Erc721,
            ComponentKind::DaoVoting(_) => Marker::DaoVoting,
            ComponentKind::FlashLoan(_) => Marker::FlashLoan,
            _ => return None,
        })
    }

    /// Import paths, in emission order.
    pub fn imports(self) -> &'static [&'static str] {
        match self {
            Marker::AccessControl => &["@openzeppelin/contracts/access/Ownable.sol"],
            Marker::ReentrancyGuard => &["@openzeppelin/contracts/security/ReentrancyGuard.sol"],
            Marker::UpgradeableProxy => {
                &["@openzeppelin/contracts-upgradeable/proxy/utils/Initializable.sol"]
            }
            Marker::ChainlinkPriceFeed => {
                &["@chainlink/contracts/src/v0.8/interfaces/AggregatorV3Interface.sol"]
            }
            Marker::Erc20 => &["@openzeppelin/contracts/token/ERC20/ERC20.sol"],
            Marker::Erc721 => &["@openzeppelin/contracts/token/ERC721/ERC721.sol"],
            Marker::DaoVoting => &[
                "@openzeppelin/contracts/governance/Governor.sol",
                "@openzeppelin/contracts/governance/extensions/GovernorSettings.sol",
            ],
            Marker::FlashLoan => &[],
        }
    }

    /// Base contracts added to the `is` list.
    pub fn bases(self) -> &'static [&'static str] {
        match self {
            Marker::AccessControl => &["Ownable"],
            Marker::ReentrancyGuard => &["ReentrancyGuard"],
            Marker::UpgradeableProxy => &["Initializable"],
            Marker::ChainlinkPriceFeed => &["AggregatorV3Interface"],
            Marker::Erc20 => &["ERC20"],
            Marker::Erc721 => &["ERC721"],
            Marker::DaoVoting => &["Governor", "GovernorSettings"],
            Marker::FlashLoan => &["IFlashLoanReceiver"],
        }
    }

    /// Interface declared inline ahead of the contract.
    pub fn interface(self) -> Option<Interface> {
        match self {
            Marker::FlashLoan => Some(Interface::FlashLoanReceiver),
            _ => None,
        }
    }
}

/// Interfaces emitted between the imports and the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interface {
    FlashLoanReceiver,
}

impl Interface {
    pub fn name(self) -> &'static str {
        match self {
            Interface::FlashLoanReceiver => "IFlashLoanReceiver",
        }
    }

    /// The interface's function signatures.
    pub fn signatures(self) -> &'static [&'static str] {
        match self {
            Interface::FlashLoanReceiver => &[
                "function executeOperation(address asset, uint256 amount, uint256 premium, address initiator, bytes calldata params) external returns (bool);",
            ],
        }
    }
}

/// Everything feature detection found in a component list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Features {
    pub markers: IndexSet<Marker>,
    pub imports: IndexSet<&'static str>,
    pub bases: IndexSet<&'static str>,
    pub interfaces: IndexSet<Interface>,
    /// First template of each constructor-driving kind. Later duplicates
    /// only contribute their marker.
    pub erc20: Option<Erc20>,
    pub erc721: Option<Erc721>,
    pub dao: Option<DaoVoting>,
}

impl Features {
    /// Scan a component list once.
    pub fn detect(components: &[CanvasComponent]) -> Self {
        let mut features = Self::default();

        for component in components {
            match &component.kind {
                ComponentKind::Erc20(t) if features.erc20.is_none() => {
                    features.erc20 = Some(t.clone())
                }
                ComponentKind::Erc721(t) if features.erc721.is_none() => {
                    features.erc721 = Some(t.clone())
                }
                ComponentKind::DaoVoting(t) if features.dao.is_none() => {
                    features.dao = Some(t.clone())
                }
                _ => {}
            }

            if let Some(marker) = Marker::from_kind(&component.kind) {
                features.add(marker);
            }
        }

        features
    }

    fn add(&mut self, marker: Marker) {
        if !self.markers.insert(marker) {
            return;
        }
        self.imports.extend(marker.imports());
        self.bases.extend(marker.bases());
        if let Some(interface) = marker.interface() {
            self.interfaces.insert(interface);
        }
    }

    /// Templates that need constructor arguments or base calls.
    pub fn requires_constructor(&self) -> bool {
        self.erc20.is_some() || self.erc721.is_some() || self.dao.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{AccessControl, CanvasComponent, Event, FlashLoan, ReentrancyGuard};
    use pretty_assertions::assert_eq;

    fn place(kind: ComponentKind) -> CanvasComponent {
        CanvasComponent::new(kind, 0.0, 0.0)
    }

    #[test]
    fn test_no_markers() {
        let features = Features::detect(&[place(ComponentKind::Event(Event::default()))]);
        assert!(features.imports.is_empty());
        assert!(features.bases.is_empty());
        assert!(!features.requires_constructor());
    }

    #[test]
    fn test_insertion_order() {
        let features = Features::detect(&[
            place(ComponentKind::ReentrancyGuard(ReentrancyGuard::default())),
            place(ComponentKind::AccessControl(AccessControl::default())),
        ]);
        let bases: Vec<_> = features.bases.iter().copied().collect();
        assert_eq!(bases, vec!["ReentrancyGuard", "Ownable"]);
    }

    #[test]
    fn test_access_control_adds_ownable_regardless_of_context() {
        let lists: Vec<Vec<CanvasComponent>> = vec![
            vec![],
            vec![place(ComponentKind::Erc20(Erc20::default()))],
            vec![
                place(ComponentKind::FlashLoan(FlashLoan {})),
                place(ComponentKind::AccessControl(AccessControl::default())),
            ],
        ];
        for mut list in lists {
            let before = Features::detect(&list);
            list.insert(0, place(ComponentKind::AccessControl(AccessControl::default())));
            let after = Features::detect(&list);

            assert!(after.bases.contains("Ownable"));
            assert!(after.imports.contains("@openzeppelin/contracts/access/Ownable.sol"));
            assert!(before.bases.iter().all(|b| after.bases.contains(b)));
            assert!(before.imports.iter().all(|i| after.imports.contains(i)));
            let added: Vec<_> = after.bases.difference(&before.bases).copied().collect();
            assert!(added.is_empty() || added == vec!["Ownable"]);
        }
    }

    #[test]
    fn test_duplicates_deduplicate() {
        let features = Features::detect(&[
            place(ComponentKind::AccessControl(AccessControl::default())),
            place(ComponentKind::AccessControl(AccessControl::default())),
        ]);
        assert_eq!(features.bases.len(), 1);
        assert_eq!(features.imports.len(), 1);
    }

    #[test]
    fn test_first_template_wins() {
        let first = Erc20 {
            name: Some("First".into()),
            ..Default::default()
        };
        let second = Erc20 {
            name: Some("Second".into()),
            ..Default::default()
        };
        let features = Features::detect(&[
            place(ComponentKind::Erc20(first.clone())),
            place(ComponentKind::Erc20(second)),
        ]);
        assert_eq!(features.erc20, Some(first));
        assert!(features.requires_constructor());
    }

    #[test]
    fn test_flash_loan_interface_without_import() {
        let features = Features::detect(&[place(ComponentKind::FlashLoan(FlashLoan {}))]);
        assert!(features.imports.is_empty());
        assert!(features.markers.contains(&Marker::FlashLoan));
        assert_eq!(
            features.interfaces.iter().copied().collect::<Vec<_>>(),
            vec![Interface::FlashLoanReceiver]
        );
        assert_eq!(features.bases.first(), Some(&"IFlashLoanReceiver"));
    }

    #[test]
    fn test_dao_pulls_two_imports() {
        let features = Features::detect(&[place(ComponentKind::DaoVoting(DaoVoting::default()))]);
        assert_eq!(features.imports.len(), 2);
        assert_eq!(
            features.bases.iter().copied().collect::<Vec<_>>(),
            vec!["Governor", "GovernorSettings"]
        );
    }
}
