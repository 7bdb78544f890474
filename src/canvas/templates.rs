//! Template components contribute through feature detection (imports,
//! base contracts, interfaces and the constructor) and emit nothing of
//! their own inside the contract body.

use super::EmitContext;
use super::types::{ChainlinkPriceFeed, DaoVoting, Erc20, Erc721, FlashLoan, UpgradeableProxy};
use crate::ir::Interface;

macro_rules! silent_emit {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $ty {
                pub fn emit(&self, _ctx: &mut EmitContext) {}
            }
        )+
    };
}

silent_emit!(Erc20, Erc721, DaoVoting, FlashLoan, UpgradeableProxy, ChainlinkPriceFeed);

impl Interface {
    /// Emit the interface declaration placed ahead of the contract.
    pub fn emit(&self, ctx: &mut EmitContext) {
        ctx.open(format!("interface {}", self.name()));
        for signature in self.signatures() {
            ctx.line(*signature);
        }
        ctx.close();
    }
}
