//! Emit logic for modifier components.
//!
//! Every modifier renders as `modifier <name>(<parameters>) { ... }`. All
//! kinds except the reentrancy guard end with the `_;` placeholder; the
//! guard places it between lock and unlock itself.

use super::EmitContext;
use super::types::{AccessControl, CustomModifier, MultiSig, ReentrancyGuard, TimeLock};

fn open_modifier(ctx: &mut EmitContext, name: Option<&str>, default_name: &str, params: Option<&str>) {
    ctx.open(format!(
        "modifier {}({})",
        name.unwrap_or(default_name),
        params.unwrap_or_default()
    ));
}

/// Close a modifier with the trailing placeholder.
fn close_guarded(ctx: &mut EmitContext) {
    ctx.line("_;");
    ctx.close();
}

impl AccessControl {
    pub fn emit(&self, ctx: &mut EmitContext) {
        open_modifier(ctx, self.name.as_deref(), "onlyOwner", self.parameters.as_deref());
        ctx.line(format!(
            "if ({}) revert Unauthorized();",
            self.condition.as_deref().unwrap_or("msg.sender != owner()")
        ));
        close_guarded(ctx);
    }
}

impl ReentrancyGuard {
    pub fn emit(&self, ctx: &mut EmitContext) {
        let status = self.status.as_deref().unwrap_or("_status");
        let entered = self.entered.as_deref().unwrap_or("_ENTERED");
        let not_entered = self.not_entered.as_deref().unwrap_or("_NOT_ENTERED");

        open_modifier(ctx, self.name.as_deref(), "nonReentrant", self.parameters.as_deref());
        ctx.line(format!(
            "require({} != {}, \"ReentrancyGuard: reentrant call\");",
            status, entered
        ));
        ctx.line(format!("{} = {};", status, entered));
        ctx.line("_;");
        ctx.line(format!("{} = {};", status, not_entered));
        ctx.close();
    }
}

impl TimeLock {
    pub fn emit(&self, ctx: &mut EmitContext) {
        open_modifier(ctx, self.name.as_deref(), "onlyAfterUnlock", self.parameters.as_deref());
        ctx.line(format!(
            "if (!({})) revert InvalidInput();",
            self.time_condition.as_deref().unwrap_or("block.timestamp >= unlockTime")
        ));
        close_guarded(ctx);
    }
}

impl MultiSig {
    pub fn emit(&self, ctx: &mut EmitContext) {
        open_modifier(ctx, self.name.as_deref(), "requiresMultiSig", self.parameters.as_deref());
        ctx.line(format!(
            "if (!_verifyMultipleSignatures({}, {})) revert Unauthorized();",
            self.proposal_id.as_deref().unwrap_or("proposalId"),
            self.signers.as_deref().unwrap_or("signers")
        ));
        close_guarded(ctx);
    }
}

impl CustomModifier {
    pub fn emit(&self, ctx: &mut EmitContext) {
        open_modifier(ctx, self.name.as_deref(), "customModifier", self.parameters.as_deref());
        ctx.line(format!(
            "if (!({})) revert Unauthorized();",
            self.condition.as_deref().unwrap_or("true")
        ));
        close_guarded(ctx);
    }
}
