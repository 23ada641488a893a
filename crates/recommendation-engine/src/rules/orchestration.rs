//! Orchestration trigger: the explicit need flag, or High/VeryHigh volume

use shared_types::{Needs, Scale, Tier};

use crate::assembler::Assembly;

/// Routing products recommended once volume or the need flag justifies them
pub const ORCHESTRATION_STACK: &[&str] = &["Payment Orchestration", "Retry"];

pub fn apply_orchestration_rule(needs: &Needs, scale: Scale, assembly: &mut Assembly) {
    if needs.orchestration || scale >= Scale::High {
        for name in ORCHESTRATION_STACK {
            assembly.push(Tier::GoodToHave, name);
        }
    }
}
