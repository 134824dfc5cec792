// src/services/gate.rs
//! Tier gate: one enabled flag per tier, all enabled by default.

use lexicon::Tier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierGate {
    enabled: [bool; Tier::ALL.len()],
}

impl TierGate {
    pub fn new() -> Self {
        Self {
            enabled: [true; Tier::ALL.len()],
        }
    }

    pub fn is_enabled(&self, tier: Tier) -> bool {
        self.enabled[tier.index()]
    }

    pub fn set_enabled(&mut self, tier: Tier, enabled: bool) {
        self.enabled[tier.index()] = enabled;
    }

    pub fn enable(&mut self, tier: Tier) {
        self.set_enabled(tier, true);
    }

    pub fn disable(&mut self, tier: Tier) {
        self.set_enabled(tier, false);
    }

    /// Tiers currently switched off, in id order.
    pub fn disabled(&self) -> Vec<Tier> {
        Tier::ALL
            .into_iter()
            .filter(|t| !self.is_enabled(*t))
            .collect()
    }
}

impl Default for TierGate {
    fn default() -> Self {
        Self::new()
    }
}
