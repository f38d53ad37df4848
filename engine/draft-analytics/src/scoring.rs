use crate::config::ScoringConfig;
use crate::models::{or_zero, NormalizedPick, ScoredPick};

/// Impact calculator for per-player value metrics
#[derive(Debug, Clone)]
pub struct ImpactCalculator {
    config: ScoringConfig,
}

impl ImpactCalculator {
    /// Create a new impact calculator
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// impact = w_av + allpro_weight * allpro + probowl_weight * probowls
    pub fn impact_score(&self, w_av: Option<f64>, allpro: Option<u32>, probowls: Option<u32>) -> f64 {
        or_zero(w_av)
            + self.config.allpro_weight * or_zero(allpro)
            + self.config.probowl_weight * or_zero(probowls)
    }

    /// context = w_av * (1 + round / divisor); a missing round counts as 0
    pub fn context_value(&self, w_av: Option<f64>, round: Option<u8>) -> f64 {
        or_zero(w_av) * (1.0 + or_zero(round) / self.config.round_context_divisor)
    }

    /// Whether the player earned any All-Pro or Pro Bowl selection
    pub fn recognized(allpro: Option<u32>, probowls: Option<u32>) -> bool {
        allpro.unwrap_or(0) + probowls.unwrap_or(0) > 0
    }

    /// Score one normalized pick
    pub fn score(&self, normalized: NormalizedPick) -> ScoredPick {
        let stats = &normalized.pick.stats;
        let impact_score = self.impact_score(stats.w_av, stats.allpro, stats.probowls);
        let context_value = self.context_value(stats.w_av, normalized.pick.round);
        let recognized = Self::recognized(stats.allpro, stats.probowls);

        ScoredPick { normalized, impact_score, context_value, recognized }
    }

    /// Score every pick, keeping input order
    pub fn score_all<I>(&self, picks: I) -> Vec<ScoredPick>
    where
        I: IntoIterator<Item = NormalizedPick>,
    {
        picks.into_iter().map(|pick| self.score(pick)).collect()
    }
}

impl Default for ImpactCalculator {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
