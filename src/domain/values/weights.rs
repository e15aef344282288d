use serde::{Deserialize, Serialize};

/// Importance weights for the composite score.
///
/// The score is `Σ weight × rank` over the four criteria, so lower is
/// better and a weight of zero removes a criterion entirely. The
/// default reproduces the classic two-factor ranking: P/VP rank plus
/// DY rank, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankWeights {
    pub pvp: u32,
    pub dy: u32,
    pub liquidity: u32,
    pub vacancy: u32,
}

impl Default for RankWeights {
    fn default() -> Self {
        Self {
            pvp: 1,
            dy: 1,
            liquidity: 0,
            vacancy: 0,
        }
    }
}

impl RankWeights {
    pub fn is_all_zero(&self) -> bool {
        self.pvp == 0 && self.dy == 0 && self.liquidity == 0 && self.vacancy == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_two_factor() {
        let w = RankWeights::default();
        assert_eq!((w.pvp, w.dy, w.liquidity, w.vacancy), (1, 1, 0, 0));
        assert!(!w.is_all_zero());
    }
}
