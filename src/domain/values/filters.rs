use serde::{Deserialize, Serialize};
use tracing::warn;

/// Numeric screening thresholds, passed into the engine per invocation.
///
/// Both range filters are inclusive at both ends. Inverted bounds
/// (`min > max`) are legal: they are warned about and then applied
/// as given, which simply filters everything out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub min_pvp: f64,
    pub max_pvp: f64,
    pub min_liquidity: f64,
    pub min_dy: f64,
    pub max_dy: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_pvp: 0.70,
            max_pvp: 1.05,
            min_liquidity: 400_000.0,
            min_dy: 0.08,
            max_dy: 0.135,
        }
    }
}

impl FilterConfig {
    /// Warn about inverted ranges. Never fails: filtering proceeds with
    /// the bounds exactly as supplied.
    pub fn warn_if_inverted(&self) {
        if self.min_pvp > self.max_pvp {
            warn!(
                min = self.min_pvp,
                max = self.max_pvp,
                "P/VP lower bound exceeds upper bound; no fund can match"
            );
        }
        if self.min_dy > self.max_dy {
            warn!(
                min = self.min_dy,
                max = self.max_dy,
                "DY lower bound exceeds upper bound; no fund can match"
            );
        }
    }
}
