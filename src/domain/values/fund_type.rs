use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// FII classification as carried in the external classification table.
///
/// The table uses the Portuguese market labels; anything it does not
/// cover (or a fund absent from the table altogether) is `Undefined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundType {
    /// Physical-property funds ("Tijolo").
    Brick,
    /// Receivables/credit funds ("Papel").
    Paper,
    /// Mixed portfolios ("Híbrido").
    Hybrid,
    /// Fund of funds ("FOF").
    FundOfFunds,
    /// No classification available.
    Undefined,
}

impl FundType {
    /// Lenient parse for classification-table values: unknown labels
    /// degrade to `Undefined` instead of failing the load.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(FundType::Undefined)
    }
}

impl Default for FundType {
    fn default() -> Self {
        FundType::Undefined
    }
}

impl fmt::Display for FundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FundType::Brick => write!(f, "Tijolo"),
            FundType::Paper => write!(f, "Papel"),
            FundType::Hybrid => write!(f, "Híbrido"),
            FundType::FundOfFunds => write!(f, "FOF"),
            FundType::Undefined => write!(f, "Indefinido"),
        }
    }
}

impl FromStr for FundType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tijolo" | "brick" => Ok(FundType::Brick),
            "papel" | "paper" => Ok(FundType::Paper),
            "híbrido" | "hibrido" | "hybrid" => Ok(FundType::Hybrid),
            "fof" | "fundo de fundos" => Ok(FundType::FundOfFunds),
            "indefinido" | "undefined" => Ok(FundType::Undefined),
            _ => Err(format!("Unknown fund type: {s}")),
        }
    }
}
