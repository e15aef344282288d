use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fiirank", about = "Screens and ranks Brazilian real-estate funds (FIIs)")]
pub struct Cli {
    /// Path to the ticker classification table
    #[arg(long, default_value = "fii_types.json", global = true)]
    pub classification: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch, filter, enrich and rank the fund universe
    Rank {
        /// P/VP lower bound (inclusive)
        #[arg(long, default_value = "0.7")]
        min_pvp: f64,
        /// P/VP upper bound (inclusive)
        #[arg(long, default_value = "1.05")]
        max_pvp: f64,
        /// Minimum average daily traded volume (R$)
        #[arg(long, default_value = "400000")]
        min_liquidity: f64,
        /// Dividend-yield lower bound, fractional (0.08 = 8%)
        #[arg(long, default_value = "0.08")]
        min_dy: f64,
        /// Dividend-yield upper bound, fractional
        #[arg(long, default_value = "0.135")]
        max_dy: f64,
        /// Weight of the P/VP rank in the composite score
        #[arg(long, default_value = "1")]
        weight_pvp: u32,
        /// Weight of the dividend-yield rank
        #[arg(long, default_value = "1")]
        weight_dy: u32,
        /// Weight of the liquidity rank (0 excludes it)
        #[arg(long, default_value = "0")]
        weight_liquidity: u32,
        /// Weight of the vacancy rank (0 excludes it)
        #[arg(long, default_value = "0")]
        weight_vacancy: u32,
        /// Skip the per-fund detail pages (much faster, no report links)
        #[arg(long)]
        skip_details: bool,
        /// Also write the ranking as CSV to this path
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Fetch and normalize the whole universe without filtering
    List,
}
