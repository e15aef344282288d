pub mod export;
pub mod normalize;
pub mod ranking;
pub mod run_ranking;
