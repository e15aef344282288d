pub mod fund;
