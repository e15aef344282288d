pub mod br_number;
pub mod filters;
pub mod fund_type;
pub mod weights;
