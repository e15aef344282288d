pub mod classification;
pub mod fundamentus;
