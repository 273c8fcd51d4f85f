pub mod dataset;
pub mod payback;
pub mod unit_economics;
