pub mod error;
pub mod types;

#[cfg(feature = "payback")]
pub mod dataset;

#[cfg(feature = "payback")]
pub mod payback;

#[cfg(feature = "unit_economics")]
pub mod unit_economics;

pub use error::BreakevenError;
pub use types::*;

/// Standard result type for all break-even operations
pub type BreakevenResult<T> = Result<T, BreakevenError>;
