pub mod error;
pub mod traits;

pub use error::{Result, SplineError};
pub use traits::Validate;
