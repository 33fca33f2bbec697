use crate::error::Result;

/// Validate the structural integrity of a curve or configuration.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
