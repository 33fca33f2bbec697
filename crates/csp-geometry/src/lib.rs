//! Closed spline geometry: cyclic De Boor evaluation, curves, and sampling.

pub mod curve;
pub mod spline;
pub mod tessellate;

pub use curve::{ClosedSpline, Curve};
