//! Uniform closed spline algorithms: knot/index utilities and De Boor evaluation.

pub mod deboor;
pub mod knot;

pub use deboor::{curve_point, periodic_curve_point};
pub use knot::{control_point_param, find_control_point, weight, wrap_index};
