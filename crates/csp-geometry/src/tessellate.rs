//! Tessellation utilities for converting curves to discrete point sequences.

use csp_core::{Result, SplineError};
use csp_math::Point3;

use crate::curve::Curve;

/// Upper bound on the number of points a single fixed-step sampling may produce.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Sample `curve` at `t0, t0 + step, t0 + 2 * step, ...` while below `t1`.
///
/// Parameters are computed as `t0 + k * step` rather than accumulated, so long
/// runs do not drift. Requests needing more than [`MAX_SAMPLES`] points are
/// rejected.
pub fn sample_range(curve: &dyn Curve, t0: f64, t1: f64, step: f64) -> Result<Vec<Point3>> {
    if !(step.is_finite() && step > 0.0) {
        return Err(SplineError::InvalidOperation(format!(
            "sample step must be positive and finite, got {}",
            step
        )));
    }
    if !(t0.is_finite() && t1.is_finite()) {
        return Err(SplineError::InvalidOperation(format!(
            "sample range [{}, {}) must be finite",
            t0, t1
        )));
    }

    let steps = ((t1 - t0) / step).ceil().max(0.0);
    if !steps.is_finite() || steps > MAX_SAMPLES as f64 {
        return Err(SplineError::InvalidOperation(format!(
            "sampling [{}, {}) with step {} exceeds {} points",
            t0, t1, step, MAX_SAMPLES
        )));
    }

    let count = steps as usize;
    let mut points = Vec::with_capacity(count);
    for k in 0..count {
        let t = t0 + k as f64 * step;
        if t >= t1 {
            break;
        }
        points.push(curve.point_at(t));
    }

    Ok(points)
}

/// Sample the whole domain of `curve` with a fixed parameter step.
pub fn sample_curve(curve: &dyn Curve, step: f64) -> Result<Vec<Point3>> {
    let (t_min, t_max) = curve.domain();
    sample_range(curve, t_min, t_max, step)
}

/// Convert a curve to a polyline using adaptive subdivision.
///
/// The algorithm recursively subdivides segments where the midpoint deviation
/// from the chord exceeds the given `tolerance`. Closed curves end on the
/// point they started from.
///
/// [`Curve::point_at`] is infallible, so a curve that cannot be evaluated (for
/// example a [`ClosedSpline`](crate::ClosedSpline) that fails validation)
/// yields NaN points here. Validate such curves before tessellating.
///
/// # Arguments
/// * `curve` - The curve to tessellate
/// * `tolerance` - Maximum allowed deviation from the true curve
pub fn curve_to_polyline(curve: &dyn Curve, tolerance: f64) -> Vec<Point3> {
    let (t_min, t_max) = curve.domain();
    let mut points = vec![curve.point_at(t_min)];

    if curve.is_closed() {
        // A single chord from start to end is degenerate, so seed with halves
        let t_mid = (t_min + t_max) * 0.5;
        subdivide_curve(curve, t_min, t_mid, tolerance, &mut points, 1);
        subdivide_curve(curve, t_mid, t_max, tolerance, &mut points, 1);
    } else {
        subdivide_curve(curve, t_min, t_max, tolerance, &mut points, 0);
    }

    points
}

/// Maximum recursion depth for adaptive subdivision.
const MAX_DEPTH: u32 = 12;

fn subdivide_curve(
    curve: &dyn Curve,
    t0: f64,
    t1: f64,
    tolerance: f64,
    points: &mut Vec<Point3>,
    depth: u32,
) {
    if depth >= MAX_DEPTH {
        points.push(curve.point_at(t1));
        return;
    }

    let t_mid = (t0 + t1) * 0.5;
    let p0 = curve.point_at(t0);
    let p1 = curve.point_at(t1);
    let p_mid = curve.point_at(t_mid);

    let chord_mid = (p0 + p1) * 0.5;
    let deviation = (p_mid - chord_mid).length();

    if deviation > tolerance {
        subdivide_curve(curve, t0, t_mid, tolerance, points, depth + 1);
        subdivide_curve(curve, t_mid, t1, tolerance, points, depth + 1);
    } else {
        points.push(p1);
    }
}
