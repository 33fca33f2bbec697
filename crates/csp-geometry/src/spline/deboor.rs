//! De Boor evaluation of closed uniform splines.

use csp_core::{Result, SplineError};
use csp_math::{blend, Point3};

use super::knot::{control_point_param, find_control_point, weight, wrap_index};

/// Evaluate a closed spline at parameter `t` using repeated De Boor blending.
///
/// The control polygon is circular and control point `i` sits at parameter
/// `i`, so the domain is `[0, N)`. Each of the `order` rounds blends one fewer
/// pair of neighbouring points around the located segment; windows that run
/// past either end of the polygon wrap around.
///
/// # Errors
/// * [`SplineError::EmptyControlPolygon`] if `control_points` is empty
/// * [`SplineError::OrderTooHigh`] if `order >= N`
/// * [`SplineError::ParameterOutOfDomain`] if `t` is not finite or outside `[0, N)`
pub fn curve_point(control_points: &[Point3], order: usize, t: f64) -> Result<Point3> {
    let n = control_points.len();
    check_polygon(n, order)?;

    if !t.is_finite() || t < 0.0 || t >= control_point_param(n as isize) {
        return Err(SplineError::ParameterOutOfDomain { t, count: n });
    }

    let idx =
        find_control_point(n, t).ok_or(SplineError::ParameterOutOfDomain { t, count: n })?;

    let mut d = control_points.to_vec();
    let mut tmp = vec![Point3::ZERO; n];

    let span = idx as isize;
    let p = order as isize;

    for r in 0..p {
        for i in (span - p + r)..=span {
            let alpha = weight(i, i + p - r, t);
            tmp[wrap_index(i, n)] = blend(alpha, d[wrap_index(i - 1, n)], d[wrap_index(i, n)]);
        }

        std::mem::swap(&mut d, &mut tmp);
    }

    Ok(d[idx])
}

/// Evaluate a closed spline at any finite parameter, treating the domain as
/// periodic with period `N`.
///
/// `t` is reduced into `[0, N)` before evaluation, so `t` and `t + k * N`
/// evaluate to the same point.
pub fn periodic_curve_point(control_points: &[Point3], order: usize, t: f64) -> Result<Point3> {
    let n = control_points.len();
    check_polygon(n, order)?;

    if !t.is_finite() {
        return Err(SplineError::ParameterOutOfDomain { t, count: n });
    }

    let period = control_point_param(n as isize);
    let mut reduced = t.rem_euclid(period);
    // rem_euclid can round up to the period itself for tiny negative inputs
    if reduced >= period {
        reduced = 0.0;
    }

    curve_point(control_points, order, reduced)
}

fn check_polygon(n: usize, order: usize) -> Result<()> {
    if n == 0 {
        return Err(SplineError::EmptyControlPolygon);
    }
    if order >= n {
        return Err(SplineError::OrderTooHigh { order, count: n });
    }
    Ok(())
}
