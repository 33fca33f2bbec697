//! Closed uniform spline curve.

use csp_core::{Result, SplineError, Validate};
use csp_math::Point3;

use super::Curve;
use crate::spline::{self, control_point_param};

/// A closed spline over a circular control polygon with index-valued knots.
///
/// Control point `i` sits at parameter `i`, giving the domain `[0, N)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedSpline {
    pub order: usize,
    pub control_points: Vec<Point3>,
}

impl ClosedSpline {
    pub fn new(order: usize, control_points: Vec<Point3>) -> Result<Self> {
        let curve = Self {
            order,
            control_points,
        };
        curve.validate()?;
        Ok(curve)
    }

    pub fn len(&self) -> usize {
        self.control_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.control_points.is_empty()
    }

    /// Evaluate at `t`, rejecting parameters outside `[0, N)`.
    pub fn try_point_at(&self, t: f64) -> Result<Point3> {
        spline::curve_point(&self.control_points, self.order, t)
    }

    /// Parameter range `[i, i + 1)` of fragment `i`.
    pub fn fragment(&self, index: usize) -> Result<(f64, f64)> {
        if index >= self.len() {
            return Err(SplineError::IndexOutOfRange {
                index,
                count: self.len(),
            });
        }
        let start = control_point_param(index as isize);
        Ok((start, control_point_param(index as isize + 1)))
    }
}

impl Validate for ClosedSpline {
    fn validate(&self) -> Result<()> {
        let count = self.control_points.len();
        if count == 0 {
            return Err(SplineError::EmptyControlPolygon);
        }
        if self.order >= count {
            return Err(SplineError::OrderTooHigh {
                order: self.order,
                count,
            });
        }
        if let Some(i) = self.control_points.iter().position(|p| !p.is_finite()) {
            return Err(SplineError::InvalidOperation(format!(
                "control point {} has a non-finite coordinate",
                i
            )));
        }
        Ok(())
    }
}

impl Curve for ClosedSpline {
    /// Evaluate at any `t`, wrapping it periodically into the domain.
    ///
    /// Returns NaN coordinates when the curve is invalid or `t` is not finite;
    /// use [`ClosedSpline::try_point_at`] to get the error instead.
    fn point_at(&self, t: f64) -> Point3 {
        spline::periodic_curve_point(&self.control_points, self.order, t)
            .unwrap_or(Point3::NAN)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, control_point_param(self.len() as isize))
    }

    fn is_closed(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use csp_math::{dvec3, DVec3};

    fn hexagon() -> Vec<Point3> {
        (0..6)
            .map(|i| {
                let a = i as f64 * std::f64::consts::FRAC_PI_3;
                dvec3(a.cos(), a.sin(), 0.0)
            })
            .collect()
    }

    #[test]
    fn test_new_validates() {
        assert!(ClosedSpline::new(2, hexagon()).is_ok());
        assert_eq!(
            ClosedSpline::new(0, vec![]),
            Err(SplineError::EmptyControlPolygon)
        );
        assert_eq!(
            ClosedSpline::new(6, hexagon()),
            Err(SplineError::OrderTooHigh { order: 6, count: 6 })
        );

        let mut cps = hexagon();
        cps[3] = dvec3(f64::NAN, 0.0, 0.0);
        assert!(matches!(
            ClosedSpline::new(1, cps),
            Err(SplineError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_domain_and_closed() {
        let curve = ClosedSpline::new(3, hexagon()).unwrap();
        assert_eq!(curve.domain(), (0.0, 6.0));
        assert!(curve.is_closed());
    }

    #[test]
    fn test_point_at_wraps_domain_end() {
        let curve = ClosedSpline::new(3, hexagon()).unwrap();
        let start = curve.point_at(0.0);
        let end = curve.point_at(6.0);
        assert_relative_eq!((start - end).length(), 0.0, epsilon = 1e-12);
        assert!(curve.try_point_at(6.0).is_err());
    }

    #[test]
    fn test_point_at_invalid_curve_is_nan() {
        let curve = ClosedSpline {
            order: 4,
            control_points: vec![DVec3::ZERO; 2],
        };
        assert!(curve.point_at(0.5).is_nan());
    }

    #[test]
    fn test_fragment_range() {
        let curve = ClosedSpline::new(1, hexagon()).unwrap();
        assert_eq!(curve.fragment(0).unwrap(), (0.0, 1.0));
        assert_eq!(curve.fragment(5).unwrap(), (5.0, 6.0));
        assert_eq!(
            curve.fragment(6),
            Err(SplineError::IndexOutOfRange { index: 6, count: 6 })
        );
    }
}
