//! Knot and index utilities for uniform closed splines.
//!
//! Knots are index-valued: control point `i` sits at parameter `i`. Indices
//! passed around here are *unwrapped* and may fall outside `[0, n)`; they are
//! only reduced with [`wrap_index`] when a control point is actually read.

/// Return the parameter value of control point `idx`.
pub fn control_point_param(idx: isize) -> f64 {
    idx as f64
}

/// Reduce an unwrapped index into `[0, len)`, treating the control polygon as
/// circular. Negative indices wrap from the end.
///
/// # Panics
/// Panics if `len == 0`.
pub fn wrap_index(idx: isize, len: usize) -> usize {
    assert!(len > 0, "cannot wrap index {} into an empty sequence", idx);
    idx.rem_euclid(len as isize) as usize
}

/// Blend factor of `t` between the parameters of `idx1` and `idx2`.
///
/// Returns `(t - t1) / (t2 - t1)`, unclamped, so `t` outside `[t1, t2]`
/// yields an extrapolating factor.
///
/// # Panics
/// Panics unless `param(idx1) < param(idx2)`.
pub fn weight(idx1: isize, idx2: isize, t: f64) -> f64 {
    let t1 = control_point_param(idx1);
    let t2 = control_point_param(idx2);
    assert!(
        t1 < t2,
        "weight interval must be increasing, got [{}, {}]",
        t1,
        t2
    );

    (t - t1) / (t2 - t1)
}

/// Find the rightmost control point whose parameter is `<= t`.
///
/// The scan starts at the last control point and walks down. Returns `None`
/// when `t` lies before the first control point (or the sequence is empty),
/// instead of walking into negative indices.
pub fn find_control_point(len: usize, t: f64) -> Option<usize> {
    let mut r = len.checked_sub(1)?;

    while t < control_point_param(r as isize) {
        r = r.checked_sub(1)?;
    }

    log::trace!("located control point {} for t={}", r, t);
    Some(r)
}
