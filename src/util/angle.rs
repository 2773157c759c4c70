//! Degree-angle normalization helpers.

/// Fold an angle in degrees into (-180, 180] with a single wrap.
///
/// Only valid for inputs within one turn of the range, i.e. the result of
/// adding less than 360 degrees to an already-normalized angle.
#[inline]
#[must_use]
pub fn normalize_yaw(degrees: f32) -> f32 {
    if degrees > 180.0 {
        degrees - 360.0
    } else if degrees <= -180.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

/// Fold an arbitrary angle in degrees into (-180, 180].
#[inline]
#[must_use]
pub fn normalize_axis(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}
