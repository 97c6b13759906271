//! Math utility functions.

use euclid::default::Vector3D;
use num_traits::{Float, NumCast};

use crate::{Component, Components};

type Vector = Vector3D<Component>;

/// Wrap a hue angle in degrees into `[0, 360)`, whatever the sign of the
/// input.
pub fn normalize_hue<T: Float>(hue: T) -> T {
    let full = <T as NumCast>::from(360.0).unwrap_or_else(T::zero);
    let wrapped = hue % full;
    let wrapped = if wrapped < T::zero() {
        wrapped + full
    } else {
        wrapped
    };
    // `-1e-20 + 360.0` rounds to exactly 360.0.
    if wrapped >= full {
        T::zero()
    } else {
        wrapped
    }
}

/// Clamp `value` into `[min, max]`. NaN resolves to `min`.
pub fn clamp<T: Float>(value: T, min: T, max: T) -> T {
    value.max(min).min(max)
}

/// Linearly interpolate from `a` to `b` using `t` as the progress between
/// them.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Return true if the value is close enough to zero to be considered zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < Component::EPSILON
}

/// Weighted sum of the 3 components.
pub fn weighted_sum(components: &Components, weights: &Components) -> Component {
    let Components(x, y, z) = *components;
    let Components(wx, wy, wz) = *weights;
    Vector::new(x, y, z).dot(Vector::new(wx, wy, wz))
}
