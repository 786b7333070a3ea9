// Math utilities and helper functions

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamp a value to the unit interval
pub fn clamp01(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Linear interpolation
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Normalised position of `value` between `min` and `max`, clamped to [0, 1]
///
/// `min > max` is allowed and inverts the ramp.
pub fn step(min: f32, max: f32, value: f32) -> f32 {
    clamp01((value - min) / (max - min))
}

/// Hermite smoothstep over the clamped fraction returned by [`step`]
pub fn smoothstep(min: f32, max: f32, value: f32) -> f32 {
    let x = step(min, max, value);
    x * x * (3.0 - 2.0 * x)
}
