// closed 3d lissajous knot, frequencies 1:3:4 on x:y:z

use std::f64::consts::PI;

use super::vector::Vec3;

const AMPLITUDE: f64 = 1.5;

/// Point on the knot for `t` in [0, 1]. `t = 0` and `t = 1` give the same point.
pub fn lissajous_point(t: f64) -> Vec3 {
    Vec3::new(
        AMPLITUDE * (2.0 * PI * t + 0.25 * PI).sin(),
        AMPLITUDE * (6.0 * PI * t - 0.12 * PI).cos(),
        AMPLITUDE * (8.0 * PI * t + 0.33 * PI).sin(),
    )
}
