// procedural path generation
// every generator is a plain function of its params and an injected rng

pub mod vector;
pub mod sampling;
pub mod sphere_path;
pub mod metaballs;
pub mod lissajous;
pub mod mesh_gen;

pub use vector::Vec3;
pub use sphere_path::{generate_sphere_path, SpherePathParams};
pub use metaballs::{generate_metaball_path, generate_metaball_points, MetaballPathParams, MetaballPointsParams};

use crate::error::PathError;

// sign with sign(0) == 0, f64::signum would give +-1 for zeros
pub(crate) fn hard_sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

// unit direction, or the fallback when the vector collapses to zero
pub(crate) fn normalize_or(v: Vec3, fallback: Vec3) -> Vec3 {
    let n = v.normalize_or_zero();
    if n.is_zero() { fallback } else { n }
}

// parameter checks shared by the generators

pub(crate) fn require_count(name: &'static str, value: usize, min: usize) -> Result<(), PathError> {
    if value < min {
        return Err(PathError::InvalidParameter {
            name,
            value: value as f64,
            reason: "count too small",
        });
    }
    Ok(())
}

pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<(), PathError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PathError::InvalidParameter {
            name,
            value,
            reason: "must be finite and > 0",
        });
    }
    Ok(())
}

pub(crate) fn require_non_negative(name: &'static str, value: f64) -> Result<(), PathError> {
    if !value.is_finite() || value < 0.0 {
        return Err(PathError::InvalidParameter {
            name,
            value,
            reason: "must be finite and >= 0",
        });
    }
    Ok(())
}
