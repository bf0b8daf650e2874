// noisy walk softly held on the surface of a sphere

use bevy::log::debug;
use rand::Rng;

use crate::config::{SPHERE_PATH_DT, SPHERE_PATH_NOISE, SPHERE_PATH_POINTS, SPHERE_PATH_RADIUS, SPHERE_PATH_SPRING};
use crate::error::PathError;
use super::sampling::sample_sphere_surface;
use super::vector::Vec3;
use super::{hard_sign, normalize_or, require_count, require_non_negative, require_positive};

#[derive(Debug, Clone, PartialEq)]
pub struct SpherePathParams {
    pub n: usize,
    pub radius: f64,
    pub dt: f64,
    /// spring strength pulling back to the sphere
    pub w: f64,
    pub noise: f64,
}

impl Default for SpherePathParams {
    fn default() -> Self {
        Self {
            n: SPHERE_PATH_POINTS,
            radius: SPHERE_PATH_RADIUS,
            dt: SPHERE_PATH_DT,
            w: SPHERE_PATH_SPRING,
            noise: SPHERE_PATH_NOISE,
        }
    }
}

impl SpherePathParams {
    pub fn validate(&self) -> Result<(), PathError> {
        require_count("n", self.n, 1)?;
        require_positive("radius", self.radius)?;
        require_positive("dt", self.dt)?;
        require_non_negative("w", self.w)?;
        require_non_negative("noise", self.noise)?;
        Ok(())
    }
}

/// Generates `n` trajectory points wandering around a sphere centred at the origin.
///
/// Each step drops the radial part of the velocity, adds isotropic noise and a quadratic
/// spring `-w * d^2 * sign(d)` along the normal, then blends with the previous velocity
/// for inertia. Positions advance by exactly `dt` per step.
pub fn generate_sphere_path<R: Rng + ?Sized>(
    params: &SpherePathParams,
    rng: &mut R,
) -> Result<Vec<Vec3>, PathError> {
    params.validate()?;

    let mut points = Vec::with_capacity(params.n);
    let mut pos = sample_sphere_surface(rng, params.radius);
    let mut vel = sample_sphere_surface(rng, 1.0);

    for _ in 0..params.n {
        // centre is the origin
        let d = pos.length() - params.radius;
        let normal = pos.normalize_or_zero();

        let candidate = vel
            .project_on_plane(normal)
            + sample_sphere_surface(rng, params.noise);
        let candidate = candidate
            .add_scaled(normal, -params.w * d * d * hard_sign(d))
            .normalize_or_zero();

        // inertia, keep the old heading if the blend cancels out
        let new_vel = normalize_or(candidate + vel, vel);
        let new_pos = pos.add_scaled(new_vel, params.dt);

        points.push(new_pos);
        pos = new_pos;
        vel = new_vel;
    }

    debug!("sphere path: {} points", points.len());
    Ok(points)
}
