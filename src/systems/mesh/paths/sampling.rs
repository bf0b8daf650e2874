// random vector sampling, closed form, one call = fixed number of uniform draws

use std::f64::consts::TAU;

use rand::Rng;
use rand_distr::Distribution;

use super::vector::Vec3;

/// Uniform point on the surface of a sphere centred at the origin.
/// Draws theta first, then phi = acos(2u - 1), so there is no clustering at the poles.
pub fn sample_sphere_surface<R: Rng + ?Sized>(rng: &mut R, radius: f64) -> Vec3 {
    let theta = TAU * rng.random::<f64>();
    let phi = (2.0 * rng.random::<f64>() - 1.0).acos();

    spherical_to_cartesian(radius, theta, phi)
}

/// Uniform point inside a solid ball centred at the origin.
/// The cube root on the radius keeps the density uniform per volume, not per radius.
pub fn sample_ball_volume<R: Rng + ?Sized>(rng: &mut R, radius: f64) -> Vec3 {
    let r0 = (radius * radius * radius * rng.random::<f64>()).cbrt();
    let theta = TAU * rng.random::<f64>();
    let phi = (2.0 * rng.random::<f64>() - 1.0).acos();

    spherical_to_cartesian(r0, theta, phi)
}

fn spherical_to_cartesian(r: f64, theta: f64, phi: f64) -> Vec3 {
    Vec3::new(
        r * theta.cos() * phi.sin(),
        r * theta.sin() * phi.sin(),
        r * phi.cos(),
    )
}

// distribution wrappers so samplers compose with rng.sample(..)

#[derive(Debug, Clone, Copy)]
pub struct SphereSurface {
    pub radius: f64,
}

impl Distribution<Vec3> for SphereSurface {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        sample_sphere_surface(rng, self.radius)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BallVolume {
    pub radius: f64,
}

impl Distribution<Vec3> for BallVolume {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        sample_ball_volume(rng, self.radius)
    }
}
