// metaball field plus the two generators built on it:
// a point sampler that marches trials onto the iso-surface,
// and a walker that hugs the iso-surface with a bang-bang correction

use std::f64::consts::TAU;

use bevy::log::debug;
use rand::Rng;

use crate::config::*;
use crate::error::PathError;
use super::sampling::{sample_ball_volume, sample_sphere_surface};
use super::vector::Vec3;
use super::{hard_sign, normalize_or, require_count, require_non_negative, require_positive};

/// Lower bound on centroid distances, a point sitting on a centroid stays finite.
pub const MIN_CENTROID_DISTANCE: f64 = 1e-6;

/// Upper bound on `ceil(4 * radius / dt)`, the steps a single sampler trial may take.
pub const MAX_TRIAL_STEPS: usize = 1_000_000;

/// `m` centroids evenly spaced on a circle of `radius` in the XY plane, first one on +X.
pub fn circle_centroids(m: usize, radius: f64) -> Vec<Vec3> {
    (0..m)
        .map(|i| {
            let phi = TAU * i as f64 / m as f64;
            Vec3::new(radius * phi.cos(), radius * phi.sin(), 0.0)
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct MetaballField {
    pub centroids: Vec<Vec3>,
}

impl MetaballField {
    pub fn new(centroids: Vec<Vec3>) -> Self {
        Self { centroids }
    }

    /// Inverse-square pull towards the centroids, sum of `(c - p) / |c - p|^2`.
    /// Not normalized. A centroid at distance zero contributes nothing.
    pub fn attraction(&self, p: Vec3) -> Vec3 {
        self.centroids.iter().fold(Vec3::ZERO, |acc, &c| {
            let dir = c - p;
            let dist_sq = dir.length_squared().max(MIN_CENTROID_DISTANCE * MIN_CENTROID_DISTANCE);
            acc.add_scaled(dir, 1.0 / dist_sq)
        })
    }

    /// Field value, sum of `1 / |c - p|`.
    pub fn value(&self, p: Vec3) -> f64 {
        self.centroids
            .iter()
            .map(|&c| 1.0 / (c - p).length().max(MIN_CENTROID_DISTANCE))
            .sum()
    }
}

// point sampler

#[derive(Debug, Clone, PartialEq)]
pub struct MetaballPointsParams {
    /// number of trials, not the output length
    pub n: usize,
    pub m: usize,
    pub radius: f64,
    pub threshold: f64,
    pub show_traces: bool,
    pub dt: f64,
}

impl Default for MetaballPointsParams {
    fn default() -> Self {
        Self {
            n: METABALL_POINTS_TRIALS,
            m: METABALL_POINTS_CENTROIDS,
            radius: METABALL_POINTS_RADIUS,
            threshold: METABALL_POINTS_THRESHOLD,
            show_traces: METABALL_POINTS_SHOW_TRACES,
            dt: METABALL_POINTS_DT,
        }
    }
}

impl MetaballPointsParams {
    pub fn validate(&self) -> Result<(), PathError> {
        require_count("n", self.n, 1)?;
        require_count("m", self.m, 1)?;
        require_positive("radius", self.radius)?;
        require_positive("threshold", self.threshold)?;
        require_positive("dt", self.dt)?;
        let steps = (4.0 * self.radius / self.dt).ceil();
        if steps > MAX_TRIAL_STEPS as f64 {
            return Err(PathError::InvalidParameter {
                name: "dt",
                value: self.dt,
                reason: "too small for the radius, trial step budget exceeded",
            });
        }
        Ok(())
    }

    // step budget of one trial
    pub fn max_steps(&self) -> usize {
        (4.0 * self.radius / self.dt).ceil() as usize
    }
}

/// Samples points on the metaball iso-surface.
///
/// Each of the `n` trials starts at a random point in a ball of `2 * radius` and marches
/// along the attraction field until the field value exceeds `threshold` or the step budget
/// runs out. With `show_traces` every visited point is kept (the crossing point included),
/// otherwise only the crossing point of each successful trial. The output length is data
/// dependent and may be zero.
pub fn generate_metaball_points<R: Rng + ?Sized>(
    params: &MetaballPointsParams,
    rng: &mut R,
) -> Result<Vec<Vec3>, PathError> {
    params.validate()?;

    let field = MetaballField::new(circle_centroids(params.m, 0.8 * params.radius));
    let max_steps = params.max_steps();
    let mut points = Vec::new();
    let mut found_count = 0usize;

    for _ in 0..params.n {
        let mut point = sample_ball_volume(rng, 2.0 * params.radius);
        let mut found = false;

        for _ in 0..max_steps {
            let normal = field.attraction(point).normalize_or_zero();
            point = point.add_scaled(normal, params.dt);

            let val = field.value(point);
            if params.show_traces {
                points.push(point);
            }
            if val > params.threshold {
                found = true;
                break;
            }
        }

        if found {
            found_count += 1;
            if !params.show_traces {
                points.push(point);
            }
        }
    }

    debug!(
        "metaball points: {} points, {}/{} trials reached the surface",
        points.len(),
        found_count,
        params.n
    );
    Ok(points)
}

// attraction walk

#[derive(Debug, Clone, PartialEq)]
pub struct MetaballPathParams {
    pub n: usize,
    pub m: usize,
    pub radius: f64,
    pub dt: f64,
    pub noise: f64,
    pub threshold: f64,
    /// weight of the surface correction, the tangential part is damped by `1 - factor`
    pub factor: f64,
}

impl Default for MetaballPathParams {
    fn default() -> Self {
        Self {
            n: METABALL_PATH_POINTS,
            m: METABALL_PATH_CENTROIDS,
            radius: METABALL_PATH_RADIUS,
            dt: METABALL_PATH_DT,
            noise: METABALL_PATH_NOISE,
            threshold: METABALL_PATH_THRESHOLD,
            factor: METABALL_PATH_FACTOR,
        }
    }
}

impl MetaballPathParams {
    pub fn validate(&self) -> Result<(), PathError> {
        require_count("n", self.n, 1)?;
        require_count("m", self.m, 1)?;
        require_positive("radius", self.radius)?;
        require_positive("dt", self.dt)?;
        require_non_negative("noise", self.noise)?;
        require_positive("threshold", self.threshold)?;
        require_non_negative("factor", self.factor)?;
        if self.factor > 1.0 {
            return Err(PathError::InvalidParameter {
                name: "factor",
                value: self.factor,
                reason: "must be <= 1",
            });
        }
        Ok(())
    }
}

/// Walks `n` steps along the metaball iso-surface at `threshold`.
///
/// The normal points away from the centroids. Inside the surface (value above threshold)
/// the walker is pushed outwards along it, outside it is pulled back in. The push uses a
/// hard sign, so it switches abruptly at the surface.
pub fn generate_metaball_path<R: Rng + ?Sized>(
    params: &MetaballPathParams,
    rng: &mut R,
) -> Result<Vec<Vec3>, PathError> {
    params.validate()?;

    let field = MetaballField::new(circle_centroids(params.m, params.radius));
    let factor = params.factor;

    let mut points = Vec::with_capacity(params.n);
    let mut pos = sample_sphere_surface(rng, 0.5 * params.radius);
    let mut vel = sample_sphere_surface(rng, 1.0);

    for _ in 0..params.n {
        let normal = (-field.attraction(pos)).normalize_or_zero();
        let val = field.value(pos);

        let tangential = vel.project_on_plane(normal).normalize_or_zero() * (1.0 - factor);
        let candidate = (tangential + sample_sphere_surface(rng, params.noise))
            .add_scaled(normal, factor * hard_sign(val - params.threshold))
            .normalize_or_zero();

        let new_vel = normalize_or(candidate + vel, vel);
        let new_pos = pos.add_scaled(new_vel, params.dt);

        points.push(new_pos);
        pos = new_pos;
        vel = new_vel;
    }

    debug!("metaball path: {} points", points.len());
    Ok(points)
}
