use thiserror::Error;

/// Top-level error for shape generation and mesh building.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Rejected generator input. Generators fail fast instead of emitting degenerate output.
#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Errors from turning a point sequence into a renderable mesh.
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    #[error("curve needs at least 2 points, got {got}")]
    TooFewPoints { got: usize },

    #[error("point {index} is not finite")]
    NonFinitePoint { index: usize },
}

pub type Result<T> = std::result::Result<T, AppError>;
