// crate tests, grouped by area

mod sampling;
mod meshes;
mod animation;
