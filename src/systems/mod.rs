pub mod animation;
pub mod capture;
pub mod mesh;
pub mod ui;
