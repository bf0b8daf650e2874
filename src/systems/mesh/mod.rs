// this is the entry point for the shape generation plugin
use bevy::prelude::*;

use crate::config::*;
use paths::{MetaballPathParams, MetaballPointsParams, SpherePathParams};

pub mod paths;
pub mod shape;

// resources
#[derive(Resource)]
pub struct Seed(pub u64);

// which curve is on screen
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShapeKind {
    Lissajous,
    SpherePath,
    #[default]
    MetaballPath,
    MetaballPoints,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Lissajous,
        ShapeKind::SpherePath,
        ShapeKind::MetaballPath,
        ShapeKind::MetaballPoints,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Lissajous => "Lissajous",
            ShapeKind::SpherePath => "Sphere Path",
            ShapeKind::MetaballPath => "Metaball Path",
            ShapeKind::MetaballPoints => "Metaball Points",
        }
    }

    // the sampler output has no order, a curve through it is noise
    pub fn default_style(self) -> RenderStyle {
        match self {
            ShapeKind::MetaballPoints => RenderStyle::Points,
            _ => RenderStyle::Tube,
        }
    }
}

// how a generated point sequence is drawn
// the lissajous knot ignores this and is always a closed tube
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RenderStyle {
    #[default]
    Tube,
    Line,
    Points,
}

impl RenderStyle {
    pub const ALL: [RenderStyle; 3] = [RenderStyle::Tube, RenderStyle::Line, RenderStyle::Points];

    pub fn label(self) -> &'static str {
        match self {
            RenderStyle::Tube => "Tube",
            RenderStyle::Line => "Line",
            RenderStyle::Points => "Points",
        }
    }
}

// shape generation parameters, one block per generator
#[derive(Resource, Clone, Debug, Default)]
pub struct ShapeParams {
    pub kind: ShapeKind,
    pub style: RenderStyle,
    pub sphere: SpherePathParams,
    pub metaball_points: MetaballPointsParams,
    pub metaball_path: MetaballPathParams,
}

impl ShapeParams {
    /// Switches the shape and resets the render style to the one that suits it.
    pub fn select_kind(&mut self, kind: ShapeKind) {
        if kind != self.kind {
            self.kind = kind;
            self.style = kind.default_style();
        }
    }
}

// marker for the single shape entity in the scene
#[derive(Component)]
pub struct ShapeMesh {
    pub kind: ShapeKind,
    pub seed: u64,
}

// Event for regeneration
#[derive(Event)]
pub struct RegenerateEvent {
    pub seed: u64,
}

// main plugin for shape generation
pub struct ShapeGenerationPlugin;

impl Plugin for ShapeGenerationPlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(Seed(INITIAL_SEED))
            .insert_resource(ShapeParams::default())

            .add_event::<RegenerateEvent>()

            // first shape on start, goes through the same path as every later rebuild
            .add_systems(Startup, |mut regen_events: EventWriter<RegenerateEvent>, seed: Res<Seed>| {
                regen_events.write(RegenerateEvent { seed: seed.0 });
            })
            .add_systems(Update, (shape::handle_regeneration, shape::rotate_shape).chain());
    }
}
