// mesh derives renderable geometry from core's height fields and carries
// the plain-data contract shared with an external renderer
pub mod builder;
pub mod lighting;
pub mod vertex;

pub use builder::{GridMesher, TerrainMesh};
pub use lighting::{DirectionalLight, Material};
pub use vertex::Vertex;

use core::{GradientGrid2D, GradientNoise2D, Smoothing};

// Every knob of the generation pipeline in one place, passed by value
// instead of living in process-wide state
#[derive(Debug, Clone, Copy)]
pub struct TerrainConfig {
    pub grid_height: usize,
    pub grid_width: usize,
    pub factor: usize,
    pub seed: u64,
    pub smoothing: Smoothing,
    pub x_scale: f32,
    pub z_scale: f32,
    pub height_scale: f32,
    pub height_offset: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            grid_height: 20,
            grid_width: 20,
            factor: 50,
            seed: 2025,
            smoothing: Smoothing::Cubic,
            x_scale: 2.0,
            z_scale: 2.0,
            height_scale: 5.0,
            height_offset: -200.0,
        }
    }
}

// One-shot batch pipeline: gradient grid -> height field -> mesh.
// Deterministic for a given config; the returned buffers are never touched
// again and can go straight into immutable GPU buffers.
pub fn produce(config: &TerrainConfig) -> TerrainMesh {
    let grid = GradientGrid2D::generate(config.grid_height, config.grid_width, config.seed);
    let field = GradientNoise2D::new(grid, config.factor, config.smoothing).synthesize();

    GridMesher::new(
        config.x_scale,
        config.z_scale,
        config.height_scale,
        config.height_offset,
    )
    .build(&field)
}
