// core holds the gradient-noise synthesis pipeline:
// coarse gradient lattice -> smoothed blending -> dense height field
pub mod gradient2;
pub mod gradient_noise2;
pub mod smoothing;
pub mod utils;

pub use gradient2::GradientGrid2D;
pub use gradient_noise2::GradientNoise2D;
pub use smoothing::Smoothing;
pub use utils::flatten2;
