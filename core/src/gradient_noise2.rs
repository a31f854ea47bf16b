use crate::gradient2::GradientGrid2D;
use crate::smoothing::Smoothing;
use crate::utils::HeightMap2D;

// Lattice gradient noise: blends the dot-gradient contributions of the four
// coarse corners around each fine sample into a dense height field.
pub struct GradientNoise2D {
    grid: GradientGrid2D,
    factor: usize,
    smoothing: Smoothing,
}

impl GradientNoise2D {
    // factor is the upsampling ratio: one coarse cell spans factor×factor
    // fine samples
    pub fn new(grid: GradientGrid2D, factor: usize, smoothing: Smoothing) -> Self {
        assert!(factor > 0, "factor must be positive");
        Self {
            grid,
            factor,
            smoothing,
        }
    }

    // Fine-field dimensions. Stopping one coarse cell short of the lattice
    // edge keeps the i_g + 1 / j_g + 1 corner lookups in range.
    pub fn map_height(&self) -> usize {
        (self.grid.height() - 1) * self.factor
    }

    pub fn map_width(&self) -> usize {
        (self.grid.width() - 1) * self.factor
    }

    // Gradient at coarse (i_g, j_g) dotted with the displacement from that
    // lattice point to fine (i, j). No bounds check here; the synthesize
    // loop never requests an out-of-range corner.
    pub fn dot_gradient(&self, i_g: usize, j_g: usize, i: usize, j: usize) -> f32 {
        let (gx, gy) = self.grid.get(i_g, j_g);

        let di = i as f32 - (i_g * self.factor) as f32;
        let dj = j as f32 - (j_g * self.factor) as f32;

        gx * di + gy * dj
    }

    // Evaluate the full height field in one pass
    pub fn synthesize(&self) -> HeightMap2D {
        let map_height = self.map_height();
        let map_width = self.map_width();

        let mut map = vec![vec![0.0f32; map_width]; map_height];
        for i in 0..map_height {
            for j in 0..map_width {
                // Enclosing coarse cell and its far corners
                let i_g = i / self.factor;
                let j_g = j / self.factor;
                let i_n = i_g + 1;
                let j_n = j_g + 1;

                let t_j = (j - j_g * self.factor) as f32 / self.factor as f32;

                // Blend left/right along the cell's top and bottom edges
                let upper_left = self.dot_gradient(i_g, j_g, i, j);
                let upper_right = self.dot_gradient(i_g, j_n, i, j);
                let upper = self.smoothing.lerp(upper_left, upper_right, t_j);

                let lower_left = self.dot_gradient(i_n, j_g, i, j);
                let lower_right = self.dot_gradient(i_n, j_n, i, j);
                let lower = self.smoothing.lerp(lower_left, lower_right, t_j);

                // then the two edge results vertically
                let t_i = (i - i_g * self.factor) as f32 / self.factor as f32;
                map[i][j] = self.smoothing.lerp(upper, lower, t_i);
            }
        }
        map
    }
}
