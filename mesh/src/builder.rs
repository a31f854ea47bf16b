use crate::vertex::Vertex;
use core::utils::HeightMap2D;
use glam::Vec3;

// Immutable mesh buffers, ready for upload to a renderer
pub struct TerrainMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl TerrainMesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

// Derives a renderable triangle mesh from a height field: one vertex per
// sample, two triangles per grid cell, normals from finite differences.
pub struct GridMesher {
    x_scale: f32,
    z_scale: f32,
    height_scale: f32,
    height_offset: f32,
}

impl GridMesher {
    // x_scale/z_scale spread the grid horizontally; height_scale and
    // height_offset move the raw noise into the visual range
    pub fn new(x_scale: f32, z_scale: f32, height_scale: f32, height_offset: f32) -> Self {
        Self {
            x_scale,
            z_scale,
            height_scale,
            height_offset,
        }
    }

    // Row-major vertex layout: x from the column, z from the row, y from the
    // rescaled height. Normals stay zeroed until compute_normals runs.
    pub fn build_vertices(&self, map: &HeightMap2D) -> Vec<Vertex> {
        let mut vertices = Vec::with_capacity(map.len() * map.first().map_or(0, Vec::len));
        for (i, row) in map.iter().enumerate() {
            for (j, &h) in row.iter().enumerate() {
                vertices.push(Vertex {
                    position: [
                        j as f32 * self.x_scale,
                        h * self.height_scale + self.height_offset,
                        i as f32 * self.z_scale,
                    ],
                    normal: [0.0; 3],
                });
            }
        }
        vertices
    }

    // Central-difference surface gradient per vertex. A missing neighbor at
    // the field edge contributes 0.0 in place of its height, so edge normals
    // lean toward the interior; downstream shading relies on exactly this.
    pub fn compute_normals(&self, map: &HeightMap2D, vertices: &mut [Vertex]) {
        let map_height = map.len();
        let map_width = map[0].len();

        for i in 0..map_height {
            for j in 0..map_width {
                let left = if j > 0 { map[i][j - 1] } else { 0.0 };
                let right = if j + 1 < map_width { map[i][j + 1] } else { 0.0 };
                let up = if i > 0 { map[i - 1][j] } else { 0.0 };
                let down = if i + 1 < map_height { map[i + 1][j] } else { 0.0 };

                let gx = (right - left) / (2.0 * self.x_scale);
                let gz = (down - up) / (2.0 * self.z_scale);

                let n = Vec3::new(-gx, 1.0, -gz).normalize();
                vertices[i * map_width + j].normal = n.to_array();
            }
        }
    }

    // Two independent sweeps over the cells: the forward sweep emits each
    // cell's triangle above the main diagonal, the backward sweep the one
    // below it. Together that is exactly two triangles per cell.
    pub fn build_indices(&self, map_height: usize, map_width: usize) -> Vec<u32> {
        let mut indices = Vec::with_capacity((map_height - 1) * (map_width - 1) * 2 * 3);

        for i in 0..map_height - 1 {
            for j in 0..map_width - 1 {
                let i_n = i + 1;
                let j_n = j + 1;

                indices.push((i * map_width + j) as u32);
                indices.push((i_n * map_width + j_n) as u32);
                indices.push((i * map_width + j_n) as u32);
            }
        }

        for i in 1..map_height {
            for j in 1..map_width {
                let i_p = i - 1;
                let j_p = j - 1;

                indices.push((i * map_width + j) as u32);
                indices.push((i_p * map_width + j_p) as u32);
                indices.push((i * map_width + j_p) as u32);
            }
        }

        indices
    }

    // Run all three steps and hand back the finished, immutable mesh
    pub fn build(&self, map: &HeightMap2D) -> TerrainMesh {
        assert!(
            !map.is_empty() && !map[0].is_empty(),
            "height map must be non-empty"
        );

        let mut vertices = self.build_vertices(map);
        self.compute_normals(map, &mut vertices);
        let indices = self.build_indices(map.len(), map[0].len());

        TerrainMesh { vertices, indices }
    }
}

#[cfg(test)]
mod tests {
    use super::GridMesher;

    fn ramp_map(height: usize, width: usize) -> Vec<Vec<f32>> {
        (0..height)
            .map(|i| (0..width).map(|j| (i + j) as f32 * 0.1).collect())
            .collect()
    }

    #[test]
    fn mesher_vertex_positions() {
        let map = vec![vec![0.0, 1.0], vec![2.0, 3.0]];
        let mesher = GridMesher::new(2.0, 3.0, 5.0, -200.0);
        let verts = mesher.build_vertices(&map);

        assert_eq!(verts.len(), 4);
        assert_eq!(verts[0].position, [0.0, -200.0, 0.0]);
        assert_eq!(verts[1].position, [2.0, -195.0, 0.0]);
        assert_eq!(verts[2].position, [0.0, -190.0, 3.0]);
        assert_eq!(verts[3].position, [2.0, -185.0, 3.0]);
    }

    #[test]
    fn mesher_index_count_and_range() {
        let mesher = GridMesher::new(1.0, 1.0, 1.0, 0.0);
        let indices = mesher.build_indices(4, 6);

        assert_eq!(indices.len(), (4 - 1) * (6 - 1) * 2 * 3);
        assert!(indices.iter().all(|&ix| (ix as usize) < 4 * 6));
    }

    #[test]
    fn mesher_sweeps_tile_each_cell_with_diagonal_pair() {
        // The forward sweep's triangle for a cell and the backward sweep's
        // triangle for the same cell share the cell's main diagonal and
        // together touch all four corners
        let (h, w) = (3, 4);
        let mesher = GridMesher::new(1.0, 1.0, 1.0, 0.0);
        let indices = mesher.build_indices(h, w);

        let cells = (h - 1) * (w - 1);
        for ci in 0..h - 1 {
            for cj in 0..w - 1 {
                let cell = ci * (w - 1) + cj;
                let fwd = &indices[cell * 3..cell * 3 + 3];
                let bwd = &indices[(cells + cell) * 3..(cells + cell) * 3 + 3];

                let a = (ci * w + cj) as u32; // near diagonal corner
                let b = (ci * w + cj + 1) as u32;
                let c = ((ci + 1) * w + cj) as u32;
                let d = ((ci + 1) * w + cj + 1) as u32; // far diagonal corner

                assert_eq!(fwd, [a, d, b]);
                assert_eq!(bwd, [d, a, c]);
            }
        }
    }

    #[test]
    fn mesher_normals_unit_length_and_upward() {
        let map = ramp_map(6, 5);
        let mesher = GridMesher::new(2.0, 2.0, 5.0, -200.0);
        let mesh = mesher.build(&map);

        for v in &mesh.vertices {
            let [x, y, z] = v.normal;
            let len = (x * x + y * y + z * z).sqrt();
            assert!((len - 1.0).abs() < 1e-5);
            assert!(y > 0.0);
        }
    }

    #[test]
    fn mesher_interior_normal_matches_central_difference() {
        let map = ramp_map(4, 4);
        let mesher = GridMesher::new(2.0, 2.0, 1.0, 0.0);
        let mesh = mesher.build(&map);

        // Interior vertex (1, 1): both slopes are 0.2 per 2 samples of 2.0
        let gx = (map[1][2] - map[1][0]) / (2.0 * 2.0);
        let gz = (map[2][1] - map[0][1]) / (2.0 * 2.0);
        let len = (gx * gx + 1.0 + gz * gz).sqrt();
        let expected = [-gx / len, 1.0 / len, -gz / len];

        let got = mesh.vertices[1 * 4 + 1].normal;
        for (g, e) in got.iter().zip(expected.iter()) {
            assert!((g - e).abs() < 1e-5);
        }
    }

    #[test]
    fn mesher_edge_normals_use_zero_for_missing_neighbors() {
        // A constant field has flat interior normals, but the zero
        // substitution at the boundary tilts the rim
        let map = vec![vec![1.0; 3]; 3];
        let mesher = GridMesher::new(1.0, 1.0, 1.0, 0.0);
        let mesh = mesher.build(&map);

        let center = mesh.vertices[4].normal;
        assert_eq!(center, [0.0, 1.0, 0.0]);

        // Corner (0,0): left and up are both taken as 0.0
        let gx = (map[0][1] - 0.0) / 2.0;
        let gz = (map[1][0] - 0.0) / 2.0;
        let len = (gx * gx + 1.0 + gz * gz).sqrt();
        let corner = mesh.vertices[0].normal;
        let expected = [-gx / len, 1.0 / len, -gz / len];
        for (g, e) in corner.iter().zip(expected.iter()) {
            assert!((g - e).abs() < 1e-5);
        }
        assert!(corner != center, "corner normal should be tilted");
    }
}
