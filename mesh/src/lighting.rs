// Per-frame parameter blocks handed to the renderer alongside the mesh
// buffers. Field layouts match a float4-aligned constant buffer.

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Material {
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4], // w carries the specular power
}

impl Default for Material {
    // Terrain green with a mild white highlight
    fn default() -> Self {
        Self {
            ambient: [0.48, 0.77, 0.46, 1.0],
            diffuse: [0.48, 0.77, 0.46, 1.0],
            specular: [1.0, 1.0, 1.0, 4.0],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DirectionalLight {
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub direction: [f32; 3],
    pub pad: f32, // rounds the block out to a float4 boundary
}

impl Default for DirectionalLight {
    // Straight-down half-grey key light
    fn default() -> Self {
        Self {
            ambient: [0.2, 0.2, 0.2, 1.0],
            diffuse: [0.5, 0.5, 0.5, 1.0],
            specular: [0.5, 0.5, 0.5, 1.0],
            direction: [0.0, -1.0, 0.0],
            pad: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DirectionalLight, Material};

    #[test]
    fn lighting_blocks_are_float4_multiples() {
        assert_eq!(std::mem::size_of::<Material>() % 16, 0);
        assert_eq!(std::mem::size_of::<DirectionalLight>() % 16, 0);
    }

    #[test]
    fn light_points_down_by_default() {
        let light = DirectionalLight::default();
        assert_eq!(light.direction, [0.0, -1.0, 0.0]);
    }
}
