// GPU-ready terrain vertex, tightly packed for a POSITION/NORMAL float3
// input layout. Pod/Zeroable let the whole buffer be uploaded verbatim.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[cfg(test)]
mod tests {
    use super::Vertex;

    #[test]
    fn vertex_layout_is_six_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 6 * 4);
        assert_eq!(std::mem::align_of::<Vertex>(), 4);
    }

    #[test]
    fn vertex_casts_to_bytes() {
        let v = [Vertex {
            position: [1.0, 2.0, 3.0],
            normal: [0.0, 1.0, 0.0],
        }];
        let bytes: &[u8] = bytemuck::cast_slice(&v);
        assert_eq!(bytes.len(), 24);
    }
}
