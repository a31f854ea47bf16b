// Runs the full pipeline and dumps the mesh as a Wavefront OBJ (plus a
// material file built from the renderer-contract defaults) so the result
// can be inspected in any model viewer.

use mesh::{Material, TerrainConfig, produce};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

fn write_mtl(material: &Material) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create("terrain.mtl")?);
    writeln!(out, "newmtl terrain")?;
    let [r, g, b, _] = material.ambient;
    writeln!(out, "Ka {} {} {}", r, g, b)?;
    let [r, g, b, _] = material.diffuse;
    writeln!(out, "Kd {} {} {}", r, g, b)?;
    let [r, g, b, power] = material.specular;
    writeln!(out, "Ks {} {} {}", r, g, b)?;
    writeln!(out, "Ns {}", power)?;
    Ok(())
}

fn main() -> std::io::Result<()> {
    // Moderate size keeps the OBJ loadable in a viewer
    let config = TerrainConfig {
        grid_height: 8,
        grid_width: 8,
        factor: 10,
        height_offset: 0.0,
        ..Default::default()
    };

    let start = Instant::now();
    let terrain = produce(&config);
    println!(
        "Generated {} vertices / {} triangles in {:.2} ms",
        terrain.vertices.len(),
        terrain.triangle_count(),
        start.elapsed().as_secs_f32() * 1000.0
    );

    write_mtl(&Material::default())?;

    let mut out = BufWriter::new(File::create("terrain.obj")?);
    writeln!(out, "mtllib terrain.mtl")?;
    writeln!(out, "o terrain")?;
    writeln!(out, "usemtl terrain")?;
    for v in &terrain.vertices {
        let [x, y, z] = v.position;
        writeln!(out, "v {} {} {}", x, y, z)?;
    }
    for v in &terrain.vertices {
        let [x, y, z] = v.normal;
        writeln!(out, "vn {} {} {}", x, y, z)?;
    }
    // OBJ indices are 1-based; reuse the vertex index for its normal
    for tri in terrain.indices.chunks(3) {
        writeln!(
            out,
            "f {0}//{0} {1}//{1} {2}//{2}",
            tri[0] + 1,
            tri[1] + 1,
            tri[2] + 1
        )?;
    }

    println!("Saved terrain.obj and terrain.mtl");
    Ok(())
}
