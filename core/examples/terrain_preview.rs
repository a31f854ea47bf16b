use core::utils::{HeightMap2D, flatten2, normalize2, to_terrain_image};
use core::{GradientGrid2D, GradientNoise2D, Smoothing};
use image::{Rgb, RgbImage};
use palette::{Gradient, LinSrgb};
use std::path::Path;
use std::time::Instant;

// Compute simple hillshade for a height-map
// `z_scale` adjusts vertical exaggeration
fn hillshade(map: &HeightMap2D, z_scale: f32) -> Vec<Vec<f32>> {
    let h = map.len();
    let w = map[0].len();
    let mut shade = vec![vec![0.0; w]; h];
    let azimuth = std::f32::consts::PI / 4.0; // 45°
    let altitude = std::f32::consts::PI / 4.0; // 45°
    let (sin_alt, cos_alt) = altitude.sin_cos();

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            // 3×3 neighborhood finite differences
            let dzdx = ((map[y][x + 1] - map[y][x - 1]) / 2.0) * z_scale;
            let dzdy = ((map[y + 1][x] - map[y - 1][x]) / 2.0) * z_scale;
            // Surface normal
            let nx = -dzdx;
            let ny = -dzdy;
            let nz = 1.0;
            let len = (nx * nx + ny * ny + nz * nz).sqrt();
            let (nx, ny, nz) = (nx / len, ny / len, nz / len);
            // Light vector from azimuth/altitude
            let lx = azimuth.cos() * cos_alt;
            let ly = azimuth.sin() * cos_alt;
            let lz = sin_alt;
            // Lambertian dot
            let val = (nx * lx + ny * ly + nz * lz).max(0.0);
            shade[y][x] = val;
        }
    }
    shade
}

fn main() {
    // Full-size field: 20×20 lattice upsampled 50× -> 950×950 samples
    let start = Instant::now();
    let grid = GradientGrid2D::generate(20, 20, 2025);
    let mut terrain = GradientNoise2D::new(grid, 50, Smoothing::Cubic).synthesize();
    println!(
        "Synthesized {}×{} field in {:.2} ms",
        terrain.len(),
        terrain[0].len(),
        start.elapsed().as_secs_f32() * 1000.0
    );

    // Shade from the raw heights, then normalize for coloring
    let shade = hillshade(&terrain, 0.5);
    normalize2(&mut terrain);

    let height = terrain.len();
    let width = terrain[0].len();

    // Flat banded coloring, the quick-look texture
    let flat = flatten2(&terrain);
    let banded = to_terrain_image(&flat);
    image::save_buffer(
        "terrain_bands.png",
        &banded,
        width as u32,
        height as u32,
        image::ColorType::Rgb8,
    )
    .unwrap();
    println!("Saved terrain_bands.png");

    // Color gradient - deep water to beach to grass to rock to snow
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.0, 0.0, 0.5)), // deep blue
        (0.30, LinSrgb::new(0.8, 0.8, 0.5)), // sand
        (0.50, LinSrgb::new(0.1, 0.6, 0.2)), // green
        (0.75, LinSrgb::new(0.5, 0.4, 0.3)), // rock
        (1.00, LinSrgb::new(1.0, 1.0, 1.0)), // snow
    ]);

    let mut img = RgbImage::new(width as u32, height as u32);
    for y in 0..height {
        for x in 0..width {
            let col: LinSrgb = gradient.get(terrain[y][x]);
            let rgb = col.into_format::<u8>();
            // Apply hillshade
            let light = (shade[y][x] * 0.5 + 0.5).clamp(0.0, 1.0);
            let pixel = Rgb([
                (rgb.red as f32 * light) as u8,
                (rgb.green as f32 * light) as u8,
                (rgb.blue as f32 * light) as u8,
            ]);
            img.put_pixel(x as u32, y as u32, pixel);
        }
    }

    let path = Path::new("terrain_preview.png");
    img.save(path).unwrap();
    println!("Saved shaded terrain preview to {:?}", path);
}
