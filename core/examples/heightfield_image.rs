// Saves grayscale images of the raw synthesized height field, once per
// smoothing curve, for eyeballing seam quality between coarse cells.

use core::{GradientGrid2D, GradientNoise2D, Smoothing};
use image::{GrayImage, Luma};
use std::path::Path;

fn save_grayscale(map: &[Vec<f32>], filename: &str) {
    let height = map.len();
    let width = map[0].len();

    // Find min/max
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for row in map {
        for &v in row {
            min = min.min(v);
            max = max.max(v);
        }
    }

    let mut img = GrayImage::new(width as u32, height as u32);
    for i in 0..height {
        for j in 0..width {
            let v = map[i][j];
            let norm = if (max - min).abs() < f32::EPSILON {
                0.5
            } else {
                (v - min) / (max - min)
            };
            let gray = (norm * 255.0).round() as u8;
            img.put_pixel(j as u32, i as u32, Luma([gray]));
        }
    }
    img.save(Path::new(filename)).unwrap();
    println!("Saved {}", filename);
}

fn main() {
    let seed = 42;

    // Same seed through both curves, so the images differ only in blending
    for (smoothing, filename) in [
        (Smoothing::Cubic, "heightfield_cubic.png"),
        (Smoothing::Quintic, "heightfield_quintic.png"),
    ] {
        let grid = GradientGrid2D::generate(20, 20, seed);
        let field = GradientNoise2D::new(grid, 20, smoothing).synthesize();
        save_grayscale(&field, filename);
    }
}
