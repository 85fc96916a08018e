use gridfeat_cli::{Config, GridFast};
use image::{ImageReader, Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_circle_mut;
use std::time::Instant;

fn main() {
    let path = std::env::args().nth(1).expect("no image file specified");

    // Load grayscale image
    let img = ImageReader::open(&path)
        .expect("Image not found")
        .decode()
        .expect("Decode failed")
        .to_luma8();

    let (w, h) = img.dimensions();
    let grider =
        GridFast::new(Config::default(), w as usize, h as usize).expect("Extractor setup failed");

    // Time the extraction
    let t0 = Instant::now();
    let kps = grider.extract(img.as_raw()).expect("Extraction failed");
    let elapsed = t0.elapsed();

    let (cell_w, cell_h) = grider.cell_size();
    println!("Time taken: {:.2?}", elapsed);
    println!(
        "Detected {} keypoints ({}x{} px cells, at most {} per cell)",
        kps.len(),
        cell_w,
        cell_h,
        grider.quota()
    );

    // Convert image to RGBA for drawing
    let mut output: RgbaImage = image::DynamicImage::ImageLuma8(img).into_rgba8();

    // Draw red circles at each keypoint
    for kp in &kps {
        draw_hollow_circle_mut(
            &mut output,
            (kp.x as i32, kp.y as i32),
            3,
            Rgba([255, 0, 0, 255]),
        );
    }

    // Save result next to the input
    let out_path = std::path::Path::new(&path)
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| format!("{}_keypoints.png", s))
        .unwrap_or_else(|| "keypoints.png".to_string());

    output
        .save(&out_path)
        .expect("Failed to save output image");
    println!("Saved result image as {}", out_path);
}
