//! Shows why the grid matters: a frame whose texture is concentrated in one
//! corner still comes back with keypoints spread over the whole image.

use gridfeat_cli::{Config, GridFast};

fn synthetic_frame(width: usize, height: usize) -> Vec<u8> {
    let mut img = vec![60u8; width * height];

    // Heavy texture in the top-left quadrant
    for i in 0..60 {
        let cx = 8 + (i * 13) % (width / 2 - 24);
        let cy = 8 + (i * 7) % (height / 2 - 24);
        for dy in 0..5 {
            for dx in 0..5 {
                img[(cy + dy) * width + (cx + dx)] = 230;
            }
        }
    }

    // A handful of features elsewhere
    for &(cx, cy) in &[
        (3 * width / 4, height / 4),
        (width / 4, 3 * height / 4),
        (3 * width / 4, 3 * height / 4),
    ] {
        for dy in 0..6 {
            for dx in 0..6 {
                img[(cy + dy) * width + (cx + dx)] = 255;
            }
        }
    }

    img
}

fn main() {
    let (width, height) = (320usize, 240usize);
    let img = synthetic_frame(width, height);

    let grider = GridFast::new(Config::default(), width, height).expect("Extractor setup failed");
    let kps = grider.extract(&img).expect("Extraction failed");

    let mut quadrants = [0usize; 4];
    for kp in &kps {
        let qx = if (kp.x as usize) < width / 2 { 0 } else { 1 };
        let qy = if (kp.y as usize) < height / 2 { 0 } else { 1 };
        quadrants[qy * 2 + qx] += 1;
    }

    println!("{}", grider.config().summary());
    println!("{} keypoints total", kps.len());
    println!("top-left: {:>4}   top-right: {:>4}", quadrants[0], quadrants[1]);
    println!("bot-left: {:>4}   bot-right: {:>4}", quadrants[2], quadrants[3]);
}
