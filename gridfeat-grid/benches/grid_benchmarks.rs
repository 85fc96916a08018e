use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gridfeat_fast::FastCorners;
use gridfeat_grid::{ExtractionConfig, GridExtractor};

/// Create benchmark image with realistic corner patterns
fn create_benchmark_image(width: usize, height: usize) -> Vec<u8> {
    let mut img = vec![128; width * height];

    for y in 0..height {
        for x in 0..width {
            let gradient = ((x as f32 / width as f32) * 50.0) as u8;
            let noise = ((x + y) % 7) as u8;
            img[y * width + x] = 100 + gradient + noise;
        }
    }

    // Texture clustered into one corner of the frame, the case grid
    // extraction exists for
    for i in 0..40 {
        let cx = 10 + (i * 13) % (width / 3);
        let cy = 10 + (i * 11) % (height / 3);
        for dy in 0..5 {
            for dx in 0..5 {
                img[(cy + dy) * width + (cx + dx)] = 250;
            }
        }
    }

    img
}

fn bench_grid_extraction(c: &mut Criterion) {
    let (width, height) = (640usize, 480usize);
    let img = create_benchmark_image(width, height);

    let mut group = c.benchmark_group("grid_extraction");

    for &(grid_x, grid_y) in &[(1usize, 1usize), (5, 5), (10, 8)] {
        let cfg = ExtractionConfig {
            num_features: 200,
            grid_x,
            grid_y,
            threshold: 20,
            nonmax_suppression: true,
            n_threads: 1,
        };
        let extractor = GridExtractor::new(cfg, width, height, FastCorners::new()).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", grid_x, grid_y)),
            &img,
            |b, img| b.iter(|| extractor.extract(black_box(img)).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_grid_extraction);
criterion_main!(benches);
