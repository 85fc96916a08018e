use gridfeat_fast::FastCorners;
use gridfeat_grid::ExtractorBuilder;

fn main() {
    let builder = ExtractorBuilder::new(640, 480)
        .num_features(150)
        .grid(6, 4)
        .threshold(25)
        .threads(2);
    println!("{}", builder.summary());

    let extractor = builder.build_with(FastCorners::new()).expect("build failed");
    let (cell_w, cell_h) = extractor.cell_size();
    println!(
        "-> {}x{} px cells, at most {} keypoints each",
        cell_w,
        cell_h,
        extractor.quota()
    );

    println!("sparse: {}", ExtractorBuilder::new(640, 480).preset_sparse().summary());
    println!("dense:  {}", ExtractorBuilder::new(640, 480).preset_dense().summary());
}
