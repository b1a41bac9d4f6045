use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_upcean::BarcodeFormat;
use rust_upcean::tools::synth::synth_luma_row;
use rust_upcean::utils::binarization::{
    calculate_otsu_threshold, otsu_binarize_row, threshold_binarize_row,
};

fn symbol_row(unit: usize) -> Vec<u8> {
    synth_luma_row(BarcodeFormat::Ean13, "5901234123457", unit).unwrap()
}

fn bench_otsu_threshold(c: &mut Criterion) {
    let luma = symbol_row(4);
    c.bench_function("otsu_threshold_ean13_4px", |b| {
        b.iter(|| calculate_otsu_threshold(black_box(&luma)))
    });
}

fn bench_otsu_binarize_row(c: &mut Criterion) {
    let small = symbol_row(1);
    c.bench_function("otsu_binarize_row_1px", |b| {
        b.iter(|| otsu_binarize_row(black_box(&small)))
    });

    let large = symbol_row(8);
    c.bench_function("otsu_binarize_row_8px", |b| {
        b.iter(|| otsu_binarize_row(black_box(&large)))
    });
}

fn bench_threshold_binarize_row(c: &mut Criterion) {
    let luma = symbol_row(4);
    c.bench_function("threshold_binarize_row_4px", |b| {
        b.iter(|| threshold_binarize_row(black_box(&luma), black_box(128)))
    });
}

criterion_group!(
    benches,
    bench_otsu_threshold,
    bench_otsu_binarize_row,
    bench_threshold_binarize_row
);
criterion_main!(benches);
