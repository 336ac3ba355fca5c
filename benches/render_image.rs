use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use mandel_explorer::{
    BLACK, MandelbrotEvaluator, NeverCancel, Palette, ProgressSlot, Region, default_gradient,
    render_image,
};

fn bench_render_image(c: &mut Criterion) {
    let palette = Palette::build(&default_gradient(), 256, BLACK);
    let evaluator = MandelbrotEvaluator::new(palette);
    let progress = ProgressSlot::new();

    c.bench_function("render_preview_256x256", |b| {
        b.iter(|| {
            render_image(
                256,
                256,
                black_box(Region::home()),
                &evaluator,
                &NeverCancel,
                &progress,
            )
            .unwrap()
        })
    });

    c.bench_function("render_full_512x512", |b| {
        b.iter(|| {
            render_image(
                512,
                512,
                black_box(Region::home()),
                &evaluator,
                &NeverCancel,
                &progress,
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_render_image);
criterion_main!(benches);
