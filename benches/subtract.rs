use criterion::{criterion_group, criterion_main, Criterion, black_box};

use brushwork::brush::{subtract, subtract_par, Brush, BrushOp, FaceTextures, SubtractConfig};
use brushwork::generation::{generate, DungeonConfig};

use glam::Vec3;

/// Square grid of solid pillars with a tool slicing through the middle
fn grid_scene(side: usize) -> (Vec<Brush>, Brush) {
    let mut brushes = Vec::with_capacity(side * side);
    for x in 0..side {
        for z in 0..side {
            let center = Vec3::new(x as f32 * 4.0, 0.0, z as f32 * 4.0);
            let brush = Brush::new(center, Vec3::new(4.0, 8.0, 4.0), BrushOp::Add)
                .unwrap()
                .with_textures(FaceTextures::uniform("wall.png"));
            brushes.push(brush);
        }
    }
    let mid = side as f32 * 2.0;
    let tool = Brush::new(Vec3::new(mid, 0.0, mid), Vec3::new(mid, 2.0, mid), BrushOp::Subtract)
        .unwrap();
    (brushes, tool)
}

fn bench_subtract_100(c: &mut Criterion) {
    let (brushes, tool) = grid_scene(10);
    let config = SubtractConfig::default();

    c.bench_function("subtract_100", |b| {
        b.iter(|| subtract(black_box(brushes.clone()), black_box(tool.clone()), &config));
    });
}

fn bench_subtract_2500(c: &mut Criterion) {
    let (brushes, tool) = grid_scene(50);
    let config = SubtractConfig::default();

    c.bench_function("subtract_serial_2500", |b| {
        b.iter(|| subtract(black_box(brushes.clone()), black_box(tool.clone()), &config));
    });
    c.bench_function("subtract_par_2500", |b| {
        b.iter(|| subtract_par(black_box(brushes.clone()), black_box(tool.clone()), &config));
    });
}

fn bench_generate_dungeon(c: &mut Criterion) {
    let config = DungeonConfig::default();

    c.bench_function("generate_dungeon_default", |b| {
        b.iter(|| generate(black_box(&config)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_subtract_100,
    bench_subtract_2500,
    bench_generate_dungeon,
);
criterion_main!(benches);
