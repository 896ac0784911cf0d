use bits::Prng;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spatial::{BBox, Config, Point, Tree, TreeOpt};

const EXTENT: f64 = 1e6;

fn random_points(n: usize) -> Vec<Point> {
    let mut prng = Prng::init(42);
    let mut coord = || (prng.next_f64() * 2.0 - 1.0) * EXTENT;
    (0..n).map(|_| Point::new(coord(), coord(), coord())).collect()
}

fn build(points: &[Point], bin_size: usize) -> Tree<usize> {
    let mut config = Config::default();
    config.set_option(TreeOpt::BinSize(bin_size));
    let mut tree = Tree::with_config(EXTENT, config);
    for (i, p) in points.iter().enumerate() {
        let _ = tree.insert(i, *p);
    }
    tree
}

fn criterion_benchmark(c: &mut Criterion) {
    let points = random_points(100_000);

    c.bench_function("insert 100k (bin 64)", |b| {
        b.iter(|| build(black_box(&points), 64))
    });
    c.bench_function("insert 100k (bin 1024)", |b| {
        b.iter(|| build(black_box(&points), 1024))
    });

    let tree = build(&points, 64);
    let region = BBox::new(Point::new(1e5, -2e5, 3e5), 5e4);
    c.bench_function("lookup", |b| b.iter(|| tree.lookup(black_box(&region)).len()));
    c.bench_function("k nearest 10", |b| {
        b.iter(|| tree.k_nearest(10, black_box(Point::ORIGIN)).len())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
