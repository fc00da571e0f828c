use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use manifest_manager::tracking::{Manifest, NullObserver};
use std::fs;
use std::hint::black_box;
use std::path::Path;
use std::sync::Arc;
use tempfile::tempdir;

/// Create `count` files and a manifest listing them plus as many missing paths
fn create_manifest(dir: &Path, count: usize) -> std::path::PathBuf {
    let mut listing = String::new();
    for i in 0..count {
        let path = dir.join(format!("file_{i}.txt"));
        fs::write(&path, format!("content {i}")).unwrap();
        listing.push_str(&format!("{}\n", path.display()));
        listing.push_str(&format!("{}\n", dir.join(format!("gone_{i}.txt")).display()));
    }

    let location = dir.join("manifest.txt");
    fs::write(&location, listing).unwrap();
    location
}

fn benchmark_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("manifest_load");

    for count in [100, 1_000, 10_000] {
        let dir = tempdir().unwrap();
        let location = create_manifest(dir.path(), count);

        group.bench_with_input(BenchmarkId::from_parameter(count), &location, |b, location| {
            b.iter(|| Manifest::load(black_box(location)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_prune(c: &mut Criterion) {
    let mut group = c.benchmark_group("manifest_prune");

    for count in [100, 1_000] {
        let dir = tempdir().unwrap();
        let location = create_manifest(dir.path(), count);

        group.bench_with_input(BenchmarkId::from_parameter(count), &location, |b, location| {
            b.iter_batched(
                || {
                    Manifest::load(location)
                        .unwrap()
                        .with_observer(Arc::new(NullObserver))
                },
                |mut manifest| black_box(manifest.prune()),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_add(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    create_manifest(dir.path(), 1_000);
    let pattern = format!("{}/file_*.txt", dir.path().display());

    c.bench_function("manifest_add_glob_1000", |b| {
        b.iter(|| {
            let mut manifest =
                Manifest::new(dir.path().join("bench.txt")).with_observer(Arc::new(NullObserver));
            black_box(manifest.add(black_box(&pattern)).unwrap())
        });
    });
}

criterion_group!(benches, benchmark_load, benchmark_prune, benchmark_add);
criterion_main!(benches);
