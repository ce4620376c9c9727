//! Benchmarks for the size sorts used by the viewer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gitcode_viewer::catalog::{RepoCatalog, Repository};
use gitcode_viewer::files::{FileListing, SourceFile};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A catalog large enough for the sort to dominate.
fn create_catalog(count: u32) -> RepoCatalog {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut catalog = RepoCatalog::new();
    for id in 1..=count {
        let repo = Repository::mock(id, &format!("repo-{}", id), "Rust", &mut rng);
        catalog.add(repo).expect("ids are unique");
    }
    catalog
}

fn bench_catalog_sort(c: &mut Criterion) {
    let catalog = create_catalog(10_000);

    c.bench_function("catalog_sorted_by_size_10k", |b| {
        b.iter(|| black_box(catalog.sorted_by_size().len()))
    });

    c.bench_function("catalog_search_10k", |b| {
        b.iter(|| black_box(catalog.search(black_box("repo-99")).len()))
    });
}

fn bench_listing_sort(c: &mut Criterion) {
    c.bench_function("file_listing_sort_1k", |b| {
        b.iter_with_setup(
            || {
                let mut listing = FileListing::new();
                for i in 0..1_000usize {
                    let size = (i * 7919) % 65_536;
                    let file = SourceFile::new(&format!("f{}.rs", i), size, "Rust");
                    listing.add(Box::new(file));
                }
                listing
            },
            |mut listing| {
                listing.sort_by_size();
                black_box(listing.len())
            },
        )
    });
}

criterion_group!(benches, bench_catalog_sort, bench_listing_sort);
criterion_main!(benches);
