// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use vista_gallery::{
    Catalog, Category, CategoryFilter, GalleryGrid, GalleryImage, GridConfig, ImageId, Target,
};
use vista_modal::ScrollLock;
use vista_motion::Motion;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn gen_range_usize(&mut self, upper_exclusive: usize) -> usize {
        if upper_exclusive == 0 {
            return 0;
        }
        (self.next_u32() as usize) % upper_exclusive
    }
}

fn build_catalog(n: u32, seed: u64) -> Catalog {
    let mut rng = Lcg::new(seed);
    let images = (0..n)
        .map(|i| GalleryImage {
            id: ImageId(i),
            src: format!("https://example.com/{i}.jpeg"),
            alt: String::new(),
            location: format!("Place {i}"),
            category: Category::ALL[rng.gen_range_usize(Category::ALL.len())],
            width: 640 + rng.next_u32() % 1280,
            height: 480 + rng.next_u32() % 960,
        })
        .collect();
    Catalog::from_images(images).expect("generated ids are unique")
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("vista_gallery");
    group.sample_size(50);

    for &n in &[120_u32, 2_400_u32] {
        let catalog = build_catalog(n, 0x5EED_0000_0000_0001);

        group.bench_function(format!("filter_all_categories(n={n})"), |b| {
            b.iter(|| {
                for filter in CategoryFilter::ALL {
                    black_box(catalog.filtered_ids(filter));
                }
            });
        });

        group.bench_function(format!("set_images_then_grow_to_end(n={n})"), |b| {
            b.iter_batched(
                || {
                    (
                        GalleryGrid::new(GridConfig::default(), ScrollLock::new()),
                        Motion::<Target>::new(),
                        catalog.filtered_ids(CategoryFilter::All),
                    )
                },
                |(mut grid, mut motion, ids)| {
                    grid.set_images(ids, &mut motion, &mut ());
                    let mut ticket = grid.on_sentinel_visibility(true);
                    while let Some(t) = ticket {
                        ticket = grid
                            .on_frame(t, &mut motion, &mut ())
                            .and_then(|growth| growth.next);
                    }
                    black_box(grid.visible().len());
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("category_switch_with_entrances(n={n})"), |b| {
            b.iter_batched(
                || {
                    let mut grid = GalleryGrid::new(GridConfig::default(), ScrollLock::new());
                    let mut motion = Motion::<Target>::new();
                    grid.set_images(
                        catalog.filtered_ids(CategoryFilter::All),
                        &mut motion,
                        &mut (),
                    );
                    (grid, motion)
                },
                |(mut grid, mut motion)| {
                    for category in Category::ALL {
                        grid.set_images(
                            catalog.filtered_ids(category.into()),
                            &mut motion,
                            &mut (),
                        );
                    }
                    black_box(motion.advance(Duration::from_secs(1)));
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_grid);
criterion_main!(benches);
