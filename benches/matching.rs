//! Matching Pipeline Benchmarks
//!
//! Benchmarks for the CPU-heavy stages of fragment localization:
//! - Chain stitching (in-order and shuffled line arrival)
//! - Segment matching (similarity matrix + diagonal scan)
//! - Blueprint lookup over a full map
//!
//! Run with: `cargo bench`
//! View HTML reports in: `target/criterion/`

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use naksha_match::{Blueprint, BlueprintIndex, LineFeature, Point2D, SegmentCollection};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Build a connected zig-zag outline of `count` walls with jittered
/// lengths, alternating vertical and horizontal. Consecutive walls share
/// an endpoint exactly; non-consecutive corners stay far apart, so the
/// whole outline stitches into one chain.
fn zigzag_lines(count: usize, seed: u64) -> Vec<LineFeature> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut lines = Vec::with_capacity(count);
    let mut cursor = Point2D::ZERO;

    for i in 0..count {
        let step: f32 = rng.random_range(30.0..70.0);
        let next = if i % 2 == 0 {
            Point2D::new(cursor.x, cursor.y + step)
        } else {
            Point2D::new(cursor.x + step, cursor.y)
        };
        lines.push(LineFeature::new(cursor, next));
        cursor = next;
    }
    lines
}

/// Copy a window of the outline, as a blueprint fragment would be.
fn fragment_of(lines: &[LineFeature], start: usize, len: usize) -> Vec<LineFeature> {
    lines[start..start + len].to_vec()
}

fn stitch(lines: &[LineFeature]) -> SegmentCollection {
    let mut collection = SegmentCollection::new();
    collection.add_lines(lines);
    collection
}

// ============================================================================
// Stitching
// ============================================================================

fn bench_stitching(c: &mut Criterion) {
    let mut group = c.benchmark_group("stitching");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(3));

    let ordered_64 = zigzag_lines(64, 7);
    let ordered_256 = zigzag_lines(256, 7);

    // Shuffled arrival forces the stitcher to keep many open chains and
    // bridge them as the gaps fill in.
    let mut shuffled_256 = ordered_256.clone();
    shuffled_256.shuffle(&mut StdRng::seed_from_u64(11));

    group.bench_function("add_lines/in_order/64", |b| {
        b.iter(|| {
            let mut collection = SegmentCollection::new();
            collection.add_lines(black_box(&ordered_64));
            black_box(collection.len())
        })
    });

    group.bench_function("add_lines/in_order/256", |b| {
        b.iter(|| {
            let mut collection = SegmentCollection::new();
            collection.add_lines(black_box(&ordered_256));
            black_box(collection.len())
        })
    });

    group.bench_function("add_lines/shuffled/256", |b| {
        b.iter(|| {
            let mut collection = SegmentCollection::new();
            collection.add_lines(black_box(&shuffled_256));
            black_box(collection.len())
        })
    });

    group.finish();
}

// ============================================================================
// Matching
// ============================================================================

fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(3));

    let map_lines = zigzag_lines(64, 7);
    let map = stitch(&map_lines);
    let fragment = stitch(&fragment_of(&map_lines, 20, 8));

    group.bench_function("match_segments/64x8", |b| {
        b.iter(|| black_box(map.match_segments(black_box(&fragment))))
    });

    let mut index = BlueprintIndex::new();
    for (name, start) in [("hall", 8), ("kitchen", 24), ("stairwell", 40)] {
        let lines = fragment_of(&map_lines, start, 8);
        let anchor = lines[0].start;
        index.insert(Blueprint::new(name, lines, anchor, 1.0));
    }

    group.bench_function("locate/3_blueprints", |b| {
        b.iter(|| black_box(index.locate(black_box(&map_lines))))
    });

    group.finish();
}

criterion_group!(benches, bench_stitching, bench_matching);
criterion_main!(benches);
