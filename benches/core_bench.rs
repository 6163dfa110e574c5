use airspace_trainer::core::GeoBounds;
use airspace_trainer::{
    load_from_str, GeoProjector, SpacedRepetitionScheduler, SpatialIndex, Waypoint,
    WaypointRecord,
};
use chrono::{DateTime, TimeDelta, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use std::hint::black_box;

fn bench_dataset_parsing(c: &mut Criterion) {
    let boundaries = include_str!("../tests/fixtures/boundaries.geojson");
    let waypoints = include_str!("../tests/fixtures/waypoints.json");

    c.bench_function("dataset_parse_fixture", |b| {
        b.iter(|| {
            let dataset = load_from_str(black_box(boundaries), black_box(waypoints))
                .expect("Fixture parse failed");
            black_box(dataset.waypoints.len())
        })
    });
}

fn build_synthetic_waypoints(count: usize) -> Vec<Waypoint> {
    let mut bounds = GeoBounds::empty();
    bounds.include(5.0, 45.0);
    bounds.include(17.0, 55.0);
    let projector = GeoProjector::from_bounds(&bounds).expect("Projektor erwartet");
    let now = DateTime::<Utc>::UNIX_EPOCH + TimeDelta::days(20_000);

    (0..count)
        .map(|index| {
            let column = (index % 1000) as f64;
            let row = (index / 1000) as f64;
            let mut waypoint = Waypoint::from_record(
                WaypointRecord {
                    id: format!("WP{index}"),
                    name: format!("WP{index}"),
                    region_code: if index % 2 == 0 { "EDMM" } else { "LOVV" }.into(),
                    longitude: 5.0 + column * 0.012,
                    latitude: 45.0 + row * 0.1,
                },
                &projector,
            );
            // Alle gesehen, zwei Drittel beantwortet: Auswahl nach due_at + Jitter
            waypoint.stats.seen = true;
            if index % 3 != 0 {
                waypoint.stats.has_answered = true;
                waypoint.stats.due_at = now + TimeDelta::minutes((index % 500) as i64);
            }
            waypoint
        })
        .collect()
}

fn build_query_points(count: usize) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let x = 0.06 + ((i % 1000) as f64) * 0.0002;
            let y = -0.80 - (((i * 7) % 1000) as f64) * 0.0001;
            DVec2::new(x, y)
        })
        .collect()
}

fn bench_spatial_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("spatial_queries");

    for &count in &[10_000usize, 100_000usize] {
        let waypoints = build_synthetic_waypoints(count);
        let index = SpatialIndex::from_positions(
            waypoints
                .iter()
                .enumerate()
                .map(|(i, wp)| (i, wp.position)),
        );
        let query_points = build_query_points(1024);

        group.bench_with_input(BenchmarkId::new("nearest_batch", count), &index, |b, index| {
            b.iter(|| {
                let mut hits = 0usize;
                for point in &query_points {
                    if index.nearest_within(black_box(*point), 0.002).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            })
        });
    }

    group.finish();
}

fn bench_choose_next(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler");
    let now = DateTime::<Utc>::UNIX_EPOCH + TimeDelta::days(20_000);

    for &count in &[1_000usize, 10_000usize] {
        let waypoints = build_synthetic_waypoints(count);
        let mut scheduler = SpacedRepetitionScheduler::with_seed(11);

        group.bench_with_input(
            BenchmarkId::new("choose_next", count),
            &waypoints,
            |b, waypoints| {
                b.iter(|| {
                    let pick = scheduler.choose_next(
                        waypoints.iter().filter(|wp| wp.region_code == "EDMM"),
                        black_box(Some("WP0")),
                        now,
                    );
                    black_box(pick.map(|wp| wp.id.len()))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    core_benches,
    bench_dataset_parsing,
    bench_spatial_queries,
    bench_choose_next
);
criterion_main!(core_benches);
