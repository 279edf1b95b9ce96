use criterion::criterion_main;
use geo::{LineString, MultiLineString};
use trackmatch::{Match, MatchOptions, Observations, RoadGraph};
use trackmatch_fixtures::{grid_network, grid_trip};
use wkt::TryFromWkt;

struct MapMatchScenario {
    name: &'static str,

    blocks: usize,
    spacing: f64,
}

const MATCH_CASES: [MapMatchScenario; 2] = [
    MapMatchScenario {
        name: "GRID_4",
        blocks: 4,
        spacing: 0.001,
    },
    MapMatchScenario {
        name: "GRID_16",
        blocks: 16,
        spacing: 0.001,
    },
];

fn target_benchmark(c: &mut criterion::Criterion) {
    let mut group = c.benchmark_group("match");
    group.significance_level(0.1).sample_size(30);

    MATCH_CASES.into_iter().for_each(|sc| {
        let network = MultiLineString::<f64>::try_from_wkt_str(&grid_network(sc.blocks, sc.spacing))
            .expect("Network must parse successfully.");

        let graph = RoadGraph::from_linestrings(network, true).expect("Graph must be created");

        let trip = LineString::<f64>::try_from_wkt_str(&grid_trip(sc.blocks, sc.spacing))
            .expect("Linestring must parse successfully.");
        let observations = Observations::from(trip);

        for (label, options) in [
            ("interpolated", MatchOptions::default()),
            ("raw", MatchOptions::default().with_interpolation(None)),
        ] {
            group.bench_function(format!("match ({label}): {}", sc.name), |b| {
                b.iter(|| {
                    let outcome = graph
                        .r#match(&observations, &options)
                        .expect("Match must complete successfully");

                    assert_eq!(outcome.routed.discretized.len(), observations.len());
                })
            });
        }
    });

    group.finish();
}

criterion::criterion_group!(targeted_benches, target_benchmark);
criterion_main!(targeted_benches);
