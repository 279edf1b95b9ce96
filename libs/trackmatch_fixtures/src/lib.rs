//! Synthetic road networks and trips, given as WKT.
//!
//! Networks are `MULTILINESTRING`s where each linestring is a single edge,
//! trips are `LINESTRING`s where each vertex is an observation. All fixtures
//! lie on the equator, where `0.001` degrees is roughly `111.2m`.

/// A single straight road, ~222m long, running east.
pub const STRAIGHT_ROAD: &str = "MULTILINESTRING ((0 0, 0.002 0))";

/// Three observations exactly upon [`STRAIGHT_ROAD`].
pub const STRAIGHT_TRIP: &str = "LINESTRING (0.0005 0, 0.001 0, 0.0015 0)";

/// [`STRAIGHT_TRIP`], with the middle observation ~1.1km north of the road.
pub const FAR_OBSERVATION_TRIP: &str = "LINESTRING (0.0005 0, 0.001 0.01, 0.0015 0)";

/// Two roads meeting at a junction at `(0.001 0)`, the first running east,
/// the second running north out of the junction.
pub const JUNCTION_ROADS: &str = "MULTILINESTRING ((0 0, 0.001 0), (0.001 0, 0.001 0.001))";

/// Observations travelling east along the first junction road,
/// passing the junction, and continuing north along the second.
pub const JUNCTION_TRIP: &str = "LINESTRING (0.0004 0.00002, 0.00099 0.00001, 0.00102 0.0005)";

/// Two parallel roads ~111m apart, never connected.
pub const DISCONNECTED_ROADS: &str = "MULTILINESTRING ((0 0, 0.002 0), (0 0.001, 0.002 0.001))";

/// Observations alternating between the [`DISCONNECTED_ROADS`].
pub const ALTERNATING_TRIP: &str = "LINESTRING (0.0005 0.00001, 0.001 0.00099, 0.0015 0.00001)";

/// Two parallel roads ~4.4m apart, joined at both ends, such that
/// observations between them are ambiguous.
pub const PARALLEL_ROADS: &str = "MULTILINESTRING ((0 0, 0.002 0), (0 0.00004, 0.002 0.00004), (0 0, 0 0.00004), (0.002 0, 0.002 0.00004))";

/// Observations wandering between the [`PARALLEL_ROADS`].
pub const PARALLEL_TRIP: &str =
    "LINESTRING (0.0003 0.00001, 0.0006 0.00003, 0.0009 0.00002, 0.0012 0.00001, 0.0015 0.00003)";

/// Generates a square grid network of `size` by `size` blocks, each block
/// `spacing` degrees wide. Every block side is a distinct edge.
pub fn grid_network(size: usize, spacing: f64) -> String {
    let mut lines = Vec::with_capacity(2 * size * (size + 1));

    for row in 0..=size {
        for col in 0..size {
            let (x, y) = (col as f64 * spacing, row as f64 * spacing);
            lines.push(format!("({x} {y}, {} {y})", x + spacing));
            lines.push(format!("({y} {x}, {y} {})", x + spacing));
        }
    }

    format!("MULTILINESTRING ({})", lines.join(", "))
}

/// Generates a trip along the bottom row of a [`grid_network`] and up its
/// last column, sampled every half block with a small alternating
/// perpendicular jitter.
pub fn grid_trip(size: usize, spacing: f64) -> String {
    const JITTER: f64 = 0.00002;

    let extent = size as f64 * spacing;
    let steps = size * 2;
    let mut points = Vec::with_capacity(steps * 2);

    for step in 0..steps {
        let jitter = if step % 2 == 0 { JITTER } else { -JITTER };
        let along = step as f64 * spacing / 2.0 + spacing / 4.0;
        points.push(format!("{along} {jitter}"));
    }

    for step in 0..steps {
        let jitter = if step % 2 == 0 { JITTER } else { -JITTER };
        let along = step as f64 * spacing / 2.0 + spacing / 4.0;
        points.push(format!("{} {along}", extent + jitter));
    }

    format!("LINESTRING ({})", points.join(", "))
}
