use crate::graph::{EdgeIx, Projected, RoadGraph, Segment, SegmentIndex};

use geo::{Line, Point};
use log::debug;
use measure_time::debug_time;
use rayon::prelude::*;
use trackmatch_geo::interpolate;

/// A position inserted along an edge by densification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InterpolatedNode {
    pub edge: EdgeIx,

    /// The offset along the parent edge, in units of edge length.
    pub offset: f64,
    pub position: Point,
}

/// An overlay of a [`RoadGraph`] whose edges are split into fine segments.
///
/// Synthetic nodes are inserted every `spacing` meters along each edge, and the
/// resulting pieces are held in their own spatial index. Every piece belongs to
/// its parent edge, so connectivity and directionality are those of the
/// underlying graph, which is borrowed and never copied.
#[derive(Debug)]
pub struct InterpolatedGraph<'a> {
    map: &'a RoadGraph,
    spacing: Option<f64>,
    nodes: Vec<InterpolatedNode>,

    /// Absent when no spacing is given, where the overlay
    /// falls back onto the index of the underlying graph.
    index: Option<SegmentIndex>,
}

impl<'a> InterpolatedGraph<'a> {
    /// Densifies every edge of `map` at the given `spacing`, in meters.
    ///
    /// A `spacing` of `None` produces an overlay with no synthetic nodes,
    /// which resolves positions against the raw edge segments.
    pub fn new(map: &'a RoadGraph, spacing: Option<f64>) -> Self {
        let Some(spacing) = spacing else {
            return InterpolatedGraph {
                map,
                spacing: None,
                nodes: vec![],
                index: None,
            };
        };

        debug_time!("densify graph at {spacing}m");

        let edges = map.edges().collect::<Vec<_>>();
        let (nodes, segments): (Vec<_>, Vec<_>) = edges
            .par_iter()
            .map(|(ix, edge)| {
                let breakpoints = interpolate(&edge.geometry, spacing);

                let nodes = breakpoints
                    .iter()
                    .filter(|point| point.synthetic)
                    .map(|point| InterpolatedNode {
                        edge: *ix,
                        offset: edge.offset_of(point.distance),
                        position: point.position,
                    })
                    .collect::<Vec<_>>();

                let segments = breakpoints
                    .windows(2)
                    .map(|pair| {
                        let line = Line::new(pair[0].position, pair[1].position);
                        Segment::new(*ix, line, pair[0].distance)
                    })
                    .collect::<Vec<_>>();

                (nodes, segments)
            })
            .unzip();

        let nodes = nodes.into_iter().flatten().collect::<Vec<_>>();
        let segments = segments.into_iter().flatten().collect::<Vec<_>>();

        debug!(
            "Interpolated {} synthetic nodes, {} segments over {} edges",
            nodes.len(),
            segments.len(),
            edges.len()
        );

        InterpolatedGraph {
            map,
            spacing: Some(spacing),
            nodes,
            index: Some(SegmentIndex::new(segments)),
        }
    }

    /// The underlying road network.
    pub fn map(&self) -> &'a RoadGraph {
        self.map
    }

    pub fn spacing(&self) -> Option<f64> {
        self.spacing
    }

    /// All synthetic nodes, grouped by edge in order of increasing offset.
    pub fn nodes(&self) -> &[InterpolatedNode] {
        &self.nodes
    }

    pub fn nodes_on(&self, edge: EdgeIx) -> impl Iterator<Item = &InterpolatedNode> {
        self.nodes.iter().filter(move |node| node.edge == edge)
    }

    pub fn index(&self) -> &SegmentIndex {
        self.index.as_ref().unwrap_or(&self.map.index)
    }

    /// Projects `point` onto every edge within `distance` meters. See [`SegmentIndex::projected`].
    pub fn projected(&self, point: &Point, distance: f64) -> Vec<Projected> {
        self.index().projected(self.map, point, distance)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use geo::LineString;
    use trackmatch_fixtures::{JUNCTION_ROADS, STRAIGHT_ROAD};
    use wkt::TryFromWkt;

    fn graph(wkt: &str) -> RoadGraph {
        let lines = geo::MultiLineString::try_from_wkt_str(wkt).expect("fixture must parse");
        RoadGraph::from_linestrings(lines.0, false).expect("must build")
    }

    #[test]
    fn densifies_at_spacing() {
        let map = graph(STRAIGHT_ROAD);
        let overlay = InterpolatedGraph::new(&map, Some(10.0));
        assert_eq!(overlay.spacing(), Some(10.0));

        // ~222.39m at 10m spacing
        assert_eq!(overlay.nodes().len(), 22);
        assert_eq!(overlay.index().len(), 23);

        let offsets = overlay.nodes().iter().map(|n| n.offset).collect::<Vec<_>>();
        assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
        assert_relative_eq!(offsets[0], 10.0, epsilon = 1e-6);
    }

    #[test]
    fn without_spacing_uses_raw_segments() {
        let map = graph(JUNCTION_ROADS);
        let overlay = InterpolatedGraph::new(&map, None);

        assert_eq!(overlay.spacing(), None);
        assert!(overlay.nodes().is_empty());
        assert_eq!(overlay.index().len(), map.index().len());
    }

    #[test]
    fn projections_agree_with_raw_graph() {
        let map = graph(JUNCTION_ROADS);
        let overlay = InterpolatedGraph::new(&map, Some(5.0));
        let origin = Point::new(0.0006, 0.00003);

        let fine = overlay.projected(&origin, 30.0);
        let raw = map.index().projected(&map, &origin, 30.0);

        assert_eq!(fine.len(), raw.len());
        for (a, b) in fine.iter().zip(raw.iter()) {
            assert_eq!(a.edge, b.edge);
            assert_relative_eq!(a.distance, b.distance, epsilon = 0.05);
            assert_relative_eq!(a.offset, b.offset, epsilon = 0.05);
        }
    }

    #[test]
    fn respects_edge_membership() {
        let map = RoadGraph::from_linestrings(
            vec![LineString::from(vec![(0.0, 0.0), (0.001, 0.0)])],
            true,
        )
        .expect("must build");

        let overlay = InterpolatedGraph::new(&map, Some(20.0));
        for (ix, _) in map.edges() {
            assert_eq!(overlay.nodes_on(ix).count(), 5);
        }
    }
}
