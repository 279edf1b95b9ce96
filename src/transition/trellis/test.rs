use crate::graph::EdgeIx;
use crate::transition::*;

use geo::Point;

fn layer(observation: usize, count: usize) -> Layer {
    let origin = Point::new(observation as f64 * 0.001, 0.0);
    let candidates = (0..count)
        .map(|node_id| {
            let location = CandidateLocation {
                layer_id: observation,
                node_id,
            };

            Candidate::new(EdgeIx::new(node_id), origin, 0.0, node_id as f64, origin, location)
        })
        .collect();

    Layer {
        observation,
        origin,
        candidates,
    }
}

/// Counts the distinct paths from `node` to the target.
fn paths(trellis: &Trellis, node: TrellisIx) -> usize {
    if node == trellis.target() {
        return 1;
    }

    trellis
        .successors(node)
        .into_iter()
        .map(|next| paths(trellis, next))
        .sum()
}

#[test]
fn fully_connects_consecutive_layers() {
    let layers = vec![layer(0, 2), layer(1, 3), layer(2, 1)];
    let trellis = create_trellis(&layers).expect("must build");

    assert_eq!(trellis.node_count(), 2 + 2 + 3 + 1);
    assert_eq!(trellis.edge_count(), 2 + 2 * 3 + 3 + 1);
    assert_eq!(paths(&trellis, trellis.start()), 6);

    assert_eq!(trellis.label(trellis.start()).as_deref(), Some("start"));
    assert_eq!(trellis.label(trellis.target()).as_deref(), Some("target"));

    let sentinel = |node| trellis.node(node).and_then(TrellisNode::sentinel);
    assert_eq!(sentinel(trellis.start()), Some(Sentinel::Start));
    assert_eq!(sentinel(trellis.target()), Some(Sentinel::Target));
    assert_eq!(sentinel(trellis.layers()[0].nodes[0]), None);

    let first = &trellis.layers()[0];
    for node in &first.nodes {
        assert_eq!(trellis.edge(trellis.start(), *node), Some(TrellisEdge::CERTAIN));
    }

    let second = &trellis.layers()[1];
    assert_eq!(trellis.label(second.nodes[2]).as_deref(), Some("1:2"));
    assert_eq!(trellis.edge(first.nodes[0], second.nodes[1]), Some(TrellisEdge::Deferred));
    assert_eq!(trellis.edge(second.nodes[1], first.nodes[0]), None);
}

#[test]
fn skips_empty_layers() {
    let layers = vec![layer(0, 0), layer(1, 2), layer(2, 0), layer(3, 2), layer(4, 0)];
    let trellis = create_trellis(&layers).expect("must build");

    assert_eq!(trellis.skipped(), &[0, 2, 4]);
    assert_eq!(
        trellis.layers().iter().map(|l| l.observation).collect::<Vec<_>>(),
        vec![1, 3]
    );

    let (first, last) = (&trellis.layers()[0], &trellis.layers()[1]);
    assert_eq!(trellis.successors(trellis.start()), first.nodes.to_vec());
    assert_eq!(trellis.successors(first.nodes[0]), last.nodes.to_vec());
    assert_eq!(trellis.predecessors(trellis.target()), last.nodes.to_vec());
    assert_eq!(paths(&trellis, trellis.start()), 4);
}

#[test]
fn every_path_visits_each_layer_in_order() {
    let layers = vec![layer(0, 2), layer(1, 0), layer(2, 2), layer(3, 3)];
    let trellis = create_trellis(&layers).expect("must build");

    fn walk(trellis: &Trellis, node: TrellisIx, visited: &mut Vec<usize>, all: &mut Vec<Vec<usize>>) {
        if node == trellis.target() {
            all.push(visited.clone());
            return;
        }

        for next in trellis.successors(node) {
            if let Some(candidate) = trellis.candidate(next) {
                visited.push(candidate.observation());
            }

            walk(trellis, next, visited, all);

            if trellis.candidate(next).is_some() {
                visited.pop();
            }
        }
    }

    let mut all = vec![];
    walk(&trellis, trellis.start(), &mut vec![], &mut all);

    assert_eq!(all.len(), 2 * 2 * 3);
    assert!(all.iter().all(|path| path == &vec![0, 2, 3]));
}

#[test]
fn all_empty_has_no_candidates() {
    let layers = vec![layer(0, 0), layer(1, 0)];
    assert_eq!(create_trellis(&layers).err(), Some(MatchError::NoCandidates));
    assert_eq!(create_trellis(&[]).err(), Some(MatchError::NoCandidates));
}

#[test]
fn single_layer_connects_both_sentinels() {
    let trellis = create_trellis(&[layer(0, 3)]).expect("must build");

    assert_eq!(trellis.edge_count(), 6);
    for node in &trellis.layers()[0].nodes {
        assert_eq!(trellis.edge(*node, trellis.target()), Some(TrellisEdge::CERTAIN));
    }
}
