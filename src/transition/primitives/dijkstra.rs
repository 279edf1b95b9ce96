use indexmap::IndexMap;
use indexmap::map::Entry;
use pathfinding::num_traits::{CheckedAdd, Zero};
use rustc_hash::{FxBuildHasher, FxHashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

#[derive(Debug)]
struct SmallestHolder<C> {
    cost: C,
    index: usize,
}

impl<C: Ord> PartialEq for SmallestHolder<C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl<C: Ord> Eq for SmallestHolder<C> {}

impl<C: Ord> PartialOrd for SmallestHolder<C> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for SmallestHolder<C> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}

/// Struct returned by [`Dijkstra::reach`].
pub struct DijkstraReachable<N, C, FN> {
    to_see: BinaryHeap<SmallestHolder<C>>,
    seen: FxHashSet<usize>,
    parents: FxIndexMap<N, (usize, C)>,
    successors: FN,
}

/// Information about a node reached by [`Dijkstra::reach`].
#[derive(Debug, Hash, PartialEq, Eq, Clone)]
pub struct DijkstraReachableItem<N, C> {
    /// The node that was reached by [`Dijkstra::reach`].
    pub node: N,
    /// The previous node that the current node came from.
    /// If the node is the first node, there will be no parent.
    pub parent: Option<N>,
    /// The total cost from the starting node.
    pub total_cost: C,
}

impl<N, C, FN, IN> Iterator for DijkstraReachable<N, C, FN>
where
    N: Copy + Eq + Hash,
    C: Zero + Ord + Copy + CheckedAdd,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
{
    type Item = DijkstraReachableItem<N, C>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(SmallestHolder { cost, index }) = self.to_see.pop() {
            if !self.seen.insert(index) {
                continue;
            }

            let Some((node, (parent_index, _))) = self.parents.get_index(index) else {
                continue;
            };

            let item = DijkstraReachableItem {
                node: *node,
                parent: self.parents.get_index(*parent_index).map(|x| *x.0),
                total_cost: cost,
            };

            for (successor, move_cost) in (self.successors)(&item.node) {
                // Successors beyond the range of `C` are unreachable.
                let Some(new_cost) = cost.checked_add(&move_cost) else {
                    continue;
                };

                let index = match self.parents.entry(successor) {
                    Entry::Vacant(e) => {
                        let n = e.index();
                        e.insert((index, new_cost));
                        n
                    }
                    Entry::Occupied(mut e) => {
                        if e.get().1 > new_cost {
                            e.insert((index, new_cost));
                            e.index()
                        } else {
                            continue;
                        }
                    }
                };

                self.to_see.push(SmallestHolder {
                    cost: new_cost,
                    index,
                });
            }

            return Some(item);
        }

        None
    }
}

pub struct Dijkstra;

impl Dijkstra {
    /// Visit all nodes that are reachable from a start node. The node
    /// will be visited in order of cost, with the closest nodes first.
    ///
    /// The `successors` function receives the current node, and returns
    /// an iterator of successors associated with their move cost.
    ///
    /// The iterator is lazy, so bounding the search is a matter of
    /// taking items while their `total_cost` is within budget.
    pub fn reach<N, C, FN, IN>(&self, start: &N, successors: FN) -> DijkstraReachable<N, C, FN>
    where
        N: Copy + Eq + Hash,
        C: Zero + Ord + Copy,
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, C)>,
    {
        let mut to_see = BinaryHeap::with_capacity(256);
        to_see.push(SmallestHolder {
            cost: Zero::zero(),
            index: 0,
        });

        let mut parents: FxIndexMap<N, (usize, C)> =
            FxIndexMap::with_capacity_and_hasher(64, FxBuildHasher);

        parents.insert(*start, (usize::MAX, Zero::zero()));
        let seen = FxHashSet::default();

        DijkstraReachable {
            to_see,
            seen,
            parents,
            successors,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn successors(node: &u32) -> Vec<(u32, u64)> {
        match node {
            0 => vec![(1, 7), (2, 2)],
            2 => vec![(1, 3), (3, 10)],
            1 => vec![(3, 1)],
            _ => vec![],
        }
    }

    #[test]
    fn visits_in_order_of_cost() {
        let reached = Dijkstra.reach(&0u32, successors).collect::<Vec<_>>();
        let order = reached.iter().map(|r| (r.node, r.total_cost)).collect::<Vec<_>>();

        assert_eq!(order, vec![(0, 0), (2, 2), (1, 5), (3, 6)]);
        assert_eq!(reached[0].parent, None);
        assert_eq!(reached[2].parent, Some(2));
        assert_eq!(reached[3].parent, Some(1));
    }

    #[test]
    fn overflowing_costs_are_unreachable() {
        let reached = Dijkstra
            .reach(&0u32, |node: &u32| match node {
                0 => vec![(1, u64::MAX - 1)],
                1 => vec![(2, 2u64)],
                _ => vec![],
            })
            .map(|item| (item.node, item.total_cost))
            .collect::<Vec<_>>();

        assert_eq!(reached, vec![(0, 0), (1, u64::MAX - 1)]);
    }

    #[test]
    fn bounded_by_take_while() {
        let reached = Dijkstra
            .reach(&0u32, successors)
            .take_while(|item| item.total_cost <= 5)
            .map(|item| item.node)
            .collect::<Vec<_>>();

        assert_eq!(reached, vec![0, 2, 1]);
    }
}
