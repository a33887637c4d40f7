//! Route subset selection and ant allocation.
//!
//! A route of `L` hops carrying `k` ants completes in `L + k - 1` turns: ants
//! enter one per turn, and the last one still needs `L` moves after entering
//! on turn `k`. The exception is a 1-hop route, which can only be the direct
//! start-end corridor: both of its rooms are unbounded, so it completes any
//! number of ants in a single turn. A schedule's turn count is the worst
//! completion time over the routes it uses, so the smallest turn count `T`
//! feasible for a route set without the direct corridor is the least `T` with
//! `Σ max(0, T - Lᵢ + 1) ≥ ants`.

use itertools::Itertools;
use log::debug;

use crate::route::Route;

/// Largest route count for which every non-empty subset is evaluated
/// exhaustively; beyond that only length-ascending prefixes are tried.
const EXHAUSTIVE_LIMIT: usize = 8;

/// A chosen assignment of the ant population to a subset of the extracted
/// routes.
pub(crate) struct Schedule {
    /// Ants sent down each route, aligned with the extracted route list.
    /// Unused routes carry zero.
    pub(crate) ants_per_route: Vec<usize>,
    /// Turns until the last ant arrives.
    pub(crate) turns: usize,
}

impl Schedule {
    /// Pick the route subset and per-route counts minimizing the turn count.
    ///
    /// Every prefix of the length-ascending route list is evaluated; with at
    /// most [`EXHAUSTIVE_LIMIT`] routes every non-empty subset is tried as
    /// well. The first subset reaching the minimum wins, which makes the
    /// outcome deterministic but is only provably optimal in the exhaustive
    /// regime.
    pub(crate) fn plan(routes: &[Route], ants: usize) -> Self {
        debug_assert!(!routes.is_empty());
        debug_assert!(ants > 0);

        let order = (0..routes.len())
            .sorted_by_key(|&i| routes[i].hops())
            .collect_vec();

        let mut best: Option<(usize, Vec<usize>)> = None;
        let mut consider = |subset: &[usize]| {
            let lengths = subset.iter().map(|&i| routes[i].hops()).collect_vec();
            let turns = turns_for(&lengths, ants);
            if best.as_ref().map_or(true, |(t, _)| turns < *t) {
                best = Some((turns, subset.to_vec()));
            }
        };

        for len in 1..=order.len() {
            consider(&order[..len]);
        }
        if order.len() <= EXHAUSTIVE_LIMIT {
            for subset in order.iter().copied().powerset().skip(1) {
                consider(&subset);
            }
        }

        // routes is non-empty, so at least one prefix was considered
        let (turns, subset) = best.expect("no candidate subset evaluated");
        debug!("best subset uses {} routes over {} turns", subset.len(), turns);

        let mut ants_per_route = vec![0; routes.len()];
        for (i, count) in subset.iter().zip(allocate(&subset, routes, ants)) {
            ants_per_route[*i] = count;
        }
        debug_assert_eq!(
            turns,
            subset
                .iter()
                .filter(|&&i| ants_per_route[i] > 0)
                .map(|&i| completion(routes[i].hops(), ants_per_route[i]))
                .max()
                .unwrap_or(0)
        );

        Self {
            ants_per_route,
            turns,
        }
    }
}

/// Turns until the last of `count` ants walking a route of `hops` hops
/// arrives. The direct corridor moves all of its ants at once.
fn completion(hops: usize, count: usize) -> usize {
    if hops == 1 {
        1
    } else {
        hops + count - 1
    }
}

/// Least `T` such that the routes of the given lengths can absorb `ants`
/// tokens within `T` turns.
fn turns_for(lengths: &[usize], ants: usize) -> usize {
    // a 1-hop route is the direct start-end corridor; it carries the whole
    // population in one turn
    if lengths.contains(&1) {
        return 1;
    }

    let capacity = |turns: usize| {
        lengths
            .iter()
            .map(|&hops| (turns + 1).saturating_sub(hops))
            .sum::<usize>()
    };

    let (mut low, mut high) = (1, lengths.iter().min().copied().unwrap_or(1) + ants);
    while low < high {
        let mid = low + (high - low) / 2;
        if capacity(mid) >= ants {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    low
}

/// Greedy per-ant allocation over a fixed subset: each ant joins whichever
/// route grows its completion time the least, ties to the lowest index. This
/// grows the bottleneck minimally at every step, so it is optimal for the
/// subset.
fn allocate(subset: &[usize], routes: &[Route], ants: usize) -> Vec<usize> {
    let mut counts = vec![0usize; subset.len()];
    for _ in 0..ants {
        let winner = subset
            .iter()
            .enumerate()
            .min_by_key(|&(i, &route)| (completion(routes[route].hops(), counts[i] + 1), i))
            .map(|(i, _)| i)
            .expect("allocation over an empty subset");
        counts[winner] += 1;
    }
    counts
}
